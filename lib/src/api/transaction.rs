//! # Transaction Actions
//!
//! File: lib/src/api/transaction.rs
//!
//! Definitions live in `CICSDefinitionTransaction` (selected by `NAME`);
//! installed transactions live in `CICSLocalTransaction` (selected by `TRANID`).
//!
use super::definition_attributes;
use super::parms::{required, TransactionParms};
use crate::common::path::{Criteria, Quoting, ResourcePath};
use crate::common::rest::CmciTransport;
use crate::common::xml::{CmciResponse, RequestBody};
use crate::core::constants::ResourceType;
use crate::core::error::Result;
use crate::core::validation::{check_required, require, Field, Requirement};
use tracing::debug;

const NAME: Requirement = require(Field::Name, "CICS Transaction name");
const PROGRAM: Requirement = require(Field::ProgramName, "CICS Program name");
const CSD_GROUP: Requirement = require(Field::CsdGroup, "CICS CSD Group");
const REGION: Requirement = require(Field::RegionName, "CICS Region name");

const DEFINE: &[Requirement] = &[NAME, PROGRAM, CSD_GROUP, REGION];
const WITH_GROUP: &[Requirement] = &[NAME, CSD_GROUP, REGION];
const INSTALLED: &[Requirement] = &[NAME, REGION];

pub async fn define_transaction<T: CmciTransport + ?Sized>(
    transport: &T,
    parms: &TransactionParms,
) -> Result<CmciResponse> {
    check_required(parms, DEFINE)?;
    let resource = ResourcePath::new(ResourceType::DefinitionTransaction, required(&parms.region_name))
        .plex(parms.cics_plex.as_deref())
        .build();
    let body = RequestBody::define(definition_attributes(&[
        ("name", parms.name.as_deref()),
        ("program", parms.program_name.as_deref()),
        ("csdgroup", parms.csd_group.as_deref()),
    ]));
    debug!("define transaction: POST {}", resource);
    transport
        .post_expect_parsed_xml(&resource, &[], Some(&body))
        .await
}

pub async fn delete_transaction<T: CmciTransport + ?Sized>(
    transport: &T,
    parms: &TransactionParms,
) -> Result<CmciResponse> {
    check_required(parms, WITH_GROUP)?;
    let resource = ResourcePath::new(ResourceType::DefinitionTransaction, required(&parms.region_name))
        .plex(parms.cics_plex.as_deref())
        .criteria(Criteria::attribute("NAME", required(&parms.name), Quoting::Bare))
        .csd_group(required(&parms.csd_group))
        .build();
    debug!("delete transaction: DELETE {}", resource);
    transport.delete_expect_parsed_xml(&resource, &[]).await
}

pub async fn discard_transaction<T: CmciTransport + ?Sized>(
    transport: &T,
    parms: &TransactionParms,
) -> Result<CmciResponse> {
    check_required(parms, INSTALLED)?;
    let resource = ResourcePath::new(ResourceType::LocalTransaction, required(&parms.region_name))
        .plex(parms.cics_plex.as_deref())
        .criteria(Criteria::attribute("TRANID", required(&parms.name), Quoting::Bare))
        .build();
    debug!("discard transaction: DELETE {}", resource);
    transport.delete_expect_parsed_xml(&resource, &[]).await
}

pub async fn install_transaction<T: CmciTransport + ?Sized>(
    transport: &T,
    parms: &TransactionParms,
) -> Result<CmciResponse> {
    check_required(parms, WITH_GROUP)?;
    let resource = ResourcePath::new(ResourceType::DefinitionTransaction, required(&parms.region_name))
        .plex(parms.cics_plex.as_deref())
        .criteria(Criteria::attribute("NAME", required(&parms.name), Quoting::Bare))
        .csd_group(required(&parms.csd_group))
        .build();
    debug!("install transaction: PUT {}", resource);
    transport
        .put_expect_parsed_xml(&resource, &[], Some(&RequestBody::install()))
        .await
}
