//! # Program Actions
//!
//! File: lib/src/api/program.rs
//!
//! Definitions live in `CICSDefinitionProgram` and are selected by `NAME`;
//! installed programs live in `CICSProgram` and are selected by `PROGRAM`.
//! Discard is the one action that keeps an empty plex as a path segment.
//!
use super::definition_attributes;
use super::parms::{required, ProgramParms};
use crate::common::path::{Criteria, Quoting, ResourcePath};
use crate::common::rest::CmciTransport;
use crate::common::xml::{CmciResponse, RequestBody};
use crate::core::constants::ResourceType;
use crate::core::error::Result;
use crate::core::validation::{check_required, require, Field, Requirement};
use tracing::debug;

const NAME: Requirement = require(Field::Name, "CICS Program name");
const CSD_GROUP: Requirement = require(Field::CsdGroup, "CICS CSD Group");
const REGION: Requirement = require(Field::RegionName, "CICS Region name");

const WITH_GROUP: &[Requirement] = &[NAME, CSD_GROUP, REGION];
const INSTALLED: &[Requirement] = &[NAME, REGION];

pub async fn define_program<T: CmciTransport + ?Sized>(
    transport: &T,
    parms: &ProgramParms,
) -> Result<CmciResponse> {
    check_required(parms, WITH_GROUP)?;
    let resource = ResourcePath::new(ResourceType::DefinitionProgram, required(&parms.region_name))
        .plex(parms.cics_plex.as_deref())
        .build();
    let body = RequestBody::define(definition_attributes(&[
        ("name", parms.name.as_deref()),
        ("csdgroup", parms.csd_group.as_deref()),
    ]));
    debug!("define program: POST {}", resource);
    transport
        .post_expect_parsed_xml(&resource, &[], Some(&body))
        .await
}

pub async fn delete_program<T: CmciTransport + ?Sized>(
    transport: &T,
    parms: &ProgramParms,
) -> Result<CmciResponse> {
    check_required(parms, WITH_GROUP)?;
    let resource = ResourcePath::new(ResourceType::DefinitionProgram, required(&parms.region_name))
        .plex(parms.cics_plex.as_deref())
        .criteria(Criteria::attribute("NAME", required(&parms.name), Quoting::Bare))
        .csd_group(required(&parms.csd_group))
        .build();
    debug!("delete program: DELETE {}", resource);
    transport.delete_expect_parsed_xml(&resource, &[]).await
}

pub async fn discard_program<T: CmciTransport + ?Sized>(
    transport: &T,
    parms: &ProgramParms,
) -> Result<CmciResponse> {
    check_required(parms, INSTALLED)?;
    let resource = ResourcePath::new(ResourceType::Program, required(&parms.region_name))
        .plex_verbatim(parms.cics_plex.as_deref())
        .criteria(Criteria::attribute("PROGRAM", required(&parms.name), Quoting::Bare))
        .build();
    debug!("discard program: DELETE {}", resource);
    transport.delete_expect_parsed_xml(&resource, &[]).await
}

pub async fn install_program<T: CmciTransport + ?Sized>(
    transport: &T,
    parms: &ProgramParms,
) -> Result<CmciResponse> {
    check_required(parms, WITH_GROUP)?;
    let resource = ResourcePath::new(ResourceType::DefinitionProgram, required(&parms.region_name))
        .plex(parms.cics_plex.as_deref())
        .criteria(Criteria::attribute("NAME", required(&parms.name), Quoting::Bare))
        .csd_group(required(&parms.csd_group))
        .build();
    debug!("install program: PUT {}", resource);
    transport
        .put_expect_parsed_xml(&resource, &[], Some(&RequestBody::install()))
        .await
}

/// NEWCOPY: reload the installed program from its library.
pub async fn refresh_program<T: CmciTransport + ?Sized>(
    transport: &T,
    parms: &ProgramParms,
) -> Result<CmciResponse> {
    check_required(parms, INSTALLED)?;
    let resource = ResourcePath::new(ResourceType::Program, required(&parms.region_name))
        .plex(parms.cics_plex.as_deref())
        .criteria(Criteria::attribute("PROGRAM", required(&parms.name), Quoting::Bare))
        .build();
    debug!("refresh program: PUT {}", resource);
    transport
        .put_expect_parsed_xml(&resource, &[], Some(&RequestBody::newcopy()))
        .await
}
