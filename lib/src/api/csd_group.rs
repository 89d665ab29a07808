//! # CSD Group List Membership
//!
//! File: lib/src/api/csd_group.rs
//!
//! Adds a CSD group to, or removes it from, a CSD list via the `CSDADD` and
//! `CSDREMOVE` actions on `CICSCSDGroup`. Both name the list with a
//! `TO_CSDLIST` action parameter.
//!
use super::parms::{required, CsdGroupParms};
use crate::common::path::{Criteria, Quoting, ResourcePath};
use crate::common::rest::CmciTransport;
use crate::common::xml::{CmciResponse, RequestBody};
use crate::core::constants::ResourceType;
use crate::core::error::Result;
use crate::core::validation::{check_required, require, Field, Requirement};
use tracing::debug;

const REQUIRED: &[Requirement] = &[
    require(Field::Name, "CICS CSD Group name"),
    require(Field::CsdList, "CICS CSD List name"),
    require(Field::RegionName, "CICS Region name"),
];

fn group_path(parms: &CsdGroupParms) -> String {
    ResourcePath::new(ResourceType::CsdGroup, required(&parms.region_name))
        .plex(parms.cics_plex.as_deref())
        .criteria(Criteria::attribute("NAME", required(&parms.name), Quoting::Bare))
        .build()
}

pub async fn add_csd_group_to_list<T: CmciTransport + ?Sized>(
    transport: &T,
    parms: &CsdGroupParms,
) -> Result<CmciResponse> {
    check_required(parms, REQUIRED)?;
    let resource = group_path(parms);
    let body = RequestBody::csd_add(required(&parms.csd_list));
    debug!("add csd group to list: PUT {}", resource);
    transport
        .put_expect_parsed_xml(&resource, &[], Some(&body))
        .await
}

pub async fn remove_csd_group_from_list<T: CmciTransport + ?Sized>(
    transport: &T,
    parms: &CsdGroupParms,
) -> Result<CmciResponse> {
    check_required(parms, REQUIRED)?;
    let resource = group_path(parms);
    let body = RequestBody::csd_remove(required(&parms.csd_list));
    debug!("remove csd group from list: PUT {}", resource);
    transport
        .put_expect_parsed_xml(&resource, &[], Some(&body))
        .await
}
