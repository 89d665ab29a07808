//! # Web Service Actions
//!
//! File: lib/src/api/webservice.rs
//!
use super::definition_attributes;
use super::parms::{required, WebServiceParms};
use crate::common::path::{Criteria, Quoting, ResourcePath};
use crate::common::rest::CmciTransport;
use crate::common::xml::{CmciResponse, RequestBody};
use crate::core::constants::ResourceType;
use crate::core::error::Result;
use crate::core::validation::{check_required, require, Field, Requirement};
use tracing::debug;

const NAME: Requirement = require(Field::Name, "CICS Web Service name");
const CSD_GROUP: Requirement = require(Field::CsdGroup, "CICS CSD Group");
const PIPELINE: Requirement = require(Field::PipelineName, "CICS Pipeline name");
const WSBIND: Requirement = require(Field::WsBind, "CICS Web Service WSBind file");
const REGION: Requirement = require(Field::RegionName, "CICS Region name");

const DEFINE: &[Requirement] = &[NAME, CSD_GROUP, PIPELINE, WSBIND, REGION];
const DELETE: &[Requirement] = &[NAME, CSD_GROUP, REGION];

pub async fn define_webservice<T: CmciTransport + ?Sized>(
    transport: &T,
    parms: &WebServiceParms,
) -> Result<CmciResponse> {
    check_required(parms, DEFINE)?;
    let validation = parms.validation.map(|v| if v { "YES" } else { "NO" });
    let resource = ResourcePath::new(ResourceType::DefinitionWebService, required(&parms.region_name))
        .plex(parms.cics_plex.as_deref())
        .build();
    let body = RequestBody::define(definition_attributes(&[
        ("name", parms.name.as_deref()),
        ("csdgroup", parms.csd_group.as_deref()),
        ("pipeline", parms.pipeline_name.as_deref()),
        ("wsbind", parms.ws_bind.as_deref()),
        ("wsdlfile", parms.wsdl_file.as_deref()),
        ("description", parms.description.as_deref()),
        ("validation", validation),
    ]));
    debug!("define webservice: POST {}", resource);
    transport
        .post_expect_parsed_xml(&resource, &[], Some(&body))
        .await
}

pub async fn delete_webservice<T: CmciTransport + ?Sized>(
    transport: &T,
    parms: &WebServiceParms,
) -> Result<CmciResponse> {
    check_required(parms, DELETE)?;
    let resource = ResourcePath::new(ResourceType::DefinitionWebService, required(&parms.region_name))
        .plex(parms.cics_plex.as_deref())
        .criteria(Criteria::attribute("NAME", required(&parms.name), Quoting::Bare))
        .csd_group(required(&parms.csd_group))
        .build();
    debug!("delete webservice: DELETE {}", resource);
    transport.delete_expect_parsed_xml(&resource, &[]).await
}
