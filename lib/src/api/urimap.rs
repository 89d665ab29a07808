//! # URIMap Actions
//!
//! File: lib/src/api/urimap.rs
//!
//! ## Overview
//!
//! URIMap definitions (`CICSDefinitionURIMap`) come in three usages, each with
//! its own required target: `server` maps to a program, `pipeline` to a
//! pipeline, `client` to nothing beyond path and host. Installed URIMaps
//! (`CICSURIMap`) can be enabled, disabled and discarded.
//!
//! Discard quotes the name in its criteria (`NAME='U1'`); enable, disable,
//! delete and install do not. Both forms are accepted by CMCI and each action
//! keeps the form it has always sent.
//!
use super::definition_attributes;
use super::parms::{present, required, UrimapParms};
use crate::common::path::{Criteria, Quoting, ResourcePath};
use crate::common::rest::CmciTransport;
use crate::common::xml::{CmciResponse, RequestBody};
use crate::core::constants::{ResourceType, DISABLED, ENABLED};
use crate::core::error::Result;
use crate::core::validation::{check_one_of, check_required, require, Field, Requirement};
use tracing::debug;

const NAME: Requirement = require(Field::Name, "CICS URIMap name");
const CSD_GROUP: Requirement = require(Field::CsdGroup, "CICS CSD Group");
const PATH: Requirement = require(Field::Path, "CICS URIMap path");
const HOST: Requirement = require(Field::Host, "CICS URIMap host");
const PROGRAM: Requirement = require(Field::ProgramName, "CICS Program name");
const PIPELINE: Requirement = require(Field::PipelineName, "CICS Pipeline name");
const REGION: Requirement = require(Field::RegionName, "CICS Region name");

const DEFINE_SERVER: &[Requirement] = &[NAME, CSD_GROUP, PATH, HOST, PROGRAM, REGION];
const DEFINE_CLIENT: &[Requirement] = &[NAME, CSD_GROUP, PATH, HOST, REGION];
const DEFINE_PIPELINE: &[Requirement] = &[NAME, CSD_GROUP, PATH, HOST, PIPELINE, REGION];
const WITH_GROUP: &[Requirement] = &[NAME, CSD_GROUP, REGION];
const INSTALLED: &[Requirement] = &[NAME, REGION];

const SCHEMES: &[&str] = &["http", "https"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Usage {
    Server,
    Client,
    Pipeline,
}

impl Usage {
    fn as_str(&self) -> &'static str {
        match self {
            Usage::Server => "server",
            Usage::Client => "client",
            Usage::Pipeline => "pipeline",
        }
    }

    fn requirements(&self) -> &'static [Requirement] {
        match self {
            Usage::Server => DEFINE_SERVER,
            Usage::Client => DEFINE_CLIENT,
            Usage::Pipeline => DEFINE_PIPELINE,
        }
    }
}

async fn define_urimap<T: CmciTransport + ?Sized>(
    transport: &T,
    parms: &UrimapParms,
    usage: Usage,
) -> Result<CmciResponse> {
    check_required(parms, usage.requirements())?;
    check_one_of(present(&parms.scheme), SCHEMES, "CICS URIMap scheme")?;

    let status = if parms.enable == Some(false) {
        DISABLED
    } else {
        ENABLED
    };
    let scheme = present(&parms.scheme).map(str::to_ascii_uppercase);

    let mut pairs: Vec<(&str, Option<&str>)> = vec![
        ("name", parms.name.as_deref()),
        ("csdgroup", parms.csd_group.as_deref()),
        ("path", parms.path.as_deref()),
        ("host", parms.host.as_deref()),
        ("scheme", scheme.as_deref()),
        ("usage", Some(usage.as_str())),
    ];
    match usage {
        Usage::Server => {
            pairs.push(("program", parms.program_name.as_deref()));
            pairs.push(("tcpipservice", parms.tcpipservice.as_deref()));
        }
        Usage::Client => {
            pairs.push(("authenticate", parms.authenticate.as_deref()));
            pairs.push(("certificate", parms.certificate.as_deref()));
        }
        Usage::Pipeline => {
            pairs.push(("pipeline", parms.pipeline_name.as_deref()));
            pairs.push(("transaction", parms.transaction_name.as_deref()));
            pairs.push(("webservice", parms.webservice_name.as_deref()));
            pairs.push(("tcpipservice", parms.tcpipservice.as_deref()));
        }
    }
    pairs.push(("description", parms.description.as_deref()));
    pairs.push(("status", Some(status)));

    let resource = ResourcePath::new(ResourceType::DefinitionUrimap, required(&parms.region_name))
        .plex(parms.cics_plex.as_deref())
        .build();
    let body = RequestBody::define(definition_attributes(&pairs));
    debug!("define urimap ({}): POST {}", usage.as_str(), resource);
    transport
        .post_expect_parsed_xml(&resource, &[], Some(&body))
        .await
}

pub async fn define_urimap_server<T: CmciTransport + ?Sized>(
    transport: &T,
    parms: &UrimapParms,
) -> Result<CmciResponse> {
    define_urimap(transport, parms, Usage::Server).await
}

pub async fn define_urimap_client<T: CmciTransport + ?Sized>(
    transport: &T,
    parms: &UrimapParms,
) -> Result<CmciResponse> {
    define_urimap(transport, parms, Usage::Client).await
}

pub async fn define_urimap_pipeline<T: CmciTransport + ?Sized>(
    transport: &T,
    parms: &UrimapParms,
) -> Result<CmciResponse> {
    define_urimap(transport, parms, Usage::Pipeline).await
}

pub async fn delete_urimap<T: CmciTransport + ?Sized>(
    transport: &T,
    parms: &UrimapParms,
) -> Result<CmciResponse> {
    check_required(parms, WITH_GROUP)?;
    let resource = definition_path(parms);
    debug!("delete urimap: DELETE {}", resource);
    transport.delete_expect_parsed_xml(&resource, &[]).await
}

pub async fn install_urimap<T: CmciTransport + ?Sized>(
    transport: &T,
    parms: &UrimapParms,
) -> Result<CmciResponse> {
    check_required(parms, WITH_GROUP)?;
    let resource = definition_path(parms);
    debug!("install urimap: PUT {}", resource);
    transport
        .put_expect_parsed_xml(&resource, &[], Some(&RequestBody::install()))
        .await
}

pub async fn discard_urimap<T: CmciTransport + ?Sized>(
    transport: &T,
    parms: &UrimapParms,
) -> Result<CmciResponse> {
    check_required(parms, INSTALLED)?;
    let resource = installed_path(parms, Quoting::Single);
    debug!("discard urimap: DELETE {}", resource);
    transport.delete_expect_parsed_xml(&resource, &[]).await
}

pub async fn enable_urimap<T: CmciTransport + ?Sized>(
    transport: &T,
    parms: &UrimapParms,
) -> Result<CmciResponse> {
    check_required(parms, INSTALLED)?;
    let resource = installed_path(parms, Quoting::Bare);
    debug!("enable urimap: PUT {}", resource);
    transport
        .put_expect_parsed_xml(&resource, &[], Some(&RequestBody::enable()))
        .await
}

pub async fn disable_urimap<T: CmciTransport + ?Sized>(
    transport: &T,
    parms: &UrimapParms,
) -> Result<CmciResponse> {
    check_required(parms, INSTALLED)?;
    let resource = installed_path(parms, Quoting::Bare);
    debug!("disable urimap: PUT {}", resource);
    transport
        .put_expect_parsed_xml(&resource, &[], Some(&RequestBody::disable()))
        .await
}

fn definition_path(parms: &UrimapParms) -> String {
    ResourcePath::new(ResourceType::DefinitionUrimap, required(&parms.region_name))
        .plex(parms.cics_plex.as_deref())
        .criteria(Criteria::attribute("NAME", required(&parms.name), Quoting::Bare))
        .csd_group(required(&parms.csd_group))
        .build()
}

fn installed_path(parms: &UrimapParms, quoting: Quoting) -> String {
    ResourcePath::new(ResourceType::Urimap, required(&parms.region_name))
        .plex(parms.cics_plex.as_deref())
        .criteria(Criteria::attribute("NAME", required(&parms.name), quoting))
        .build()
}
