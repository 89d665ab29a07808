//! # Define URIMap
//!
//! File: cli/src/commands/define/urimap.rs
//!
//! The three URIMap usages share name, group, path, host, scheme, description
//! and initial status; each adds its own target options.
//!
use crate::commands::Context;
use crate::common::connection::{self, Target};
use crate::common::output;
use crate::core::error::Result;
use cicsrs_cmci::api::{self, UrimapParms};
use clap::Args;
use tracing::info;

#[derive(Args, Debug)]
pub struct UrimapCommonArgs {
    /// Name of the URIMap definition.
    pub name: String,
    /// CSD group to create the definition in.
    pub csd_group: String,
    /// Path component of the URI, e.g. `/app/*`.
    #[arg(long = "urimap-path")]
    pub urimap_path: String,
    /// Host component of the URI.
    #[arg(long = "urimap-host")]
    pub urimap_host: String,
    /// http or https (defaults to the CMCI default when omitted).
    #[arg(long = "urimap-scheme")]
    pub urimap_scheme: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Install the URIMap enabled (default) or disabled.
    #[arg(long, value_name = "BOOL")]
    pub enable: Option<bool>,
}

#[derive(Args, Debug)]
pub struct UrimapServerArgs {
    #[command(flatten)]
    pub common: UrimapCommonArgs,
    /// Program that handles matching requests.
    #[arg(long = "program-name")]
    pub program_name: String,
    #[arg(long)]
    pub tcpipservice: Option<String>,
}

#[derive(Args, Debug)]
pub struct UrimapClientArgs {
    #[command(flatten)]
    pub common: UrimapCommonArgs,
    /// Authentication for outbound requests, e.g. BASIC.
    #[arg(long)]
    pub authenticate: Option<String>,
    /// Label of the client certificate.
    #[arg(long)]
    pub certificate: Option<String>,
}

#[derive(Args, Debug)]
pub struct UrimapPipelineArgs {
    #[command(flatten)]
    pub common: UrimapCommonArgs,
    /// Pipeline that handles matching requests.
    #[arg(long = "pipeline-name")]
    pub pipeline_name: String,
    #[arg(long = "transaction-name")]
    pub transaction_name: Option<String>,
    #[arg(long = "webservice-name")]
    pub webservice_name: Option<String>,
    #[arg(long)]
    pub tcpipservice: Option<String>,
}

fn base_parms(common: UrimapCommonArgs, target: &Target) -> UrimapParms {
    UrimapParms {
        name: Some(common.name),
        csd_group: Some(common.csd_group),
        path: Some(common.urimap_path),
        host: Some(common.urimap_host),
        scheme: common.urimap_scheme,
        description: common.description,
        enable: common.enable,
        region_name: target.region_name.clone(),
        cics_plex: target.cics_plex.clone(),
        ..Default::default()
    }
}

fn defined(ctx: &Context, response: &cicsrs_cmci::CmciResponse, name: &str) -> Result<()> {
    output::report(response, ctx.json, &output::success("URIMap", name, "defined"))
}

pub async fn handle_server(args: UrimapServerArgs, ctx: &Context) -> Result<()> {
    info!("Defining server URIMap '{}'", args.common.name);
    let name = args.common.name.clone();
    let target = connection::connect(&ctx.connection)?;
    let parms = UrimapParms {
        program_name: Some(args.program_name),
        tcpipservice: args.tcpipservice,
        ..base_parms(args.common, &target)
    };
    let response = api::define_urimap_server(&target.session, &parms).await?;
    defined(ctx, &response, &name)
}

pub async fn handle_client(args: UrimapClientArgs, ctx: &Context) -> Result<()> {
    info!("Defining client URIMap '{}'", args.common.name);
    let name = args.common.name.clone();
    let target = connection::connect(&ctx.connection)?;
    let parms = UrimapParms {
        authenticate: args.authenticate,
        certificate: args.certificate,
        ..base_parms(args.common, &target)
    };
    let response = api::define_urimap_client(&target.session, &parms).await?;
    defined(ctx, &response, &name)
}

pub async fn handle_pipeline(args: UrimapPipelineArgs, ctx: &Context) -> Result<()> {
    info!("Defining pipeline URIMap '{}'", args.common.name);
    let name = args.common.name.clone();
    let target = connection::connect(&ctx.connection)?;
    let parms = UrimapParms {
        pipeline_name: Some(args.pipeline_name),
        transaction_name: args.transaction_name,
        webservice_name: args.webservice_name,
        tcpipservice: args.tcpipservice,
        ..base_parms(args.common, &target)
    };
    let response = api::define_urimap_pipeline(&target.session, &parms).await?;
    defined(ctx, &response, &name)
}
