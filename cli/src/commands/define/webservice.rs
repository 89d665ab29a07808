//! # Define Web Service
//!
//! File: cli/src/commands/define/webservice.rs
//!
use crate::commands::Context;
use crate::common::{connection, output};
use crate::core::error::Result;
use cicsrs_cmci::api::{self, WebServiceParms};
use clap::Args;
use tracing::info;

#[derive(Args, Debug)]
pub struct WebServiceArgs {
    /// Name of the web service definition.
    pub name: String,
    /// CSD group to create the definition in.
    pub csd_group: String,
    /// Pipeline the web service runs in.
    #[arg(long = "pipeline-name")]
    pub pipeline_name: String,
    /// zFS path of the web service binding file.
    #[arg(long)]
    pub wsbind: String,
    #[arg(long)]
    pub description: Option<String>,
    /// Validate SOAP messages against the WSDL.
    #[arg(long)]
    pub validation: bool,
    /// zFS path of the WSDL document.
    #[arg(long)]
    pub wsdlfile: Option<String>,
}

pub async fn handle_webservice(args: WebServiceArgs, ctx: &Context) -> Result<()> {
    info!("Defining web service '{}' in group '{}'", args.name, args.csd_group);
    let target = connection::connect(&ctx.connection)?;
    let parms = WebServiceParms {
        name: Some(args.name.clone()),
        csd_group: Some(args.csd_group),
        pipeline_name: Some(args.pipeline_name),
        ws_bind: Some(args.wsbind),
        wsdl_file: args.wsdlfile,
        description: args.description,
        validation: args.validation.then_some(true),
        region_name: target.region_name,
        cics_plex: target.cics_plex,
    };
    let response = api::define_webservice(&target.session, &parms).await?;
    output::report(
        &response,
        ctx.json,
        &output::success("web service", &args.name, "defined"),
    )
}
