//! # cicsrs Enable / Disable Commands
//!
//! File: cli/src/commands/enable.rs
//!
//! `cicsrs enable urimap <NAME>` and `cicsrs disable urimap <NAME>` flip the
//! `ENABLESTATUS` of an installed URIMap.
//!
use super::{Context, NameArgs};
use crate::common::{connection, output};
use crate::core::error::Result;
use cicsrs_cmci::api::{self, UrimapParms};
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "Enable an installed resource")]
pub struct EnableArgs {
    #[command(subcommand)]
    resource: StatusResource,
}

#[derive(Parser, Debug)]
#[command(about = "Disable an installed resource")]
pub struct DisableArgs {
    #[command(subcommand)]
    resource: StatusResource,
}

#[derive(Subcommand, Debug)]
enum StatusResource {
    /// An installed URIMap.
    Urimap(NameArgs),
}

pub async fn handle_enable(args: EnableArgs, ctx: &Context) -> Result<()> {
    let StatusResource::Urimap(NameArgs { name }) = args.resource;
    info!("Enabling URIMap '{}'", name);
    let target = connection::connect(&ctx.connection)?;
    let parms = urimap_parms(&name, &target);
    let response = api::enable_urimap(&target.session, &parms).await?;
    output::report(&response, ctx.json, &output::success("URIMap", &name, "enabled"))
}

pub async fn handle_disable(args: DisableArgs, ctx: &Context) -> Result<()> {
    let StatusResource::Urimap(NameArgs { name }) = args.resource;
    info!("Disabling URIMap '{}'", name);
    let target = connection::connect(&ctx.connection)?;
    let parms = urimap_parms(&name, &target);
    let response = api::disable_urimap(&target.session, &parms).await?;
    output::report(&response, ctx.json, &output::success("URIMap", &name, "disabled"))
}

fn urimap_parms(name: &str, target: &connection::Target) -> UrimapParms {
    UrimapParms {
        name: Some(name.to_string()),
        region_name: target.region_name.clone(),
        cics_plex: target.cics_plex.clone(),
        ..Default::default()
    }
}
