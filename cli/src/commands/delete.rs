//! # cicsrs Delete Command
//!
//! File: cli/src/commands/delete.rs
//!
//! ## Overview
//!
//! `cicsrs delete <resource> <NAME> <CSD_GROUP>` removes a resource definition
//! from its CSD group. Installed copies are unaffected; use `discard` for those.
//!
use super::{Context, NameGroupArgs};
use crate::common::{connection, output};
use crate::core::error::Result;
use cicsrs_cmci::api::{self, ProgramParms, TransactionParms, UrimapParms, WebServiceParms};
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "Delete a resource definition from a CSD group")]
pub struct DeleteArgs {
    #[command(subcommand)]
    resource: DeleteResource,
}

#[derive(Subcommand, Debug)]
enum DeleteResource {
    /// Delete a program definition.
    Program(NameGroupArgs),
    /// Delete a transaction definition.
    Transaction(NameGroupArgs),
    /// Delete a URIMap definition.
    Urimap(NameGroupArgs),
    /// Delete a web service definition.
    Webservice(NameGroupArgs),
}

pub async fn handle_delete(args: DeleteArgs, ctx: &Context) -> Result<()> {
    let target = connection::connect(&ctx.connection)?;
    let region_name = target.region_name.clone();
    let cics_plex = target.cics_plex.clone();

    let (kind, name, response) = match args.resource {
        DeleteResource::Program(NameGroupArgs { name, csd_group }) => {
            info!("Deleting program definition '{}' from '{}'", name, csd_group);
            let parms = ProgramParms {
                name: Some(name.clone()),
                csd_group: Some(csd_group),
                region_name,
                cics_plex,
            };
            ("program", name, api::delete_program(&target.session, &parms).await?)
        }
        DeleteResource::Transaction(NameGroupArgs { name, csd_group }) => {
            info!("Deleting transaction definition '{}' from '{}'", name, csd_group);
            let parms = TransactionParms {
                name: Some(name.clone()),
                csd_group: Some(csd_group),
                region_name,
                cics_plex,
                ..Default::default()
            };
            (
                "transaction",
                name,
                api::delete_transaction(&target.session, &parms).await?,
            )
        }
        DeleteResource::Urimap(NameGroupArgs { name, csd_group }) => {
            info!("Deleting URIMap definition '{}' from '{}'", name, csd_group);
            let parms = UrimapParms {
                name: Some(name.clone()),
                csd_group: Some(csd_group),
                region_name,
                cics_plex,
                ..Default::default()
            };
            ("URIMap", name, api::delete_urimap(&target.session, &parms).await?)
        }
        DeleteResource::Webservice(NameGroupArgs { name, csd_group }) => {
            info!("Deleting web service definition '{}' from '{}'", name, csd_group);
            let parms = WebServiceParms {
                name: Some(name.clone()),
                csd_group: Some(csd_group),
                region_name,
                cics_plex,
                ..Default::default()
            };
            (
                "web service",
                name,
                api::delete_webservice(&target.session, &parms).await?,
            )
        }
    };
    output::report(&response, ctx.json, &output::success(kind, &name, "deleted"))
}
