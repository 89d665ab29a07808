//! # cicsrs Install Command
//!
//! File: cli/src/commands/install.rs
//!
//! `cicsrs install <resource> <NAME> <CSD_GROUP>` installs a CSD definition
//! into the target region (`CSDINSTALL`).
//!
use super::{Context, NameGroupArgs};
use crate::common::{connection, output};
use crate::core::error::Result;
use cicsrs_cmci::api::{self, ProgramParms, TransactionParms, UrimapParms};
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "Install a resource definition into a CICS region")]
pub struct InstallArgs {
    #[command(subcommand)]
    resource: InstallResource,
}

#[derive(Subcommand, Debug)]
enum InstallResource {
    /// Install a program definition.
    Program(NameGroupArgs),
    /// Install a transaction definition.
    Transaction(NameGroupArgs),
    /// Install a URIMap definition.
    Urimap(NameGroupArgs),
}

pub async fn handle_install(args: InstallArgs, ctx: &Context) -> Result<()> {
    let target = connection::connect(&ctx.connection)?;
    let region_name = target.region_name.clone();
    let cics_plex = target.cics_plex.clone();

    let (kind, name, response) = match args.resource {
        InstallResource::Program(NameGroupArgs { name, csd_group }) => {
            info!("Installing program '{}' from '{}'", name, csd_group);
            let parms = ProgramParms {
                name: Some(name.clone()),
                csd_group: Some(csd_group),
                region_name,
                cics_plex,
            };
            ("program", name, api::install_program(&target.session, &parms).await?)
        }
        InstallResource::Transaction(NameGroupArgs { name, csd_group }) => {
            info!("Installing transaction '{}' from '{}'", name, csd_group);
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
                api::install_transaction(&target.session, &parms).await?,
            )
        }
        InstallResource::Urimap(NameGroupArgs { name, csd_group }) => {
            info!("Installing URIMap '{}' from '{}'", name, csd_group);
            let parms = UrimapParms {
                name: Some(name.clone()),
                csd_group: Some(csd_group),
                region_name,
                cics_plex,
                ..Default::default()
            };
            ("URIMap", name, api::install_urimap(&target.session, &parms).await?)
        }
    };
    output::report(&response, ctx.json, &output::success(kind, &name, "installed"))
}
