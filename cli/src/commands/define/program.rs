//! # Define Program
//!
//! File: cli/src/commands/define/program.rs
//!
use crate::commands::{Context, NameGroupArgs};
use crate::common::{connection, output};
use crate::core::error::Result;
use cicsrs_cmci::api::{self, ProgramParms};
use clap::Args;
use tracing::info;

#[derive(Args, Debug)]
pub struct ProgramArgs {
    #[command(flatten)]
    pub target: NameGroupArgs,
}

pub async fn handle_program(args: ProgramArgs, ctx: &Context) -> Result<()> {
    info!("Defining program '{}' in group '{}'", args.target.name, args.target.csd_group);
    let target = connection::connect(&ctx.connection)?;
    let parms = ProgramParms {
        name: Some(args.target.name.clone()),
        csd_group: Some(args.target.csd_group),
        region_name: target.region_name,
        cics_plex: target.cics_plex,
    };
    let response = api::define_program(&target.session, &parms).await?;
    output::report(
        &response,
        ctx.json,
        &output::success("program", &args.target.name, "defined"),
    )
}
