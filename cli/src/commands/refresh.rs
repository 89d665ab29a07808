//! # cicsrs Refresh Command
//!
//! File: cli/src/commands/refresh.rs
//!
//! `cicsrs refresh program <NAME>` loads a new copy of an installed program
//! (`NEWCOPY`), picking up a freshly link-edited load module.
//!
use super::{Context, NameArgs};
use crate::common::{connection, output};
use crate::core::error::Result;
use cicsrs_cmci::api::{self, ProgramParms};
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "Load a new copy of an installed program")]
pub struct RefreshArgs {
    #[command(subcommand)]
    resource: RefreshResource,
}

#[derive(Subcommand, Debug)]
enum RefreshResource {
    /// An installed program.
    Program(NameArgs),
}

pub async fn handle_refresh(args: RefreshArgs, ctx: &Context) -> Result<()> {
    let RefreshResource::Program(NameArgs { name }) = args.resource;
    info!("Refreshing program '{}'", name);
    let target = connection::connect(&ctx.connection)?;
    let parms = ProgramParms {
        name: Some(name.clone()),
        region_name: target.region_name,
        cics_plex: target.cics_plex,
        ..Default::default()
    };
    let response = api::refresh_program(&target.session, &parms).await?;
    output::report(&response, ctx.json, &output::success("program", &name, "refreshed"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_refresh_program() {
        let args = RefreshArgs::try_parse_from(["refresh", "program", "PGM1"]).unwrap();
        let RefreshResource::Program(program) = args.resource;
        assert_eq!(program.name, "PGM1");
        assert!(RefreshArgs::try_parse_from(["refresh", "program"]).is_err());
    }
}
