//! # cicsrs Discard Command
//!
//! File: cli/src/commands/discard.rs
//!
//! `cicsrs discard <resource> <NAME>` removes an installed resource from the
//! running region. The CSD definition is left in place.
//!
use super::{Context, NameArgs};
use crate::common::{connection, output};
use crate::core::error::Result;
use cicsrs_cmci::api::{self, ProgramParms, TransactionParms, UrimapParms};
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "Discard an installed resource from a CICS region")]
pub struct DiscardArgs {
    #[command(subcommand)]
    resource: DiscardResource,
}

#[derive(Subcommand, Debug)]
enum DiscardResource {
    /// Discard an installed program.
    Program(NameArgs),
    /// Discard an installed transaction.
    Transaction(NameArgs),
    /// Discard an installed URIMap.
    Urimap(NameArgs),
}

pub async fn handle_discard(args: DiscardArgs, ctx: &Context) -> Result<()> {
    let target = connection::connect(&ctx.connection)?;
    let region_name = target.region_name.clone();
    let cics_plex = target.cics_plex.clone();

    let (kind, name, response) = match args.resource {
        DiscardResource::Program(NameArgs { name }) => {
            info!("Discarding program '{}'", name);
            let parms = ProgramParms {
                name: Some(name.clone()),
                region_name,
                cics_plex,
                ..Default::default()
            };
            ("program", name, api::discard_program(&target.session, &parms).await?)
        }
        DiscardResource::Transaction(NameArgs { name }) => {
            info!("Discarding transaction '{}'", name);
            let parms = TransactionParms {
                name: Some(name.clone()),
                region_name,
                cics_plex,
                ..Default::default()
            };
            (
                "transaction",
                name,
                api::discard_transaction(&target.session, &parms).await?,
            )
        }
        DiscardResource::Urimap(NameArgs { name }) => {
            info!("Discarding URIMap '{}'", name);
            let parms = UrimapParms {
                name: Some(name.clone()),
                region_name,
                cics_plex,
                ..Default::default()
            };
            ("URIMap", name, api::discard_urimap(&target.session, &parms).await?)
        }
    };
    output::report(&response, ctx.json, &output::success(kind, &name, "discarded"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_discard_program() {
        let result = DiscardArgs::try_parse_from(["discard", "program", "PGM1"]);
        match result.unwrap().resource {
            DiscardResource::Program(args) => assert_eq!(args.name, "PGM1"),
            _ => panic!("Incorrect subcommand parsed for 'program'"),
        }
    }

    #[test]
    fn test_discard_takes_no_group() {
        assert!(DiscardArgs::try_parse_from(["discard", "transaction", "TRN1", "GRP1"]).is_err());
        assert!(DiscardArgs::try_parse_from(["discard", "webservice", "WS1"]).is_err());
    }
}
