//! # cicsrs Get Command
//!
//! File: cli/src/commands/get.rs
//!
//! ## Overview
//!
//! `cicsrs get resource <RESOURCE_NAME>` reads any CMCI resource table and
//! prints the returned records. `--criteria` and `--parameter` are passed to
//! CMCI as written, so the full filter syntax is available:
//!
//! ```bash
//! cicsrs get resource CICSProgram --criteria "PROGRAM=PGM*"
//! cicsrs get resource CICSDefinitionProgram --parameter "CSDGROUP(GRP1)"
//! ```
//!
use super::Context;
use crate::common::{connection, output};
use crate::core::error::Result;
use cicsrs_cmci::api::{self, ResourceParms};
use clap::{Args, Parser, Subcommand};
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "Read records from a CMCI resource table")]
pub struct GetArgs {
    #[command(subcommand)]
    resource: GetResource,
}

#[derive(Subcommand, Debug)]
enum GetResource {
    /// Any CMCI resource table, e.g. CICSProgram or CICSLocalTransaction.
    Resource(ResourceArgs),
}

#[derive(Args, Debug)]
struct ResourceArgs {
    /// CMCI resource table name.
    resource_name: String,
    /// Filter expression, e.g. `PROGRAM=PGM*`.
    #[arg(long)]
    criteria: Option<String>,
    /// Parameter expression, e.g. `CSDGROUP(GRP1)`.
    #[arg(long)]
    parameter: Option<String>,
}

pub async fn handle_get(args: GetArgs, ctx: &Context) -> Result<()> {
    let GetResource::Resource(args) = args.resource;
    info!("Getting resource table '{}'", args.resource_name);
    let target = connection::connect(&ctx.connection)?;
    let parms = ResourceParms {
        name: Some(args.resource_name),
        criteria: args.criteria,
        parameter: args.parameter,
        region_name: target.region_name,
        cics_plex: target.cics_plex,
    };
    let response = api::get_resource(&target.session, &parms).await?;
    output::report_records(&response, ctx.json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_get_resource() {
        let args = GetArgs::try_parse_from([
            "get",
            "resource",
            "CICSProgram",
            "--criteria",
            "PROGRAM=PGM*",
        ])
        .unwrap();
        let GetResource::Resource(resource) = args.resource;
        assert_eq!(resource.resource_name, "CICSProgram");
        assert_eq!(resource.criteria.as_deref(), Some("PROGRAM=PGM*"));
        assert_eq!(resource.parameter, None);
    }
}
