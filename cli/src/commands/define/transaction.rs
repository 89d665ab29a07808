//! # Define Transaction
//!
//! File: cli/src/commands/define/transaction.rs
//!
use crate::commands::Context;
use crate::common::{connection, output};
use crate::core::error::Result;
use cicsrs_cmci::api::{self, TransactionParms};
use clap::Args;
use tracing::info;

#[derive(Args, Debug)]
pub struct TransactionArgs {
    /// Transaction ID (up to four characters).
    pub name: String,
    /// Program the transaction runs.
    pub program_name: String,
    /// CSD group to create the definition in.
    pub csd_group: String,
}

pub async fn handle_transaction(args: TransactionArgs, ctx: &Context) -> Result<()> {
    info!(
        "Defining transaction '{}' for program '{}' in group '{}'",
        args.name, args.program_name, args.csd_group
    );
    let target = connection::connect(&ctx.connection)?;
    let parms = TransactionParms {
        name: Some(args.name.clone()),
        program_name: Some(args.program_name),
        csd_group: Some(args.csd_group),
        region_name: target.region_name,
        cics_plex: target.cics_plex,
    };
    let response = api::define_transaction(&target.session, &parms).await?;
    output::report(
        &response,
        ctx.json,
        &output::success("transaction", &args.name, "defined"),
    )
}
