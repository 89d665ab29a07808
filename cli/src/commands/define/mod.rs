//! # cicsrs Define Command Group
//!
//! File: cli/src/commands/define/mod.rs
//!
//! ## Overview
//!
//! `cicsrs define <resource>` creates a new resource definition in a CSD
//! group. Definitions are not active until installed (`cicsrs install`).
//!
//! ```bash
//! cicsrs define program PGM1 GRP1 --region-name CICSRGN1
//! cicsrs define transaction TRN1 PGM1 GRP1
//! cicsrs define urimap-server URI1 GRP1 --urimap-path /app --urimap-host example.com --program-name PGM1
//! cicsrs define webservice WS1 GRP1 --pipeline-name PIPE1 --wsbind /u/ws/ws1.wsbind
//! ```
//!
use super::Context;
use crate::core::error::Result;
use clap::{Parser, Subcommand};

mod program;
mod transaction;
mod urimap;
mod webservice;

#[derive(Parser, Debug)]
#[command(about = "Define a new resource in a CSD group")]
pub struct DefineArgs {
    #[command(subcommand)]
    resource: DefineResource,
}

#[derive(Subcommand, Debug)]
enum DefineResource {
    /// Define a program.
    Program(program::ProgramArgs),
    /// Define a transaction that runs a program.
    Transaction(transaction::TransactionArgs),
    /// Define a URIMap that routes inbound requests to a program.
    UrimapServer(urimap::UrimapServerArgs),
    /// Define a URIMap for outbound client requests.
    UrimapClient(urimap::UrimapClientArgs),
    /// Define a URIMap that routes inbound requests to a pipeline.
    UrimapPipeline(urimap::UrimapPipelineArgs),
    /// Define a web service.
    Webservice(webservice::WebServiceArgs),
}

pub async fn handle_define(args: DefineArgs, ctx: &Context) -> Result<()> {
    match args.resource {
        DefineResource::Program(args) => program::handle_program(args, ctx).await,
        DefineResource::Transaction(args) => transaction::handle_transaction(args, ctx).await,
        DefineResource::UrimapServer(args) => urimap::handle_server(args, ctx).await,
        DefineResource::UrimapClient(args) => urimap::handle_client(args, ctx).await,
        DefineResource::UrimapPipeline(args) => urimap::handle_pipeline(args, ctx).await,
        DefineResource::Webservice(args) => webservice::handle_webservice(args, ctx).await,
    }
}
