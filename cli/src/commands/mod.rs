//! # cicsrs Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! One module per top-level verb. Each defines its clap arguments (a
//! subcommand per resource type) and an async handler that:
//!
//! 1. resolves the connection (`common::connection::connect`),
//! 2. builds the library parameter record from positionals, options and the
//!    resolved region/plex,
//! 3. calls exactly one `cicsrs_cmci::api` function,
//! 4. prints the outcome (`common::output`).
//!
//! ## Command Groups
//!
//! | Verb | Resources |
//! |---|---|
//! | `define` | program, transaction, urimap-server, urimap-client, urimap-pipeline, webservice |
//! | `delete` | program, transaction, urimap, webservice |
//! | `discard` | program, transaction, urimap |
//! | `enable` / `disable` | urimap |
//! | `install` | program, transaction, urimap |
//! | `refresh` | program |
//! | `add-to-list` / `remove-from-list` | csdgroup |
//! | `get` | resource |
//!
use crate::common::connection::ConnectionArgs;
use clap::Args;

pub mod csd_list;
pub mod define;
pub mod delete;
pub mod discard;
pub mod enable;
pub mod get;
pub mod install;
pub mod refresh;

/// Global options every handler needs.
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub connection: ConnectionArgs,
    /// Print the full response as JSON instead of a summary.
    pub json: bool,
}

/// A resource identified by name only (installed resources).
#[derive(Args, Debug, Clone)]
pub struct NameArgs {
    /// Name of the resource.
    pub name: String,
}

/// A resource definition identified by name within a CSD group.
#[derive(Args, Debug, Clone)]
pub struct NameGroupArgs {
    /// Name of the resource definition.
    pub name: String,
    /// CSD group containing the definition.
    pub csd_group: String,
}
