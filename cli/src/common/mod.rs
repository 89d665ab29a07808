//! # cicsrs Common Utilities
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Helpers shared by all command handlers:
//!
//! - `connection`: global connection flags and their resolution into a `Session`
//! - `output`: success messages, record listings and `--json` rendering
//!
//! A handler typically does:
//!
//! ```rust,ignore
//! let target = connection::connect(&ctx.connection)?;
//! let response = api::discard_program(&target.session, &parms).await?;
//! output::report(&response, ctx.json, &output::success("program", name, "discarded"))?;
//! ```
//!

/// Connection flags, profile merge and session construction.
pub mod connection;
/// Rendering of command results.
pub mod output;
