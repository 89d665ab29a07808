//! # cicsrs CMCI Client Library
//!
//! File: lib/src/lib.rs
//!
//! ## Overview
//!
//! A thin client for the CICS management REST interface (CMCI). Each
//! user-facing operation ("discard a program", "enable a URIMap", "add a CSD
//! group to a list") becomes exactly one HTTP request whose XML response is
//! parsed into a [`CmciResponse`].
//!
//! ## Architecture
//!
//! - `core`: error type, CMCI constants and required-field validation.
//! - `common`: resource path builder, XML request/response codec, and the
//!   transport seam (`CmciTransport`) with its reqwest-backed `Session`.
//! - `api`: one async function per resource-action pair plus the parameter
//!   records they accept.
//!
//! ## Examples
//!
//! ```no_run
//! use cicsrs_cmci::{api, Session, SessionConfig};
//!
//! # async fn run() -> cicsrs_cmci::Result<()> {
//! let session = Session::new(SessionConfig::new("cics.example.com"))?;
//! let parms = api::ProgramParms {
//!     name: Some("PGM1".into()),
//!     region_name: Some("CICSRGN1".into()),
//!     ..Default::default()
//! };
//! let response = api::refresh_program(&session, &parms).await?;
//! println!("{} record(s)", response.result_summary.recordcount);
//! # Ok(())
//! # }
//! ```
//!
pub mod api;
pub mod common;
pub mod core;

pub use crate::common::rest::{AuthType, CmciTransport, Protocol, QueryParam, Session, SessionConfig};
pub use crate::common::xml::{ActionParameter, CmciResponse, Record, RequestBody, ResultSummary};
pub use crate::core::error::{CmciError, Result};
