//! # CMCI XML Codec
//!
//! File: lib/src/common/xml/mod.rs
//!
//! ## Overview
//!
//! CMCI speaks XML in both directions:
//!
//! - `request`: [`RequestBody`] values serialised with `quick_xml::Writer` into
//!   `<request><action .../></request>`, `<request><update>...</update></request>`
//!   or `<request><create>...</create></request>`.
//! - `response`: `<response><resultsummary .../><records>...</records></response>`
//!   envelopes read with `quick_xml::Reader` into [`CmciResponse`].
//!
mod request;
mod response;

pub use request::{ActionParameter, RequestBody};
pub use response::{CmciResponse, Record, ResultSummary};
