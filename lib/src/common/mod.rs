//! # CMCI Common Utilities
//!
//! File: lib/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared plumbing used by every API action:
//!
//! - **`path`**: builds `/CICSSystemManagement/<resource>/<plex>/<region>?CRITERIA=...`
//!   URIs, including the per-action quoting conventions.
//! - **`xml`**: writes `<request>` bodies and reads `<response>` envelopes.
//! - **`rest`**: the `CmciTransport` seam and the reqwest-backed `Session`.
//!

/// Resource URI construction.
pub mod path;
/// Transport trait and HTTP session.
pub mod rest;
/// XML request/response codec.
pub mod xml;
