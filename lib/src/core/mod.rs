//! # CMCI Core Infrastructure
//!
//! File: lib/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational pieces shared by every API action:
//! - `constants`: closed enumerations of CMCI path segments, action names,
//!   attribute names and response codes.
//! - `error`: the `CmciError` type and the crate-wide `Result` alias.
//! - `validation`: declarative required-field checks run before any request
//!   is built.
//!
pub mod constants;
pub mod error;
pub mod validation;
