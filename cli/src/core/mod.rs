//! # cicsrs Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundations shared by every command handler:
//! - `config`: connection profile files (loading, merging, validation, selection)
//! - `error`: CLI error types and the `anyhow`-based `Result` alias
//!
//! ```rust,ignore
//! use crate::core::config;
//! use crate::core::error::{CicsrsError, Result};
//! ```
//!
pub mod config;
pub mod error;
