//! # cicsrs CLI Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! Errors raised by the CLI layer itself, before or around the call into
//! `cicsrs_cmci`. Library errors (`CmciError`) are not wrapped here; they
//! travel up to `main` inside `anyhow::Error` with their original message, so
//! remote failures still read `Did not receive the expected response from
//! CMCI REST API: ...`.
//!
//! - `Config`: a profile file could not be used (bad protocol, zero port, ...).
//! - `ProfileNotFound`: `--cics-profile` names a profile that is not defined.
//! - `MissingConnectionSetting`: no flag, env var or profile supplied a value
//!   the session cannot do without (the host).
//! - `InvalidSetting`: a flag or profile value could not be interpreted.
//!
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CicsrsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Profile '{name}' not found. Available profiles: {available}")]
    ProfileNotFound { name: String, available: String },

    #[error("Missing connection setting '{setting}'. Pass --{setting}, set {env}, or add it to a profile.")]
    MissingConnectionSetting {
        setting: &'static str,
        env: &'static str,
    },

    #[error("Invalid value for '{setting}': {message}")]
    InvalidSetting {
        setting: &'static str,
        message: String,
    },
}

/// Application-level result; handlers return this and `main` renders it.
pub type Result<T> = anyhow::Result<T>;
