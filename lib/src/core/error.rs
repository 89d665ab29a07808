//! # CMCI Error Types
//!
//! File: lib/src/core/error.rs
//!
//! ## Overview
//!
//! Every failure an API action can produce is a [`CmciError`]:
//!
//! - `Validation`: a required parameter was absent or blank. Raised before any
//!   request is built, so no network traffic happens.
//! - `Transport`: the HTTP call itself failed (connection refused, TLS, timeout).
//! - `HttpStatus` / `RemoteApi`: the server answered, but not with a normal
//!   CMCI success. Both carry [`REMOTE_API_ERROR`] in their message together
//!   with whatever diagnostic the server supplied (e.g. `INVALIDPARM`).
//! - `Parse`: the response body was not a well-formed CMCI envelope.
//! - `Serialize` / `Session`: a request body or session could not be built.
//!
//! Errors are returned unchanged up to the caller; nothing here retries.
//!
use thiserror::Error;

/// Fixed message fragment for any non-success answer from the remote API.
pub const REMOTE_API_ERROR: &str = "Did not receive the expected response from CMCI REST API";

#[derive(Error, Debug)]
pub enum CmciError {
    #[error("Expect Error: {message}")]
    Validation { label: &'static str, message: String },

    #[error("Communication with the CMCI REST API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{prefix}: HTTP status {status}: {body}", prefix = REMOTE_API_ERROR)]
    HttpStatus { status: u16, body: String },

    #[error("{prefix}: {name} (api_response1={code}){detail}", prefix = REMOTE_API_ERROR)]
    RemoteApi {
        code: u32,
        name: String,
        detail: String,
    },

    #[error("Failed to parse CMCI response XML: {0}")]
    Parse(String),

    #[error("Failed to build CMCI request body: {0}")]
    Serialize(String),

    #[error("Invalid CMCI session configuration: {0}")]
    Session(String),
}

impl CmciError {
    /// Label of the offending field for validation failures.
    pub fn field_label(&self) -> Option<&'static str> {
        match self {
            CmciError::Validation { label, .. } => Some(*label),
            _ => None,
        }
    }

    /// True for any error that means the server rejected the request.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            CmciError::RemoteApi { .. } | CmciError::HttpStatus { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, CmciError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CmciError::Validation {
            label: "CICS Region name",
            message: "Required parameter 'CICS Region name' must not be blank".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Expect Error: Required parameter 'CICS Region name' must not be blank"
        );
        assert_eq!(err.field_label(), Some("CICS Region name"));

        let remote = CmciError::RemoteApi {
            code: 1028,
            name: "INVALIDPARM".to_string(),
            detail: String::new(),
        };
        let msg = remote.to_string();
        assert!(msg.starts_with(REMOTE_API_ERROR));
        assert!(msg.contains("INVALIDPARM"));
        assert!(remote.is_remote());

        let http = CmciError::HttpStatus {
            status: 401,
            body: "Unauthorized".to_string(),
        };
        assert!(http.to_string().contains(REMOTE_API_ERROR));
        assert!(http.to_string().contains("401"));
        assert!(http.field_label().is_none());
    }
}
