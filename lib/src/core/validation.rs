//! # Required-Field Validation
//!
//! File: lib/src/core/validation.rs
//!
//! ## Overview
//!
//! Each API action declares the fields it needs as a `const` slice of
//! [`Requirement`]s. [`check_required`] walks that slice against any
//! parameter record implementing [`Fields`] and fails on the first field
//! that is absent, empty or only whitespace. The check is pure and runs
//! before any path, body or request is built.
//!
//! ```rust
//! use cicsrs_cmci::core::validation::{check_required, require, Field, Requirement};
//! use cicsrs_cmci::api::ProgramParms;
//!
//! const REQUIRED: &[Requirement] = &[
//!     require(Field::Name, "CICS Program name"),
//!     require(Field::RegionName, "CICS Region name"),
//! ];
//!
//! let parms = ProgramParms { name: Some("PGM1".into()), ..Default::default() };
//! let err = check_required(&parms, REQUIRED).unwrap_err();
//! assert!(err.to_string().contains("CICS Region name"));
//! ```
//!
use crate::core::error::{CmciError, Result};

/// Every parameter field an action may insist on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    CsdGroup,
    CsdList,
    RegionName,
    ProgramName,
    PipelineName,
    Path,
    Host,
    WsBind,
}

/// One required field together with the label shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirement {
    pub field: Field,
    pub label: &'static str,
}

pub const fn require(field: Field, label: &'static str) -> Requirement {
    Requirement { field, label }
}

/// Field lookup implemented by each parameter record.
///
/// Returns `None` for fields the record does not carry at all.
pub trait Fields {
    fn field(&self, field: Field) -> Option<&str>;
}

/// True when the value is missing or contains nothing but whitespace.
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

pub fn check_required<P: Fields + ?Sized>(parms: &P, requirements: &[Requirement]) -> Result<()> {
    for req in requirements {
        if is_blank(parms.field(req.field)) {
            tracing::debug!("Validation failed: {:?} ('{}') is blank", req.field, req.label);
            return Err(CmciError::Validation {
                label: req.label,
                message: format!("Required parameter '{}' must not be blank", req.label),
            });
        }
    }
    Ok(())
}

/// Checks an optional value against a fixed set of accepted spellings.
///
/// Absent values pass; present values are compared case-insensitively.
pub fn check_one_of(value: Option<&str>, allowed: &[&str], label: &'static str) -> Result<()> {
    match value {
        Some(v) if !allowed.iter().any(|a| a.eq_ignore_ascii_case(v.trim())) => {
            Err(CmciError::Validation {
                label,
                message: format!(
                    "Parameter '{}' must be one of: {} (got '{}')",
                    label,
                    allowed.join(", "),
                    v
                ),
            })
        }
        _ => Ok(()),
    }
}
