//! # CMCI Resource Paths
//!
//! File: lib/src/common/path.rs
//!
//! ## Overview
//!
//! Builds the resource URI for one CMCI call:
//!
//! ```text
//! /CICSSystemManagement/<resource>/[<plex>/]<region>[?CRITERIA=(...)][&PARAMETER=...]
//! ```
//!
//! The plex segment is dropped when it is absent or blank. Discard-program is
//! the exception: it goes through [`ResourcePath::plex_verbatim`], which keeps
//! an empty plex and so produces `//<region>`. Criteria values are quoted or
//! left bare per action via [`Quoting`]; the two conventions coexist on the
//! remote API and are kept exactly as each action uses them.
//!
use crate::core::constants::{ResourceType, CRITERIA, CSDGROUP, PARAMETER, SYSTEM_MANAGEMENT};

/// How a criteria value is written inside `(ATTR=value)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quoting {
    /// `(NAME=value)`
    Bare,
    /// `(NAME='value')`
    Single,
}

/// A `CRITERIA=` expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criteria {
    Attribute {
        attribute: &'static str,
        value: String,
        quoting: Quoting,
    },
    /// Caller-supplied expression, wrapped in parentheses as-is.
    Raw(String),
}

impl Criteria {
    pub fn attribute(attribute: &'static str, value: &str, quoting: Quoting) -> Self {
        Criteria::Attribute {
            attribute,
            value: value.to_string(),
            quoting,
        }
    }

    pub fn raw(expression: &str) -> Self {
        Criteria::Raw(expression.to_string())
    }

    fn render(&self) -> String {
        match self {
            Criteria::Attribute {
                attribute,
                value,
                quoting: Quoting::Bare,
            } => format!("({}={})", attribute, value),
            Criteria::Attribute {
                attribute,
                value,
                quoting: Quoting::Single,
            } => format!("({}='{}')", attribute, value),
            Criteria::Raw(expr) => format!("({})", expr),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Plex {
    Omitted,
    Segment(String),
}

/// Builder for a single CMCI resource URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePath {
    resource: String,
    plex: Plex,
    region: String,
    criteria: Option<Criteria>,
    parameter: Option<String>,
}

impl ResourcePath {
    pub fn new(resource: ResourceType, region: &str) -> Self {
        Self::for_table(resource.as_str(), region)
    }

    /// Path for a resource table given by name (used by `get resource`).
    pub fn for_table(resource: &str, region: &str) -> Self {
        ResourcePath {
            resource: resource.to_string(),
            plex: Plex::Omitted,
            region: region.to_string(),
            criteria: None,
            parameter: None,
        }
    }

    /// Adds the plex segment unless it is absent or blank.
    pub fn plex(mut self, plex: Option<&str>) -> Self {
        self.plex = match plex {
            Some(p) if !p.trim().is_empty() => Plex::Segment(p.to_string()),
            _ => Plex::Omitted,
        };
        self
    }

    /// Adds the plex segment whenever it is present, even if empty.
    pub fn plex_verbatim(mut self, plex: Option<&str>) -> Self {
        self.plex = match plex {
            Some(p) => Plex::Segment(p.to_string()),
            None => Plex::Omitted,
        };
        self
    }

    pub fn criteria(mut self, criteria: Criteria) -> Self {
        self.criteria = Some(criteria);
        self
    }

    /// `PARAMETER=CSDGROUP(<group>)`
    pub fn csd_group(self, group: &str) -> Self {
        self.parameter(&format!("{}({})", CSDGROUP, group))
    }

    pub fn parameter(mut self, parameter: &str) -> Self {
        self.parameter = Some(parameter.to_string());
        self
    }

    pub fn build(&self) -> String {
        let mut path = format!("/{}/{}/", SYSTEM_MANAGEMENT, self.resource);
        if let Plex::Segment(plex) = &self.plex {
            path.push_str(plex);
            path.push('/');
        }
        path.push_str(&self.region);

        let mut separator = '?';
        if let Some(criteria) = &self.criteria {
            path.push(separator);
            path.push_str(CRITERIA);
            path.push('=');
            path.push_str(&criteria.render());
            separator = '&';
        }
        if let Some(parameter) = &self.parameter {
            path.push(separator);
            path.push_str(PARAMETER);
            path.push('=');
            path.push_str(parameter);
        }
        path
    }
}

impl std::fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.build())
    }
}
