//! # API Parameter Records
//!
//! File: lib/src/api/parms.rs
//!
//! Inert input records, one per resource family. Every field is optional so
//! that "absent", "empty" and "blank" can all be represented; which fields
//! are actually required is decided per action by its `REQUIRED` list.
//!
use crate::core::validation::{Field, Fields};

/// Identifies a program (definition or installed copy).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramParms {
    pub name: Option<String>,
    pub csd_group: Option<String>,
    pub region_name: Option<String>,
    pub cics_plex: Option<String>,
}

impl Fields for ProgramParms {
    fn field(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::CsdGroup => self.csd_group.as_deref(),
            Field::RegionName => self.region_name.as_deref(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionParms {
    pub name: Option<String>,
    pub program_name: Option<String>,
    pub csd_group: Option<String>,
    pub region_name: Option<String>,
    pub cics_plex: Option<String>,
}

impl Fields for TransactionParms {
    fn field(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::ProgramName => self.program_name.as_deref(),
            Field::CsdGroup => self.csd_group.as_deref(),
            Field::RegionName => self.region_name.as_deref(),
            _ => None,
        }
    }
}

/// URIMap definition and installed-URIMap parameters.
///
/// `enable` defaults to enabled when a definition is created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrimapParms {
    pub name: Option<String>,
    pub csd_group: Option<String>,
    pub path: Option<String>,
    pub host: Option<String>,
    pub scheme: Option<String>,
    pub program_name: Option<String>,
    pub pipeline_name: Option<String>,
    pub transaction_name: Option<String>,
    pub webservice_name: Option<String>,
    pub tcpipservice: Option<String>,
    pub description: Option<String>,
    pub certificate: Option<String>,
    pub authenticate: Option<String>,
    pub enable: Option<bool>,
    pub region_name: Option<String>,
    pub cics_plex: Option<String>,
}

impl Fields for UrimapParms {
    fn field(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::CsdGroup => self.csd_group.as_deref(),
            Field::Path => self.path.as_deref(),
            Field::Host => self.host.as_deref(),
            Field::ProgramName => self.program_name.as_deref(),
            Field::PipelineName => self.pipeline_name.as_deref(),
            Field::RegionName => self.region_name.as_deref(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebServiceParms {
    pub name: Option<String>,
    pub csd_group: Option<String>,
    pub pipeline_name: Option<String>,
    pub ws_bind: Option<String>,
    pub wsdl_file: Option<String>,
    pub description: Option<String>,
    pub validation: Option<bool>,
    pub region_name: Option<String>,
    pub cics_plex: Option<String>,
}

impl Fields for WebServiceParms {
    fn field(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::CsdGroup => self.csd_group.as_deref(),
            Field::PipelineName => self.pipeline_name.as_deref(),
            Field::WsBind => self.ws_bind.as_deref(),
            Field::RegionName => self.region_name.as_deref(),
            _ => None,
        }
    }
}

/// A CSD group and the CSD list it is added to or removed from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsdGroupParms {
    pub name: Option<String>,
    pub csd_list: Option<String>,
    pub region_name: Option<String>,
    pub cics_plex: Option<String>,
}

impl Fields for CsdGroupParms {
    fn field(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::CsdList => self.csd_list.as_deref(),
            Field::RegionName => self.region_name.as_deref(),
            _ => None,
        }
    }
}

/// Generic read of any CMCI resource table (`name` is the table, e.g. `CICSProgram`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceParms {
    pub name: Option<String>,
    pub criteria: Option<String>,
    pub parameter: Option<String>,
    pub region_name: Option<String>,
    pub cics_plex: Option<String>,
}

impl Fields for ResourceParms {
    fn field(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::RegionName => self.region_name.as_deref(),
            _ => None,
        }
    }
}

/// Value of a field already checked by `check_required`.
pub(crate) fn required(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}

/// Present and non-blank optional value.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
