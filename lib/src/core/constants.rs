//! # CMCI Constants
//!
//! File: lib/src/core/constants.rs
//!
//! Closed enumerations for the strings the CMCI REST API is addressed with:
//! resource table segments, query keys, action names, attribute names and
//! `api_response1` codes. Paths and bodies are only ever built from these.
//!
use std::fmt;

/// First path segment of every CMCI resource URI.
pub const SYSTEM_MANAGEMENT: &str = "CICSSystemManagement";

/// Query key selecting which records an action applies to.
pub const CRITERIA: &str = "CRITERIA";
/// Query key carrying an action parameter clause.
pub const PARAMETER: &str = "PARAMETER";
/// Parameter clause keyword scoping a definition to its CSD group.
pub const CSDGROUP: &str = "CSDGROUP";

pub const ENABLESTATUS: &str = "ENABLESTATUS";
pub const ENABLED: &str = "ENABLED";
pub const DISABLED: &str = "DISABLED";
pub const TO_CSDLIST: &str = "TO_CSDLIST";
/// `create` parameter telling CMCI the new definition goes to the CSD.
pub const CSD: &str = "CSD";

/// CMCI resource tables this client addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceType {
    DefinitionProgram,
    LocalTransaction,
    DefinitionTransaction,
    Program,
    DefinitionUrimap,
    DefinitionWebService,
    Urimap,
    CsdGroup,
}

impl ResourceType {
    pub const ALL: [ResourceType; 8] = [
        ResourceType::DefinitionProgram,
        ResourceType::LocalTransaction,
        ResourceType::DefinitionTransaction,
        ResourceType::Program,
        ResourceType::DefinitionUrimap,
        ResourceType::DefinitionWebService,
        ResourceType::Urimap,
        ResourceType::CsdGroup,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::DefinitionProgram => "CICSDefinitionProgram",
            ResourceType::LocalTransaction => "CICSLocalTransaction",
            ResourceType::DefinitionTransaction => "CICSDefinitionTransaction",
            ResourceType::Program => "CICSProgram",
            ResourceType::DefinitionUrimap => "CICSDefinitionURIMap",
            ResourceType::DefinitionWebService => "CICSDefinitionWebService",
            ResourceType::Urimap => "CICSURIMap",
            ResourceType::CsdGroup => "CICSCSDGroup",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named operations sent in an `<action name="..."/>` body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionName {
    CsdInstall,
    NewCopy,
    CsdAdd,
    CsdRemove,
}

impl ActionName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionName::CsdInstall => "CSDINSTALL",
            ActionName::NewCopy => "NEWCOPY",
            ActionName::CsdAdd => "CSDADD",
            ActionName::CsdRemove => "CSDREMOVE",
        }
    }
}

impl fmt::Display for ActionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `api_response1` values from the result summary.
///
/// Only `Ok` counts as success. Servers usually send the symbolic name in
/// `api_response1_alt`; [`ApiResponse::name`] is the fallback when they don't.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiResponse {
    Ok,
    NoData,
    InvalidParm,
    Other(u32),
}

impl ApiResponse {
    pub fn from_code(code: u32) -> Self {
        match code {
            1024 => ApiResponse::Ok,
            1027 => ApiResponse::NoData,
            1028 => ApiResponse::InvalidParm,
            other => ApiResponse::Other(other),
        }
    }

    pub fn code(&self) -> u32 {
        match self {
            ApiResponse::Ok => 1024,
            ApiResponse::NoData => 1027,
            ApiResponse::InvalidParm => 1028,
            ApiResponse::Other(code) => *code,
        }
    }

    pub fn name(&self) -> String {
        match self {
            ApiResponse::Ok => "OK".to_string(),
            ApiResponse::NoData => "NODATA".to_string(),
            ApiResponse::InvalidParm => "INVALIDPARM".to_string(),
            ApiResponse::Other(code) => code.to_string(),
        }
    }
}
