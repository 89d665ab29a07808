//! # CMCI API Actions
//!
//! File: lib/src/api/mod.rs
//!
//! ## Overview
//!
//! One async function per (resource, action) pair. Every function follows the
//! same straight line:
//!
//! 1. check the action's required fields (no I/O on failure),
//! 2. build the resource path with the action's criteria convention,
//! 3. build the request body for mutating actions,
//! 4. make exactly one transport call and return its response unchanged.
//!
//! Functions are generic over [`CmciTransport`](crate::CmciTransport), so the
//! same code runs against a live [`Session`](crate::Session) or a test double.
//!
//! | Module | Actions |
//! |---|---|
//! | `program` | define, delete, discard, install, refresh (NEWCOPY) |
//! | `transaction` | define, delete, discard, install |
//! | `urimap` | define (server/client/pipeline), delete, discard, enable, disable, install |
//! | `webservice` | define, delete |
//! | `csd_group` | add to list, remove from list |
//! | `resource` | get |
//!
mod csd_group;
mod parms;
mod program;
mod resource;
mod transaction;
mod urimap;
mod webservice;

pub use csd_group::{add_csd_group_to_list, remove_csd_group_from_list};
pub use parms::{
    CsdGroupParms, ProgramParms, ResourceParms, TransactionParms, UrimapParms, WebServiceParms,
};
pub use program::{define_program, delete_program, discard_program, install_program, refresh_program};
pub use resource::get_resource;
pub use transaction::{define_transaction, delete_transaction, discard_transaction, install_transaction};
pub use urimap::{
    define_urimap_client, define_urimap_pipeline, define_urimap_server, delete_urimap,
    disable_urimap, discard_urimap, enable_urimap, install_urimap,
};
pub use webservice::{define_webservice, delete_webservice};

/// Builds a `create` attribute list, skipping absent or blank values.
pub(crate) fn definition_attributes(pairs: &[(&str, Option<&str>)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .filter_map(|(key, value)| {
            value
                .filter(|v| !v.trim().is_empty())
                .map(|v| (key.to_string(), v.to_string()))
        })
        .collect()
}
