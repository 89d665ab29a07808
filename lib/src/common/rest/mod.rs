//! # CMCI Transport
//!
//! File: lib/src/common/rest/mod.rs
//!
//! ## Overview
//!
//! [`CmciTransport`] is the seam between the API actions and the network.
//! It exposes the four verbs CMCI uses, each taking a resource path (as built
//! by `common::path`), an ordered list of extra query parameters and, for
//! mutating verbs, an optional request body. Every call is one round trip
//! returning a parsed [`CmciResponse`].
//!
//! [`Session`] is the production implementation on top of `reqwest`. Tests
//! substitute their own implementation instead of patching the session.
//!
use crate::common::xml::{CmciResponse, RequestBody};
use crate::core::error::Result;
use async_trait::async_trait;

mod session;

pub use session::{AuthType, Protocol, Session, SessionConfig};

/// Extra `key=value` query pair appended after the resource path's own query.
pub type QueryParam = (String, String);

#[async_trait]
pub trait CmciTransport: std::fmt::Debug + Send + Sync {
    async fn get_expect_parsed_xml(
        &self,
        resource: &str,
        query: &[QueryParam],
    ) -> Result<CmciResponse>;

    async fn post_expect_parsed_xml(
        &self,
        resource: &str,
        query: &[QueryParam],
        body: Option<&RequestBody>,
    ) -> Result<CmciResponse>;

    async fn put_expect_parsed_xml(
        &self,
        resource: &str,
        query: &[QueryParam],
        body: Option<&RequestBody>,
    ) -> Result<CmciResponse>;

    async fn delete_expect_parsed_xml(
        &self,
        resource: &str,
        query: &[QueryParam],
    ) -> Result<CmciResponse>;
}

/// Appends extra query pairs to a resource path that may already carry a query.
pub fn append_query(resource: &str, query: &[QueryParam]) -> String {
    let mut uri = resource.to_string();
    let mut separator = if resource.contains('?') { '&' } else { '?' };
    for (key, value) in query {
        uri.push(separator);
        uri.push_str(key);
        uri.push('=');
        uri.push_str(value);
        separator = '&';
    }
    uri
}

#[cfg(test)]
pub(crate) mod fake;
