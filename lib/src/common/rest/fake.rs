//! Recording transport used by the API unit tests.

use super::{CmciTransport, QueryParam};
use crate::common::xml::{CmciResponse, RequestBody, ResultSummary};
use crate::core::error::Result;
use async_trait::async_trait;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Call {
    pub verb: &'static str,
    pub resource: String,
    pub query: Vec<QueryParam>,
    pub body: Option<RequestBody>,
}

/// Answers every call with a clone of `response` and remembers the calls.
#[derive(Debug)]
pub(crate) struct FakeTransport {
    pub response: CmciResponse,
    calls: Mutex<Vec<Call>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        FakeTransport {
            response: CmciResponse {
                result_summary: ResultSummary {
                    api_response1: 1024,
                    api_response1_alt: "OK".to_string(),
                    recordcount: 1,
                    displayed_recordcount: 1,
                    ..Default::default()
                },
                ..Default::default()
            },
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// The single call made so far.
    pub fn only_call(&self) -> Call {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one transport call");
        calls.into_iter().next().unwrap()
    }

    fn record(
        &self,
        verb: &'static str,
        resource: &str,
        query: &[QueryParam],
        body: Option<&RequestBody>,
    ) -> Result<CmciResponse> {
        self.calls.lock().unwrap().push(Call {
            verb,
            resource: resource.to_string(),
            query: query.to_vec(),
            body: body.cloned(),
        });
        Ok(self.response.clone())
    }
}

#[async_trait]
impl CmciTransport for FakeTransport {
    async fn get_expect_parsed_xml(&self, resource: &str, query: &[QueryParam]) -> Result<CmciResponse> {
        self.record("GET", resource, query, None)
    }

    async fn post_expect_parsed_xml(
        &self,
        resource: &str,
        query: &[QueryParam],
        body: Option<&RequestBody>,
    ) -> Result<CmciResponse> {
        self.record("POST", resource, query, body)
    }

    async fn put_expect_parsed_xml(
        &self,
        resource: &str,
        query: &[QueryParam],
        body: Option<&RequestBody>,
    ) -> Result<CmciResponse> {
        self.record("PUT", resource, query, body)
    }

    async fn delete_expect_parsed_xml(&self, resource: &str, query: &[QueryParam]) -> Result<CmciResponse> {
        self.record("DELETE", resource, query, None)
    }
}
