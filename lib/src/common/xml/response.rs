//! # CMCI Response Envelopes
//!
//! File: lib/src/common/xml/response.rs
//!
//! ## Overview
//!
//! Every CMCI answer has the same outer shape:
//!
//! ```xml
//! <response xmlns="http://www.ibm.com/xmlns/prod/CICS/smw2int" version="3.0">
//!   <resultsummary api_response1="1024" api_response2="0" api_response1_alt="OK"
//!                  api_response2_alt="" recordcount="1" displayed_recordcount="1"/>
//!   <records>
//!     <cicsprogram program="PGM1" status="ENABLED"/>
//!   </records>
//! </response>
//! ```
//!
//! Records are resource-type specific, so each is kept as its element name
//! plus a flat attribute map. Failed actions may also carry
//! `<errors><feedback .../></errors>`, kept the same way.
//!
use crate::core::constants::ApiResponse;
use crate::core::error::{CmciError, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultSummary {
    pub api_response1: u32,
    pub api_response2: u32,
    pub api_response1_alt: String,
    pub api_response2_alt: String,
    pub recordcount: u32,
    pub displayed_recordcount: u32,
}

impl ResultSummary {
    pub fn response(&self) -> ApiResponse {
        ApiResponse::from_code(self.api_response1)
    }

    /// Symbolic name of `api_response1`, preferring the server's own spelling.
    pub fn response_name(&self) -> String {
        if self.api_response1_alt.trim().is_empty() {
            self.response().name()
        } else {
            self.api_response1_alt.clone()
        }
    }
}

/// One element from `<records>` or `<errors>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Record {
    pub resource: String,
    pub attributes: BTreeMap<String, String>,
}

impl Record {
    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.attributes.get(attribute).map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CmciResponse {
    pub result_summary: ResultSummary,
    pub records: Vec<Record>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<Record>,
}

impl CmciResponse {
    pub fn is_ok(&self) -> bool {
        self.result_summary.response() == ApiResponse::Ok
    }

    /// Passes successful responses through and turns anything else into
    /// `CmciError::RemoteApi`.
    pub fn into_result(self) -> Result<CmciResponse> {
        if self.is_ok() {
            Ok(self)
        } else {
            Err(self.remote_error())
        }
    }

    pub fn remote_error(&self) -> CmciError {
        let summary = &self.result_summary;
        let mut detail = format!(", api_response2={}", summary.api_response2);
        if !summary.api_response2_alt.trim().is_empty() {
            detail.push_str(&format!(" ({})", summary.api_response2_alt));
        }
        for feedback in &self.errors {
            let pairs: Vec<String> = feedback
                .attributes
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            detail.push_str(&format!("; {}: {}", feedback.resource, pairs.join(" ")));
        }
        CmciError::RemoteApi {
            code: summary.api_response1,
            name: summary.response_name(),
            detail,
        }
    }

    pub fn parse(xml: &str) -> Result<CmciResponse> {
        let mut reader = Reader::from_str(xml);
        let mut stack: Vec<String> = Vec::new();
        let mut seen_root = false;
        let mut summary: Option<ResultSummary> = None;
        let mut records = Vec::new();
        let mut errors = Vec::new();

        loop {
            let event = reader
                .read_event()
                .map_err(|e| CmciError::Parse(format!("at byte {}: {}", reader.buffer_position(), e)))?;
            match event {
                Event::Start(ref e) | Event::Empty(ref e) => {
                    let name = local_name(e)?;
                    match stack.len() {
                        0 if seen_root => {
                            return Err(CmciError::Parse(format!(
                                "unexpected second root element <{}>",
                                name
                            )))
                        }
                        0 if name != "response" => {
                            return Err(CmciError::Parse(format!(
                                "expected <response> root element, found <{}>",
                                name
                            )))
                        }
                        0 => seen_root = true,
                        1 if name == "resultsummary" => {
                            summary = Some(parse_summary(&attributes(e)?)?);
                        }
                        2 if stack[1] == "records" => records.push(Record {
                            resource: name.clone(),
                            attributes: attributes(e)?,
                        }),
                        2 if stack[1] == "errors" => errors.push(Record {
                            resource: name.clone(),
                            attributes: attributes(e)?,
                        }),
                        _ => {}
                    }
                    if matches!(event, Event::Start(_)) {
                        stack.push(name);
                    }
                }
                Event::End(_) => {
                    stack.pop();
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(CmciError::Parse(format!(
                "document ended inside <{}>",
                open
            )));
        }
        if !seen_root {
            return Err(CmciError::Parse("document has no <response> element".to_string()));
        }
        let result_summary = summary
            .ok_or_else(|| CmciError::Parse("<response> has no <resultsummary>".to_string()))?;

        Ok(CmciResponse {
            result_summary,
            records,
            errors,
        })
    }
}

fn local_name(e: &BytesStart<'_>) -> Result<String> {
    std::str::from_utf8(e.local_name().as_ref())
        .map(str::to_string)
        .map_err(|err| CmciError::Parse(err.to_string()))
}

fn attributes(e: &BytesStart<'_>) -> Result<BTreeMap<String, String>> {
    let mut map = BTreeMap::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|err| CmciError::Parse(err.to_string()))?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|err| CmciError::Parse(err.to_string()))?;
        if key == "xmlns" || key.starts_with("xmlns:") {
            continue;
        }
        let value = attr
            .unescape_value()
            .map_err(|err| CmciError::Parse(err.to_string()))?;
        map.insert(key.to_string(), value.into_owned());
    }
    Ok(map)
}

fn parse_summary(attrs: &BTreeMap<String, String>) -> Result<ResultSummary> {
    let number = |key: &str, required: bool| -> Result<u32> {
        match attrs.get(key) {
            Some(raw) => raw.trim().parse().map_err(|_| {
                CmciError::Parse(format!("resultsummary {}='{}' is not a number", key, raw))
            }),
            None if required => Err(CmciError::Parse(format!(
                "resultsummary is missing {}",
                key
            ))),
            None => Ok(0),
        }
    };
    let text = |key: &str| attrs.get(key).cloned().unwrap_or_default();

    Ok(ResultSummary {
        api_response1: number("api_response1", true)?,
        api_response2: number("api_response2", false)?,
        api_response1_alt: text("api_response1_alt"),
        api_response2_alt: text("api_response2_alt"),
        recordcount: number("recordcount", false)?,
        displayed_recordcount: number("displayed_recordcount", false)?,
    })
}
