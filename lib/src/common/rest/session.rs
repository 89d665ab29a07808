//! # CMCI HTTP Session
//!
//! File: lib/src/common/rest/session.rs
//!
//! ## Overview
//!
//! [`Session`] owns a configured `reqwest::Client` and the base URL of one
//! CMCI endpoint. Each transport call:
//!
//! 1. joins the base URL, resource path and extra query parameters,
//! 2. attaches basic credentials and, when present, the XML body,
//! 3. sends exactly one request,
//! 4. parses the body as a CMCI envelope and rejects anything whose
//!    `api_response1` is not `OK`.
//!
//! No retries are attempted and no timeout is imposed beyond reqwest's own
//! defaults.
//!
use super::{append_query, CmciTransport, QueryParam};
use crate::common::xml::{CmciResponse, RequestBody};
use crate::core::error::{CmciError, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, instrument, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Protocol {
    Http,
    #[default]
    Https,
}

impl Protocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        }
    }
}

impl FromStr for Protocol {
    type Err = CmciError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(Protocol::Http),
            "https" => Ok(Protocol::Https),
            other => Err(CmciError::Session(format!(
                "unsupported protocol '{}', expected http or https",
                other
            ))),
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthType {
    #[default]
    Basic,
    None,
}

/// Connection settings for one CMCI endpoint.
#[derive(Clone)]
pub struct SessionConfig {
    pub hostname: String,
    pub port: Option<u16>,
    pub protocol: Protocol,
    pub user: Option<String>,
    pub password: Option<String>,
    pub reject_unauthorized: bool,
    pub auth_type: AuthType,
}

impl SessionConfig {
    pub fn new(hostname: &str) -> Self {
        SessionConfig {
            hostname: hostname.to_string(),
            port: None,
            protocol: Protocol::Https,
            user: None,
            password: None,
            reject_unauthorized: true,
            auth_type: AuthType::Basic,
        }
    }

    pub fn base_url(&self) -> String {
        match self.port {
            Some(port) => format!("{}://{}:{}", self.protocol, self.hostname, port),
            None => format!("{}://{}", self.protocol, self.hostname),
        }
    }
}

// Keeps the password out of debug logs.
impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("hostname", &self.hostname)
            .field("port", &self.port)
            .field("protocol", &self.protocol)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("reject_unauthorized", &self.reject_unauthorized)
            .field("auth_type", &self.auth_type)
            .finish()
    }
}

#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    base_url: String,
    http: reqwest::Client,
}

impl Session {
    pub fn new(config: SessionConfig) -> Result<Session> {
        if config.hostname.trim().is_empty() {
            return Err(CmciError::Session("hostname must not be blank".to_string()));
        }
        if config.auth_type == AuthType::Basic && config.user.is_none() {
            return Err(CmciError::Session(
                "basic authentication requires a user".to_string(),
            ));
        }
        if !config.reject_unauthorized {
            warn!(
                "Certificate verification disabled for {}",
                config.hostname
            );
        }
        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(!config.reject_unauthorized)
            .build()
            .map_err(CmciError::Transport)?;
        let base_url = config.base_url();
        debug!("Created CMCI session for {}", base_url);
        Ok(Session {
            config,
            base_url,
            http,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[instrument(skip(self, body), fields(base = %self.base_url))]
    async fn request(
        &self,
        method: Method,
        resource: &str,
        query: &[QueryParam],
        body: Option<&RequestBody>,
    ) -> Result<CmciResponse> {
        let url = format!("{}{}", self.base_url, append_query(resource, query));
        let mut builder = self.http.request(method.clone(), &url);
        if self.config.auth_type == AuthType::Basic {
            if let Some(user) = &self.config.user {
                builder = builder.basic_auth(user, self.config.password.as_ref());
            }
        }
        if let Some(body) = body {
            let xml = body.to_xml()?;
            debug!("Request body: {}", xml);
            builder = builder.header(CONTENT_TYPE, "application/xml").body(xml);
        }

        debug!("{} {}", method, url);
        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!("Received HTTP {} ({} bytes)", status, text.len());

        if !status.is_success() {
            // CMCI usually still sends an envelope with the real diagnostic.
            return Err(match CmciResponse::parse(&text) {
                Ok(envelope) => envelope.remote_error(),
                Err(_) => CmciError::HttpStatus {
                    status: status.as_u16(),
                    body: text.trim().to_string(),
                },
            });
        }

        CmciResponse::parse(&text)?.into_result()
    }
}

#[async_trait]
impl CmciTransport for Session {
    async fn get_expect_parsed_xml(
        &self,
        resource: &str,
        query: &[QueryParam],
    ) -> Result<CmciResponse> {
        self.request(Method::GET, resource, query, None).await
    }

    async fn post_expect_parsed_xml(
        &self,
        resource: &str,
        query: &[QueryParam],
        body: Option<&RequestBody>,
    ) -> Result<CmciResponse> {
        self.request(Method::POST, resource, query, body).await
    }

    async fn put_expect_parsed_xml(
        &self,
        resource: &str,
        query: &[QueryParam],
        body: Option<&RequestBody>,
    ) -> Result<CmciResponse> {
        self.request(Method::PUT, resource, query, body).await
    }

    async fn delete_expect_parsed_xml(
        &self,
        resource: &str,
        query: &[QueryParam],
    ) -> Result<CmciResponse> {
        self.request(Method::DELETE, resource, query, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_parsing() {
        assert_eq!("HTTP".parse::<Protocol>().unwrap(), Protocol::Http);
        assert_eq!(" https ".parse::<Protocol>().unwrap(), Protocol::Https);
        assert!("ftp".parse::<Protocol>().is_err());
    }

    #[test]
    fn test_base_url() {
        let mut config = SessionConfig::new("cics.example.com");
        assert_eq!(config.base_url(), "https://cics.example.com");
        config.port = Some(1490);
        config.protocol = Protocol::Http;
        assert_eq!(config.base_url(), "http://cics.example.com:1490");
    }

    #[test]
    fn test_debug_redacts_password() {
        let mut config = SessionConfig::new("h");
        config.password = Some("hunter2".into());
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_session_rejects_bad_config() {
        let mut config = SessionConfig::new("  ");
        config.user = Some("u".into());
        assert!(matches!(Session::new(config), Err(CmciError::Session(_))));

        let config = SessionConfig::new("host");
        assert!(matches!(Session::new(config), Err(CmciError::Session(_))));

        let mut config = SessionConfig::new("host");
        config.auth_type = AuthType::None;
        let session = Session::new(config).unwrap();
        assert_eq!(session.base_url(), "https://host");
    }
}
