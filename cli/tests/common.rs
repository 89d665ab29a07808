//! # cicsrs CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Every command
//! built here runs with an isolated profile file (`CICSRS_CONFIG`) and with
//! the `CICS_*` environment variables cleared, so the developer's own
//! environment never leaks into a test.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::{Path, PathBuf};

pub const CONNECTION_ENV: &[&str] = &[
    "CICS_HOST",
    "CICS_PORT",
    "CICS_USER",
    "CICS_PASSWORD",
    "CICS_PROTOCOL",
    "CICS_REGION_NAME",
    "CICS_PLEX",
    "RUST_LOG",
];

pub const OK_BODY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<response xmlns="http://www.ibm.com/xmlns/prod/CICS/smw2int" version="3.0">
  <resultsummary api_response1="1024" api_response2="0" api_response1_alt="OK" api_response2_alt="" recordcount="1" displayed_recordcount="1"/>
  <records>
    <cicsprogram program="PGM1" status="ENABLED"/>
  </records>
</response>"#;

pub const INVALIDPARM_BODY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<response xmlns="http://www.ibm.com/xmlns/prod/CICS/smw2int" version="3.0">
  <resultsummary api_response1="1028" api_response2="1361" api_response1_alt="INVALIDPARM" api_response2_alt="" recordcount="0" displayed_recordcount="0"/>
</response>"#;

/// `cicsrs` binary with no profile file and a clean connection environment.
pub fn cicsrs_cmd() -> Command {
    let mut cmd = Command::cargo_bin("cicsrs").expect("Failed to find cicsrs binary for testing");
    for var in CONNECTION_ENV {
        cmd.env_remove(var);
    }
    cmd
}

/// `cicsrs` binary reading profiles from `config`.
pub fn cicsrs_with_config(config: &Path) -> Command {
    let mut cmd = cicsrs_cmd();
    cmd.env("CICSRS_CONFIG", config);
    cmd
}

/// Writes a single `test` profile pointing at a mock server.
pub fn write_profile(dir: &Path, server: &mockito::Server, region: Option<&str>) -> PathBuf {
    let addr = server.socket_address();
    let mut content = format!(
        "default_profile = \"test\"\n\n[profiles.test]\nhost = \"{}\"\nport = {}\nprotocol = \"http\"\nuser = \"IBMUSER\"\npassword = \"secret\"\n",
        addr.ip(),
        addr.port()
    );
    if let Some(region) = region {
        content.push_str(&format!("region_name = \"{}\"\n", region));
    }
    let path = dir.join("profiles.toml");
    std::fs::write(&path, content).expect("Failed to write profile file");
    path
}

/// An empty profile file, so no user or project configuration is picked up.
pub fn write_empty_config(dir: &Path) -> PathBuf {
    let path = dir.join("empty.toml");
    std::fs::write(&path, "").expect("Failed to write empty config");
    path
}
