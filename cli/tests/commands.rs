//! # cicsrs CLI Command Integration Tests
//!
//! File: cli/tests/commands.rs
//!
//! Runs the binary against a local mock CMCI endpoint and checks the request
//! it sends and what it prints.
//!
mod common;
use common::*;
use mockito::Matcher;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_discard_program() {
    let dir = tempdir().unwrap();
    let mut server = mockito::Server::new();
    let mock = server
        .mock(
            "DELETE",
            Matcher::Regex(r"^/CICSSystemManagement/CICSProgram/REGION1".into()),
        )
        .match_header("authorization", Matcher::Regex("^Basic ".into()))
        .with_status(200)
        .with_body(OK_BODY)
        .create();
    let config = write_profile(dir.path(), &server, Some("REGION1"));

    cicsrs_with_config(&config)
        .args(["discard", "program", "PGM1"])
        .assert()
        .success()
        .stdout("The program 'PGM1' was discarded successfully.\n");
    mock.assert();
}

#[test]
fn test_define_program_sends_create_body() {
    let dir = tempdir().unwrap();
    let mut server = mockito::Server::new();
    let mock = server
        .mock(
            "POST",
            Matcher::Regex(r"^/CICSSystemManagement/CICSDefinitionProgram/REGION1".into()),
        )
        .match_header("content-type", "application/xml")
        .match_body(Matcher::Regex(
            r#"<attributes name="PGM1" csdgroup="GRP1"/>"#.into(),
        ))
        .with_status(200)
        .with_body(OK_BODY)
        .create();
    let config = write_profile(dir.path(), &server, Some("REGION1"));

    cicsrs_with_config(&config)
        .args(["define", "program", "PGM1", "GRP1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The program 'PGM1' was defined successfully.",
        ));
    mock.assert();
}

#[test]
fn test_region_flag_overrides_profile() {
    let dir = tempdir().unwrap();
    let mut server = mockito::Server::new();
    let mock = server
        .mock(
            "PUT",
            Matcher::Regex(r"^/CICSSystemManagement/CICSURIMap/PLEX9/OTHERRGN".into()),
        )
        .match_body(Matcher::Regex(r#"ENABLESTATUS="ENABLED""#.into()))
        .with_status(200)
        .with_body(OK_BODY)
        .create();
    let config = write_profile(dir.path(), &server, Some("REGION1"));

    cicsrs_with_config(&config)
        .args([
            "enable",
            "urimap",
            "URI1",
            "--region-name",
            "OTHERRGN",
            "--cics-plex",
            "PLEX9",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("The URIMap 'URI1' was enabled successfully."));
    mock.assert();
}

#[test]
fn test_add_to_list() {
    let dir = tempdir().unwrap();
    let mut server = mockito::Server::new();
    let mock = server
        .mock(
            "PUT",
            Matcher::Regex(r"^/CICSSystemManagement/CICSCSDGroup/REGION1".into()),
        )
        .match_body(Matcher::Regex(r#"name="TO_CSDLIST" value="LIST1""#.into()))
        .with_status(200)
        .with_body(OK_BODY)
        .create();
    let config = write_profile(dir.path(), &server, Some("REGION1"));

    cicsrs_with_config(&config)
        .args(["add-to-list", "csdgroup", "GRP1", "LIST1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The CSD group 'GRP1' was added to CSD list 'LIST1' successfully.",
        ));
    mock.assert();
}

#[test]
fn test_get_resource_prints_records() {
    let dir = tempdir().unwrap();
    let mut server = mockito::Server::new();
    let mock = server
        .mock(
            "GET",
            Matcher::Regex(r"^/CICSSystemManagement/CICSProgram/REGION1".into()),
        )
        .with_status(200)
        .with_body(OK_BODY)
        .expect(2)
        .create();
    let config = write_profile(dir.path(), &server, Some("REGION1"));

    cicsrs_with_config(&config)
        .args(["get", "resource", "CICSProgram"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cicsprogram:"))
        .stdout(predicate::str::contains("PGM1"))
        .stdout(predicate::str::contains("1 of 1 record(s) displayed."));

    cicsrs_with_config(&config)
        .args(["--json", "get", "resource", "CICSProgram"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"api_response1\": 1024"))
        .stdout(predicate::str::contains("\"program\": \"PGM1\""));
    mock.assert();
}

#[test]
fn test_remote_failure_message() {
    let dir = tempdir().unwrap();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("DELETE", Matcher::Any)
        .with_status(200)
        .with_body(INVALIDPARM_BODY)
        .create();
    let config = write_profile(dir.path(), &server, Some("REGION1"));

    cicsrs_with_config(&config)
        .args(["delete", "urimap", "URI1", "GRP1"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Did not receive the expected response from CMCI REST API",
        ))
        .stderr(predicate::str::contains("INVALIDPARM"));
    mock.assert();
}

#[test]
fn test_missing_region_is_a_validation_error() {
    let dir = tempdir().unwrap();
    let mut server = mockito::Server::new();
    let mock = server.mock("DELETE", Matcher::Any).expect(0).create();
    let config = write_profile(dir.path(), &server, None);

    cicsrs_with_config(&config)
        .args(["discard", "transaction", "TRN1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Expect Error"))
        .stderr(predicate::str::contains("CICS Region name"));
    mock.assert();
}

#[test]
fn test_connection_from_environment() {
    let dir = tempdir().unwrap();
    let mut server = mockito::Server::new();
    let mock = server
        .mock(
            "PUT",
            Matcher::Regex(r"^/CICSSystemManagement/CICSProgram/ENVRGN".into()),
        )
        .match_body(Matcher::Regex(r#"<action name="NEWCOPY"/>"#.into()))
        .with_status(200)
        .with_body(OK_BODY)
        .create();
    let addr = server.socket_address();
    let config = write_empty_config(dir.path());

    cicsrs_with_config(&config)
        .env("CICS_HOST", addr.ip().to_string())
        .env("CICS_PORT", addr.port().to_string())
        .env("CICS_PROTOCOL", "http")
        .env("CICS_USER", "IBMUSER")
        .env("CICS_REGION_NAME", "ENVRGN")
        .args(["refresh", "program", "PGM1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The program 'PGM1' was refreshed successfully."));
    mock.assert();
}
