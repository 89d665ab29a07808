//! Session round trips against a local mock CMCI endpoint.

use cicsrs_cmci::api::{self, ProgramParms, ResourceParms, UrimapParms};
use cicsrs_cmci::core::error::REMOTE_API_ERROR;
use cicsrs_cmci::{CmciError, CmciTransport, Protocol, RequestBody, Session, SessionConfig};
use mockito::{Matcher, Server};

const OK_BODY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<response xmlns="http://www.ibm.com/xmlns/prod/CICS/smw2int" version="3.0">
  <resultsummary api_response1="1024" api_response2="0" api_response1_alt="OK" api_response2_alt="" recordcount="2" displayed_recordcount="2"/>
  <records>
    <cicsprogram program="PGM1" status="ENABLED" newcopycnt="3"/>
    <cicsprogram program="PGM2" status="DISABLED" newcopycnt="0"/>
  </records>
</response>"#;

const INVALIDPARM_BODY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<response xmlns="http://www.ibm.com/xmlns/prod/CICS/smw2int" version="3.0">
  <resultsummary api_response1="1028" api_response2="1361" api_response1_alt="INVALIDPARM" api_response2_alt="" recordcount="0" displayed_recordcount="0"/>
</response>"#;

fn session_for(server: &Server) -> Session {
    let addr = server.socket_address();
    let mut config = SessionConfig::new(&addr.ip().to_string());
    config.port = Some(addr.port());
    config.protocol = Protocol::Http;
    config.user = Some("user".into());
    config.password = Some("pass".into());
    Session::new(config).unwrap()
}

fn program() -> ProgramParms {
    ProgramParms {
        name: Some("PGM1".into()),
        csd_group: Some("GRP1".into()),
        region_name: Some("REGION1".into()),
        cics_plex: None,
    }
}

#[tokio::test]
async fn test_get_parses_records() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock(
            "GET",
            Matcher::Regex(r"^/CICSSystemManagement/CICSProgram/REGION1".into()),
        )
        .with_status(200)
        .with_header("content-type", "application/xml")
        .with_body(OK_BODY)
        .create_async()
        .await;

    let session = session_for(&server);
    let parms = ResourceParms {
        name: Some("CICSProgram".into()),
        region_name: Some("REGION1".into()),
        ..Default::default()
    };
    let response = api::get_resource(&session, &parms).await.unwrap();

    mock.assert_async().await;
    assert!(response.is_ok());
    assert_eq!(response.result_summary.recordcount, 2);
    assert_eq!(response.records.len(), 2);
    assert_eq!(response.records[0].resource, "cicsprogram");
    assert_eq!(response.records[1].get("status"), Some("DISABLED"));
}

#[tokio::test]
async fn test_put_sends_credentials_and_xml_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock(
            "PUT",
            Matcher::Regex(r"^/CICSSystemManagement/CICSProgram/REGION1".into()),
        )
        // "user:pass"
        .match_header("authorization", "Basic dXNlcjpwYXNz")
        .match_header("content-type", "application/xml")
        .match_body(Matcher::Regex(r#"<action name="NEWCOPY"/>"#.into()))
        .with_status(200)
        .with_body(OK_BODY)
        .create_async()
        .await;

    let session = session_for(&server);
    api::refresh_program(&session, &program()).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_remote_failure_is_reported() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", Matcher::Any)
        .with_status(200)
        .with_body(INVALIDPARM_BODY)
        .create_async()
        .await;

    let session = session_for(&server);
    let err = api::delete_program(&session, &program()).await.unwrap_err();

    mock.assert_async().await;
    assert!(err.is_remote());
    let message = err.to_string();
    assert!(message.contains(REMOTE_API_ERROR));
    assert!(message.contains("INVALIDPARM"));
    assert!(message.contains("1361"));
}

#[tokio::test]
async fn test_error_status_with_envelope_uses_envelope() {
    let mut server = Server::new_async().await;
    server
        .mock("PUT", Matcher::Any)
        .with_status(400)
        .with_body(INVALIDPARM_BODY)
        .create_async()
        .await;

    let session = session_for(&server);
    let parms = UrimapParms {
        name: Some("URI1".into()),
        region_name: Some("REGION1".into()),
        ..Default::default()
    };
    let err = api::enable_urimap(&session, &parms).await.unwrap_err();
    assert!(matches!(err, CmciError::RemoteApi { code: 1028, .. }));
}

#[tokio::test]
async fn test_error_status_without_envelope() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", Matcher::Any)
        .with_status(500)
        .with_body("Internal Server Error")
        .create_async()
        .await;

    let session = session_for(&server);
    let err = session
        .get_expect_parsed_xml("/CICSSystemManagement/CICSRegion/REGION1", &[])
        .await
        .unwrap_err();
    match err {
        CmciError::HttpStatus { status, ref body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "Internal Server Error");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains(REMOTE_API_ERROR));
}

#[tokio::test]
async fn test_malformed_body_is_a_parse_error() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", Matcher::Any)
        .with_status(200)
        .with_body("<response><resultsummary api_response1=\"1024\"")
        .create_async()
        .await;

    let session = session_for(&server);
    let err = session
        .post_expect_parsed_xml(
            "/CICSSystemManagement/CICSDefinitionProgram/REGION1",
            &[],
            Some(&RequestBody::install()),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, CmciError::Parse(_)));
}

#[tokio::test]
async fn test_extra_query_parameters_are_appended() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Regex(r"^/CICSSystemManagement/CICSRegion/R1".into()))
        .match_query(Matcher::UrlEncoded("OVERRIDE".into(), "1".into()))
        .with_status(200)
        .with_body(OK_BODY)
        .create_async()
        .await;

    let session = session_for(&server);
    session
        .get_expect_parsed_xml(
            "/CICSSystemManagement/CICSRegion/R1",
            &[("OVERRIDE".to_string(), "1".to_string())],
        )
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unreachable_host_is_a_transport_error() {
    let mut config = SessionConfig::new("127.0.0.1");
    config.port = Some(1);
    config.protocol = Protocol::Http;
    config.user = Some("user".into());
    let session = Session::new(config).unwrap();

    let err = api::install_program(&session, &program()).await.unwrap_err();
    assert!(matches!(err, CmciError::Transport(_)));
    assert!(!err.is_remote());
}

#[tokio::test]
async fn test_validation_happens_before_any_request() {
    let server = Server::new_async().await;
    let session = session_for(&server);
    let parms = ProgramParms {
        region_name: None,
        ..program()
    };
    let err = api::discard_program(&session, &parms).await.unwrap_err();
    assert_eq!(err.field_label(), Some("CICS Region name"));
}

#[tokio::test]
async fn test_urimap_criteria_wire_form() {
    let mut server = Server::new_async().await;
    // The URL layer percent-encodes quotes, so discard arrives as NAME=%27URI1%27.
    let discard = server
        .mock(
            "DELETE",
            Matcher::Regex(r"^/CICSSystemManagement/CICSURIMap/REGION1\?CRITERIA=\(NAME=%27URI1%27\)$".into()),
        )
        .with_status(200)
        .with_body(OK_BODY)
        .create_async()
        .await;
    let enable = server
        .mock(
            "PUT",
            Matcher::Regex(r"^/CICSSystemManagement/CICSURIMap/REGION1\?CRITERIA=\(NAME=URI1\)$".into()),
        )
        .with_status(200)
        .with_body(OK_BODY)
        .create_async()
        .await;

    let session = session_for(&server);
    let parms = UrimapParms {
        name: Some("URI1".into()),
        region_name: Some("REGION1".into()),
        ..Default::default()
    };
    api::discard_urimap(&session, &parms).await.unwrap();
    api::enable_urimap(&session, &parms).await.unwrap();
    discard.assert_async().await;
    enable.assert_async().await;
}
