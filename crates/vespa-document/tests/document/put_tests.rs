use super::test_helpers::{
    StubDocumentApi, captured_console, console_output, find_available_port, write_document,
};
use axum::http::{Method, StatusCode};
use serde_json::json;
use std::io::{self, Write};
use std::path::Path;
use vespa_document::http::document::client::put;
use vespa_document::{Console, DocumentError, Outcome, Target};

#[tokio::test]
async fn test_put_success_sends_one_post_with_file_body() {
    let api = StubDocumentApi::start(StatusCode::OK, json!({"id": "id:ns:type::id1"}).to_string())
        .await;
    let document = write_document(r#"{"fields":{"a":1}}"#);
    let client = reqwest::Client::new();
    let mut console = captured_console();

    let outcome = put(
        &client,
        &api.target(),
        "ns/type/id1",
        document.path(),
        &mut console,
    )
    .await
    .unwrap();

    assert_eq!(outcome, Outcome::Success);
    let (out, err) = console_output(console);
    assert!(out.contains("Success"), "stdout was: {out}");
    assert!(out.contains("ns/type/id1"));
    assert!(err.is_empty(), "unexpected stderr: {err}");

    let requests = api.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.path, "/document/v1/ns/type/id1");
    assert_eq!(request.content_type.as_deref(), Some("application/json"));
    assert_eq!(request.body, br#"{"fields":{"a":1}}"#);
}

#[tokio::test]
async fn test_put_streams_large_body_byte_for_byte() {
    let api = StubDocumentApi::start(StatusCode::OK, "{}").await;
    let text = "x".repeat(256 * 1024);
    let content = format!("{{\"fields\":{{\"text\":\"{text}\"}}}}\n");
    let document = write_document(&content);
    let mut console = captured_console();

    let outcome = put(
        &reqwest::Client::new(),
        &api.target(),
        "ns/type/big",
        document.path(),
        &mut console,
    )
    .await
    .unwrap();

    assert_eq!(outcome, Outcome::Success);
    let requests = api.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].body, content.as_bytes());
}

#[tokio::test]
async fn test_put_client_error_prints_invalid_document_and_body() {
    let api = StubDocumentApi::start(StatusCode::BAD_REQUEST, r#"{"message":"bad field"}"#).await;
    let document = write_document(r#"{"fields":{"a":1}}"#);
    let mut console = captured_console();

    let outcome = put(
        &reqwest::Client::new(),
        &api.target(),
        "ns/type/id1",
        document.path(),
        &mut console,
    )
    .await
    .unwrap();

    assert_eq!(outcome, Outcome::ClientRejected);
    let (out, err) = console_output(console);
    assert!(out.is_empty(), "unexpected stdout: {out}");
    assert!(err.contains("Invalid document (400 Bad Request):"), "stderr was: {err}");
    assert!(err.contains(r#"{"message":"bad field"}"#));
    assert_eq!(api.requests().len(), 1);
}

#[tokio::test]
async fn test_put_not_found_includes_status_line() {
    let api = StubDocumentApi::start(StatusCode::NOT_FOUND, "no such document type").await;
    let document = write_document("{}");
    let mut console = captured_console();

    let outcome = put(
        &reqwest::Client::new(),
        &api.target(),
        "ns/unknown/id1",
        document.path(),
        &mut console,
    )
    .await
    .unwrap();

    assert_eq!(outcome, Outcome::ClientRejected);
    let (_, err) = console_output(console);
    assert!(err.contains("404 Not Found"), "stderr was: {err}");
    assert!(err.ends_with("no such document type\n"));
}

#[tokio::test]
async fn test_put_server_error_reports_host_and_status() {
    for status in [
        StatusCode::INTERNAL_SERVER_ERROR,
        StatusCode::SERVICE_UNAVAILABLE,
    ] {
        let api = StubDocumentApi::start(status, r#"{"message":"overloaded"}"#).await;
        let document = write_document(r#"{"fields":{"a":1}}"#);
        let mut console = captured_console();

        let outcome = put(
            &reqwest::Client::new(),
            &api.target(),
            "ns/type/id1",
            document.path(),
            &mut console,
        )
        .await
        .unwrap();

        assert_eq!(outcome, Outcome::ServerOrOther);
        let (out, err) = console_output(console);
        assert!(out.is_empty());
        let expected = format!(
            "Error: Error from container (document api) at 127.0.0.1:{} ({status}):",
            api.port
        );
        assert!(err.contains(&expected), "stderr was: {err}");
        assert!(err.contains(r#"{"message":"overloaded"}"#));
    }
}

#[tokio::test]
async fn test_put_non_200_success_status_is_not_success() {
    let api = StubDocumentApi::start(StatusCode::CREATED, "").await;
    let document = write_document("{}");
    let mut console = captured_console();

    let outcome = put(
        &reqwest::Client::new(),
        &api.target(),
        "ns/type/id1",
        document.path(),
        &mut console,
    )
    .await
    .unwrap();

    assert_eq!(outcome, Outcome::ServerOrOther);
    let (_, err) = console_output(console);
    assert!(err.contains("201 Created"), "stderr was: {err}");
}

#[tokio::test]
async fn test_put_missing_file_makes_no_request() {
    let api = StubDocumentApi::start(StatusCode::OK, "{}").await;
    let mut console = captured_console();

    let result = put(
        &reqwest::Client::new(),
        &api.target(),
        "ns/type/id2",
        Path::new("missing.json"),
        &mut console,
    )
    .await;

    let error = result.expect_err("put of a missing file must fail");
    assert!(error.to_string().contains("missing.json"));
    assert!(error.detail().is_some());
    match error {
        DocumentError::FileOpen { path, .. } => assert_eq!(path, Path::new("missing.json")),
        other => panic!("Expected FileOpen error, got {other:?}"),
    }
    assert!(api.requests().is_empty());
}

#[tokio::test]
async fn test_put_connection_refused_is_reported_by_helper() {
    let port = find_available_port();
    let target = Target::parse(&format!("http://127.0.0.1:{port}")).unwrap();
    let document = write_document("{}");
    let mut console = captured_console();

    let outcome = put(
        &reqwest::Client::new(),
        &target,
        "ns/type/id1",
        document.path(),
        &mut console,
    )
    .await
    .unwrap();

    assert_eq!(outcome, Outcome::ServerOrOther);
    let (out, err) = console_output(console);
    assert!(out.is_empty());
    assert!(
        err.starts_with(&format!(
            "Error: Could not connect to container (document api) at 127.0.0.1:{port}\n"
        )),
        "stderr was: {err}"
    );
    let detail = err.lines().nth(1).expect("a detail line follows the error");
    assert!(
        detail.to_lowercase().contains("refused"),
        "detail should name the cause: {detail}"
    );
}

#[tokio::test]
async fn test_put_rejects_dot_segment_id_without_request() {
    let api = StubDocumentApi::start(StatusCode::OK, "{}").await;
    let document = write_document("{}");

    for id in ["ns/type/../id", "ns/type/%2e%2e/id"] {
        let mut console = captured_console();
        let result = put(
            &reqwest::Client::new(),
            &api.target(),
            id,
            document.path(),
            &mut console,
        )
        .await;

        match result {
            Err(DocumentError::InvalidUrl { url, .. }) => {
                assert!(url.ends_with(&format!("/document/v1/{id}")), "{url}");
            }
            other => panic!("Expected InvalidUrl for '{id}', got {other:?}"),
        }
    }
    assert!(api.requests().is_empty());
}

struct ClosedStdout;

impl Write for ClosedStdout {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_put_success_with_closed_stdout_is_an_error() {
    let api = StubDocumentApi::start(StatusCode::OK, "{}").await;
    let document = write_document("{}");
    let mut console = Console::new(ClosedStdout, Vec::new());

    let result = put(
        &reqwest::Client::new(),
        &api.target(),
        "ns/type/id1",
        document.path(),
        &mut console,
    )
    .await;

    match result {
        Err(DocumentError::Output { source }) => {
            assert_eq!(source.kind(), io::ErrorKind::BrokenPipe);
        }
        other => panic!("Expected Output error, got {other:?}"),
    }
    assert_eq!(api.requests().len(), 1);
}
