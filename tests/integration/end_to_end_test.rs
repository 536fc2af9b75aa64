//! End-to-end tests against a local mock HTTP server.
//!
//! Configs are written to disk, located, loaded and run through the real
//! reqwest transport.

use courier::config::{load_config, locate_config, DEFAULT_CONFIG_FILE};
use courier::executor::{ExecutionConfig, ReqwestTransport};
use courier::formatter::ConsoleReporter;
use courier::runner::{Pipeline, PipelineOptions, RunMode, UseCaseError};
use mockito::Matcher;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, yaml: &str) {
    fs::write(dir.path().join(DEFAULT_CONFIG_FILE), yaml).unwrap();
}

fn transport() -> ReqwestTransport {
    ReqwestTransport::new(&ExecutionConfig::with_timeout(10)).unwrap()
}

fn reporter() -> ConsoleReporter<Vec<u8>> {
    ConsoleReporter::new(Vec::new(), false)
}

#[test]
fn test_chained_requests_against_server() {
    super::init_test_env();
    let mut server = mockito::Server::new();

    let login = server
        .mock("POST", "/login")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"user": "ada"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"token": "abc", "user": {"id": 7}}"#)
        .expect(1)
        .create();

    let profile = server
        .mock("GET", "/users/7")
        .match_header("authorization", "Bearer abc")
        .with_status(200)
        .with_body(r#"{"name": "Ada"}"#)
        .expect(1)
        .create();

    let dir = TempDir::new().unwrap();
    write_config(
        &dir,
        &format!(
            r#"
vars:
  url: {}
  token: ""
  id: 0
requests:
  - name: login
    method: POST
    endpoint: "{{{{ .url }}}}/login"
    headers:
      Content-Type: application/json
    body: '{{"user": "ada"}}'
    vars:
      token: token
      id: user.id
  - name: profile
    endpoint: "{{{{ .url }}}}/users/{{{{ .id }}}}"
    headers:
      Authorization: "Bearer {{{{ .token }}}}"
"#,
            server.url()
        ),
    );

    let path = locate_config(None, dir.path()).unwrap();
    let config = load_config(&path).unwrap();
    let mut env = config.environment().unwrap();
    let transport = transport();
    let mut reporter = reporter();

    let summary = Pipeline::new(&transport, PipelineOptions::default())
        .run(&config.requests, &mut env, &mut reporter)
        .unwrap();

    login.assert();
    profile.assert();
    assert_eq!(summary.executed, 2);
    assert_eq!(env.get("token"), Some(&json!("abc")));
    assert_eq!(env.get("id"), Some(&json!(7)));

    let output = String::from_utf8(reporter.into_inner()).unwrap();
    assert!(output.contains(r#"{"name": "Ada"}"#));
}

#[test]
fn test_fail_fast_never_sends_later_requests() {
    let mut server = mockito::Server::new();

    let first = server
        .mock("GET", "/items")
        .with_status(200)
        .with_body("<html>not json</html>")
        .expect(1)
        .create();
    let second = server.mock("GET", "/items/1").expect(0).create();

    let dir = TempDir::new().unwrap();
    write_config(
        &dir,
        &format!(
            r#"
vars:
  url: {}
  id: ""
requests:
  - endpoint: "{{{{ .url }}}}/items"
    vars:
      id: data[0].id
  - endpoint: "{{{{ .url }}}}/items/1"
"#,
            server.url()
        ),
    );

    let config = load_config(&dir.path().join(DEFAULT_CONFIG_FILE)).unwrap();
    let mut env = config.environment().unwrap();
    let transport = transport();
    let mut reporter = reporter();

    let failure = Pipeline::new(&transport, PipelineOptions::default())
        .run(&config.requests, &mut env, &mut reporter)
        .unwrap_err();

    first.assert();
    second.assert();
    assert!(matches!(failure.error, UseCaseError::Decode { .. }));
    assert_eq!(failure.error.body(), Some("<html>not json</html>"));

    let output = String::from_utf8(reporter.into_inner()).unwrap();
    assert!(output.contains("<html>not json</html>"));
    assert!(output.contains("Error:"));
}

#[test]
fn test_test_mode_reports_each_use_case() {
    let mut server = mockito::Server::new();

    let health = server
        .mock("GET", "/health")
        .with_status(200)
        .with_body(r#"{"Status": "OK"}"#)
        .create();
    let missing = server.mock("GET", "/missing").with_status(404).create();
    let created = server
        .mock("POST", "/things")
        .with_status(201)
        .with_body(r#"{"id": 1}"#)
        .create();

    let dir = TempDir::new().unwrap();
    write_config(
        &dir,
        &format!(
            r#"
vars:
  url: {}
requests:
  - name: health
    endpoint: "{{{{ .url }}}}/health"
    wantStatus: 200
    wantResponse: '{{"status": "ok"}}'
  - name: missing
    endpoint: "{{{{ .url }}}}/missing"
    wantStatus: 200
  - name: create
    method: POST
    endpoint: "{{{{ .url }}}}/things"
    body: '{{}}'
    wantStatus: 201
    wantResponse: '{{"id"}}'
"#,
            server.url()
        ),
    );

    let config = load_config(&dir.path().join(DEFAULT_CONFIG_FILE)).unwrap();
    let mut env = config.environment().unwrap();
    let transport = transport();
    let mut reporter = reporter().with_mode(RunMode::Test);
    let options = PipelineOptions {
        mode: RunMode::Test,
        pretty_json: false,
    };

    let summary = Pipeline::new(&transport, options)
        .run(&config.requests, &mut env, &mut reporter)
        .unwrap();

    health.assert();
    missing.assert();
    created.assert();
    assert_eq!(summary.executed, 3);
    assert_eq!(summary.passed, 2);
    assert_eq!(summary.failed, 1);
    assert!(!summary.is_success());

    let output = String::from_utf8(reporter.into_inner()).unwrap();
    let base = server.url();
    assert!(output.contains(&format!("Success: [health] GET {}/health", base)));
    assert!(output.contains(&format!(
        "Error: [missing] GET {}/missing status mismatch: expected status 200, got 404",
        base
    )));
    assert!(output.contains(&format!("Success: [create] POST {}/things", base)));
}

#[test]
fn test_pretty_json_output() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/config")
        .with_status(200)
        .with_body(r#"{"a":1}"#)
        .create();

    let dir = TempDir::new().unwrap();
    write_config(
        &dir,
        &format!(
            "requests:\n  - endpoint: {}/config\n",
            server.url()
        ),
    );

    let config = load_config(&dir.path().join(DEFAULT_CONFIG_FILE)).unwrap();
    let mut env = config.environment().unwrap();
    let transport = transport();
    let mut reporter = reporter();
    let options = PipelineOptions {
        mode: RunMode::Normal,
        pretty_json: true,
    };

    Pipeline::new(&transport, options)
        .run(&config.requests, &mut env, &mut reporter)
        .unwrap();

    let output = String::from_utf8(reporter.into_inner()).unwrap();
    assert!(output.contains("{\n  \"a\": 1\n}"));
}
