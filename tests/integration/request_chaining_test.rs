//! Request chaining integration tests
//!
//! These tests drive the pipeline from a YAML config through a scripted
//! transport, so no network is involved.

use courier::config::parse_config;
use courier::executor::{RequestError, Transport};
use courier::models::{MaterializedUseCase, ResponseRecord};
use courier::runner::{Pipeline, PipelineOptions, Reporter, RunMode, UseCaseError, UseCaseFailure};
use serde_json::json;
use std::cell::RefCell;

/// Answers each request with the next scripted response and records what
/// was sent.
struct ScriptedTransport {
    responses: RefCell<Vec<(u16, String)>>,
    sent: RefCell<Vec<MaterializedUseCase>>,
}

impl ScriptedTransport {
    fn new(responses: &[(u16, &str)]) -> Self {
        Self {
            responses: RefCell::new(
                responses
                    .iter()
                    .rev()
                    .map(|(status, body)| (*status, body.to_string()))
                    .collect(),
            ),
            sent: RefCell::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.sent.borrow().len()
    }
}

impl Transport for ScriptedTransport {
    fn send(&self, usecase: &MaterializedUseCase) -> Result<ResponseRecord, RequestError> {
        self.sent.borrow_mut().push(usecase.clone());
        let (status, body) = self
            .responses
            .borrow_mut()
            .pop()
            .ok_or_else(|| RequestError::NetworkError("no scripted response".to_string()))?;
        Ok(ResponseRecord::new(status).with_body(body))
    }
}

#[derive(Default)]
struct Events {
    outputs: Vec<(String, String)>,
    passed: Vec<String>,
    failed: Vec<String>,
}

impl Reporter for Events {
    fn output(&mut self, prefix: &str, body: &str) {
        self.outputs.push((prefix.to_string(), body.to_string()));
    }

    fn passed(&mut self, prefix: &str) {
        self.passed.push(prefix.to_string());
    }

    fn failed(&mut self, failure: &UseCaseFailure) {
        self.failed.push(failure.to_string());
    }
}

const LOGIN_FLOW: &str = r#"
vars:
  url: http://api.test
  token: ""
  userId: 0
  user: null
requests:
  - name: login
    method: POST
    endpoint: "{{ .url }}/login"
    headers:
      Content-Type: application/json
    body: '{"user": "ada", "password": "secret"}'
    wantStatus: 200
    wantResponse: "{token}"
    vars:
      token: token
  - name: me
    endpoint: "{{ .url }}/me"
    headers:
      Authorization: "Bearer {{ .token }}"
    wantStatus: 200
    vars:
      userId: data.users[0].id
      user: data.users[0]
  - name: "profile {{ .userId }}"
    method: put
    endpoint: "{{ .url }}/users/{{ .userId }}"
    body: '{"owner": {{ .user }}}'
    wantStatus: 204
"#;

#[test]
fn test_login_token_flows_into_later_requests() {
    let config = parse_config(LOGIN_FLOW).unwrap();
    let mut env = config.environment().unwrap();
    let transport = ScriptedTransport::new(&[
        (200, r#"{"token": "t-123"}"#),
        (200, r#"{"data": {"users": [{"id": 42, "name": "ada"}]}}"#),
        (204, ""),
    ]);
    let mut events = Events::default();

    let summary = Pipeline::new(&transport, PipelineOptions::default())
        .run(&config.requests, &mut env, &mut events)
        .unwrap();

    assert_eq!(summary.executed, 3);
    assert!(summary.is_success());

    let sent = transport.sent.borrow();
    assert_eq!(sent[0].endpoint, "http://api.test/login");
    assert_eq!(
        sent[0].headers.get("Content-Type").map(String::as_str),
        Some("application/json")
    );
    assert_eq!(
        sent[1].headers.get("Authorization").map(String::as_str),
        Some("Bearer t-123")
    );
    assert_eq!(sent[2].name, "profile 42");
    assert_eq!(sent[2].endpoint, "http://api.test/users/42");
    assert_eq!(sent[2].body, r#"{"owner": {"id":42,"name":"ada"}}"#);

    assert_eq!(env.get("token"), Some(&json!("t-123")));
    assert_eq!(env.get("userId"), Some(&json!(42)));
    assert_eq!(events.outputs.len(), 3);
    assert_eq!(events.outputs[2].0, "[profile 42] PUT http://api.test/users/42");
}

#[test]
fn test_login_flow_in_test_mode() {
    let config = parse_config(LOGIN_FLOW).unwrap();
    let mut env = config.environment().unwrap();
    let transport = ScriptedTransport::new(&[
        (200, r#"{"TOKEN": "t-123", "token": "t-123"}"#),
        (401, r#"{"error": "expired"}"#),
        (204, ""),
    ]);
    let mut events = Events::default();
    let options = PipelineOptions {
        mode: RunMode::Test,
        pretty_json: false,
    };

    let summary = Pipeline::new(&transport, options)
        .run(&config.requests, &mut env, &mut events)
        .unwrap();

    // The second request fails to bind, the third still runs. Bindings
    // apply in name order, so `user` is the one reported.
    assert_eq!(transport.calls(), 3);
    assert_eq!(summary.passed, 2);
    assert_eq!(summary.failed, 1);
    assert_eq!(events.passed.len(), 2);
    assert_eq!(
        events.failed,
        vec![
            "[me] GET http://api.test/me var 'user' from `data.users[0]`: \
             response does not contain `data`"
                .to_string()
        ]
    );
    // Neither var was bound, so the third request renders the initial values
    assert_eq!(transport.sent.borrow()[2].endpoint, "http://api.test/users/0");
}

#[test]
fn test_fail_fast_skips_remaining_requests() {
    let config = parse_config(
        r#"
vars:
  id: ""
requests:
  - endpoint: http://api.test/one
  - endpoint: http://api.test/two
    vars:
      id: data[5].id
  - endpoint: http://api.test/three
"#,
    )
    .unwrap();
    let mut env = config.environment().unwrap();
    let transport = ScriptedTransport::new(&[
        (200, "one"),
        (200, r#"{"data": [{"id": 1}, {"id": 2}]}"#),
        (200, "three"),
    ]);
    let mut events = Events::default();

    let failure = Pipeline::new(&transport, PipelineOptions::default())
        .run(&config.requests, &mut env, &mut events)
        .unwrap_err();

    assert_eq!(transport.calls(), 2);
    assert_eq!(failure.prefix, "GET http://api.test/two");
    assert!(matches!(failure.error, UseCaseError::Bind { .. }));
    assert_eq!(
        failure.to_string(),
        "GET http://api.test/two var 'id' from `data[5].id`: \
         index 5 requested is out of bounds, length of `data` is 2"
    );
    assert_eq!(events.outputs.len(), 1);
}

#[test]
fn test_undeclared_var_in_config_fails_at_bind() {
    let config = parse_config(
        r#"
vars:
  id: ""
requests:
  - endpoint: http://api.test/users
    vars:
      newVar: data[0].id
"#,
    )
    .unwrap();
    assert_eq!(config.lint().len(), 1);

    let mut env = config.environment().unwrap();
    let transport = ScriptedTransport::new(&[(200, r#"{"data": [{"id": 1}]}"#)]);
    let mut events = Events::default();

    let failure = Pipeline::new(&transport, PipelineOptions::default())
        .run(&config.requests, &mut env, &mut events)
        .unwrap_err();

    assert!(failure
        .to_string()
        .ends_with("var 'newVar' was not declared in the config"));
    assert!(!env.contains("newVar"));
}

#[test]
fn test_environment_reflects_partial_progress() {
    let config = parse_config(
        r#"
vars:
  first: ""
  second: ""
requests:
  - endpoint: http://api.test/a
    vars:
      first: value
  - endpoint: http://api.test/b
    vars:
      second: value
"#,
    )
    .unwrap();
    let mut env = config.environment().unwrap();
    let transport = ScriptedTransport::new(&[(200, r#"{"value": "a"}"#)]);
    let mut events = Events::default();

    let result = Pipeline::new(&transport, PipelineOptions::default()).run(
        &config.requests,
        &mut env,
        &mut events,
    );

    assert!(result.is_err());
    assert_eq!(env.get("first"), Some(&json!("a")));
    assert_eq!(env.get("second"), Some(&json!("")));
}
