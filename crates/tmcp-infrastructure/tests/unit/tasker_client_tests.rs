//! Tasker Client Tests
//!
//! Exercises the HTTP contract of `/run_task` against a mock server.

use mockito::{Matcher, Server};
use serde_json::json;
use std::time::Duration;
use tmcp_domain::{Error, JsonObject, TaskBackend};
use tmcp_infrastructure::TaskerClient;
use tmcp_infrastructure::config::BackendConfig;

fn backend_config(server: &Server) -> BackendConfig {
    let host_with_port = server.host_with_port();
    let (host, port) = host_with_port
        .rsplit_once(':')
        .expect("mock server address has a port");
    BackendConfig::new(host, port.parse().expect("valid port"))
}

fn args(value: serde_json::Value) -> JsonObject {
    value.as_object().cloned().expect("object arguments")
}

#[tokio::test]
async fn test_run_task_returns_body_verbatim() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/run_task")
        .match_header("content-type", "application/json")
        .match_header("authorization", Matcher::Missing)
        .match_body(Matcher::Json(json!({
            "name": "MCP Flashlight",
            "arguments": { "state": "on" }
        })))
        .with_status(200)
        .with_body("42")
        .create_async()
        .await;

    let client = TaskerClient::new(backend_config(&server)).expect("client");
    let result = client
        .run_task("MCP Flashlight", &args(json!({ "state": "on" })))
        .await
        .expect("task should succeed");

    assert_eq!(result, "42");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_run_task_sends_bearer_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/run_task")
        .match_header("authorization", "Bearer s3cret")
        .with_status(200)
        .with_body("{\"ok\":true}")
        .create_async()
        .await;

    let config = backend_config(&server).with_api_key("s3cret");
    let client = TaskerClient::new(config).expect("client");
    let result = client
        .run_task("MCP Battery", &JsonObject::new())
        .await
        .expect("task should succeed");

    assert_eq!(result, "{\"ok\":true}");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_empty_api_key_sends_no_authorization() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/run_task")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body("")
        .create_async()
        .await;

    let config = backend_config(&server).with_api_key("");
    let client = TaskerClient::new(config).expect("client");
    let result = client.run_task("MCP Battery", &JsonObject::new()).await;

    assert_eq!(result.ok().as_deref(), Some(""));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_non_200_status_is_backend_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/run_task")
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let client = TaskerClient::new(backend_config(&server)).expect("client");
    let error = client
        .run_task("MCP Flashlight", &JsonObject::new())
        .await
        .expect_err("task should fail");

    match &error {
        Error::Backend { status, body } => {
            assert_eq!(*status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("Expected Backend error, got {other:?}"),
    }
    assert!(error.to_string().contains("500"));
    assert!(error.to_string().contains("boom"));
}

#[tokio::test]
async fn test_other_success_codes_are_failures() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/run_task")
        .with_status(204)
        .create_async()
        .await;

    let client = TaskerClient::new(backend_config(&server)).expect("client");
    let result = client.run_task("MCP Flashlight", &JsonObject::new()).await;

    assert!(matches!(result, Err(Error::Backend { status: 204, .. })));
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("addr").port();
    drop(listener);

    let client = TaskerClient::new(BackendConfig::new("127.0.0.1", port)).expect("client");
    let error = client
        .run_task("MCP Flashlight", &JsonObject::new())
        .await
        .expect_err("connection should fail");

    assert!(matches!(error, Error::Network { .. }));
    assert!(error.is_backend_failure());
}

#[tokio::test]
async fn test_silent_backend_is_timeout_error() {
    // Connections complete through the accept backlog but never get a response
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("addr").port();

    let config = BackendConfig::new("127.0.0.1", port).with_timeout(Duration::from_secs(1));
    let client = TaskerClient::new(config).expect("client");
    let error = client
        .run_task("MCP Flashlight", &JsonObject::new())
        .await
        .expect_err("request should time out");

    assert!(matches!(error, Error::Network { .. }));
    assert!(error.to_string().contains("timed out"));
    drop(listener);
}

#[tokio::test]
async fn test_sub_second_timeout_allows_fast_backend() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/run_task")
        .with_status(200)
        .with_body("42")
        .create_async()
        .await;

    let config = backend_config(&server).with_timeout(Duration::from_millis(500));
    let client = TaskerClient::new(config).expect("client");
    let result = client.run_task("MCP Flashlight", &JsonObject::new()).await;

    assert_eq!(result.expect("task should succeed"), "42");
    mock.assert_async().await;
}

#[test]
fn test_zero_timeout_is_rejected() {
    let config = BackendConfig::new("127.0.0.1", 1821).with_timeout(Duration::ZERO);

    match TaskerClient::new(config) {
        Err(Error::Config { message, .. }) => assert!(message.contains("timeout")),
        other => panic!("Expected Config error, got {other:?}"),
    }
}

#[test]
fn test_client_url_and_name() {
    let client = TaskerClient::new(BackendConfig::new("192.168.1.20", 1821)).expect("client");

    assert_eq!(client.url(), "http://192.168.1.20:1821/run_task");
    assert_eq!(client.backend_name(), "tasker");
}
