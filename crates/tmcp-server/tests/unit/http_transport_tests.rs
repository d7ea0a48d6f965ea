//! HTTP/SSE transport tests
//!
//! Drive the Rocket application through its local client.

use std::sync::Arc;
use std::time::Duration;

use rocket::http::{ContentType, Status};
use rocket::local::asynchronous::{Client, LocalResponse};
use serde_json::{Value, json};
use tmcp_domain::ports::SharedTaskBackend;
use tmcp_server::session::SessionManager;
use tmcp_server::transport::http::process_session_message;
use tmcp_server::transport::{HttpTransport, HttpTransportConfig, McpRequest};
use tokio::io::AsyncReadExt;

use crate::test_utils::mock_backends::{HangingBackend, RecordingBackend};
use crate::test_utils::test_fixtures::{create_test_server, shared};

async fn client_for(backend: SharedTaskBackend) -> (Client, HttpTransport) {
    let server = Arc::new(create_test_server(backend));
    let transport = HttpTransport::new(HttpTransportConfig::localhost(0), server);
    let client = Client::tracked(transport.rocket())
        .await
        .expect("Failed to create test client");
    (client, transport)
}

async fn rpc(client: &Client, body: Value) -> Value {
    let response = client
        .post("/mcp")
        .header(ContentType::JSON)
        .body(body.to_string())
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let text = response.into_string().await.expect("Response body");
    serde_json::from_str(&text).expect("Parse response")
}

/// Read the event stream until `needle` shows up
async fn read_until(
    stream: &mut std::pin::Pin<Box<LocalResponse<'_>>>,
    buffer: &mut String,
    needle: &str,
) {
    let mut chunk = [0u8; 1024];
    while !buffer.contains(needle) {
        let read = tokio::time::timeout(Duration::from_secs(5), stream.read(&mut chunk))
            .await
            .expect("timed out waiting for event")
            .expect("stream read failed");
        assert!(read > 0, "event stream ended early");
        buffer.push_str(&String::from_utf8_lossy(&chunk[..read]));
    }
}

fn endpoint_from(buffer: &str) -> String {
    buffer
        .lines()
        .filter_map(|line| line.strip_prefix("data:"))
        .map(str::trim)
        .find(|data| data.starts_with("/message?session_id="))
        .expect("endpoint event")
        .to_string()
}

// =============================================================================
// INLINE JSON-RPC (/mcp)
// =============================================================================

#[tokio::test]
async fn test_initialize() {
    let (client, _transport) = client_for(Arc::new(RecordingBackend::new("ok"))).await;

    let response = rpc(
        &client,
        json!({ "jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {} }),
    )
    .await;

    assert_eq!(response["id"], 1);
    assert_eq!(response["result"]["serverInfo"]["name"], "Tasker MCP");
    assert!(response["result"]["capabilities"]["tools"].is_object());
}

#[tokio::test]
async fn test_ping() {
    let (client, _transport) = client_for(Arc::new(RecordingBackend::new("ok"))).await;

    let response = rpc(&client, json!({ "jsonrpc": "2.0", "id": "p", "method": "ping" })).await;

    assert_eq!(response, json!({ "jsonrpc": "2.0", "id": "p", "result": {} }));
}

#[tokio::test]
async fn test_tools_list() {
    let (client, _transport) = client_for(Arc::new(RecordingBackend::new("ok"))).await;

    let response = rpc(&client, json!({ "jsonrpc": "2.0", "id": 2, "method": "tools/list" })).await;

    let tools = response["result"]["tools"].as_array().expect("tools array");
    let names: Vec<&str> = tools.iter().filter_map(|t| t["name"].as_str()).collect();
    assert_eq!(
        names,
        vec!["tasker_search", "tasker_flashlight", "tasker_battery"]
    );
    assert_eq!(
        tools[0]["inputSchema"],
        json!({
            "type": "object",
            "properties": { "q": { "type": "string", "description": "query" } },
            "required": ["q"]
        })
    );
    assert_eq!(
        tools[1]["inputSchema"]["properties"]["state"]["enum"],
        json!(["on", "off"])
    );
}

#[tokio::test]
async fn test_tools_call_success() {
    let backend = Arc::new(RecordingBackend::new("42"));
    let (client, _transport) = client_for(shared(&backend)).await;

    let response = rpc(
        &client,
        json!({
            "jsonrpc": "2.0",
            "id": 3,
            "method": "tools/call",
            "params": { "name": "tasker_search", "arguments": { "q": "weather" } }
        }),
    )
    .await;

    assert_eq!(response["result"]["isError"], false);
    assert_eq!(response["result"]["content"][0]["type"], "text");
    assert_eq!(response["result"]["content"][0]["text"], "42");
    assert_eq!(backend.calls()[0].0, "Search");
}

#[tokio::test]
async fn test_tools_call_null_arguments() {
    let backend = Arc::new(RecordingBackend::new("42"));
    let (client, _transport) = client_for(shared(&backend)).await;

    let response = rpc(
        &client,
        json!({
            "jsonrpc": "2.0",
            "id": 4,
            "method": "tools/call",
            "params": { "name": "tasker_search", "arguments": null }
        }),
    )
    .await;

    assert_eq!(response["result"]["isError"], true);
    assert_eq!(
        response["result"]["content"][0]["text"],
        "Arguments must be provided"
    );
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn test_tools_call_backend_failure() {
    let (client, _transport) = client_for(Arc::new(RecordingBackend::failing(500, "boom"))).await;

    let response = rpc(
        &client,
        json!({
            "jsonrpc": "2.0",
            "id": 5,
            "method": "tools/call",
            "params": { "name": "tasker_search", "arguments": { "q": "x" } }
        }),
    )
    .await;

    assert_eq!(response["error"]["code"], -32603);
    let message = response["error"]["message"].as_str().expect("message");
    assert!(message.contains("500"));
    assert!(message.contains("boom"));
}

#[tokio::test]
async fn test_tools_call_unknown_tool() {
    let (client, _transport) = client_for(Arc::new(RecordingBackend::new("ok"))).await;

    let response = rpc(
        &client,
        json!({
            "jsonrpc": "2.0",
            "id": 6,
            "method": "tools/call",
            "params": { "name": "tasker_nope", "arguments": {} }
        }),
    )
    .await;

    assert_eq!(response["error"]["code"], -32602);
    assert_eq!(response["error"]["message"], "Unknown tool: tasker_nope");
}

#[tokio::test]
async fn test_tools_call_missing_name() {
    let (client, _transport) = client_for(Arc::new(RecordingBackend::new("ok"))).await;

    let response = rpc(
        &client,
        json!({ "jsonrpc": "2.0", "id": 7, "method": "tools/call", "params": {} }),
    )
    .await;

    assert_eq!(response["error"]["code"], -32602);
}

#[tokio::test]
async fn test_unknown_method() {
    let (client, _transport) = client_for(Arc::new(RecordingBackend::new("ok"))).await;

    let response = rpc(
        &client,
        json!({ "jsonrpc": "2.0", "id": 8, "method": "resources/list" }),
    )
    .await;

    assert_eq!(response["error"]["code"], -32601);
}

#[tokio::test]
async fn test_notification_is_accepted_without_body() {
    let (client, _transport) = client_for(Arc::new(RecordingBackend::new("ok"))).await;

    let response = client
        .post("/mcp")
        .header(ContentType::JSON)
        .body(json!({ "jsonrpc": "2.0", "method": "notifications/initialized" }).to_string())
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Accepted);
}

#[tokio::test]
async fn test_cors_headers() {
    let (client, _transport) = client_for(Arc::new(RecordingBackend::new("ok"))).await;

    let response = client
        .post("/mcp")
        .header(ContentType::JSON)
        .body(json!({ "jsonrpc": "2.0", "id": 1, "method": "ping" }).to_string())
        .dispatch()
        .await;

    assert_eq!(
        response.headers().get_one("Access-Control-Allow-Origin"),
        Some("*")
    );
}

// =============================================================================
// SSE SESSIONS (/sse + /message)
// =============================================================================

#[tokio::test]
async fn test_message_for_unknown_session() {
    let (client, _transport) = client_for(Arc::new(RecordingBackend::new("ok"))).await;

    let response = client
        .post("/message?session_id=does-not-exist")
        .header(ContentType::JSON)
        .body(json!({ "jsonrpc": "2.0", "id": 1, "method": "ping" }).to_string())
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::NotFound);
}

#[tokio::test]
async fn test_sse_session_round_trip() {
    let backend = Arc::new(RecordingBackend::new("42"));
    let (client, transport) = client_for(shared(&backend)).await;

    let mut stream = Box::pin(client.get("/sse").dispatch().await);
    let mut buffer = String::new();
    read_until(&mut stream, &mut buffer, "session_id=").await;
    read_until(&mut stream, &mut buffer, "\n\n").await;
    assert!(buffer.contains("endpoint"));
    let endpoint = endpoint_from(&buffer);
    assert_eq!(transport.sessions().session_count(), 1);

    let accepted = client
        .post(endpoint.as_str())
        .header(ContentType::JSON)
        .body(
            json!({
                "jsonrpc": "2.0",
                "id": 11,
                "method": "tools/call",
                "params": { "name": "tasker_search", "arguments": { "q": "weather" } }
            })
            .to_string(),
        )
        .dispatch()
        .await;
    assert_eq!(accepted.status(), Status::Accepted);

    read_until(&mut stream, &mut buffer, "\"id\":11").await;
    let message_line = buffer
        .lines()
        .filter_map(|line| line.strip_prefix("data:"))
        .map(str::trim)
        .find(|data| data.contains("\"id\":11"))
        .expect("response event");
    let response: Value = serde_json::from_str(message_line).expect("response JSON");
    assert_eq!(response["result"]["content"][0]["text"], "42");
    assert!(buffer.contains("event: message") || buffer.contains("event:message"));

    drop(stream);
    let sessions = transport.sessions();
    for _ in 0..50 {
        if sessions.session_count() == 0 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert_eq!(sessions.session_count(), 0);
}

#[tokio::test]
async fn test_sse_cancellation() {
    let backend = Arc::new(HangingBackend::default());
    let (client, _transport) = client_for(shared(&backend)).await;

    let mut stream = Box::pin(client.get("/sse").dispatch().await);
    let mut buffer = String::new();
    read_until(&mut stream, &mut buffer, "session_id=").await;
    read_until(&mut stream, &mut buffer, "\n\n").await;
    let endpoint = endpoint_from(&buffer);

    let call = client
        .post(endpoint.as_str())
        .header(ContentType::JSON)
        .body(
            json!({
                "jsonrpc": "2.0",
                "id": "slow",
                "method": "tools/call",
                "params": { "name": "tasker_search", "arguments": { "q": "x" } }
            })
            .to_string(),
        )
        .dispatch()
        .await;
    assert_eq!(call.status(), Status::Accepted);

    for _ in 0..100 {
        if backend.started() == 1 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert_eq!(backend.started(), 1);

    let cancel = client
        .post(endpoint.as_str())
        .header(ContentType::JSON)
        .body(
            json!({
                "jsonrpc": "2.0",
                "method": "notifications/cancelled",
                "params": { "requestId": "slow" }
            })
            .to_string(),
        )
        .dispatch()
        .await;
    assert_eq!(cancel.status(), Status::Accepted);

    read_until(&mut stream, &mut buffer, "\"id\":\"slow\"").await;
    assert!(buffer.contains("cancelled"));
    assert!(buffer.contains("-32603"));
}

fn session_request(body: Value) -> McpRequest {
    serde_json::from_value(body).expect("valid JSON-RPC message")
}

#[tokio::test]
async fn test_session_call_is_cancellable_before_it_runs() {
    let backend = Arc::new(HangingBackend::default());
    let server = Arc::new(create_test_server(shared(&backend)));
    let manager = SessionManager::new();
    let (session, mut rx) = manager.create();

    let call = process_session_message(
        Arc::clone(&server),
        Arc::clone(&session),
        session_request(json!({
            "jsonrpc": "2.0",
            "id": "early",
            "method": "tools/call",
            "params": { "name": "tasker_search", "arguments": { "q": "x" } }
        })),
    );

    // Nothing has been polled yet; the cancel must still find the call
    assert_eq!(session.in_flight_count(), 1);
    assert!(session.cancel_request(&json!("early")));

    tokio::time::timeout(Duration::from_secs(5), call)
        .await
        .expect("cancelled call should finish");

    let message = rx.recv().await.expect("response on the stream");
    let response: Value = serde_json::from_str(&message).expect("Parse response");
    assert_eq!(response["id"], "early");
    assert_eq!(response["error"]["code"], -32603);
    assert!(
        response["error"]["message"]
            .as_str()
            .is_some_and(|m| m.contains("cancelled"))
    );
    assert_eq!(session.in_flight_count(), 0);
}

#[tokio::test]
async fn test_session_rejects_duplicate_in_flight_id() {
    let backend = Arc::new(HangingBackend::default());
    let server = Arc::new(create_test_server(shared(&backend)));
    let manager = SessionManager::new();
    let (session, mut rx) = manager.create();
    let running = session.begin_request(&json!(7)).expect("new request id");

    process_session_message(
        Arc::clone(&server),
        Arc::clone(&session),
        session_request(json!({
            "jsonrpc": "2.0",
            "id": 7,
            "method": "tools/call",
            "params": { "name": "tasker_search", "arguments": { "q": "x" } }
        })),
    )
    .await;

    let message = rx.recv().await.expect("response on the stream");
    let response: Value = serde_json::from_str(&message).expect("Parse response");
    assert_eq!(response["id"], 7);
    assert_eq!(response["error"]["code"], -32600);
    assert_eq!(backend.started(), 0);

    assert!(session.cancel_request(&json!(7)));
    assert!(running.token().is_cancelled());
}
