//! Tests for the task tool handler

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tmcp_server::handlers::TaskToolHandler;
use tokio_util::sync::CancellationToken;

use crate::test_utils::mock_backends::{EchoBackend, HangingBackend, RecordingBackend};
use crate::test_utils::test_fixtures::{
    args, extract_text_content, flashlight_definition, query, search_definition, shared,
};

#[tokio::test]
async fn test_success_returns_backend_text_verbatim() {
    let backend = Arc::new(RecordingBackend::new("42"));
    let handler = TaskToolHandler::new(search_definition(), shared(&backend));

    let result = handler
        .handle(Some(query("weather")), CancellationToken::new())
        .await
        .expect("call should succeed");

    assert_eq!(result.is_error, Some(false));
    assert_eq!(extract_text_content(&result.content), "42");

    let calls = backend.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "Search");
    assert_eq!(calls[0].1, query("weather"));
}

#[tokio::test]
async fn test_missing_arguments_never_reach_backend() {
    let backend = Arc::new(RecordingBackend::new("42"));
    let handler = TaskToolHandler::new(search_definition(), shared(&backend));

    let result = handler
        .handle(None, CancellationToken::new())
        .await
        .expect("argument errors are results, not failures");

    assert_eq!(result.is_error, Some(true));
    assert_eq!(
        extract_text_content(&result.content),
        "Arguments must be provided"
    );
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn test_empty_arguments_are_forwarded() {
    let backend = Arc::new(RecordingBackend::new("done"));
    let handler = TaskToolHandler::new(flashlight_definition(), shared(&backend));

    let result = handler
        .handle(Some(args(json!({}))), CancellationToken::new())
        .await
        .expect("call should succeed");

    assert_eq!(extract_text_content(&result.content), "done");
    assert_eq!(backend.calls().len(), 1);
}

#[tokio::test]
async fn test_backend_failure_is_execution_error() {
    let backend = Arc::new(RecordingBackend::failing(500, "boom"));
    let handler = TaskToolHandler::new(search_definition(), shared(&backend));

    let error = handler
        .handle(Some(query("weather")), CancellationToken::new())
        .await
        .expect_err("call should fail");

    assert_eq!(error.code, rmcp::model::ErrorCode::INTERNAL_ERROR);
    assert!(error.message.contains("500"));
    assert!(error.message.contains("boom"));
}

#[tokio::test]
async fn test_cancellation_aborts_backend_call() {
    let backend = Arc::new(HangingBackend::default());
    let handler = TaskToolHandler::new(search_definition(), shared(&backend));
    let token = CancellationToken::new();

    let canceller = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        canceller.cancel();
    });

    let error = tokio::time::timeout(
        Duration::from_secs(5),
        handler.handle(Some(query("weather")), token),
    )
    .await
    .expect("cancellation should end the call")
    .expect_err("cancelled call is an error");

    assert!(error.message.contains("cancelled"));
    assert_eq!(backend.started(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_calls_do_not_cross_contaminate() {
    let backend = Arc::new(EchoBackend::default());
    let handler = Arc::new(TaskToolHandler::new(search_definition(), shared(&backend)));

    let calls = (0..16u64).map(|i| {
        let handler = Arc::clone(&handler);
        tokio::spawn(async move {
            let arguments = args(json!({ "q": format!("query-{i}"), "delay_ms": (16 - i) * 2 }));
            let result = handler
                .handle(Some(arguments.clone()), CancellationToken::new())
                .await
                .expect("call should succeed");
            (arguments, extract_text_content(&result.content))
        })
    });

    for call in calls.collect::<Vec<_>>() {
        let (arguments, text) = call.await.expect("task should not panic");
        let echoed: serde_json::Value = serde_json::from_str(&text).expect("echo is JSON");
        assert_eq!(echoed["task"], "Search");
        assert_eq!(echoed["arguments"], serde_json::Value::Object(arguments));
    }
    assert_eq!(backend.call_count(), 16);
}
