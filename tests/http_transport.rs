mod common;

use std::time::Duration;

use axum::http::StatusCode;
use chat_widget::transport::{ChatTransport, DeliveryError, HttpTransport};
use common::{Recorder, chat_stub, closed_port_url, spawn_server};

#[tokio::test]
async fn test_posts_json_message_and_reads_reply() {
    let recorder = Recorder::default();
    let base = spawn_server(chat_stub(
        StatusCode::OK,
        r#"{"reply":"hi there"}"#,
        Duration::ZERO,
        recorder.clone(),
    ))
    .await;

    let transport = HttpTransport::new(&base).unwrap();
    let reply = transport.send("hello").await.unwrap();
    assert_eq!(reply, "hi there");

    let requests = recorder.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].content_type.as_deref(), Some("application/json"));
    let body: serde_json::Value = serde_json::from_str(&requests[0].body).unwrap();
    assert_eq!(body, serde_json::json!({ "message": "hello" }));
}

#[tokio::test]
async fn test_non_success_status_is_delivery_failure() {
    let base = spawn_server(chat_stub(
        StatusCode::INTERNAL_SERVER_ERROR,
        r#"{"reply":"should not be shown"}"#,
        Duration::ZERO,
        Recorder::default(),
    ))
    .await;

    let err = HttpTransport::new(&base).unwrap().send("ping").await.unwrap_err();
    assert!(matches!(err, DeliveryError::Status { status: 500 }));
}

#[tokio::test]
async fn test_body_without_reply_is_delivery_failure() {
    let base = spawn_server(chat_stub(
        StatusCode::OK,
        r#"{"message":"wrong field"}"#,
        Duration::ZERO,
        Recorder::default(),
    ))
    .await;

    let err = HttpTransport::new(&base).unwrap().send("ping").await.unwrap_err();
    assert!(matches!(err, DeliveryError::Decode(_)));
}

#[tokio::test]
async fn test_connection_refused_is_delivery_failure() {
    let base = closed_port_url().await;

    let err = HttpTransport::new(&base).unwrap().send("ping").await.unwrap_err();
    assert!(matches!(err, DeliveryError::Http(_)));
}

#[tokio::test]
async fn test_timeout_is_delivery_failure() {
    let base = spawn_server(chat_stub(
        StatusCode::OK,
        r#"{"reply":"too late"}"#,
        Duration::from_secs(2),
        Recorder::default(),
    ))
    .await;

    let http = reqwest::Client::builder()
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();
    let transport = HttpTransport::with_client(&base, "/chat", http).unwrap();

    match transport.send("ping").await {
        Err(DeliveryError::Http(e)) => assert!(e.is_timeout()),
        other => panic!("expected timeout, got {other:?}"),
    }
}
