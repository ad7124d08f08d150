mod common;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::http::StatusCode;
use chat_widget::transport::{ChatTransport, DeliveryError, HttpTransport};
use chat_widget::widget::{ChatWidget, FAILURE_REPLY, HeadlessView, Message, Visibility};
use common::{Recorder, chat_stub, closed_port_url, spawn_server};
use tokio::sync::oneshot;

async fn widget_against(
    status: StatusCode,
    body: &'static str,
) -> (ChatWidget<HeadlessView, HttpTransport>, Recorder) {
    let recorder = Recorder::default();
    let base = spawn_server(chat_stub(status, body, Duration::ZERO, recorder.clone())).await;
    let widget = ChatWidget::new(HeadlessView::new(), HttpTransport::new(&base).unwrap());
    (widget, recorder)
}

fn transcript(widget: &ChatWidget<HeadlessView, impl ChatTransport + 'static>) -> Vec<Message> {
    widget.with_view(|v| v.transcript().as_slice().to_vec())
}

#[tokio::test]
async fn test_hello_round_trip() {
    let (widget, recorder) = widget_against(StatusCode::OK, r#"{"reply":"hi there"}"#).await;

    widget.open();
    widget.with_view(|v| v.type_text("hello"));
    widget.send().await.unwrap();

    assert_eq!(
        transcript(&widget),
        vec![Message::user("hello"), Message::bot("hi there")]
    );
    assert_eq!(widget.with_view(|v| v.input().to_string()), "");
    assert_eq!(widget.visibility(), Visibility::Visible);
    assert_eq!(recorder.requests().len(), 1);
}

#[tokio::test]
async fn test_whitespace_only_sends_nothing() {
    let (widget, recorder) = widget_against(StatusCode::OK, r#"{"reply":"unused"}"#).await;

    widget.open();
    widget.with_view(|v| v.type_text("  "));
    assert!(widget.send().await.is_none());
    assert!(widget.key_down("Enter").is_none());

    assert!(transcript(&widget).is_empty());
    assert!(recorder.requests().is_empty());
}

#[tokio::test]
async fn test_trimmed_text_is_sent() {
    let (widget, recorder) = widget_against(StatusCode::OK, r#"{"reply":"ok"}"#).await;

    widget.with_view(|v| v.type_text("\t spaced out \n"));
    widget.send().await.unwrap();

    assert_eq!(transcript(&widget)[0], Message::user("spaced out"));
    let body: serde_json::Value = serde_json::from_str(&recorder.requests()[0].body).unwrap();
    assert_eq!(body["message"], "spaced out");
}

#[tokio::test]
async fn test_network_error_renders_apology() {
    let base = closed_port_url().await;
    let widget = ChatWidget::new(HeadlessView::new(), HttpTransport::new(&base).unwrap());

    widget.with_view(|v| v.type_text("ping"));
    widget.send().await.unwrap();

    assert_eq!(
        transcript(&widget),
        vec![Message::user("ping"), Message::bot(FAILURE_REPLY)]
    );
}

#[tokio::test]
async fn test_http_error_renders_apology() {
    let (widget, _) = widget_against(StatusCode::BAD_GATEWAY, "upstream down").await;

    widget.with_view(|v| v.type_text("ping"));
    widget.send().await.unwrap();

    assert_eq!(
        transcript(&widget),
        vec![Message::user("ping"), Message::bot(FAILURE_REPLY)]
    );
}

#[tokio::test]
async fn test_missing_reply_field_renders_apology() {
    let (widget, _) = widget_against(StatusCode::OK, r#"{"status":"ok"}"#).await;

    widget.with_view(|v| v.type_text("ping"));
    let reply = widget.send().await.unwrap();

    assert_eq!(reply.text(), FAILURE_REPLY);
    assert_eq!(transcript(&widget).len(), 2);
}

#[tokio::test]
async fn test_open_close_twice_leaves_hidden_and_transcript_intact() {
    let (widget, _) = widget_against(StatusCode::OK, r#"{"reply":"hi"}"#).await;
    widget.with_view(|v| v.type_text("hello"));
    widget.send().await.unwrap();
    let before = transcript(&widget);

    for _ in 0..2 {
        widget.open();
        widget.close();
    }

    assert_eq!(widget.visibility(), Visibility::Hidden);
    assert_eq!(widget.with_view(|v| v.visibility()), Visibility::Hidden);
    assert_eq!(transcript(&widget), before);
}

#[tokio::test]
async fn test_log_scrolled_to_end_after_every_entry() {
    let (widget, _) = widget_against(StatusCode::OK, r#"{"reply":"hi"}"#).await;
    widget.with_view(|v| v.type_text("hello"));
    widget.send().await.unwrap();

    widget.with_view(|v| {
        assert!(v.is_scrolled_to_end());
        assert_eq!(v.scroll_count(), 2);
    });
}

/// Transport whose replies are released by the test, one gate per message.
#[derive(Default)]
struct GatedTransport {
    gates: Mutex<HashMap<String, oneshot::Receiver<String>>>,
}

impl GatedTransport {
    fn gate(&self, message: &str) -> oneshot::Sender<String> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(message.to_string(), rx);
        tx
    }
}

#[async_trait]
impl ChatTransport for GatedTransport {
    async fn send(&self, message: &str) -> Result<String, DeliveryError> {
        let gate = self.gates.lock().unwrap().remove(message);
        match gate {
            Some(rx) => rx.await.map_err(|_| DeliveryError::Status { status: 599 }),
            None => Err(DeliveryError::Status { status: 404 }),
        }
    }
}

#[tokio::test]
async fn test_overlapping_sends_render_in_completion_order() {
    let transport = Arc::new(GatedTransport::default());
    let release_first = transport.gate("first");
    let release_second = transport.gate("second");
    let widget = ChatWidget::new(HeadlessView::new(), Arc::clone(&transport));

    widget.with_view(|v| v.type_text("first"));
    let first = tokio::spawn(widget.dispatch().unwrap());
    widget.with_view(|v| v.type_text("second"));
    let second = tokio::spawn(widget.dispatch().unwrap());

    release_second.send("reply to second".to_string()).unwrap();
    assert_eq!(second.await.unwrap(), Message::bot("reply to second"));
    release_first.send("reply to first".to_string()).unwrap();
    assert_eq!(first.await.unwrap(), Message::bot("reply to first"));

    assert_eq!(
        transcript(&widget),
        vec![
            Message::user("first"),
            Message::user("second"),
            Message::bot("reply to second"),
            Message::bot("reply to first"),
        ]
    );
}

#[tokio::test]
async fn test_dropped_request_still_renders_a_bot_message() {
    let transport = Arc::new(GatedTransport::default());
    let release = transport.gate("ping");
    let widget = ChatWidget::new(HeadlessView::new(), Arc::clone(&transport));

    widget.with_view(|v| v.type_text("ping"));
    let pending = tokio::spawn(widget.dispatch().unwrap());
    drop(release);

    assert_eq!(pending.await.unwrap(), Message::bot(FAILURE_REPLY));
    assert_eq!(transcript(&widget).len(), 2);
}
