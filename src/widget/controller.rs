//! Widget controller: Open, Close, Send.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::future::BoxFuture;
use tracing::{debug, info, warn};

use super::message::Message;
use super::view::{ChatView, Visibility};
use crate::transport::ChatTransport;

/// Bot text rendered for every delivery failure.
pub const FAILURE_REPLY: &str = "Sorry, chat failed. Try again.";

/// Key name that submits the input while it has focus.
pub const SEND_KEY: &str = "Enter";

/// In-flight request started by [`ChatWidget::dispatch`].
///
/// Resolves to the bot message that was rendered for it. The request is
/// issued when the future is first polled; hosts usually spawn it so the UI
/// stays interactive.
pub type PendingReply = BoxFuture<'static, Message>;

/// Chat widget bound to a view and a chat transport.
///
/// Cloning is cheap and every clone drives the same view, so a clone can be
/// moved into each event handler.
pub struct ChatWidget<V, T> {
    inner: Arc<WidgetInner<V, T>>,
}

struct WidgetInner<V, T> {
    state: Mutex<WidgetState<V>>,
    transport: T,
}

struct WidgetState<V> {
    view: V,
    visibility: Visibility,
}

impl<V: ChatView> WidgetState<V> {
    fn render(&mut self, message: &Message) {
        self.view.append_entry(message);
        self.view.scroll_log_to_end();
    }
}

impl<V, T> Clone for ChatWidget<V, T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V, T> std::fmt::Debug for ChatWidget<V, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatWidget").finish_non_exhaustive()
    }
}

impl<V, T> ChatWidget<V, T>
where
    V: ChatView,
    T: ChatTransport + 'static,
{
    /// Bind a widget to its view and transport.
    ///
    /// The modal is pushed to the hidden state so the view and the widget
    /// agree from the start.
    pub fn new(mut view: V, transport: T) -> Self {
        view.set_modal_visibility(Visibility::Hidden);
        Self {
            inner: Arc::new(WidgetInner {
                state: Mutex::new(WidgetState {
                    view,
                    visibility: Visibility::Hidden,
                }),
                transport,
            }),
        }
    }

    /// Entry trigger: show the modal and focus the input.
    pub fn open(&self) {
        let mut state = self.state();
        state.visibility = Visibility::Visible;
        state.view.set_modal_visibility(Visibility::Visible);
        state.view.focus_input();
        debug!(name: "widget.opened", "Chat modal opened");
    }

    /// Close trigger: hide the modal. Transcript and input are kept.
    pub fn close(&self) {
        let mut state = self.state();
        state.visibility = Visibility::Hidden;
        state.view.set_modal_visibility(Visibility::Hidden);
        debug!(name: "widget.closed", "Chat modal closed");
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.state().visibility
    }

    /// Key pressed while the input has focus. Only [`SEND_KEY`] sends.
    pub fn key_down(&self, key: &str) -> Option<PendingReply> {
        if key == SEND_KEY {
            self.dispatch()
        } else {
            None
        }
    }

    /// Send trigger.
    ///
    /// Trims the input; if nothing is left this is a no-op and returns
    /// `None`. Otherwise renders the user message, clears the input and
    /// returns the pending request for the trimmed text.
    pub fn dispatch(&self) -> Option<PendingReply> {
        let text = {
            let mut state = self.state();
            let raw = state.view.input_value();
            let text = raw.trim();
            if text.is_empty() {
                debug!(name: "widget.send.skipped", "Ignoring empty input");
                return None;
            }
            let message = Message::user(text);
            state.render(&message);
            state.view.clear_input();
            text.to_owned()
        };

        info!(
            name: "widget.send.dispatched",
            chars = text.chars().count(),
            "Chat message dispatched"
        );

        let widget = self.clone();
        Some(Box::pin(async move { widget.deliver(text).await }))
    }

    /// Dispatch and wait for the reply in one step.
    ///
    /// Returns the rendered bot message, or `None` when the input was empty.
    pub async fn send(&self) -> Option<Message> {
        match self.dispatch() {
            Some(pending) => Some(pending.await),
            None => None,
        }
    }

    /// Run `f` against the view, e.g. to type into the input or read the log.
    pub fn with_view<R>(&self, f: impl FnOnce(&mut V) -> R) -> R {
        f(&mut self.state().view)
    }

    async fn deliver(&self, text: String) -> Message {
        let reply = match self.inner.transport.send(&text).await {
            Ok(reply) => {
                info!(
                    name: "widget.reply.rendered",
                    chars = reply.chars().count(),
                    "Chat reply received"
                );
                Message::bot(reply)
            }
            Err(e) => {
                warn!(name: "widget.reply.failed", error = %e, "Chat delivery failed");
                Message::bot(FAILURE_REPLY)
            }
        };

        self.state().render(&reply);
        reply
    }

    fn state(&self) -> MutexGuard<'_, WidgetState<V>> {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
