//! Line-oriented terminal host for the widget.
//!
//! [`TerminalView`] renders the log to any writer, and [`run_repl`] feeds
//! stdin lines into the widget: `:open`, `:close` and `:quit` drive the
//! triggers, every other line is typed into the input and submitted with
//! Enter.

use std::io::Write;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tracing::debug;

use crate::transport::ChatTransport;
use crate::widget::{ChatView, ChatWidget, Message, SEND_KEY, Sender, Visibility};

/// Host command parsed from one line of terminal input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    Open,
    Close,
    Quit,
    Type(String),
}

impl HostCommand {
    #[must_use]
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            ":open" => Self::Open,
            ":close" => Self::Close,
            ":quit" | ":q" => Self::Quit,
            _ => Self::Type(line.to_string()),
        }
    }
}

/// [`ChatView`] that prints log entries as `you> ...` / `bot> ...` lines.
#[derive(Debug)]
pub struct TerminalView<W> {
    out: W,
    input: String,
}

impl<W: Write + Send + 'static> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            input: String::new(),
        }
    }

    /// Set the input buffer, as if the user typed `text`.
    pub fn type_text(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Writer the view prints to.
    pub fn writer(&self) -> &W {
        &self.out
    }

    fn emit(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{line}").and_then(|()| self.out.flush()) {
            debug!(name: "terminal.write.failed", error = %e, "Terminal write failed");
        }
    }
}

impl<W: Write + Send + 'static> ChatView for TerminalView<W> {
    fn set_modal_visibility(&mut self, visibility: Visibility) {
        match visibility {
            Visibility::Visible => self.emit("[chat opened]"),
            Visibility::Hidden => self.emit("[chat closed]"),
        }
    }

    fn focus_input(&mut self) {}

    fn input_value(&self) -> String {
        self.input.clone()
    }

    fn clear_input(&mut self) {
        self.input.clear();
    }

    fn append_entry(&mut self, message: &Message) {
        let prefix = match message.sender() {
            Sender::User => "you",
            Sender::Bot => "bot",
        };
        self.emit(&format!("{prefix}> {}", message.text()));
    }

    // The terminal always shows its newest line.
    fn scroll_log_to_end(&mut self) {}
}

/// Drive `widget` from `input` until `:quit` or end of input.
///
/// Sends are spawned so the prompt keeps accepting lines while replies are
/// outstanding. Outstanding replies are awaited before returning.
pub async fn run_repl<R, W, T>(
    widget: ChatWidget<TerminalView<W>, T>,
    input: R,
) -> std::io::Result<()>
where
    R: AsyncRead + Unpin,
    W: Write + Send + 'static,
    T: ChatTransport + 'static,
{
    let mut lines = BufReader::new(input).lines();
    let mut in_flight = Vec::new();

    while let Some(line) = lines.next_line().await? {
        match HostCommand::parse(&line) {
            HostCommand::Open => widget.open(),
            HostCommand::Close => widget.close(),
            HostCommand::Quit => break,
            HostCommand::Type(text) => {
                if !widget.visibility().is_visible() {
                    widget.with_view(|v| v.emit("(chat is closed, type :open)"));
                    continue;
                }
                widget.with_view(|v| v.type_text(text));
                if let Some(pending) = widget.key_down(SEND_KEY) {
                    in_flight.push(tokio::spawn(pending));
                }
            }
        }
    }

    for handle in in_flight {
        if let Err(e) = handle.await {
            debug!(name: "terminal.reply.join_failed", error = %e, "Reply task failed");
        }
    }
    Ok(())
}
