//! The UI handles the widget drives.
//!
//! A [`ChatView`] stands in for the page elements the widget is wired to:
//! entry trigger, modal container, close trigger, message log, text input and
//! send trigger. The triggers are inputs *to* the widget (they call
//! [`ChatWidget`](super::ChatWidget) methods); the remaining handles are
//! mutated through this trait.

use super::message::{Message, Transcript};

/// Modal visibility. The widget starts [`Visibility::Hidden`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

impl Visibility {
    #[must_use]
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }

    /// CSS `display` value the modal container takes in this state.
    #[must_use]
    pub fn css_display(self) -> &'static str {
        match self {
            Self::Hidden => "none",
            Self::Visible => "flex",
        }
    }
}

/// Surface the widget renders into.
///
/// Implementations assume the underlying elements exist; they are supplied
/// by the host and never created or validated by the widget.
pub trait ChatView: Send + 'static {
    /// Apply the modal container's display state.
    fn set_modal_visibility(&mut self, visibility: Visibility);

    /// Move input focus into the text field.
    fn focus_input(&mut self);

    /// Current raw value of the text field.
    fn input_value(&self) -> String;

    /// Empty the text field.
    fn clear_input(&mut self);

    /// Append a log entry tagged with the message's sender.
    fn append_entry(&mut self, message: &Message);

    /// Set the log's scroll position to its maximum.
    fn scroll_log_to_end(&mut self);
}

/// In-memory view that records everything the widget does to it.
///
/// Used by hosts that have no real UI and by the test suite.
#[derive(Debug, Clone, Default)]
pub struct HeadlessView {
    visibility: Visibility,
    input: String,
    focused: bool,
    transcript: Transcript,
    scrolled_to_end: bool,
    scroll_count: usize,
}

impl HeadlessView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the text field's value, as if the user typed it.
    pub fn type_text(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Whether the text field has focus.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    #[must_use]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// True when the log was scrolled to the end after the last append.
    #[must_use]
    pub fn is_scrolled_to_end(&self) -> bool {
        self.scrolled_to_end
    }

    /// Number of scroll-to-end requests received.
    #[must_use]
    pub fn scroll_count(&self) -> usize {
        self.scroll_count
    }
}

impl ChatView for HeadlessView {
    fn set_modal_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    fn focus_input(&mut self) {
        self.focused = true;
    }

    fn input_value(&self) -> String {
        self.input.clone()
    }

    fn clear_input(&mut self) {
        self.input.clear();
    }

    fn append_entry(&mut self, message: &Message) {
        self.transcript.push(message.clone());
        self.scrolled_to_end = false;
    }

    fn scroll_log_to_end(&mut self) {
        self.scrolled_to_end = true;
        self.scroll_count += 1;
    }
}
