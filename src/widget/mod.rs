//! The chat widget component.
//!
//! # Structure
//!
//! - [`message`]: [`Message`], [`Sender`] and the rendered [`Transcript`]
//! - [`view`]: the [`ChatView`] seam over the page elements
//! - [`controller`]: [`ChatWidget`], which wires user actions to the view and
//!   the chat transport
//!
//! # Example
//!
//! ```rust,no_run
//! use chat_widget::transport::HttpTransport;
//! use chat_widget::widget::{ChatWidget, HeadlessView};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = HttpTransport::new("http://127.0.0.1:5000")?;
//! let widget = ChatWidget::new(HeadlessView::new(), transport);
//!
//! widget.open();
//! widget.with_view(|view| view.type_text("hello"));
//! let reply = widget.send().await;
//! # Ok(())
//! # }
//! ```

pub mod controller;
pub mod message;
pub mod view;

pub use controller::{ChatWidget, FAILURE_REPLY, PendingReply, SEND_KEY};
pub use message::{Message, Sender, Transcript};
pub use view::{ChatView, HeadlessView, Visibility};
