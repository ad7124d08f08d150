//! Chat Widget
//!
//! A modal chat widget: an entry trigger opens a panel, typed text is relayed
//! to a chat endpoint and the reply is appended to a scrolling log.
//!
//! # Architecture
//!
//! - **Widget**: [`widget::ChatWidget`] wires Open, Close and Send to a
//!   [`widget::ChatView`] and a [`transport::ChatTransport`]
//! - **Transport**: reqwest-backed `POST /chat` with a single delivery-failure
//!   category
//! - **UI**: Leptos SSR markup for the page elements the widget drives
//! - **Hosts**: a terminal REPL and an axum preview server
//!
//! # Modules
//!
//! - [`widget`]: controller, view seam and transcript
//! - [`transport`]: chat endpoint client
//! - [`ui`]: widget markup
//! - [`config`]: layered configuration
//! - [`server`]: preview host
//! - [`terminal`]: terminal host

pub mod config;
pub mod server;
pub mod terminal;
pub mod transport;
pub mod ui;
pub mod widget;
