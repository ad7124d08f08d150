//! Page markup for the widget.
//!
//! This module renders, with Leptos SSR, the elements the widget expects the
//! host page to provide.
//!
//! # Structure
//!
//! - [`widget`]: the widget markup and its element ids
//! - [`page`]: a standalone page shell embedding the widget
//! - [`components`]: small styled building blocks

pub mod components;
pub mod page;
pub mod widget;

pub use page::{WIDGET_SCRIPT_PATH, render_page};
pub use widget::{ChatLog, ChatWidgetMarkup, ids, render_widget};
