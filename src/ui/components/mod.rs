//! Reusable UI components for the widget markup.
//!
//! - [`Button`]: Clickable button with variants, addressable by id
//! - [`Input`]: Text input field
//! - [`ScrollArea`]: Scrollable container
//! - [`icons`]: SVG icon components

mod button;
mod icons;
mod input;
mod scroll_area;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use icons::*;
pub use input::Input;
pub use scroll_area::ScrollArea;
