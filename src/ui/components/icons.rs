//! Inline SVG icons used by the widget chrome.

use leptos::prelude::*;

/// Common icon size class.
const ICON_SIZE: &str = "h-4 w-4";

/// Shared 24x24 stroke SVG frame.
#[component]
fn IconSvg(class: &'static str, children: Children) -> impl IntoView {
    let classes = format!("{ICON_SIZE} {class}");

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=classes
        >
            {children()}
        </svg>
    }
}

/// Paper plane, on the send trigger.
#[component]
pub fn SendIcon(#[prop(default = "")] class: &'static str) -> impl IntoView {
    view! {
        <IconSvg class=class>
            <line x1="22" y1="2" x2="11" y2="13" />
            <polygon points="22 2 15 22 11 13 2 9 22 2" />
        </IconSvg>
    }
}

/// Cross, on the close trigger.
#[component]
pub fn XIcon(#[prop(default = "")] class: &'static str) -> impl IntoView {
    view! {
        <IconSvg class=class>
            <line x1="18" y1="6" x2="6" y2="18" />
            <line x1="6" y1="6" x2="18" y2="18" />
        </IconSvg>
    }
}

/// Robot head, on the entry trigger.
#[component]
pub fn BotIcon(#[prop(default = "")] class: &'static str) -> impl IntoView {
    view! {
        <IconSvg class=class>
            <rect x="3" y="11" width="18" height="10" rx="2" />
            <circle cx="12" cy="5" r="2" />
            <path d="M12 7v4" />
            <line x1="8" y1="16" x2="8" y2="16" />
            <line x1="16" y1="16" x2="16" y2="16" />
        </IconSvg>
    }
}
