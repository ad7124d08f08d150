//! Widget markup.
//!
//! The ids in [`ids`] are the contract between the page and the widget's
//! event wiring; they must stay stable.

use leptos::prelude::*;

use crate::ui::components::{
    BotIcon, Button, ButtonSize, ButtonVariant, Input, ScrollArea, SendIcon, XIcon,
};
use crate::widget::{Message, Visibility};

/// Element ids of the widget's UI handles.
pub mod ids {
    /// Entry trigger that opens the modal.
    pub const ENTRY_TRIGGER: &str = "robot";
    /// Modal container.
    pub const MODAL: &str = "chatModal";
    /// Close trigger.
    pub const CLOSE_TRIGGER: &str = "closeChat";
    /// Scrollable message log.
    pub const LOG: &str = "chatBody";
    /// Text input.
    pub const INPUT: &str = "chatInput";
    /// Send trigger.
    pub const SEND_TRIGGER: &str = "sendBtn";
}

/// Log entries, one `div` per message tagged `user-msg` / `bot-msg`.
#[component]
pub fn ChatLog(
    /// Messages to prerender into the log.
    #[prop(default = Vec::new())]
    messages: Vec<Message>,
) -> impl IntoView {
    view! {
        <ScrollArea id=ids::LOG class="flex-1 p-4 space-y-2">
            {messages
                .into_iter()
                .map(|message| {
                    let class = message.sender().css_class();
                    view! { <div class=class>{message.text().to_string()}</div> }
                })
                .collect_view()}
        </ScrollArea>
    }
}

/// Floating entry trigger plus the modal chat panel, hidden initially.
#[component]
pub fn ChatWidgetMarkup(
    /// Title shown in the modal header.
    #[prop(default = "Chat")]
    title: &'static str,
    /// Chat endpoint URL, exposed to page scripts as `data-chat-endpoint`.
    #[prop(into)]
    endpoint: String,
    /// Messages to prerender into the log.
    #[prop(default = Vec::new())]
    messages: Vec<Message>,
) -> impl IntoView {
    let modal_style = format!("display: {}", Visibility::Hidden.css_display());

    view! {
        <Button
            id=ids::ENTRY_TRIGGER
            variant=ButtonVariant::Floating
            size=ButtonSize::IconLg
            aria_label="Open chat"
            class="fixed bottom-6 right-6 z-50"
        >
            <BotIcon class="h-7 w-7" />
        </Button>

        <div
            id=ids::MODAL
            class="chat-modal fixed bottom-24 right-6 z-50 w-80 h-[28rem] flex-col \
                   bg-panel border border-panelBorder rounded-2xl shadow-xl overflow-hidden"
            style=modal_style
            role="dialog"
            aria-label=title
            data-chat-endpoint=endpoint
        >
            <header class="flex items-center justify-between px-4 py-3 border-b border-panelBorder">
                <h2 class="font-semibold">{title}</h2>
                <Button
                    id=ids::CLOSE_TRIGGER
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Icon
                    aria_label="Close chat"
                >
                    <XIcon class="h-5 w-5" />
                </Button>
            </header>

            <ChatLog messages=messages />

            <div class="flex gap-2 p-3 border-t border-panelBorder">
                <Input id=ids::INPUT placeholder="Type a message..." />
                <Button
                    id=ids::SEND_TRIGGER
                    variant=ButtonVariant::Primary
                    size=ButtonSize::Icon
                    aria_label="Send message"
                    class="shrink-0"
                >
                    <SendIcon class="h-5 w-5" />
                </Button>
            </div>
        </div>
    }
}

/// Render the widget markup to an HTML fragment.
pub fn render_widget(title: &'static str, endpoint: &str, messages: Vec<Message>) -> String {
    view! {
        <ChatWidgetMarkup title=title endpoint=endpoint.to_string() messages=messages />
    }
    .to_html()
}
