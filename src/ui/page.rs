//! Standalone page shell embedding the widget.

use crate::ui::widget::render_widget;
use crate::widget::Message;

/// Script that binds the widget's triggers in the browser.
pub const WIDGET_SCRIPT_PATH: &str = "/static/widget.js";

/// Generate the HTML shell around a rendered widget fragment.
fn html_shell(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <script defer src="{WIDGET_SCRIPT_PATH}"></script>
    <style>
        .user-msg {{ margin-left: auto; max-width: 80%; padding: .5rem .75rem; border-radius: .75rem; background: #2563eb; color: #fff; }}
        .bot-msg {{ margin-right: auto; max-width: 80%; padding: .5rem .75rem; border-radius: .75rem; background: #f1f5f9; color: #0f172a; }}
    </style>
</head>
<body class="min-h-screen antialiased">
    {content}
</body>
</html>"#
    )
}

/// Render a complete page hosting the widget.
pub fn render_page(title: &'static str, endpoint: &str, messages: Vec<Message>) -> String {
    html_shell(title, &render_widget(title, endpoint, messages))
}
