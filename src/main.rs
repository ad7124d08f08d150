//! Chat widget host.
//!
//! `chat-widget repl` chats from the terminal; `chat-widget serve` serves the
//! widget page for preview.

use mimalloc::MiMalloc;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::sync::Arc;

use clap::Parser;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use chat_widget::config::{Cli, Command, WidgetConfig};
use chat_widget::server::start_server;
use chat_widget::terminal::{TerminalView, run_repl};
use chat_widget::transport::HttpTransport;
use chat_widget::widget::ChatWidget;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present) before clap reads env-backed flags
    let _ = dotenv();

    // Initialize tracing (M-LOG-STRUCTURED); logs go to stderr so the REPL stays readable
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = Arc::new(WidgetConfig::from_cli(&cli)?);

    match cli.command.unwrap_or(Command::Repl) {
        Command::Serve => start_server(config).await,
        Command::Repl => {
            let transport = HttpTransport::from_config(&config.endpoint)?;
            info!(
                name: "widget.endpoint.configured",
                endpoint = %transport.endpoint(),
                "Widget chat endpoint configured"
            );

            let widget = ChatWidget::new(TerminalView::new(std::io::stdout()), transport);
            widget.open();
            run_repl(widget, tokio::io::stdin()).await?;
            Ok(())
        }
    }
}
