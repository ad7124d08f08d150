//! Preview host: serves a page embedding the widget markup.
//!
//! The host serves the page and the `widget.js` bindings under `/static`.
//! Chat replies come from the endpoint the page is configured with.

use std::sync::Arc;

use axum::{Router, extract::State, response::Html, routing::get};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;
use url::Url;

use crate::config::WidgetConfig;
use crate::transport::{DeliveryError, chat_endpoint_url};
use crate::ui::render_page;

/// Page title of the preview host.
pub const PAGE_TITLE: &str = "Chat";

/// State shared by the preview handlers.
#[derive(Debug, Clone)]
pub struct PreviewState {
    pub config: Arc<WidgetConfig>,
    endpoint: Url,
}

impl PreviewState {
    /// Resolve the chat endpoint the same way the HTTP transport does.
    pub fn new(config: Arc<WidgetConfig>) -> Result<Self, DeliveryError> {
        let endpoint = chat_endpoint_url(&config.endpoint.base_url, &config.endpoint.chat_path)?;
        Ok(Self { config, endpoint })
    }

    /// Absolute URL the widget posts to.
    #[must_use]
    pub fn chat_endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// Build the preview router.
pub fn router(state: PreviewState) -> Router {
    let assets = ServeDir::new(&state.config.server.static_dir);

    Router::new()
        .route("/", get(index_handler))
        .route("/healthz", get(|| async { "ok" }))
        .nest_service("/static", assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the preview server with the provided configuration.
pub async fn start_server(config: Arc<WidgetConfig>) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = PreviewState::new(config)?;

    info!(
        name: "widget.endpoint.configured",
        endpoint = %state.chat_endpoint(),
        "Widget chat endpoint configured"
    );

    let app = router(state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

/// GET / - the widget page.
async fn index_handler(State(state): State<PreviewState>) -> Html<String> {
    Html(render_page(PAGE_TITLE, state.chat_endpoint().as_str(), Vec::new()))
}
