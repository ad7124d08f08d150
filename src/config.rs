use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use config::{Config, Environment, File};
use serde::Deserialize;

/// Config file picked up from the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "chat-widget.yaml";

/// Prefix for `CHAT_WIDGET_SECTION__KEY` environment overrides.
pub const ENV_PREFIX: &str = "CHAT_WIDGET";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the chat backend
    #[arg(long, env = "CHAT_ENDPOINT", global = true)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "CHAT_TIMEOUT_SECS", global = true)]
    pub timeout_secs: Option<u64>,

    /// Host for the preview server
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Port for the preview server
    #[arg(long, env = "PORT", global = true)]
    pub port: Option<u16>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Chat from the terminal (default)
    Repl,
    /// Serve the widget page for preview
    Serve,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WidgetConfig {
    pub endpoint: EndpointConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EndpointConfig {
    pub base_url: String,
    pub chat_path: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory served under `/static` (holds `widget.js`).
    pub static_dir: PathBuf,
}

impl WidgetConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;
        Self::from_cli(&cli)
    }

    /// Resolve configuration for an already parsed command line.
    ///
    /// Priority: CLI flag > CLI env var > `CHAT_WIDGET_*` env > config file > defaults.
    pub fn from_cli(cli: &Cli) -> Result<Self, config::ConfigError> {
        let mut builder = Config::builder()
            .set_default("endpoint.base_url", "http://127.0.0.1:5000")?
            .set_default("endpoint.chat_path", "/chat")?
            .set_default("endpoint.timeout_secs", 30)?
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("server.static_dir", "static")?;

        match &cli.config {
            Some(path) => {
                builder = builder.add_source(File::from(path.as_path()).required(true));
            }
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                builder = builder.add_source(File::from(Path::new(DEFAULT_CONFIG_FILE)));
            }
            None => {}
        }

        // E.g. CHAT_WIDGET_ENDPOINT__BASE_URL=http://localhost:8000
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        if let Some(endpoint) = &cli.endpoint {
            builder = builder.set_override("endpoint.base_url", endpoint.as_str())?;
        }
        if let Some(timeout) = cli.timeout_secs {
            builder = builder.set_override("endpoint.timeout_secs", timeout)?;
        }
        if let Some(host) = &cli.host {
            builder = builder.set_override("server.host", host.as_str())?;
        }
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }

        let cfg = builder.build()?;
        cfg.try_deserialize()
    }
}
