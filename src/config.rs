//! Layered configuration: defaults, optional YAML file, environment, CLI.

use clap::Parser;
use config::{Config, ConfigError, File};
use serde::Deserialize;

/// Where the agent backend lives when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Base URL of the agent API
    #[arg(long, env = "MUSIC_STORE_API_URL")]
    pub api_url: Option<String>,

    /// Customer ID forwarded with every chat request
    #[arg(long, env = "MUSIC_STORE_CUSTOMER_ID")]
    pub customer_id: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ChatConfig {
    #[serde(default)]
    pub customer_id: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args).map_err(|e| ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder();

        // 1. Defaults
        builder = builder.set_default("api.base_url", DEFAULT_BASE_URL)?;

        // 2. Config file (explicit path, else ./config.yaml if present)
        if let Some(path) = &cli.config {
            builder = builder.add_source(File::with_name(path));
        } else if std::path::Path::new("config.yaml").exists() {
            builder = builder.add_source(File::with_name("config.yaml"));
        }

        // 3. CLI / environment overrides (clap reads the env vars)
        if let Some(url) = cli.api_url {
            builder = builder.set_override("api.base_url", url)?;
        }
        if let Some(customer_id) = cli.customer_id {
            builder = builder.set_override("chat.customer_id", customer_id)?;
        }

        builder.build()?.try_deserialize()
    }
}
