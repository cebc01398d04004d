use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

use crate::utils::video_host::{DEFAULT_VIDEO_HOSTS, VideoHosts};

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_url")]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

fn default_database_url() -> String {
    "sqlite://match_store.db?mode=rwc".into()
}
fn default_max_connections() -> u32 {
    10
}
fn default_min_connections() -> u32 {
    1
}
fn default_connect_timeout_secs() -> u64 {
    8
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout_secs(),
            sqlx_logging: false,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::new(default_database_url())
    }
}

/// Match validation settings.
#[derive(Debug, Deserialize, Clone)]
pub struct MatchConfig {
    /// Hosts whose videos must carry uploader, upload date and title.
    #[serde(default = "default_video_hosts")]
    pub video_hosts: Vec<String>,
}

fn default_video_hosts() -> Vec<String> {
    DEFAULT_VIDEO_HOSTS.iter().map(|h| h.to_string()).collect()
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            video_hosts: default_video_hosts(),
        }
    }
}

impl MatchConfig {
    pub fn video_hosts(&self) -> VideoHosts {
        VideoHosts::new(&self.video_hosts)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    /// Default filter directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".into()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub matches: MatchConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("MATCH_STORE_CONFIG").unwrap_or_else(|_| "config/config".to_string());

        Self::from_builder(
            Config::builder().add_source(File::with_name(&config_path).required(false)),
        )
    }

    /// Layer defaults under `builder` and environment overrides on top of it.
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let s = builder
            // Override from environment (e.g., MATCH_STORE__DATABASE__URL)
            .add_source(
                Environment::with_prefix("MATCH_STORE")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("matches.video_hosts")
                    .try_parsing(true),
            )
            .set_default("database.url", default_database_url())?
            .set_default("log.level", default_log_level())?
            .build()?;

        s.try_deserialize()
    }
}
