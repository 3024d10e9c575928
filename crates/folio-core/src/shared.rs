//! Shared types used across all folio crates.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Page size requested from the search collaborator when none is configured.
pub const DEFAULT_HITS_PER_PAGE: u32 = 5;

const ENV_ALGOLIA_APP_ID: &str = "VITE_ALGOLIA_APP_ID";
const ENV_ALGOLIA_API_KEY: &str = "VITE_ALGOLIA_SEARCH_API_KEY";
const ENV_ALGOLIA_INDEX_NAME: &str = "VITE_ALGOLIA_INDEX_NAME";

/// Body of `POST /ask`. A missing or `null` question is treated as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: Option<String>,
}

impl AskRequest {
    pub fn question(&self) -> &str {
        self.question.as_deref().unwrap_or("")
    }
}

/// Body returned by `POST /ask`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub answer: String,
}

/// Settings for the hosted search collaborator (Algolia).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Application id; also forms the default host `{app_id}-dsn.algolia.net`.
    #[serde(default)]
    pub app_id: String,
    /// Search-only API key.
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub index_name: String,
    /// Overrides `https://{app_id}-dsn.algolia.net` (proxies, local mocks).
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_hits_per_page")]
    pub hits_per_page: u32,
    /// Whole-request timeout for the outbound call.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_hits_per_page() -> u32 {
    DEFAULT_HITS_PER_PAGE
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            app_id: String::new(),
            api_key: String::new(),
            index_name: String::new(),
            base_url: None,
            hits_per_page: default_hits_per_page(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SearchConfig {
    /// True when app id, key and index are all non-empty.
    pub fn has_credentials(&self) -> bool {
        !self.app_id.is_empty() && !self.api_key.is_empty() && !self.index_name.is_empty()
    }

    /// Query endpoint for the configured index.
    pub fn query_url(&self) -> String {
        let base = match self.base_url.as_deref() {
            Some(url) if !url.is_empty() => url.trim_end_matches('/').to_string(),
            _ => format!("https://{}-dsn.algolia.net", self.app_id),
        };
        format!("{}/1/indexes/{}/query", base, self.index_name)
    }
}

/// Global application configuration (gateway + search collaborator). Load from TOML or env.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Application identity reported by `/health`.
    pub app_name: String,
    pub host: String,
    /// HTTP port for the gateway.
    pub port: u16,
    /// Optional JSON file replacing the builtin portfolio profile.
    #[serde(default)]
    pub profile_path: Option<String>,
    #[serde(default)]
    pub search: SearchConfig,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            app_name: "Portfolio Diary".to_string(),
            host: "127.0.0.1".to_string(),
            port: 5000,
            profile_path: None,
            search: SearchConfig::default(),
        }
    }
}

impl CoreConfig {
    /// Load config from file and environment.
    ///
    /// Precedence (highest first): `VITE_ALGOLIA_*` variables, `FOLIO__*` variables,
    /// the file at env `FOLIO_CONFIG` (or `config/gateway`), defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path =
            std::env::var("FOLIO_CONFIG").unwrap_or_else(|_| "config/gateway".to_string());
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .set_default("app_name", "Portfolio Diary")?
            .set_default("host", "127.0.0.1")?
            .set_default("port", 5000_i64)?
            .set_default("search.hits_per_page", i64::from(DEFAULT_HITS_PER_PAGE))?
            .set_default("search.timeout_secs", 10_i64)?;

        let path = Path::new(config_path);
        let with_ext = Path::new(config_path).with_extension("toml");
        let builder = if path.is_file() {
            builder.add_source(config::File::from(path))
        } else if with_ext.is_file() {
            builder.add_source(config::File::from(with_ext))
        } else {
            builder
        };

        let built = builder
            .add_source(config::Environment::with_prefix("FOLIO").separator("__"))
            .set_override_option("search.app_id", std::env::var(ENV_ALGOLIA_APP_ID).ok())?
            .set_override_option("search.api_key", std::env::var(ENV_ALGOLIA_API_KEY).ok())?
            .set_override_option(
                "search.index_name",
                std::env::var(ENV_ALGOLIA_INDEX_NAME).ok(),
            )?
            .build()?;

        built.try_deserialize()
    }

    /// `host:port` for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
