//! CLI command implementations
//!
//! Boot sequence: load environment, initialize logging, load and validate
//! configuration, seed the listing store, then either start the server
//! or report and exit (`check`).

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::http_server::{AppState, HttpServer, HttpServerConfig};
use crate::listings::{ListingStore, MemoryListingStore};
use crate::nlp::OpenAiChatModel;
use crate::preferences::PreferenceStore;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Application configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings
    pub server: HttpServerConfig,

    /// Search settings
    pub search: SearchConfig,

    /// Chat-completion service settings
    pub nlp: NlpConfig,
}

/// Search configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// JSON file with seed listings (optional)
    pub seed_path: Option<std::path::PathBuf>,

    /// Hard cap on search result size (default: 50)
    pub result_cap: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            seed_path: None,
            result_cap: 50,
        }
    }
}

/// Chat-completion service configuration. The API key itself never lives
/// in the config file; only the name of the environment variable does.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NlpConfig {
    pub base_url: String,
    pub model: String,
    pub api_key_env: String,
}

impl Default for NlpConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load from file when present, defaults otherwise.
    pub fn load_or_default(path: &Path) -> CliResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Config::default())
        }
    }

    fn validate(&self) -> CliResult<()> {
        if self.search.result_cap == 0 {
            return Err(CliError::config_error("search.result_cap must be > 0"));
        }
        if self.nlp.base_url.trim().is_empty() {
            return Err(CliError::config_error("nlp.base_url must not be empty"));
        }
        Ok(())
    }
}

/// Parse arguments and dispatch to the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Start { config } => start(&config),
        Command::Check { config } => check(&config),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Build the listing store, seeded from disk when configured.
fn build_store(config: &Config) -> CliResult<MemoryListingStore> {
    match &config.search.seed_path {
        Some(path) => {
            let store = MemoryListingStore::from_seed_file(path)?;
            info!(listings = store.len(), path = %path.display(), "seeded listing store");
            Ok(store)
        }
        None => {
            warn!("no seed_path configured, starting with an empty listing store");
            Ok(MemoryListingStore::new())
        }
    }
}

/// Start the API server.
fn start(config_path: &Path) -> CliResult<()> {
    // .env is optional; ignore a missing file.
    dotenvy::dotenv().ok();
    init_logging();

    let config = Config::load_or_default(config_path)?;
    let store = build_store(&config)?;

    let api_key = std::env::var(&config.nlp.api_key_env).unwrap_or_default();
    if api_key.is_empty() {
        warn!(
            env = %config.nlp.api_key_env,
            "chat service API key not set, NLP endpoints will fail upstream"
        );
    }

    let state = AppState {
        listings: Arc::new(store),
        preferences: Arc::new(PreferenceStore::new()),
        model: Arc::new(OpenAiChatModel::new(
            &config.nlp.base_url,
            &config.nlp.model,
            api_key,
        )),
        result_cap: config.search.result_cap,
    };

    let server = HttpServer::new(config.server, state);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(e.to_string()))
    })
}

/// Validate configuration and seed data, then exit.
fn check(config_path: &Path) -> CliResult<()> {
    init_logging();

    let config = Config::load_or_default(config_path)?;
    let store = build_store(&config)?;

    info!(
        listings = store.len(),
        result_cap = config.search.result_cap,
        addr = %config.server.socket_addr(),
        model = %config.nlp.model,
        "configuration OK"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_validates() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_load_rejects_zero_result_cap() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"search": {{"result_cap": 0}}}}"#).unwrap();

        let result = Config::load(file.path());
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_load_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"server": {{"port": 8080}}}}"#).unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.search.result_cap, 50);
        assert_eq!(config.nlp.api_key_env, "OPENAI_API_KEY");
    }

    #[test]
    fn test_missing_config_file_uses_defaults() {
        let config = Config::load_or_default(Path::new("/nonexistent/homequest.json")).unwrap();
        assert_eq!(config.server.port, 5000);
    }
}
