//! Configuration resolution for the dashboard
//!
//! Every setting is resolved in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! A missing TOML file is normal. An unreadable or malformed one is logged
//! and skipped so the dashboard still starts on defaults.

use crate::{Error, Result};
use serde::Deserialize;
use std::fmt;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Backend used when nothing else is configured
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";

/// Dashboard listen address used when nothing else is configured
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Primary environment variable for the backend base URL
pub const BACKEND_URL_ENV: &str = "COLLECTOR_BACKEND_URL";

/// Older variable name still honoured when the primary one is unset
pub const LEGACY_BACKEND_URL_ENV: &str = "PYTHON_API_BASE";

/// Environment variable for the listen address
pub const BIND_ADDR_ENV: &str = "COLLECTOR_BIND";

/// Interval between extraction status polls
pub const STATUS_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Contents of `config.toml`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    /// Backend base URL, e.g. `http://collector-api:8001`
    #[serde(default)]
    pub backend_url: Option<String>,

    /// Listen address, e.g. `0.0.0.0:3000`
    #[serde(default)]
    pub bind_addr: Option<String>,
}

/// Where a resolved setting came from (logged at startup)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    CommandLine,
    Environment(&'static str),
    TomlFile(PathBuf),
    CompiledDefault,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::CommandLine => write!(f, "command line"),
            ConfigSource::Environment(var) => write!(f, "environment ({})", var),
            ConfigSource::TomlFile(path) => write!(f, "config file ({})", path.display()),
            ConfigSource::CompiledDefault => write!(f, "compiled default"),
        }
    }
}

/// Fully resolved dashboard configuration
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Backend base URL without trailing slash
    pub backend_url: String,
    pub backend_url_source: ConfigSource,
    pub bind_addr: SocketAddr,
    pub bind_addr_source: ConfigSource,
    pub poll_interval: Duration,
}

/// Resolves [`DashboardConfig`] from CLI values, environment and TOML
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
    cli_backend_url: Option<String>,
    cli_bind_addr: Option<String>,
    config_file: Option<PathBuf>,
}

impl ConfigResolver {
    /// Create a resolver reading the platform config file
    pub fn new() -> Self {
        Self {
            cli_backend_url: None,
            cli_bind_addr: None,
            config_file: default_config_path(),
        }
    }

    /// Backend URL given on the command line
    pub fn with_cli_backend_url(mut self, url: Option<String>) -> Self {
        self.cli_backend_url = url;
        self
    }

    /// Listen address given on the command line
    pub fn with_cli_bind_addr(mut self, addr: Option<String>) -> Self {
        self.cli_bind_addr = addr;
        self
    }

    /// Override the config file location (`None` disables the TOML tier)
    pub fn with_config_file(mut self, path: Option<PathBuf>) -> Self {
        self.config_file = path;
        self
    }

    /// Resolve all settings
    pub fn resolve(&self) -> Result<DashboardConfig> {
        let toml_config = self.load_toml_tier();
        let toml_path = self.config_file.clone().unwrap_or_default();

        let (raw_url, backend_url_source) = pick(
            self.cli_backend_url.clone(),
            &[BACKEND_URL_ENV, LEGACY_BACKEND_URL_ENV],
            toml_config.as_ref().and_then(|c| c.backend_url.clone()),
            &toml_path,
            DEFAULT_BACKEND_URL,
        );
        let backend_url = normalize_backend_url(&raw_url)?;

        let (raw_bind, bind_addr_source) = pick(
            self.cli_bind_addr.clone(),
            &[BIND_ADDR_ENV],
            toml_config.as_ref().and_then(|c| c.bind_addr.clone()),
            &toml_path,
            DEFAULT_BIND_ADDR,
        );
        let bind_addr = raw_bind
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| Error::Config(format!("Invalid bind address '{}': {}", raw_bind, e)))?;

        Ok(DashboardConfig {
            backend_url,
            backend_url_source,
            bind_addr,
            bind_addr_source,
            poll_interval: STATUS_POLL_INTERVAL,
        })
    }

    fn load_toml_tier(&self) -> Option<TomlConfig> {
        let path = self.config_file.as_ref()?;
        match load_toml_config(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring config file {}: {}", path.display(), e);
                None
            }
        }
    }
}

/// First non-empty value across the four tiers
fn pick(
    cli: Option<String>,
    env_vars: &[&'static str],
    toml_value: Option<String>,
    toml_path: &Path,
    default: &str,
) -> (String, ConfigSource) {
    if let Some(value) = non_empty(cli) {
        return (value, ConfigSource::CommandLine);
    }

    for var in env_vars {
        if let Some(value) = non_empty(std::env::var(var).ok()) {
            return (value, ConfigSource::Environment(var));
        }
    }

    if let Some(value) = non_empty(toml_value) {
        return (value, ConfigSource::TomlFile(toml_path.to_path_buf()));
    }

    (default.to_string(), ConfigSource::CompiledDefault)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Platform config file: `<config_dir>/artists-collector/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("artists-collector").join("config.toml"))
}

/// Load a TOML config file
///
/// Returns `Ok(None)` when the file does not exist.
pub fn load_toml_config(path: &Path) -> Result<Option<TomlConfig>> {
    if !path.exists() {
        debug!("No config file at {}", path.display());
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)?;
    let config = toml::from_str::<TomlConfig>(&content)
        .map_err(|e| Error::Config(format!("Parse TOML failed: {}", e)))?;
    Ok(Some(config))
}

/// Validate a backend base URL and strip trailing slashes
///
/// # Examples
///
/// ```
/// use collector_common::config::normalize_backend_url;
///
/// assert_eq!(
///     normalize_backend_url("http://localhost:8001/").unwrap(),
///     "http://localhost:8001"
/// );
/// assert!(normalize_backend_url("localhost:8001").is_err());
/// ```
pub fn normalize_backend_url(raw: &str) -> Result<String> {
    let url = Url::parse(raw.trim())
        .map_err(|e| Error::Config(format!("Invalid backend URL '{}': {}", raw, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::Config(format!(
            "Backend URL must use http or https, got '{}'",
            raw
        )));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(Error::Config(format!("Backend URL has no host: '{}'", raw)));
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}
