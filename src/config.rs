use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "bay-dashboard.toml";

// ---------------------------------------------------------------------------
// Configuration model
// ---------------------------------------------------------------------------

/// Top-level configuration, read from TOML. Every field has a default so an
/// empty or absent file yields a working setup.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    /// Default `env_logger` filter; `RUST_LOG` still wins.
    pub log_level: String,
    pub data: DataConfig,
    pub crypto: CryptoConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct DataConfig {
    pub capitals_csv: PathBuf,
    pub biscayne_csv: PathBuf,
    pub media_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct CryptoConfig {
    pub price_url: String,
    pub exchange_url: String,
    /// JSON file holding the exchange-rate API key under `currency_api`.
    pub credentials: PathBuf,
    pub timeout_secs: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            data: DataConfig::default(),
            crypto: CryptoConfig::default(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            capitals_csv: PathBuf::from("csv/capitals_usa.csv"),
            biscayne_csv: PathBuf::from("csv/biscayne_bay_dataset_dec_2021.csv"),
            media_dir: PathBuf::from("media"),
        }
    }
}

impl Default for CryptoConfig {
    fn default() -> Self {
        Self {
            price_url: "https://min-api.cryptocompare.com/data/price".to_string(),
            exchange_url: "http://api.currencylayer.com/live".to_string(),
            credentials: PathBuf::from("api_keys.json"),
            timeout_secs: 30,
        }
    }
}

impl CryptoConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl DataConfig {
    pub fn media(&self, file: &str) -> PathBuf {
        self.media_dir.join(file)
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

impl DashboardConfig {
    /// Load the configuration.
    ///
    /// * `Some(path)` – the file must exist and parse.
    /// * `None` – read [`DEFAULT_CONFIG_FILE`] if present, defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_file(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::parse(&text).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}
