//! Runtime configuration, read from environment variables.
//!
//! | variable         | default              |
//! |------------------|----------------------|
//! | `BIND_ADDR`      | `0.0.0.0:3000`       |
//! | `MOCK_DATA_PATH` | `db/mock-data.json`  |
//! | `DATABASE_URL`   | unset (JSON file)    |
//! | `SEED_PATH`      | unset (no reset)     |

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MOCK_DATA_PATH: &str = "db/mock-data.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid BIND_ADDR {value:?}: {source}")]
    BindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("unsupported DATABASE_URL {0:?}: only sqlite: URLs are supported")]
    DatabaseUrl(String),
}

/// Where the records live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    JsonFile(PathBuf),
    Sqlite(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub store: StoreConfig,
    /// Document copied over the store at startup, if any.
    pub seed_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = var_or_default(&lookup, "BIND_ADDR", DEFAULT_BIND_ADDR);
        let bind_addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::BindAddr {
                value: raw_addr.clone(),
                source,
            })?;

        let store = match lookup("DATABASE_URL") {
            Some(url) if url.starts_with("sqlite:") => StoreConfig::Sqlite(url),
            Some(url) => return Err(ConfigError::DatabaseUrl(url)),
            None => {
                let path = var_or_default(&lookup, "MOCK_DATA_PATH", DEFAULT_MOCK_DATA_PATH);
                StoreConfig::JsonFile(PathBuf::from(path))
            }
        };

        Ok(Self {
            bind_addr,
            store,
            seed_path: lookup("SEED_PATH").map(PathBuf::from),
        })
    }
}

fn var_or_default(lookup: impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key).unwrap_or_else(|| {
        tracing::info!(key, default, "variable unset; using default");
        default.to_string()
    })
}
