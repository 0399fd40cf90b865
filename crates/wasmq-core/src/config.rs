//! Chain configuration.
//!
//! Holds the parameters the query layer needs about the chain it serves:
//! the bonding denomination and the bech32 prefixes for account and
//! validator operator addresses. With the `persistence` feature the
//! configuration can be loaded from a JSON file in the platform config
//! directory.

use serde::{Deserialize, Serialize};

/// Configuration error type.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Other configuration error.
    #[error("{0}")]
    Other(String),
}

pub const DEFAULT_BOND_DENOM: &str = "stake";
pub const DEFAULT_ACCOUNT_PREFIX: &str = "cosmos";
pub const DEFAULT_VALIDATOR_PREFIX: &str = "cosmosvaloper";

/// Chain parameters used by the queriers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    /// Denomination used for bonding.
    pub bond_denom: String,
    /// Human-readable part of account addresses.
    pub account_prefix: String,
    /// Human-readable part of validator operator addresses.
    pub validator_prefix: String,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            bond_denom: DEFAULT_BOND_DENOM.to_string(),
            account_prefix: DEFAULT_ACCOUNT_PREFIX.to_string(),
            validator_prefix: DEFAULT_VALIDATOR_PREFIX.to_string(),
        }
    }
}

impl ChainConfig {
    /// Checks that no field is empty and the prefixes differ.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bond_denom.is_empty() {
            return Err(ConfigError::Other("bond_denom must not be empty".into()));
        }
        if self.account_prefix.is_empty() || self.validator_prefix.is_empty() {
            return Err(ConfigError::Other("address prefixes must not be empty".into()));
        }
        if self.account_prefix == self.validator_prefix {
            return Err(ConfigError::Other(
                "account and validator prefixes must differ".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(feature = "persistence")]
mod persistence {
    use super::{ChainConfig, ConfigError};
    use directories::ProjectDirs;
    use std::fs;
    use std::path::{Path, PathBuf};

    impl ChainConfig {
        /// Path of the default configuration file, if a home directory exists.
        pub fn default_path() -> Option<PathBuf> {
            ProjectDirs::from("", "", "wasmq").map(|dirs| dirs.config_dir().join("chain.json"))
        }

        /// Loads and validates a configuration file.
        pub fn load(path: &Path) -> Result<Self, ConfigError> {
            let content = fs::read_to_string(path)?;
            let config: ChainConfig = serde_json::from_str(&content)?;
            config.validate()?;
            Ok(config)
        }

        /// Loads the default configuration file, falling back to defaults
        /// when it is absent.
        pub fn load_or_default() -> Result<Self, ConfigError> {
            match Self::default_path() {
                Some(path) if path.exists() => Self::load(&path),
                _ => Ok(Self::default()),
            }
        }

        /// Writes the configuration as pretty JSON, creating parent directories.
        pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(path, content)?;
            Ok(())
        }
    }
}
