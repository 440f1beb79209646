//! Configuration system for the LWC CLI.

use lwc_crypto::{Algorithm, Mode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// LWC configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Cipher defaults
    #[serde(default)]
    pub crypto: CryptoConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Cipher defaults, overridable per command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CryptoConfig {
    /// Scheme identifier (`isap` or `elephant`)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
    /// Mode identifier (`direct`, `cbc` or `ofb`)
    #[serde(default = "default_mode")]
    pub mode: String,
    /// Key file used when no key is given on the command line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_file: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default values

fn default_algorithm() -> String {
    Algorithm::default().name().to_string()
}

fn default_mode() -> String {
    Mode::default().name().to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CryptoConfig {
    fn default() -> Self {
        Self {
            algorithm: default_algorithm(),
            mode: default_mode(),
            key_file: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let contents = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, contents)?;
        Ok(())
    }

    /// Get default config path
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp"))
            .join("lwc/config.toml")
    }

    /// Load config from default path, or create default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns an error if reading or creating the config fails.
    pub fn load_or_default() -> anyhow::Result<Self> {
        let path = Self::default_path();

        if path.exists() {
            Self::load(&path)
        } else {
            let config = Self::default();
            config.save(&path)?;
            Ok(config)
        }
    }

    /// Configured scheme
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is unknown.
    pub fn algorithm(&self) -> anyhow::Result<Algorithm> {
        Ok(self.crypto.algorithm.parse()?)
    }

    /// Configured mode
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is unknown.
    pub fn mode(&self) -> anyhow::Result<Mode> {
        Ok(self.crypto.mode.parse()?)
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.algorithm()?;
        self.mode()?;

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            anyhow::bail!(
                "Invalid log level: {}. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            );
        }

        if let Some(key_file) = &self.crypto.key_file {
            if key_file.as_os_str().is_empty() {
                anyhow::bail!("crypto.key_file is set but empty");
            }
        }

        Ok(())
    }
}
