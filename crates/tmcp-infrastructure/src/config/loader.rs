//! Configuration loader
//!
//! Handles loading configuration from various sources including
//! TOML files, environment variables, explicit overrides and default values.
//!
//! Uses Figment for configuration management.

use crate::config::AppConfig;
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde_json::Value;
use std::env;
use std::path::{Path, PathBuf};
use tmcp_domain::error::{Error, Result};

/// Configuration loader service
#[derive(Clone, Debug)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Dotted-key overrides applied last
    overrides: Vec<(String, Value)>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            overrides: Vec::new(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Override a single key, e.g. `("backend.port", 1821)`
    ///
    /// `None` leaves the key untouched, which lets optional command-line
    /// flags be passed straight through.
    pub fn with_override<V: Into<Value>>(mut self, key: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.overrides.push((key.to_string(), value.into()));
        }
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if exists)
    /// 3. Environment variables with prefix (e.g., `TMCP_BACKEND__PORT`)
    /// 4. Overrides registered with [`ConfigLoader::with_override`]
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        figment = figment.merge(
            Env::prefixed(&format!("{CONFIG_ENV_PREFIX}_")).split(CONFIG_ENV_SEPARATOR),
        );

        for (key, value) in &self.overrides {
            figment = figment.merge((key.as_str(), value.clone()));
        }

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Find default configuration file paths to try
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
            dirs::config_dir()
                .map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME))
                .unwrap_or_default(),
        ];

        candidates.into_iter().find(|path| path.is_file())
    }
}

/// Validate application configuration
///
/// Performs validation of all configuration sections.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_definitions_config(config)?;
    validate_backend_config(config)?;
    validate_server_config(config)?;
    parse_log_level(&config.logging.level)?;
    Ok(())
}

fn validate_definitions_config(config: &AppConfig) -> Result<()> {
    match &config.definitions.path {
        Some(path) if !path.as_os_str().is_empty() => Ok(()),
        _ => Err(Error::config(
            "Tool definitions path is required (--tools or definitions.path)",
        )),
    }
}

fn validate_backend_config(config: &AppConfig) -> Result<()> {
    if config.backend.host.trim().is_empty() {
        return Err(Error::config("Backend host cannot be empty"));
    }
    if config.backend.port == 0 {
        return Err(Error::config("Backend port cannot be 0"));
    }
    if config.backend.timeout_ms == 0 {
        return Err(Error::config("Backend timeout cannot be 0"));
    }
    Ok(())
}

fn validate_server_config(config: &AppConfig) -> Result<()> {
    if config.server.port == 0 {
        return Err(Error::config("Server port cannot be 0"));
    }
    Ok(())
}
