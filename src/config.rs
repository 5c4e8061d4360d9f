//! Configuration management for catalog-admin
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files, environment variables, and CLI overrides.

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Remote REST API settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Local key-value store settings
    #[serde(default)]
    pub storage: StorageConfig,
    /// Product list paging settings
    #[serde(default)]
    pub pagination: PaginationConfig,
}

/// Remote REST API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL all endpoints are derived from
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout (seconds)
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_base_url() -> String {
    "https://dummyjson.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

/// Key-value store configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Database location; the platform data directory is used when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Paging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Products shown per page
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

fn default_per_page() -> u32 {
    crate::catalog::pagination::DEFAULT_LIMIT
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
        }
    }
}

impl Config {
    /// Load configuration from file with environment and CLI overrides
    ///
    /// A missing file is not an error: defaults are used instead.
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed
    pub fn load(path: &str, cli: &crate::cli::Cli) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            tracing::warn!("Config file not found at {}, using defaults", path);
            Self::default()
        };

        config.apply_env_vars();
        config.apply_cli_overrides(cli);

        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Config(format!("Failed to read config file: {}", e)))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| CatalogError::Config(format!("Failed to parse config: {}", e)).into())
    }

    fn apply_env_vars(&mut self) {
        if let Ok(base_url) = std::env::var("CATALOG_ADMIN_API_BASE") {
            tracing::debug!(base_url = %base_url, "Env override: CATALOG_ADMIN_API_BASE");
            self.api.base_url = base_url;
        }

        if let Ok(timeout) = std::env::var("CATALOG_ADMIN_TIMEOUT_SECONDS") {
            if let Ok(value) = timeout.parse() {
                self.api.timeout_seconds = value;
            } else {
                tracing::warn!("Invalid CATALOG_ADMIN_TIMEOUT_SECONDS: {}", timeout);
            }
        }

        if let Ok(path) = std::env::var("CATALOG_ADMIN_STORE_PATH") {
            tracing::debug!(path = %path, "Env override: CATALOG_ADMIN_STORE_PATH");
            self.storage.path = Some(PathBuf::from(path));
        }

        if let Ok(per_page) = std::env::var("CATALOG_ADMIN_PER_PAGE") {
            if let Ok(value) = per_page.parse() {
                self.pagination.per_page = value;
            } else {
                tracing::warn!("Invalid CATALOG_ADMIN_PER_PAGE: {}", per_page);
            }
        }
    }

    fn apply_cli_overrides(&mut self, cli: &crate::cli::Cli) {
        if let Some(path) = &cli.store_path {
            tracing::info!("Using store path override from CLI: {}", path.display());
            self.storage.path = Some(path.clone());
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Config` describing the first invalid value
    pub fn validate(&self) -> Result<()> {
        let base = url::Url::parse(&self.api.base_url).map_err(|e| {
            CatalogError::Config(format!(
                "api.base_url is not a valid URL ({}): {}",
                self.api.base_url, e
            ))
        })?;

        if !matches!(base.scheme(), "http" | "https") {
            return Err(CatalogError::Config(format!(
                "api.base_url must use http or https, got {}",
                base.scheme()
            ))
            .into());
        }

        if self.api.timeout_seconds == 0 {
            return Err(CatalogError::Config(
                "api.timeout_seconds must be greater than 0".to_string(),
            )
            .into());
        }

        if self.pagination.per_page == 0 {
            return Err(CatalogError::Config(
                "pagination.per_page must be greater than 0".to_string(),
            )
            .into());
        }

        Ok(())
    }
}
