//! Configuration management for termsift.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{Result, TermsiftError};
use crate::core::search::{SqlDialect, DEFAULT_SEARCH_FIELDS};
use crate::core::xdg::XdgDirs;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

static TABLE_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub sql: SqlConfig,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Field paths searched when none are given on the command line
    #[serde(default = "default_fields")]
    pub default_fields: Vec<String>,
}

/// SQL lowering configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SqlConfig {
    /// Table the generated SELECT reads from
    #[serde(default = "default_table")]
    pub table: String,

    /// Target dialect
    #[serde(default)]
    pub dialect: SqlDialect,

    /// Row limit bound into the generated SELECT
    #[serde(default = "default_limit")]
    pub limit: i64,
}

// Default value functions
fn default_fields() -> Vec<String> {
    DEFAULT_SEARCH_FIELDS.iter().map(|s| s.to_string()).collect()
}

fn default_table() -> String {
    "records".to_string()
}

fn default_limit() -> i64 {
    100
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_fields: default_fields(),
        }
    }
}

impl Default for SqlConfig {
    fn default() -> Self {
        Self {
            table: default_table(),
            dialect: SqlDialect::default(),
            limit: default_limit(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| TermsiftError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// File priority order:
    /// 1. TERMSIFT_CONFIG env var
    /// 2. XDG config file (~/.config/termsift/config.toml)
    /// 3. ./termsift.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("TERMSIFT_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("termsift.toml").exists() {
                Self::from_file("termsift.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env()?;
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) -> Result<()> {
        if let Ok(fields) = env::var("TERMSIFT_DEFAULT_FIELDS") {
            self.search.default_fields = fields
                .split(',')
                .map(|f| f.trim().to_string())
                .filter(|f| !f.is_empty())
                .collect();
        }

        if let Ok(table) = env::var("TERMSIFT_SQL_TABLE") {
            self.sql.table = table;
        }
        if let Ok(dialect) = env::var("TERMSIFT_SQL_DIALECT") {
            self.sql.dialect = dialect.parse()?;
        }
        if let Ok(limit) = env::var("TERMSIFT_SQL_LIMIT") {
            if let Ok(l) = limit.parse() {
                self.sql.limit = l;
            }
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.search.default_fields.is_empty() {
            return Err(TermsiftError::ConfigError(
                "At least one default search field is required".to_string(),
            ));
        }

        if self
            .search
            .default_fields
            .iter()
            .any(|f| f.trim().is_empty())
        {
            return Err(TermsiftError::ConfigError(
                "Default search fields cannot be blank".to_string(),
            ));
        }

        if !TABLE_NAME.is_match(&self.sql.table) {
            return Err(TermsiftError::ConfigError(format!(
                "SQL table '{}' is not a plain identifier",
                self.sql.table
            )));
        }

        if self.sql.limit <= 0 {
            return Err(TermsiftError::ConfigError(
                "SQL limit must be positive".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Default fields: {:?}", self.search.default_fields);
        tracing::info!("  SQL table: {}", self.sql.table);
        tracing::info!("  SQL dialect: {}", self.sql.dialect);
        tracing::info!("  SQL limit: {}", self.sql.limit);
    }
}
