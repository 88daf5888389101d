//! Configuration management for the rules server.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{Result, RulesError};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub rules: RulesConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Rule corpus configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RulesConfig {
    /// Root of the rules content repository
    ///
    /// Left empty, it resolves to the `Rules` directory under the XDG cache.
    #[serde(default)]
    pub dir: PathBuf,

    /// File patterns to include (glob syntax)
    #[serde(default = "default_include_patterns")]
    pub include_patterns: Vec<String>,

    /// File patterns to exclude (glob syntax)
    #[serde(default = "default_exclude_patterns")]
    pub exclude_patterns: Vec<String>,

    /// Maximum rule file size in KB (skip larger files)
    #[serde(default = "default_max_file_size_kb")]
    pub max_file_size_kb: u64,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Upper bound applied to a caller-supplied `limit`
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
}

// Default value functions
fn default_include_patterns() -> Vec<String> {
    vec!["*.md".to_string()]
}

fn default_exclude_patterns() -> Vec<String> {
    vec!["**/.git/**".to_string(), "**/node_modules/**".to_string()]
}

fn default_max_file_size_kb() -> u64 {
    512
}

fn default_max_limit() -> usize {
    100
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::new(),
            include_patterns: default_include_patterns(),
            exclude_patterns: default_exclude_patterns(),
            max_file_size_kb: default_max_file_size_kb(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_limit: default_max_limit(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| RulesError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// This method uses XDG Base Directory specification for file locations.
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. RULES_MCP_CONFIG (or RULES_MCP_CONFIG_FILE) env var
    /// 2. XDG config file (~/.config/rules-mcp/config.toml)
    /// 3. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let config_path = env::var("RULES_MCP_CONFIG").or_else(|_| env::var("RULES_MCP_CONFIG_FILE"));
        let mut config = if let Ok(config_path) = config_path {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else {
                Self::default()
            }
        };

        config.resolve_rules_dir(xdg);
        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Fill an unset rules directory with the XDG cache location
    pub fn resolve_rules_dir(&mut self, xdg: &XdgDirs) {
        if self.rules.dir.as_os_str().is_empty() {
            self.rules.dir = xdg.rules_dir();
        }
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(dir) = env::var("RULES_MCP_RULES_DIR") {
            self.rules.dir = PathBuf::from(dir);
        }
        if let Ok(max_size) = env::var("RULES_MCP_MAX_FILE_SIZE_KB") {
            if let Ok(size) = max_size.parse() {
                self.rules.max_file_size_kb = size;
            }
        }
        if let Ok(max_limit) = env::var("RULES_MCP_MAX_LIMIT") {
            if let Ok(limit) = max_limit.parse() {
                self.search.max_limit = limit;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.rules.include_patterns.is_empty() {
            return Err(RulesError::ConfigError(
                "At least one include pattern is required".to_string(),
            ));
        }

        if self.rules.max_file_size_kb == 0 {
            return Err(RulesError::ConfigError(
                "Max file size must be non-zero".to_string(),
            ));
        }

        if self.search.max_limit == 0 {
            return Err(RulesError::ConfigError(
                "Max search limit must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Rules dir: {:?}", self.rules.dir);
        tracing::info!(
            "  Include patterns: {}",
            self.rules.include_patterns.join(", ")
        );
        tracing::info!(
            "  Exclude patterns: {}",
            self.rules.exclude_patterns.join(", ")
        );
        tracing::info!("  Max file size: {} KB", self.rules.max_file_size_kb);
        tracing::info!("  Max search limit: {}", self.search.max_limit);
    }
}
