//! Configuration loading and merging logic
//!
//! Handles loading configuration from the config file and environment
//! variables according to precedence rules.

use super::{paths, schema::Config};
use anyhow::{Context, Result};
use std::path::Path;

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with all layers merged
    ///
    /// Precedence order (highest to lowest):
    /// 1. Environment variable overrides
    /// 2. Root config file
    /// 3. Built-in defaults
    ///
    /// Command-line flags are applied on top of this by the caller.
    pub fn load() -> Result<Config> {
        let path = paths::root_config_path();
        let config = if path.exists() {
            Self::load_file(&path)?
        } else {
            Self::load_defaults()
        };

        Ok(Self::apply_env_overrides(config))
    }

    /// Load configuration from a file
    pub fn load_file(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found: {}", path.display()));
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate configuration by loading and checking its values
    ///
    /// Fails on invalid YAML, invalid value types and limits of zero.
    pub fn validate() -> Result<Config> {
        let config = Self::load().context("Failed to load configuration")?;
        Self::check(&config)?;
        Ok(config)
    }

    /// Check value ranges of an already-loaded configuration
    pub fn check(config: &Config) -> Result<()> {
        if config.max_depth == 0 {
            return Err(anyhow::anyhow!("maxDepth must be at least 1"));
        }
        if config.max_fetches == 0 {
            return Err(anyhow::anyhow!("maxFetches must be at least 1"));
        }
        if config.indent_width == 0 {
            return Err(anyhow::anyhow!("indentWidth must be at least 1"));
        }
        Ok(())
    }

    /// Load default configuration
    pub fn load_defaults() -> Config {
        Config::default()
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut config: Config) -> Config {
        if let Some(val) = env_override("KUBECTL_TREE_SHOW_API_VERSION") {
            config.show_api_version = val;
        }
        if let Some(val) = env_override("KUBECTL_TREE_MAX_DEPTH") {
            config.max_depth = val;
        }
        if let Some(val) = env_override("KUBECTL_TREE_MAX_FETCHES") {
            config.max_fetches = val;
        }
        if let Some(val) = env_override("KUBECTL_TREE_INDENT_WIDTH") {
            config.indent_width = val;
        }
        if let Some(val) = env_override("KUBECTL_TREE_CACHE_OWNERS") {
            config.cache_owners = val;
        }

        config
    }

    /// Save configuration to a file
    pub fn save(config: &Config, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            paths::ensure_dir(parent)?;
        }

        let yaml =
            serde_yaml::to_string(config).context("Failed to serialize configuration to YAML")?;

        std::fs::write(path, yaml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Save root configuration
    pub fn save_root(config: &Config) -> Result<()> {
        Self::save(config, &paths::root_config_path())
    }
}

/// Read and parse an environment variable, ignoring unparsable values
fn env_override<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.parse() {
        Ok(val) => Some(val),
        Err(_) => {
            tracing::warn!("Ignoring invalid value {:?} for {}", raw, name);
            None
        }
    }
}
