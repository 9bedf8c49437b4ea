//! Configuration system for kubectl-tree
//!
//! Settings come from built-in defaults, an optional YAML file and
//! `KUBECTL_TREE_*` environment variables; command-line flags win over all of
//! them.

pub mod loader;
pub mod paths;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::Config;

/// Keys accepted by `config get` / `config set`
pub const CONFIG_KEYS: &[&str] = &[
    "showApiVersion",
    "maxDepth",
    "maxFetches",
    "indentWidth",
    "cacheOwners",
];

/// Get a configuration value by key
pub fn get_config_value(config: &Config, key: &str) -> anyhow::Result<String> {
    match key {
        "showApiVersion" => Ok(config.show_api_version.to_string()),
        "maxDepth" => Ok(config.max_depth.to_string()),
        "maxFetches" => Ok(config.max_fetches.to_string()),
        "indentWidth" => Ok(config.indent_width.to_string()),
        "cacheOwners" => Ok(config.cache_owners.to_string()),
        _ => Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }
}

/// Set a configuration value by key
pub fn set_config_value(config: &mut Config, key: &str, value: &str) -> anyhow::Result<()> {
    use anyhow::Context;
    match key {
        "showApiVersion" => {
            config.show_api_version = value
                .parse()
                .context("showApiVersion must be 'true' or 'false'")?;
        }
        "maxDepth" => {
            config.max_depth = value.parse().context("maxDepth must be a number")?;
        }
        "maxFetches" => {
            config.max_fetches = value.parse().context("maxFetches must be a number")?;
        }
        "indentWidth" => {
            config.indent_width = value.parse().context("indentWidth must be a number")?;
        }
        "cacheOwners" => {
            config.cache_owners = value
                .parse()
                .context("cacheOwners must be 'true' or 'false'")?;
        }
        _ => return Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }

    ConfigLoader::check(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_every_key() {
        let config = Config::default();
        for key in CONFIG_KEYS {
            assert!(get_config_value(&config, key).is_ok(), "{}", key);
        }
        assert!(get_config_value(&config, "readOnly").is_err());
    }

    #[test]
    fn test_set_then_get() {
        let mut config = Config::default();
        set_config_value(&mut config, "maxDepth", "6").unwrap();
        set_config_value(&mut config, "cacheOwners", "true").unwrap();
        assert_eq!(get_config_value(&config, "maxDepth").unwrap(), "6");
        assert!(config.cache_owners);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(set_config_value(&mut config, "showApiVersion", "yes").is_err());
        assert!(set_config_value(&mut config, "indentWidth", "0").is_err());
        assert!(set_config_value(&mut config, "nope", "1").is_err());
    }
}
