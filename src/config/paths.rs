//! Where the configuration file lives
//!
//! `KUBECTL_TREE_CONFIG_DIR` wins when set. Otherwise the XDG config home is
//! used on Linux/macOS and the roaming AppData folder on Windows.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

const APP_NAME: &str = "kubectl-tree";
const CONFIG_FILE: &str = "config.yaml";

/// Directory holding `config.yaml`
pub fn config_dir() -> PathBuf {
    env_dir("KUBECTL_TREE_CONFIG_DIR").unwrap_or_else(|| platform_config_home().join(APP_NAME))
}

/// Path of the configuration file
pub fn root_config_path() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}

/// Create `path` and its parents if missing
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.is_dir() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

#[cfg(not(windows))]
fn platform_config_home() -> PathBuf {
    env_dir("XDG_CONFIG_HOME")
        .or_else(|| BaseDirs::new().map(|dirs| dirs.home_dir().join(".config")))
        .unwrap_or_else(|| PathBuf::from(".config"))
}

#[cfg(windows)]
fn platform_config_home() -> PathBuf {
    BaseDirs::new()
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".config"))
}

/// Directory named by an environment variable; empty values count as unset
fn env_dir(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
