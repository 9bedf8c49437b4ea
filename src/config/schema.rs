//! Configuration schema definitions
//!
//! Defines the structure of the configuration file using serde for serialization.

use serde::{Deserialize, Serialize};

use crate::tree::{RenderOptions, TreeOptions};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Prefix each line with the object's apiVersion
    #[serde(default = "default_false")]
    pub show_api_version: bool,

    /// Deepest owner level followed below a starting object
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Most owner fetches issued for one starting object
    #[serde(default = "default_max_fetches")]
    pub max_fetches: usize,

    /// Spaces per tree level
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,

    /// Remember owners already read during this run
    #[serde(default = "default_false")]
    pub cache_owners: bool,
}

impl Config {
    pub fn tree_options(&self) -> TreeOptions {
        TreeOptions {
            max_depth: self.max_depth,
            max_fetches: self.max_fetches,
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            show_api_version: self.show_api_version,
            indent_width: self.indent_width,
        }
    }
}

// Default value functions
fn default_false() -> bool {
    false
}

fn default_max_depth() -> usize {
    TreeOptions::default().max_depth
}

fn default_max_fetches() -> usize {
    TreeOptions::default().max_fetches
}

fn default_indent_width() -> usize {
    RenderOptions::default().indent_width
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_api_version: default_false(),
            max_depth: default_max_depth(),
            max_fetches: default_max_fetches(),
            indent_width: default_indent_width(),
            cache_owners: default_false(),
        }
    }
}
