//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands::ConfigSubcommand;
use crate::config::Config;

/// kubectl tree - print the owner-reference tree of Kubernetes objects
#[derive(Parser, Debug)]
#[command(name = "kubectl-tree", version)]
#[command(about = "Print the owner-reference tree of Kubernetes objects", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Args {
    /// Enable debug logging
    #[arg(long, short = 'd')]
    pub debug: bool,

    #[command(flatten)]
    pub tree: TreeArgs,

    /// Configuration subcommand
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Main commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

/// Flags and targets for printing trees
#[derive(clap::Args, Debug, Default)]
pub struct TreeArgs {
    /// Show API version in output
    #[arg(long)]
    pub show_api_version: bool,

    /// Namespace of the starting objects
    #[arg(long, short = 'n')]
    pub namespace: Option<String>,

    /// Select starting objects across all namespaces
    #[arg(long, short = 'A')]
    pub all_namespaces: bool,

    /// Kubeconfig context to use
    #[arg(long)]
    pub context: Option<String>,

    /// Path to the kubeconfig file
    #[arg(long)]
    pub kubeconfig: Option<PathBuf>,

    /// Deepest owner level to follow
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Most owner fetches per starting object
    #[arg(long)]
    pub max_fetches: Option<usize>,

    /// Read each shared owner only once per run
    #[arg(long)]
    pub cache_owners: bool,

    /// TYPE[,TYPE...] [NAME...] or TYPE/NAME...
    pub targets: Vec<String>,
}

impl TreeArgs {
    /// Layer the flags over a loaded configuration
    pub fn apply_to(&self, mut config: Config) -> Config {
        if self.show_api_version {
            config.show_api_version = true;
        }
        if let Some(max_depth) = self.max_depth {
            config.max_depth = max_depth;
        }
        if let Some(max_fetches) = self.max_fetches {
            config.max_fetches = max_fetches;
        }
        if self.cache_owners {
            config.cache_owners = true;
        }
        config
    }
}
