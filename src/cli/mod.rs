//! CLI command handling module
//!
//! Handles argument parsing, logging setup and dispatch to the tree and
//! config commands.

mod args;
mod commands;
mod logging;
mod run;

pub use args::{Args, Command, TreeArgs};
pub use commands::{ConfigSubcommand, handle_config_command};
pub use logging::init_logging;
pub use run::run;

use std::process::ExitCode;

use anyhow::Result;

/// Execute parsed arguments
pub async fn execute(args: Args) -> Result<ExitCode> {
    if let Some(Command::Config { subcommand }) = args.command {
        handle_config_command(subcommand)?;
        return Ok(ExitCode::SUCCESS);
    }

    if let Some(log_path) = init_logging(args.debug)? {
        eprintln!(
            "Debug logging enabled. Logs written to: {}",
            log_path.display()
        );
        tracing::debug!("Debug logging enabled");
    }

    run(args.tree).await
}
