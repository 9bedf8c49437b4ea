//! kubectl-tree - print the owner-reference tree of Kubernetes objects
//!
//! Installed on the PATH as `kubectl-tree`, it runs as `kubectl tree`.

use std::process::ExitCode;

use clap::Parser;
use kubectl_tree::cli::{self, Args};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    match cli::execute(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
