//! CLI argument parsing

mod common;
mod context;

use clap::{Parser, Subcommand};

use crate::config::{defaults, kubeconfig};

pub use common::OutputFormat;
pub use context::GetContextsArgs;

/// Inspect kubeconfig contexts
#[derive(Parser, Debug)]
#[command(name = "kctx")]
#[command(version)]
#[command(about = "Show the current kubeconfig context and list all contexts", long_about = None)]
pub struct Cli {
    /// Path to the kubeconfig file (defaults to ~/.kube/config)
    #[arg(long, global = true, env = kubeconfig::ENV_VAR)]
    pub kubeconfig: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Display the current-context
    #[command(name = "current-context")]
    CurrentContext,

    /// List all contexts with their clusters, sorted by name
    #[command(name = "get-contexts")]
    GetContexts(GetContextsArgs),
}
