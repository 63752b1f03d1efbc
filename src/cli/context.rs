//! Context query CLI arguments (kubectl-style)

use clap::Parser;

use super::common::OutputFormat;

/// Arguments for 'get-contexts' subcommand
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
        kctx get-contexts\n  \
        kctx get-contexts -o json\n  \
        KUBECONFIG=~/alt.yaml kctx get-contexts -o name")]
pub struct GetContextsArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Omit the header row (table and csv output)
    #[arg(long, default_value_t = false)]
    pub no_headers: bool,
}
