//! kctx - Main entry point

use clap::Parser;
use log::{debug, info};

use kctx::{run_context_command, Cli, ConfigEnv, ContextQueryService};

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting kctx v{}", env!("CARGO_PKG_VERSION"));
    debug!("CLI args: {:?}", cli);

    let service = ContextQueryService::new(ConfigEnv::with_override(cli.kubeconfig.clone()));

    match run_context_command(&cli.command, &service) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
