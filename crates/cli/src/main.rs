//! quiver - NIP-50 search query tool.

use clap::Parser;
use quiver_cli::{Cli, execute, init_logging};
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.config.log_level);

    if let Err(errors) = cli.config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    debug!(
        log_level = %cli.config.log_level,
        default_limit = cli.config.default_limit,
        "Running command"
    );

    let output = execute(&cli.command, &cli.config)?;
    println!("{}", output);
    Ok(())
}
