//! # quiver-cli - command line front end for quiver-search
//!
//! Provides the `quiver` binary:
//!
//! | Command | Output |
//! |---------|--------|
//! | `quiver parse <QUERY>` | base query and extensions as JSON |
//! | `quiver filter <QUERY> [--kind K]... [--author HEX]... [--since T] [--until T] [--limit N \| --no-limit]` | sorted-key filter JSON |
//! | `quiver req <QUERY> [--id ID] [--kind K]... [--author HEX]... [--limit N \| --no-limit]` | `["REQ",...]` message |
//! | `quiver close <ID>` | `["CLOSE",...]` message |
//!
//! Logs go to stderr so command output can be piped.

pub mod commands;
pub mod config;

pub use commands::{Command, execute};
pub use config::{Cli, CliConfig};

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` takes precedence over `level`. Output goes to stderr.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("quiver_search={level},quiver_cli={level}")));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
