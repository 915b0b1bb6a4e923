//! Command line configuration.
//!
//! Global options can be set on the command line or through environment
//! variables.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `QUIVER_LOG_LEVEL` | warn | Log level |
//! | `QUIVER_DEFAULT_LIMIT` | 100 | Limit used when `--limit` is not given |
//!
//! # Example
//!
//! ```rust
//! use quiver_cli::CliConfig;
//!
//! let config = CliConfig {
//!     default_limit: 20,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use clap::{Args, Parser};
use quiver_search::DEFAULT_SEARCH_LIMIT;

use crate::commands::Command;

/// Log levels accepted by `--log-level`.
pub const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Top-level command line.
#[derive(Debug, Clone, Parser)]
#[command(name = "quiver")]
#[command(about = "Inspect NIP-50 search queries and build Nostr REQ messages")]
#[command(version)]
pub struct Cli {
    /// Global settings.
    #[command(flatten)]
    pub config: CliConfig,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Global settings shared by every command.
#[derive(Debug, Clone, Args)]
pub struct CliConfig {
    /// Log level (off, error, warn, info, debug, trace).
    #[arg(long, env = "QUIVER_LOG_LEVEL", default_value = "warn", global = true)]
    pub log_level: String,

    /// Result limit used when a command is given no --limit.
    #[arg(long, env = "QUIVER_DEFAULT_LIMIT", default_value = "100", global = true)]
    pub default_limit: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            default_limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

impl CliConfig {
    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Unknown log level '{}' (expected one of: {})",
                self.log_level,
                LOG_LEVELS.join(", ")
            ));
        }

        if self.default_limit == 0 {
            errors.push("Default limit cannot be 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    pub fn for_testing() -> Self {
        Self {
            log_level: "debug".to_string(),
            default_limit: 10,
        }
    }
}
