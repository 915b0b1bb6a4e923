//! Command definitions and execution.

use anyhow::{Context, bail};
use clap::{Args, Subcommand};
use tracing::{info, warn};

use quiver_search::message::to_sorted_json_string;
use quiver_search::types::{Kind, PublicKey, SubscriptionId, Timestamp};
use quiver_search::{
    SearchFilterOptions, SearchRequestOptions, build_search_filter, create_close_request,
    create_search_request, parse_search_query,
};

use crate::config::CliConfig;

/// Available commands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Split a query into its base terms and search extensions.
    Parse {
        /// The search query.
        query: String,
    },

    /// Print the search filter for a query.
    Filter(FilterArgs),

    /// Print the REQ message for a query.
    Req(ReqArgs),

    /// Print the CLOSE message for a subscription.
    Close {
        /// Subscription ID to close.
        id: String,
    },
}

/// Kind, author and limit criteria shared by `filter` and `req`.
#[derive(Debug, Clone, Default, Args)]
pub struct CriteriaArgs {
    /// Event kind to match (repeatable).
    #[arg(short, long = "kind")]
    pub kinds: Vec<Kind>,

    /// Author public key in hex (repeatable).
    #[arg(short, long = "author")]
    pub authors: Vec<PublicKey>,

    /// Result limit. Defaults to the configured default limit.
    #[arg(short, long, conflicts_with = "no_limit")]
    pub limit: Option<usize>,

    /// Send no limit at all.
    #[arg(long)]
    pub no_limit: bool,
}

impl CriteriaArgs {
    fn kinds(&self) -> Option<Vec<Kind>> {
        (!self.kinds.is_empty()).then(|| self.kinds.clone())
    }

    fn authors(&self) -> Option<Vec<PublicKey>> {
        (!self.authors.is_empty()).then(|| self.authors.clone())
    }

    fn limit(&self, config: &CliConfig) -> Option<usize> {
        if self.no_limit {
            None
        } else {
            Some(self.limit.unwrap_or(config.default_limit))
        }
    }
}

/// Arguments for `filter`.
#[derive(Debug, Clone, Args)]
pub struct FilterArgs {
    /// The search query.
    pub query: String,

    #[command(flatten)]
    pub criteria: CriteriaArgs,

    /// Lower time bound (unix seconds or RFC 3339).
    #[arg(long)]
    pub since: Option<Timestamp>,

    /// Upper time bound (unix seconds or RFC 3339).
    #[arg(long)]
    pub until: Option<Timestamp>,
}

/// Arguments for `req`.
#[derive(Debug, Clone, Args)]
pub struct ReqArgs {
    /// The search query.
    pub query: String,

    /// Subscription ID. A random one is generated when omitted.
    #[arg(long)]
    pub id: Option<String>,

    #[command(flatten)]
    pub criteria: CriteriaArgs,
}

/// Runs a command and returns the text to print.
pub fn execute(command: &Command, config: &CliConfig) -> anyhow::Result<String> {
    match command {
        Command::Parse { query } => {
            let parsed = parse_search_query(query);
            serde_json::to_string_pretty(&parsed).context("Failed to render parsed query")
        }
        Command::Filter(args) => run_filter(args, config),
        Command::Req(args) => run_req(args, config),
        Command::Close { id } => {
            let id = checked_subscription_id(Some(id))?;
            Ok(create_close_request(&id))
        }
    }
}

fn run_filter(args: &FilterArgs, config: &CliConfig) -> anyhow::Result<String> {
    if let (Some(since), Some(until)) = (args.since, args.until) {
        if since > until {
            warn!(%since, %until, "since is after until, the relay will match nothing");
        }
    }

    let options = SearchFilterOptions {
        kinds: args.criteria.kinds(),
        authors: args.criteria.authors(),
        since: args.since,
        until: args.until,
        limit: args.criteria.limit(config),
    };
    let filter = build_search_filter(args.query.as_str(), options);
    to_sorted_json_string(&filter).context("Failed to encode filter")
}

fn run_req(args: &ReqArgs, config: &CliConfig) -> anyhow::Result<String> {
    let id = checked_subscription_id(args.id.as_deref())?;
    info!(subscription_id = %id, "Building search request");

    let options = SearchRequestOptions {
        kinds: args.criteria.kinds(),
        authors: args.criteria.authors(),
        limit: args.criteria.limit(config),
    };
    Ok(create_search_request(&id, &args.query, options))
}

/// The encoder quotes IDs without escaping, so reject ones that would
/// break the message.
fn checked_subscription_id(id: Option<&str>) -> anyhow::Result<SubscriptionId> {
    let id = match id {
        Some(id) => SubscriptionId::new(id),
        None => SubscriptionId::generate(),
    };
    if !id.is_quote_safe() {
        bail!("Subscription ID must not contain '\"' or '\\': {}", id);
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(query: &str, id: Option<&str>) -> ReqArgs {
        ReqArgs {
            query: query.to_string(),
            id: id.map(str::to_string),
            criteria: CriteriaArgs::default(),
        }
    }

    #[test]
    fn test_limit_resolution() {
        let config = CliConfig::for_testing();
        let mut criteria = CriteriaArgs::default();
        assert_eq!(criteria.limit(&config), Some(10));

        criteria.limit = Some(3);
        assert_eq!(criteria.limit(&config), Some(3));

        criteria.limit = None;
        criteria.no_limit = true;
        assert_eq!(criteria.limit(&config), None);
    }

    #[test]
    fn test_empty_repeatables_are_absent() {
        let criteria = CriteriaArgs::default();
        assert_eq!(criteria.kinds(), None);
        assert_eq!(criteria.authors(), None);
    }

    #[test]
    fn test_req_uses_config_default_limit() {
        let output = run_req(&req("hi", Some("s")), &CliConfig::for_testing()).unwrap();
        assert_eq!(output, r#"["REQ","s",{"limit":10,"search":"hi"}]"#);
    }

    #[test]
    fn test_req_rejects_unsafe_id() {
        let result = run_req(&req("hi", Some("bad\"id")), &CliConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_req_generates_id() {
        let output = run_req(&req("hi", None), &CliConfig::default()).unwrap();
        assert!(output.starts_with(r#"["REQ",""#));
        assert!(output.ends_with(r#"{"limit":100,"search":"hi"}]"#));
    }
}
