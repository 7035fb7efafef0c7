use clap::Parser;

use super::parsers::parse_header;
use super::types::HttpVerb;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Rate-ramping async HTTP load pusher - fires an increasing number of staggered requests per second against a target URL and emits per-second success/latency summaries."
)]
pub struct PusherArgs {
    /// Target base URL to push load against
    #[arg(long, short)]
    pub url: Option<String>,

    /// Run duration in seconds (default 60)
    #[arg(long, short = 't')]
    pub duration: Option<u64>,

    /// Requests/second for the first window (default 10)
    #[arg(long = "start-rate")]
    pub start_rate: Option<u64>,

    /// Capped maximum requests/second across the run (default 100)
    #[arg(long = "max-rate")]
    pub max_rate: Option<u64>,

    /// Per-request timeout in milliseconds (default 1000)
    #[arg(long = "timeout")]
    pub timeout_ms: Option<u64>,

    /// HTTP verb to use (default get)
    #[arg(long, short = 'X', ignore_case = true)]
    pub verb: Option<HttpVerb>,

    /// Request body data (for POST/PUT)
    #[arg(long, short = 'd')]
    pub data: Option<String>,

    /// Request body data encoded in base64
    #[arg(long = "data-base64", conflicts_with = "data")]
    pub data_base64: Option<String>,

    /// HTTP headers in 'Key: Value' format (repeatable)
    #[arg(long = "header", short = 'H', value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    /// Query parameter name filled from the value pool per request
    #[arg(long = "query-param", requires = "query_values")]
    pub query_param: Option<String>,

    /// Pool value drawn for --query-param (repeatable)
    #[arg(long = "query-value")]
    pub query_values: Vec<String>,

    /// Distinct pool values drawn per request (default 2)
    #[arg(long = "query-pick")]
    pub query_pick: Option<usize>,

    /// Path to a TOML/JSON config file
    #[arg(long, short)]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}
