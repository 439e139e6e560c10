use clap::Parser;

use super::parsers::{parse_bool_env, parse_positive_u64, parse_positive_usize};
use super::types::{HttpMethod, OutputFormat, PositiveU64, PositiveUsize};

pub(crate) const DEFAULT_REQUESTS: u64 = 100;
pub(crate) const DEFAULT_CONCURRENCY: usize = 10;
pub(crate) const DEFAULT_RAND_ID_TYPE: &str = "string";
pub(crate) const DEFAULT_RAND_ID_CHRS: usize = 10;
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Concurrent HTTP load generator - fixed worker pool, status-code histogram and throughput report."
)]
pub struct TesterArgs {
    /// Path to a .env file loaded before resolving environment overrides
    #[arg(long = "envpath")]
    pub env_path: Option<String>,

    /// URL of the service to be tested
    #[arg(long, short)]
    pub url: Option<String>,

    /// Total number of requests
    #[arg(
        long,
        short = 'n',
        default_value_t = PositiveU64::DEFAULT_REQUESTS,
        value_parser = parse_positive_u64
    )]
    pub requests: PositiveU64,

    /// Number of simultaneous workers
    #[arg(
        long,
        short = 'c',
        default_value_t = PositiveUsize::DEFAULT_CONCURRENCY,
        value_parser = parse_positive_usize
    )]
    pub concurrency: PositiveUsize,

    /// HTTP method to use (GET or POST)
    #[arg(long, short = 'X', default_value = "get", ignore_case = true)]
    pub verb: HttpMethod,

    /// Path to a JSON file used as body for POST requests
    #[arg(long = "jsonpath")]
    pub json_path: Option<String>,

    /// Type of random id injected into the JSON body (number or string)
    #[arg(long = "rand-id-type", default_value = DEFAULT_RAND_ID_TYPE)]
    pub rand_id_type: String,

    /// Number of characters or digits for the random id
    #[arg(long = "rand-id-chrs", default_value_t = DEFAULT_RAND_ID_CHRS)]
    pub rand_id_chrs: usize,

    /// Per-request timeout in seconds
    #[arg(
        long = "timeout",
        default_value_t = PositiveU64::DEFAULT_TIMEOUT_SECS,
        value_parser = parse_positive_u64
    )]
    pub timeout_secs: PositiveU64,

    /// Report format printed to stdout
    #[arg(long = "output-format", default_value = "text", ignore_case = true)]
    pub output_format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,
}
