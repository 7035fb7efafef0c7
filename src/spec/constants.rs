/// Maximum run duration in seconds (5 hours).
pub(crate) const MAX_TIME_DURATION_SECS: u64 = 18_000;

/// Default run duration in seconds.
pub(crate) const DEFAULT_DURATION_SECS: u64 = 60;

/// Default requests/second for the first window.
pub(crate) const DEFAULT_STARTING_RATE: u64 = 10;

/// Maximum allowed requests/second for the first window.
pub(crate) const MAX_STARTING_RATE: u64 = 50_000;

/// Default capped maximum requests/second across the run.
pub(crate) const DEFAULT_MAX_RATE: u64 = 100;

/// Maximum allowed capped requests/second across the run.
pub(crate) const MAX_CAPPED_RATE: u64 = 50_000;

/// Default per-request timeout in milliseconds.
pub(crate) const DEFAULT_TIMEOUT_MS: u64 = 1_000;

/// Maximum per-request timeout in milliseconds.
pub(crate) const MAX_TIMEOUT_MS: u64 = 1_000;

/// Expected request total over a run above which per-response logging is
/// suppressed to protect the event sink.
pub(crate) const MAX_LOGGED_RESPONSES: u64 = 3_000_000;

/// Distinct pool values drawn per request by the query-pool URL source.
pub(crate) const DEFAULT_QUERY_PICK: usize = 2;
