use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid header format: '{value}'. Expected 'Key: Value'")]
    InvalidHeaderFormat { value: String },
    #[error("Duplicate header '{name}'. Header keys must be unique.")]
    DuplicateHeader { name: String },
    #[error("Duration must be > 0 seconds.")]
    DurationZero,
    #[error("Duration {value}s exceeds limit of {limit}s.")]
    DurationTooLong { value: u64, limit: u64 },
    #[error("Starting rate {value} exceeds limit of {limit} requests/second.")]
    StartRateTooHigh { value: u64, limit: u64 },
    #[error("Max rate must be > 0.")]
    MaxRateZero,
    #[error("Max rate {value} exceeds limit of {limit} requests/second.")]
    MaxRateTooHigh { value: u64, limit: u64 },
    #[error("Timeout must be > 0 ms.")]
    TimeoutZero,
    #[error("Timeout {value}ms exceeds limit of {limit}ms.")]
    TimeoutTooLong { value: u64, limit: u64 },
    #[error("Missing URL (set --url or provide in config).")]
    MissingUrl,
    #[error("Invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Base URL '{url}' must be an absolute http(s) URL.")]
    BaseUrlNotAbsolute { url: String },
    #[error("Invalid base64 body: {source}")]
    InvalidBase64Body {
        #[source]
        source: base64::DecodeError,
    },
    #[error("Query pool requires at least one value.")]
    QueryPoolEmpty,
    #[error("Query pick count must be > 0.")]
    QueryPickZero,
    #[error("Query pick {pick} exceeds pool size {pool}.")]
    QueryPickExceedsPool { pick: usize, pool: usize },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
