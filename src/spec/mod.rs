//! Immutable, validated description of one load run.
mod constants;
mod urls;


use std::collections::BTreeMap;
use std::sync::Arc;

use url::Url;

use crate::args::HttpVerb;
use crate::error::ValidationError;

pub(crate) use constants::{
    DEFAULT_DURATION_SECS, DEFAULT_MAX_RATE, DEFAULT_QUERY_PICK, DEFAULT_STARTING_RATE,
    DEFAULT_TIMEOUT_MS, MAX_CAPPED_RATE, MAX_LOGGED_RESPONSES, MAX_STARTING_RATE,
    MAX_TIME_DURATION_SECS, MAX_TIMEOUT_MS,
};
pub(crate) use urls::{BasePathUrls, QueryPoolUrls, RelativeUrlSource};

const FALLBACK_CONTENT_TYPE: &str = "application/json";

/// Raw fields for a [`RunSpecification`], validated on construction.
pub(crate) struct RunSpecificationParams {
    pub duration_secs: u64,
    pub start_rate: u64,
    pub max_rate: u64,
    pub base_url: String,
    pub timeout_ms: u64,
    pub verb: HttpVerb,
    pub body: Option<String>,
    pub headers: Vec<(String, String)>,
}

/// Validated description of one load run. Constructed once, never mutated,
/// owned by the scheduler for the run's lifetime.
#[derive(Clone)]
pub(crate) struct RunSpecification {
    duration_secs: u64,
    start_rate: u64,
    max_rate: u64,
    base_url: Url,
    timeout_ms: u64,
    verb: HttpVerb,
    body: Option<String>,
    headers: BTreeMap<String, String>,
    relative_urls: Arc<dyn RelativeUrlSource>,
}

impl RunSpecification {
    /// Builds a specification with the default (base path) URL source.
    pub(crate) fn new(params: RunSpecificationParams) -> Result<Self, ValidationError> {
        Self::with_url_source(params, Arc::new(BasePathUrls))
    }

    /// Builds a specification with an explicit relative-URL source.
    pub(crate) fn with_url_source(
        params: RunSpecificationParams,
        relative_urls: Arc<dyn RelativeUrlSource>,
    ) -> Result<Self, ValidationError> {
        validate_invariants(&params)?;

        let base_url = Url::parse(&params.base_url).map_err(|err| {
            ValidationError::InvalidBaseUrl {
                url: params.base_url.clone(),
                source: err,
            }
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ValidationError::BaseUrlNotAbsolute {
                url: params.base_url,
            });
        }

        let mut headers = BTreeMap::new();
        for (name, value) in params.headers {
            if headers.insert(name.clone(), value).is_some() {
                return Err(ValidationError::DuplicateHeader { name });
            }
        }

        Ok(Self {
            duration_secs: params.duration_secs,
            start_rate: params.start_rate,
            max_rate: params.max_rate,
            base_url,
            timeout_ms: params.timeout_ms,
            verb: params.verb,
            body: params.body,
            headers,
            relative_urls,
        })
    }

    #[must_use]
    pub(crate) const fn duration_secs(&self) -> u64 {
        self.duration_secs
    }

    #[must_use]
    pub(crate) const fn start_rate(&self) -> u64 {
        self.start_rate
    }

    #[must_use]
    pub(crate) const fn max_rate(&self) -> u64 {
        self.max_rate
    }

    #[must_use]
    pub(crate) const fn base_url(&self) -> &Url {
        &self.base_url
    }

    #[must_use]
    pub(crate) const fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    #[must_use]
    pub(crate) const fn verb(&self) -> HttpVerb {
        self.verb
    }

    #[must_use]
    pub(crate) fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    #[must_use]
    pub(crate) const fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// Relative URL for the next request, delegated to the composed source.
    #[must_use]
    pub(crate) fn generate_relative_url(&self) -> String {
        self.relative_urls.relative_url()
    }

    /// Content type negotiated from the headers, falling back to JSON.
    #[must_use]
    pub(crate) fn content_type(&self) -> &str {
        self.headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case("content-type"))
            .map_or(FALLBACK_CONTENT_TYPE, |(_, value)| value.as_str())
    }

    /// One-line `name: value` rendering of the headers for the start log.
    #[must_use]
    pub(crate) fn headers_summary(&self) -> String {
        self.headers
            .iter()
            .map(|(name, value)| format!("{}: {}", name, value))
            .collect::<Vec<String>>()
            .join(", ")
    }
}

fn validate_invariants(params: &RunSpecificationParams) -> Result<(), ValidationError> {
    if params.duration_secs == 0 {
        return Err(ValidationError::DurationZero);
    }
    if params.duration_secs > MAX_TIME_DURATION_SECS {
        return Err(ValidationError::DurationTooLong {
            value: params.duration_secs,
            limit: MAX_TIME_DURATION_SECS,
        });
    }
    if params.start_rate > MAX_STARTING_RATE {
        return Err(ValidationError::StartRateTooHigh {
            value: params.start_rate,
            limit: MAX_STARTING_RATE,
        });
    }
    if params.max_rate == 0 {
        return Err(ValidationError::MaxRateZero);
    }
    if params.max_rate > MAX_CAPPED_RATE {
        return Err(ValidationError::MaxRateTooHigh {
            value: params.max_rate,
            limit: MAX_CAPPED_RATE,
        });
    }
    if params.timeout_ms == 0 {
        return Err(ValidationError::TimeoutZero);
    }
    if params.timeout_ms > MAX_TIMEOUT_MS {
        return Err(ValidationError::TimeoutTooLong {
            value: params.timeout_ms,
            limit: MAX_TIMEOUT_MS,
        });
    }
    Ok(())
}
