use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Url};
use tokio::time::{Instant, sleep};

use crate::args::HttpVerb;
use crate::error::HttpError;
use crate::events::RunEventSink;
use crate::shutdown::ShutdownReceiver;
use crate::spec::RunSpecification;

pub(crate) const TIMEOUT_SUMMARY: &str = "Timeout";
pub(crate) const CANCELLED_SUMMARY: &str = "Cancelled";

/// Result record of one request attempt. Immutable after creation; consumed
/// by the per-window fold and then discarded.
#[derive(Debug, Clone)]
pub(crate) struct Outcome {
    pub window: u64,
    pub requested_at: DateTime<Utc>,
    pub url: String,
    pub succeeded: bool,
    pub latency_ms: u64,
    pub response_headers: String,
    pub response_summary: String,
}

impl Outcome {
    pub(crate) fn cancelled(window: u64, url: String) -> Self {
        Self {
            window,
            requested_at: Utc::now(),
            url,
            succeeded: false,
            latency_ms: 0,
            response_headers: String::new(),
            response_summary: CANCELLED_SUMMARY.to_owned(),
        }
    }

    #[must_use]
    pub(crate) fn is_cancelled(&self) -> bool {
        self.response_summary == CANCELLED_SUMMARY
    }
}

/// Performs one HTTP call after an artificial stagger delay. Every failure
/// path folds into the returned [`Outcome`]; nothing propagates upward.
#[async_trait]
pub(crate) trait RequestExecutor: Send + Sync {
    async fn execute(
        &self,
        relative_url: String,
        stagger: Duration,
        window: u64,
        shutdown: ShutdownReceiver,
    ) -> Outcome;
}

/// reqwest-backed executor sharing one connection pool across all windows.
/// Default headers and the negotiated content type are fixed for the run.
pub(crate) struct HttpRequestExecutor {
    client: Client,
    base_url: Url,
    verb: HttpVerb,
    body: String,
    content_type: String,
    sink: Arc<dyn RunEventSink>,
    log_responses: bool,
}

impl HttpRequestExecutor {
    pub(crate) fn from_spec(
        spec: &RunSpecification,
        sink: Arc<dyn RunEventSink>,
        log_responses: bool,
    ) -> Result<Self, HttpError> {
        let mut default_headers = HeaderMap::new();
        for (name, value) in spec.headers() {
            // The content type is negotiated separately and attached per request.
            if name.eq_ignore_ascii_case("content-type") {
                continue;
            }
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|err| {
                    HttpError::InvalidHeaderName {
                        name: name.clone(),
                        source: err,
                    }
                })?;
            let header_value =
                HeaderValue::from_str(value).map_err(|err| HttpError::InvalidHeaderValue {
                    name: name.clone(),
                    source: err,
                })?;
            default_headers.insert(header_name, header_value);
        }

        let client = Client::builder()
            .timeout(Duration::from_millis(spec.timeout_ms()))
            .default_headers(default_headers)
            .build()
            .map_err(|err| HttpError::BuildClientFailed { source: err })?;

        Ok(Self {
            client,
            base_url: spec.base_url().clone(),
            verb: spec.verb(),
            body: spec.body().unwrap_or_default().to_owned(),
            content_type: spec.content_type().to_owned(),
            sink,
            log_responses,
        })
    }

    async fn send(&self, url: Url) -> reqwest::Result<reqwest::Response> {
        match self.verb {
            HttpVerb::Get => self.client.get(url).send().await,
            HttpVerb::Post => {
                self.client
                    .post(url)
                    .header(CONTENT_TYPE, &self.content_type)
                    .body(self.body.clone())
                    .send()
                    .await
            }
            HttpVerb::Put => {
                self.client
                    .put(url)
                    .header(CONTENT_TYPE, &self.content_type)
                    .body(self.body.clone())
                    .send()
                    .await
            }
        }
    }

    fn emit(&self, outcome: &Outcome) {
        if !self.log_responses {
            return;
        }
        self.sink.log_response(outcome);
    }
}

#[async_trait]
impl RequestExecutor for HttpRequestExecutor {
    async fn execute(
        &self,
        relative_url: String,
        stagger: Duration,
        window: u64,
        mut shutdown: ShutdownReceiver,
    ) -> Outcome {
        tokio::select! {
            _ = shutdown.recv() => return Outcome::cancelled(window, relative_url),
            () = sleep(stagger) => {}
        }

        let url = match self.base_url.join(&relative_url) {
            Ok(url) => url,
            Err(err) => {
                let outcome = Outcome {
                    window,
                    requested_at: Utc::now(),
                    url: relative_url,
                    succeeded: false,
                    latency_ms: 0,
                    response_headers: String::new(),
                    response_summary: format!("InvalidUrl: {}", err),
                };
                self.emit(&outcome);
                return outcome;
            }
        };

        let requested_at = Utc::now();
        let started = Instant::now();
        let result = tokio::select! {
            _ = shutdown.recv() => return Outcome::cancelled(window, String::from(url)),
            result = self.send(url.clone()) => result,
        };
        let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        let outcome = match result {
            Ok(response) => {
                let status = response.status().as_u16();
                Outcome {
                    window,
                    requested_at,
                    url: String::from(response.url().clone()),
                    succeeded: (200..=206).contains(&status),
                    latency_ms,
                    response_headers: format_headers(response.headers()),
                    response_summary: status.to_string(),
                }
            }
            Err(err) => Outcome {
                window,
                requested_at,
                url: String::from(url),
                succeeded: false,
                latency_ms,
                response_headers: String::new(),
                response_summary: classify_failure(&err).to_owned(),
            },
        };

        self.emit(&outcome);
        outcome
    }
}

fn classify_failure(err: &reqwest::Error) -> &'static str {
    if err.is_timeout() {
        TIMEOUT_SUMMARY
    } else if err.is_connect() {
        "Connect"
    } else if err.is_redirect() {
        "Redirect"
    } else if err.is_body() || err.is_decode() {
        "Body"
    } else if err.is_request() {
        "Request"
    } else {
        "Transport"
    }
}

fn format_headers(headers: &HeaderMap) -> String {
    headers
        .iter()
        .map(|(name, value)| {
            format!("{}: {}", name, value.to_str().unwrap_or("<binary>"))
        })
        .collect::<Vec<String>>()
        .join(", ")
}
