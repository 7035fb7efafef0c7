//! Structured run-event sink consumed by the scheduler and executor.
use tracing::info;

use crate::http::Outcome;
use crate::spec::RunSpecification;

/// Contract for a sink capturing semantic facts about a load run. The core
/// calls these as pure side-effecting notifications and never depends on a
/// return value.
pub(crate) trait RunEventSink: Send + Sync {
    fn log_started(&self, spec: &RunSpecification);

    fn log_finished(&self);

    fn log_response(&self, outcome: &Outcome);

    fn log_window_summary(&self, window: u64, successful: u64, total: u64, avg_latency_ms: u64);

    fn log_info(&self, message: &str);
}

/// Emits each run event as a structured tracing record.
pub(crate) struct TracingEventSink;

impl RunEventSink for TracingEventSink {
    fn log_started(&self, spec: &RunSpecification) {
        info!(
            duration_secs = spec.duration_secs(),
            start_rate = spec.start_rate(),
            max_rate = spec.max_rate(),
            verb = spec.verb().as_str(),
            base_url = spec.base_url().as_str(),
            headers = %spec.headers_summary(),
            "Started load run"
        );
    }

    fn log_finished(&self) {
        info!("Finished load run");
    }

    fn log_response(&self, outcome: &Outcome) {
        info!(
            window = outcome.window,
            requested_at = %outcome.requested_at.to_rfc3339(),
            url = %outcome.url,
            succeeded = outcome.succeeded,
            headers = %outcome.response_headers,
            latency_ms = outcome.latency_ms,
            body = %outcome.response_summary,
            "Received response"
        );
    }

    fn log_window_summary(&self, window: u64, successful: u64, total: u64, avg_latency_ms: u64) {
        info!(
            window,
            successful, total, avg_latency_ms, "Completed window"
        );
    }

    fn log_info(&self, message: &str) {
        info!("{}", message);
    }
}
