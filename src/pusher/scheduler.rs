use std::sync::Arc;
use std::time::Duration;

use tokio::time::{MissedTickBehavior, interval};

use crate::error::AppResult;
use crate::events::RunEventSink;
use crate::http::{Outcome, RequestExecutor, dispatch_window};
use crate::shutdown::ShutdownSender;
use crate::spec::RunSpecification;

use super::summary::WindowSummary;

/// Fixed window length the ramp function is defined over.
const WINDOW_LENGTH: Duration = Duration::from_secs(1);

/// Lifecycle of one load run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RunState {
    Idle,
    Running,
    Completed,
    Cancelled,
    Faulted,
}

/// Target request count for the given window: a linear ramp from the
/// starting rate with a hard ceiling at the max rate. The argument is the
/// tick index, not wall-clock seconds elapsed.
#[must_use]
pub(crate) fn request_count(window: u64, start_rate: u64, max_rate: u64) -> u64 {
    start_rate.saturating_add(window).min(max_rate)
}

/// Expected request total across the whole run, used by the response-logging
/// guard at the boundary.
#[must_use]
pub(crate) fn expected_total_requests(spec: &RunSpecification) -> u64 {
    (0..spec.duration_secs()).fold(0u64, |sum, window| {
        sum.saturating_add(request_count(window, spec.start_rate(), spec.max_rate()))
    })
}

/// Drives the per-window tick loop: one window per second, each window's
/// batch fully dispatched, joined, and summarized before the next begins.
pub(crate) struct LoadPusher<E> {
    executor: Arc<E>,
    sink: Arc<dyn RunEventSink>,
    state: RunState,
}

impl<E> LoadPusher<E>
where
    E: RequestExecutor + 'static,
{
    pub(crate) fn new(executor: Arc<E>, sink: Arc<dyn RunEventSink>) -> Self {
        Self {
            executor,
            sink,
            state: RunState::Idle,
        }
    }

    #[must_use]
    pub(crate) const fn state(&self) -> RunState {
        self.state
    }

    /// Runs the ramp to completion, cancellation, or fault, returning the
    /// terminal state. Windows are never pipelined: ticks fire at least one
    /// window length apart, and a window that overruns simply delays the
    /// next one.
    ///
    /// # Errors
    ///
    /// Returns the underlying join error when a dispatch task panics; the
    /// pusher is left in the `Faulted` state and emits no further windows.
    pub(crate) async fn push_load(
        &mut self,
        spec: &RunSpecification,
        shutdown_tx: &ShutdownSender,
    ) -> AppResult<RunState> {
        self.state = RunState::Running;
        self.sink.log_started(spec);

        let mut shutdown_rx = shutdown_tx.subscribe();
        let mut tick = interval(WINDOW_LENGTH);
        tick.set_missed_tick_behavior(MissedTickBehavior::Delay);

        for window in 0..spec.duration_secs() {
            tokio::select! {
                _ = shutdown_rx.recv() => {
                    self.state = RunState::Cancelled;
                    return Ok(self.state);
                }
                _ = tick.tick() => {}
            }

            let count = request_count(window, spec.start_rate(), spec.max_rate());
            let outcomes =
                match dispatch_window(&self.executor, spec, count, window, shutdown_tx).await {
                    Ok(outcomes) => outcomes,
                    Err(err) => {
                        self.state = RunState::Faulted;
                        return Err(err.into());
                    }
                };

            if outcomes.iter().any(Outcome::is_cancelled) {
                // Best-effort partial summary from whatever resolved before
                // the cancellation; already-emitted summaries stand.
                let resolved: Vec<Outcome> = outcomes
                    .into_iter()
                    .filter(|outcome| !outcome.is_cancelled())
                    .collect();
                self.emit_summary(&resolved);
                self.state = RunState::Cancelled;
                return Ok(self.state);
            }

            self.emit_summary(&outcomes);
        }

        self.state = RunState::Completed;
        self.sink.log_finished();
        Ok(self.state)
    }

    fn emit_summary(&self, outcomes: &[Outcome]) {
        if let Some(summary) = WindowSummary::fold(outcomes) {
            self.sink.log_window_summary(
                summary.window,
                summary.successful,
                summary.total,
                summary.avg_latency_ms,
            );
        }
    }
}
