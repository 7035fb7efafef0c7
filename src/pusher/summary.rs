use crate::http::Outcome;

/// Aggregate success/latency statistics for one window's outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WindowSummary {
    pub window: u64,
    pub total: u64,
    pub successful: u64,
    pub avg_latency_ms: u64,
}

impl WindowSummary {
    /// Folds one window's outcomes into a summary. Returns `None` for an
    /// empty window, which is reachable when the starting rate is zero.
    pub(crate) fn fold(outcomes: &[Outcome]) -> Option<Self> {
        let first = outcomes.first()?;

        let mut total: u64 = 0;
        let mut successful: u64 = 0;
        let mut latency_sum: u64 = 0;
        for outcome in outcomes {
            total = total.saturating_add(1);
            if outcome.succeeded {
                successful = successful.saturating_add(1);
            }
            latency_sum = latency_sum.saturating_add(outcome.latency_ms);
        }

        Some(Self {
            window: first.window,
            total,
            successful,
            avg_latency_ms: latency_sum.checked_div(total).unwrap_or(0),
        })
    }
}
