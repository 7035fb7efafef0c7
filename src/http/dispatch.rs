use std::sync::Arc;
use std::time::Duration;

use futures_util::future::join_all;
use rand::Rng;
use tokio::task::JoinError;

use crate::shutdown::ShutdownSender;
use crate::spec::RunSpecification;

use super::executor::{Outcome, RequestExecutor};

/// Stagger bounds in milliseconds. Delays are drawn independently per
/// request so a window never fires as one synchronized burst.
const STAGGER_MIN_MS: u64 = 1;
const STAGGER_MAX_MS: u64 = 999;

/// Fires `count` staggered executions for one window and joins all of them.
/// Returns exactly `count` outcomes (order irrelevant); under cancellation
/// the resolved outcomes are joined by cancellation-marked ones.
///
/// # Errors
///
/// Returns the join error if an execution task panics; individual request
/// failures never surface here.
pub(crate) async fn dispatch_window<E>(
    executor: &Arc<E>,
    spec: &RunSpecification,
    count: u64,
    window: u64,
    shutdown_tx: &ShutdownSender,
) -> Result<Vec<Outcome>, JoinError>
where
    E: RequestExecutor + 'static,
{
    if count == 0 {
        return Ok(Vec::new());
    }

    let capacity = usize::try_from(count).unwrap_or(usize::MAX);
    let mut handles = Vec::with_capacity(capacity);
    for _ in 0..count {
        let stagger =
            Duration::from_millis(rand::thread_rng().gen_range(STAGGER_MIN_MS..=STAGGER_MAX_MS));
        let relative_url = spec.generate_relative_url();
        let executor = Arc::clone(executor);
        let shutdown_rx = shutdown_tx.subscribe();
        handles.push(tokio::spawn(async move {
            executor
                .execute(relative_url, stagger, window, shutdown_rx)
                .await
        }));
    }

    let mut outcomes = Vec::with_capacity(handles.len());
    for joined in join_all(handles).await {
        outcomes.push(joined?);
    }
    Ok(outcomes)
}
