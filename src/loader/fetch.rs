use std::time::Duration;

use tokio_util::sync::CancellationToken;

/// Resolve to `payload` after `delay`, or to `None` once `cancel` fires.
///
/// Cancellation wins ties: a token cancelled before the delay elapses always
/// yields `None`, even if the timer is also ready on the same poll.
pub async fn simulate_fetch<T>(
    payload: T,
    delay: Duration,
    cancel: CancellationToken,
) -> Option<T> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => None,
        _ = tokio::time::sleep(delay) => Some(payload),
    }
}
