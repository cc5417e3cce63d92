//! Deadlines for External Calls
//!
//! Every call into a store the process does not own (revocation registry,
//! identity store) is bounded. A call that does not finish in time is
//! dropped, which cancels it cooperatively.

use std::future::Future;
use std::time::Duration;

/// The wrapped call did not complete before its deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("operation exceeded its {0:?} deadline")]
pub struct DeadlineExceeded(pub Duration);

/// Run `fut` with an upper bound on its duration
pub async fn within<F, T>(limit: Duration, fut: F) -> Result<T, DeadlineExceeded>
where
    F: Future<Output = T>,
{
    tokio::time::timeout(limit, fut)
        .await
        .map_err(|_| DeadlineExceeded(limit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_completes_within_deadline() {
        let value = within(Duration::from_millis(200), async { 7 }).await;
        assert_eq!(value, Ok(7));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_call_is_cut_off() {
        let result = within(Duration::from_millis(50), async {
            tokio::time::sleep(Duration::from_secs(10)).await;
            7
        })
        .await;
        assert_eq!(result, Err(DeadlineExceeded(Duration::from_millis(50))));
    }
}
