//! Startup warm-up.
//!
//! On boot the host may still be bringing up GPIO and the RF tool chain,
//! so the loop waits a fixed period before claiming any pin.

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::info;

/// Default warm-up period.
pub const WARMUP: Duration = Duration::from_secs(60);

/// Sleep for `period`. Returns `false` if shutdown was requested meanwhile.
pub async fn warm_up(period: Duration, shutdown: &CancellationToken) -> bool {
    if period.is_zero() {
        return true;
    }

    info!("Sleep {} seconds for booting", period.as_secs());
    tokio::select! {
        _ = shutdown.cancelled() => false,
        _ = tokio::time::sleep(period) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn zero_period_completes() {
        assert!(warm_up(Duration::ZERO, &CancellationToken::new()).await);
    }

    #[tokio::test]
    async fn short_period_completes() {
        assert!(warm_up(Duration::from_millis(5), &CancellationToken::new()).await);
    }

    #[tokio::test]
    async fn cancelled_warm_up_returns_false() {
        let token = CancellationToken::new();
        token.cancel();
        assert!(!warm_up(WARMUP, &token).await);
    }
}
