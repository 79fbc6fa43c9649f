//! Fake-clock helpers for carousel integration tests.
#![allow(dead_code)]

use std::time::Duration;

/// Let spawned ticker tasks observe timers that have already expired.
pub async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

/// Advance the paused clock and let ticker tasks catch up.
pub async fn advance(by: Duration) {
    tokio::time::advance(by).await;
    settle().await;
}

/// Advance in one-second steps, checking in with ticker tasks after each.
pub async fn advance_secs(secs: u64) {
    for _ in 0..secs {
        advance(Duration::from_secs(1)).await;
    }
}

pub const fn secs(n: u64) -> Duration {
    Duration::from_secs(n)
}
