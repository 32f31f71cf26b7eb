//! # Latency Simulator
//!
//! Stands in for network round-trip time. Each service operation awaits
//! [`simulate_latency`] once before touching its store.

use std::time::Duration;

/// Suspends the calling task for `duration`. A zero duration returns immediately.
pub async fn simulate_latency(duration: Duration) {
    if !duration.is_zero() {
        tokio::time::sleep(duration).await;
    }
}
