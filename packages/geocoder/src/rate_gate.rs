//! Global throttle for live geocoding calls.
//!
//! The provider's terms require spacing between requests, so all live
//! lookups — across every in-flight ingest request — serialize through
//! one [`RateGate`]. This is a simple minimum inter-call spacing, not a
//! token bucket: the effective call rate is capped at one per interval.

use std::time::{Duration, Instant};

use tokio::sync::Mutex;

/// Enforces a minimum delay between consecutive calls.
#[derive(Debug)]
pub struct RateGate {
    interval: Duration,
    last_call: Mutex<Option<Instant>>,
}

impl RateGate {
    /// Creates a gate with the given minimum spacing between calls.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_call: Mutex::new(None),
        }
    }

    /// Suspends until at least the configured interval has elapsed since
    /// the previous call, then records the current time as the new
    /// last-call timestamp.
    ///
    /// The lock is held across the sleep so concurrent callers serialize
    /// rather than all waking against the same stale timestamp.
    pub async fn wait(&self) {
        let mut last_call = self.last_call.lock().await;

        if let Some(last) = *last_call {
            let elapsed = last.elapsed();
            if elapsed < self.interval {
                tokio::time::sleep(self.interval - elapsed).await;
            }
        }

        *last_call = Some(Instant::now());
    }

    /// The configured minimum spacing.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }
}
