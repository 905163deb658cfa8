/*
[INPUT]:  Minimum spacing between outbound calls
[OUTPUT]: Admission instants, delayed as needed
[POS]:    HTTP layer - outbound call pacing shared by all requests of a client
[UPDATE]: When changing pacing policy or lock discipline
*/

use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{Instant, sleep};
use tracing::{debug, trace};

/// Flickr allows 3600 calls per hour per key.
pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_secs(1);

/// Admits at most one call per `min_interval`.
///
/// There is no burst allowance: a caller arriving after a long idle period
/// goes straight through, but two callers can never be admitted closer
/// together than the interval. Waiting happens with the lock held, so
/// concurrent callers are admitted one at a time in lock order.
#[derive(Debug)]
pub struct RateLimiter {
    min_interval: Duration,
    last_admitted: Mutex<Option<Instant>>,
}

impl RateLimiter {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_admitted: Mutex::new(None),
        }
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Wait until a call may start, then record it. Returns the admission time.
    pub async fn acquire(&self) -> Instant {
        let mut last_admitted = self.last_admitted.lock().await;

        if let Some(previous) = *last_admitted {
            let elapsed = previous.elapsed();
            if elapsed < self.min_interval {
                let wait = self.min_interval - elapsed;
                debug!(wait_ms = wait.as_millis() as u64, "rate limiter delaying call");
                sleep(wait).await;
            }
        }

        let now = Instant::now();
        *last_admitted = Some(now);
        trace!("rate limiter admitted call");
        now
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_INTERVAL)
    }
}
