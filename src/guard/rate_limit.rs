use std::time::Duration;

use super::AttemptStore;

/// Sliding-window limiter over the persisted attempt history, with an extra
/// cooldown once the window limit has been hit.
pub struct RateLimiter {
    window_ms: i64,
    max_attempts: usize,
    cooldown_ms: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitStatus {
    pub limited: bool,
    pub remaining_seconds: i64,
}

impl RateLimiter {
    pub fn new(window: Duration, max_attempts: usize, cooldown: Duration) -> Self {
        Self {
            window_ms: window.as_millis() as i64,
            max_attempts,
            cooldown_ms: cooldown.as_millis() as i64,
        }
    }

    /// Reports whether a new submission may proceed at `now_ms`.
    ///
    /// Once the limit has tripped but the cooldown has elapsed, the status
    /// still reads `limited` with no seconds remaining; callers surface the
    /// generic wait message for that case.
    pub fn check(&self, store: &dyn AttemptStore, now_ms: i64) -> RateLimitStatus {
        let history = store.read();
        let recent_attempts = history
            .iter()
            .filter(|&&recorded| now_ms - recorded < self.window_ms)
            .count();
        let last_attempt = history.iter().copied().max().unwrap_or(0);

        if recent_attempts >= self.max_attempts && now_ms - last_attempt < self.cooldown_ms {
            let remaining = self.cooldown_ms - (now_ms - last_attempt);
            return RateLimitStatus {
                limited: true,
                remaining_seconds: (remaining as u64).div_ceil(1000) as i64,
            };
        }

        RateLimitStatus {
            limited: recent_attempts >= self.max_attempts,
            remaining_seconds: 0,
        }
    }

    /// Appends the attempt at `now_ms`, prunes entries older than the
    /// window, persists the pruned history and returns the in-window count.
    pub fn record_attempt(&self, store: &mut dyn AttemptStore, now_ms: i64) -> usize {
        let mut history = store.read();
        history.push(now_ms);
        history.retain(|&recorded| now_ms - recorded < self.window_ms);
        store.write(&history);
        history.len()
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(Duration::from_secs(60), 3, Duration::from_secs(300))
    }
}
