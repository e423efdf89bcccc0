use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::error::Error;

/// Enforces a minimum spacing between calls. Clones share the same floor.
#[derive(Clone, Debug)]
pub struct RateLimiter {
    last_request: Arc<Mutex<Option<Instant>>>,
    min_delay: Duration,
}

impl RateLimiter {
    pub fn new(max_calls_per_second: f64) -> Result<Self, Error> {
        if !max_calls_per_second.is_finite() || max_calls_per_second <= 0.0 {
            return Err(Error::Config(format!(
                "max calls per second must be a positive number, got {max_calls_per_second}"
            )));
        }
        let min_delay = Duration::try_from_secs_f64(1.0 / max_calls_per_second).map_err(|e| {
            Error::Config(format!("max calls per second {max_calls_per_second} is too small: {e}"))
        })?;
        Ok(Self {
            last_request: Arc::new(Mutex::new(None)),
            min_delay,
        })
    }

    pub fn min_delay(&self) -> Duration {
        self.min_delay
    }

    /// Waits until the floor has passed since the previous permitted call,
    /// then records this call. The lock is held across the sleep so that
    /// concurrent callers queue behind the updated timestamp.
    pub async fn wait(&self) {
        let mut last = self.last_request.lock().await;

        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.min_delay {
                tokio::time::sleep(self.min_delay - elapsed).await;
            }
        }

        *last = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_min_delay_from_budget() {
        let limiter = RateLimiter::new(20.0).unwrap();
        assert_eq!(limiter.min_delay(), Duration::from_millis(50));
    }

    #[test]
    fn test_rejects_non_positive_budget() {
        assert_matches!(RateLimiter::new(0.0), Err(Error::Config(_)));
        assert_matches!(RateLimiter::new(-1.0), Err(Error::Config(_)));
        assert_matches!(RateLimiter::new(f64::NAN), Err(Error::Config(_)));
    }

    #[test]
    fn test_rejects_budget_with_unrepresentable_interval() {
        assert_matches!(RateLimiter::new(1e-20), Err(Error::Config(_)));
        assert_matches!(RateLimiter::new(f64::MIN_POSITIVE), Err(Error::Config(_)));
        assert!(RateLimiter::new(0.001).is_ok());
    }

    #[tokio::test]
    async fn test_first_call_is_immediate() {
        let limiter = RateLimiter::new(1.0).unwrap();
        let start = Instant::now();
        limiter.wait().await;
        assert!(start.elapsed() < Duration::from_millis(500));
    }

    #[tokio::test]
    async fn test_sequential_calls_are_spaced() {
        let limiter = RateLimiter::new(10.0).unwrap();
        let start = Instant::now();
        for _ in 0..3 {
            limiter.wait().await;
        }
        assert!(start.elapsed() >= Duration::from_millis(200));
    }

    #[tokio::test]
    async fn test_concurrent_callers_share_the_floor() {
        let limiter = RateLimiter::new(10.0).unwrap();
        let stamps = Arc::new(std::sync::Mutex::new(Vec::new()));
        let start = Instant::now();

        let mut tasks = tokio::task::JoinSet::new();
        for _ in 0..4 {
            let limiter = limiter.clone();
            let stamps = stamps.clone();
            tasks.spawn(async move {
                limiter.wait().await;
                stamps.lock().unwrap().push(Instant::now());
            });
        }
        while tasks.join_next().await.is_some() {}

        let stamps = stamps.lock().unwrap();
        assert_eq!(stamps.len(), 4);
        let last = stamps.iter().max().unwrap();
        assert!(*last - start >= Duration::from_millis(300));
    }

    #[tokio::test]
    async fn test_separate_limiters_do_not_interfere() {
        let first = RateLimiter::new(1.0).unwrap();
        let second = RateLimiter::new(1.0).unwrap();
        first.wait().await;
        let start = Instant::now();
        second.wait().await;
        assert!(start.elapsed() < Duration::from_millis(500));
    }
}
