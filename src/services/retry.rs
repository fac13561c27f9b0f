use std::{future::Future, time::Duration};

use crate::errors::ApiError;

#[derive(Debug, Clone, Copy)]
pub enum Backoff {
    /// `base * (attempt + 1)`
    Linear(Duration),
    /// `base * 2^(attempt + 1)`
    Exponential(Duration),
}

impl Backoff {
    pub fn delay(&self, attempt: u32) -> Duration {
        match self {
            Backoff::Linear(base) => base.saturating_mul(attempt + 1),
            Backoff::Exponential(base) => {
                base.saturating_mul(2u32.saturating_pow(attempt.saturating_add(1)))
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff: Backoff,
}

impl RetryPolicy {
    pub fn linear(max_attempts: u32, base: Duration) -> Self {
        RetryPolicy {
            max_attempts,
            backoff: Backoff::Linear(base),
        }
    }

    pub fn exponential(max_attempts: u32, base: Duration) -> Self {
        RetryPolicy {
            max_attempts,
            backoff: Backoff::Exponential(base),
        }
    }
}

/// Runs `op` until it succeeds, fails with a non-retryable error, or the
/// attempt cap is hit. Rate limits wait out their own cool-down instead of the
/// backoff delay.
pub async fn retry<T, F, Fut>(policy: &RetryPolicy, label: &str, mut op: F) -> Result<T, ApiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let attempts = policy.max_attempts.max(1);
    let mut attempt = 0;

    loop {
        let error = match op().await {
            Ok(value) => return Ok(value),
            Err(e) => e,
        };

        if !error.is_retryable() || attempt + 1 >= attempts {
            return Err(error);
        }

        let delay = match &error {
            ApiError::RateLimited { cool_down, .. } => *cool_down,
            _ => policy.backoff.delay(attempt),
        };
        log::warn!(
            "{} failed (attempt {}/{}): {}, retrying in {:?}",
            label,
            attempt + 1,
            attempts,
            error,
            delay
        );
        tokio::time::sleep(delay).await;
        attempt += 1;
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::atomic::{AtomicU32, Ordering},
        time::Duration,
    };

    use super::{retry, Backoff, RetryPolicy};
    use crate::errors::ApiError;

    #[test]
    fn backoff_delays() {
        let linear = Backoff::Linear(Duration::from_secs(2));
        assert_eq!(linear.delay(0), Duration::from_secs(2));
        assert_eq!(linear.delay(2), Duration::from_secs(6));

        let exponential = Backoff::Exponential(Duration::from_secs(1));
        assert_eq!(exponential.delay(0), Duration::from_secs(2));
        assert_eq!(exponential.delay(2), Duration::from_secs(8));
    }

    #[tokio::test]
    async fn retries_transient_until_success() {
        let calls = &AtomicU32::new(0);
        let policy = RetryPolicy::linear(3, Duration::ZERO);

        let result = retry(&policy, "test", move || async move {
            match calls.fetch_add(1, Ordering::SeqCst) {
                0 | 1 => Err(ApiError::Transient("timeout".to_string())),
                _ => Ok(7),
            }
        })
        .await;

        assert_eq!(result.unwrap(), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn gives_up_after_cap() {
        let calls = &AtomicU32::new(0);
        let policy = RetryPolicy::exponential(3, Duration::ZERO);

        let result: Result<(), _> = retry(&policy, "test", move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(ApiError::Transient("502".to_string()))
        })
        .await;

        assert!(matches!(result, Err(ApiError::Transient(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn fatal_errors_are_not_retried() {
        let calls = &AtomicU32::new(0);
        let policy = RetryPolicy::linear(5, Duration::ZERO);

        let result: Result<(), _> = retry(&policy, "test", move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(ApiError::Unauthorized {
                code: 1000,
                message: "token expired".to_string(),
            })
        })
        .await;

        assert!(result.unwrap_err().is_fatal());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn rate_limit_uses_its_cool_down() {
        let calls = &AtomicU32::new(0);
        let policy = RetryPolicy::linear(2, Duration::from_secs(3600));

        let result = retry(&policy, "test", move || async move {
            match calls.fetch_add(1, Ordering::SeqCst) {
                0 => Err(ApiError::RateLimited {
                    reason: "low points".to_string(),
                    cool_down: Duration::ZERO,
                }),
                _ => Ok("done"),
            }
        })
        .await;

        assert_eq!(result.unwrap(), "done");
    }
}
