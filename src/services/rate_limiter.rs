//! # Rate Limiter
//!
//! A sliding-window failed-unlock-attempt counter, keyed by wallet id.
//! Process-local and not persisted: a process restart forgets failures.

use crate::errors::{WalletError, WalletResult};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Sliding-window rate limiter, guarded by a single mutex.
pub struct RateLimiter {
    max_attempts: u32,
    window: Duration,
    history: Mutex<HashMap<String, Vec<Instant>>>,
}

impl RateLimiter {
    /// Construct a limiter allowing `max_attempts` failures per `window`.
    pub fn new(max_attempts: u32, window: Duration) -> Self {
        Self {
            max_attempts,
            window,
            history: Mutex::new(HashMap::new()),
        }
    }

    /// Record an attempt for `id` and return whether it is permitted.
    ///
    /// Callers record only failed attempts; a caller that never calls
    /// `record_failure` never trips the limiter.
    pub fn check(&self, id: &str) -> WalletResult<()> {
        let mut history = self.history.lock().map_err(|_| {
            WalletError::Internal("rate limiter mutex poisoned".to_string())
        })?;

        let now = Instant::now();
        let attempts = history.entry(id.to_string()).or_default();
        attempts.retain(|&t| now.duration_since(t) < self.window);

        if attempts.len() as u32 >= self.max_attempts {
            let oldest = attempts.first().copied().unwrap_or(now);
            let elapsed = now.duration_since(oldest);
            let retry_after = self.window.saturating_sub(elapsed);
            return Err(WalletError::RateLimited {
                retry_after_ms: retry_after.as_millis() as u64,
            });
        }

        Ok(())
    }

    /// Record a failed attempt for `id`.
    pub fn record_failure(&self, id: &str) -> WalletResult<()> {
        let mut history = self.history.lock().map_err(|_| {
            WalletError::Internal("rate limiter mutex poisoned".to_string())
        })?;
        history.entry(id.to_string()).or_default().push(Instant::now());
        Ok(())
    }

    /// Clear the failure history for `id`, called on a successful unlock.
    pub fn reset(&self, id: &str) -> WalletResult<()> {
        let mut history = self.history.lock().map_err(|_| {
            WalletError::Internal("rate limiter mutex poisoned".to_string())
        })?;
        history.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allows_up_to_max_attempts() {
        let limiter = RateLimiter::new(3, Duration::from_secs(60));
        for _ in 0..3 {
            assert!(limiter.check("wallet-1").is_ok());
            limiter.record_failure("wallet-1").unwrap();
        }
        let result = limiter.check("wallet-1");
        assert!(matches!(result, Err(WalletError::RateLimited { .. })));
    }

    #[test]
    fn test_reset_clears_history() {
        let limiter = RateLimiter::new(3, Duration::from_secs(60));
        for _ in 0..3 {
            limiter.record_failure("wallet-1").unwrap();
        }
        assert!(limiter.check("wallet-1").is_err());
        limiter.reset("wallet-1").unwrap();
        assert!(limiter.check("wallet-1").is_ok());
    }

    #[test]
    fn test_wallets_are_independent() {
        let limiter = RateLimiter::new(1, Duration::from_secs(60));
        limiter.record_failure("wallet-1").unwrap();
        assert!(limiter.check("wallet-1").is_err());
        assert!(limiter.check("wallet-2").is_ok());
    }

    #[test]
    fn test_rate_limited_error_has_positive_retry_after() {
        let limiter = RateLimiter::new(1, Duration::from_secs(60));
        limiter.record_failure("wallet-1").unwrap();
        match limiter.check("wallet-1") {
            Err(WalletError::RateLimited { retry_after_ms }) => assert!(retry_after_ms > 0),
            other => panic!("expected ErrRateLimited, got {:?}", other),
        }
    }
}
