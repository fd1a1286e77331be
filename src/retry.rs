//! Retry policy hook for callers wrapping generate calls
//!
//! The library itself never retries: a failed generate is
//! surfaced as-is. The service exposes a policy built from its
//! configured retry budget so callers can drive their own loop.

use std::time::Duration;
use log::debug;

/// Retry policy for failed requests
#[derive(Debug, Clone)]
pub struct RetryPolicy
{   pub max_retries: usize
  , pub backoff_multiplier: f32
  , pub initial_backoff: Duration
}

impl RetryPolicy
{   /// Create a new retry policy
    pub fn new(
      max_retries: usize
    , backoff_multiplier: f32
    , initial_backoff_ms: u64
    ) -> Self
    {   RetryPolicy
        {   max_retries
          , backoff_multiplier
          , initial_backoff: Duration::from_millis(
              initial_backoff_ms
            )
        }
    }

    /// Calculate backoff duration for attempt number
    pub fn backoff_for_attempt(
      &self
    , attempt: usize
    ) -> Duration
    {   debug!("Calculating backoff for attempt {}", attempt);
        let multiplier
          = self.backoff_multiplier.powi(attempt as i32);
        Duration::from_millis(
          (self.initial_backoff.as_millis() as f32
            * multiplier) as u64
        )
    }

    /// True while the attempt number is inside the retry budget
    pub fn should_retry(&self, attempt: usize) -> bool
    {   attempt < self.max_retries
    }
}

impl Default for RetryPolicy
{   fn default() -> Self
    {   RetryPolicy::new(5, 2.0, 100)
    }
}
