//! Retry policy for failed completion attempts

use std::time::Duration;
use async_trait::async_trait;
use log::debug;

/// Bounded retry with a fixed pause between attempts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy
{   /// Attempts in total, including the first (at least 1)
    pub max_attempts: usize
  , /// Pause between consecutive attempts
    pub pause: Duration
}

impl RetryPolicy
{   /// Create a new retry policy
    pub fn new(
      max_attempts: usize
    , pause: Duration
    ) -> Self
    {   RetryPolicy
        {   max_attempts: max_attempts.max(1)
          , pause
        }
    }

    /// Whether another attempt is allowed after `attempt` failed
    pub fn should_retry(&self, attempt: usize) -> bool
    {   let retry = attempt < self.max_attempts;
        debug!(
          "Attempt {}/{} failed, retry: {}",
          attempt, self.max_attempts, retry
        );
        retry
    }
}

impl Default for RetryPolicy
{   fn default() -> Self
    {   RetryPolicy::new(5, Duration::from_secs(1))
    }
}

/// Waits out the pause between attempts
#[async_trait]
pub trait Sleeper: Send + Sync
{   async fn sleep(&self, duration: Duration);
}

/// Sleeps on the tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper
{   async fn sleep(&self, duration: Duration)
    {   tokio::time::sleep(duration).await
    }
}
