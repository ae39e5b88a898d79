use std::time::SystemTime;
use log::{debug, trace, error, info, warn};

use crate::failover::{RetryPolicy, Sleeper, TokioSleeper};
use crate::providers::Transport;
use crate::request::{CompletionAttempt, CompletionRequest, CompletionResult};
use crate::transcript::TranscriptLog;

/// Sends prompts through a transport with bounded retry,
/// recording each successful round-trip to a transcript log
pub struct CompletionClient
{   transport: Box<dyn Transport>
  , transcript: Box<dyn TranscriptLog>
  , policy: RetryPolicy
  , sleeper: Box<dyn Sleeper>
}

impl CompletionClient
{   /// Create a client with the default policy (5 attempts, 1s pause)
    pub fn new(
      transport: impl Transport + 'static
    , transcript: impl TranscriptLog + 'static
    ) -> Self
    {   debug!("Creating CompletionClient");
        CompletionClient
        {   transport: Box::new(transport)
          , transcript: Box::new(transcript)
          , policy: RetryPolicy::default()
          , sleeper: Box::new(TokioSleeper)
        }
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self
    {   self.policy = policy;
        self
    }

    /// Replace the wall-clock pause between attempts
    pub fn with_sleeper(mut self, sleeper: impl Sleeper + 'static) -> Self
    {   self.sleeper = Box::new(sleeper);
        self
    }

    /// Complete `prompt`, retrying any failed attempt until the
    /// policy runs out.
    ///
    /// An attempt fails on a remote error or when its transcript
    /// cannot be written; either way it ends, at worst, in
    /// `CompletionResult::RetryExhausted`. `Err` is reserved for an
    /// invalid prompt or options.
    pub async fn complete(
      &self
    , prompt: &str
    , options: &crate::config::CompletionOptions
    ) -> Result<CompletionResult, crate::error::Error>
    {   let request = CompletionRequest::new(prompt, options)?;
        trace!("Prompt after sanitizing: {:?}", request.prompt());

        let mut number = 0usize;
        loop
        {   number += 1;
            let attempt = self.attempt(number, &request).await;

            let failure = match &attempt.outcome
            {   Ok(text) => match self.transcript.record(&attempt, text)
                {   Ok(()) => {
                      info!(
                        "Completion succeeded on attempt {}/{}",
                        number, self.policy.max_attempts
                      );
                      return Ok(CompletionResult::Success(text.clone()));
                    }
                  , Err(e) => e
                }
              , Err(e) => e.clone()
            };

            if failure.is_remote()
            {   warn!("Error communicating with OpenAI: {}", failure);
            } else
            {   warn!("Failed to save transcript: {}", failure);
            }
            if !self.policy.should_retry(number)
            {   error!(
                  "Giving up after {} attempts: {}",
                  number, failure
                );
                return Ok(CompletionResult::RetryExhausted
                {   attempts: number
                  , last_error: failure
                });
            }
            self.sleeper.sleep(self.policy.pause).await;
        }
    }

    async fn attempt(
      &self
    , number: usize
    , request: &CompletionRequest
    ) -> CompletionAttempt
    {   debug!("Sending attempt {}", number);
        let outcome = self.transport.complete(request).await;
        CompletionAttempt
        {   number
          , request: request.clone()
          , outcome
          , at: SystemTime::now()
        }
    }
}
