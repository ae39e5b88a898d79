//! Request, attempt and result types for completions

use std::time::SystemTime;

/// Prefix of the text rendering of an exhausted completion
pub const EXHAUSTED_PREFIX: &str = "GPT3 error:";

/// Drop every character outside 7-bit ASCII, keeping order
pub fn sanitize_prompt(prompt: &str) -> String
{   prompt.chars().filter(char::is_ascii).collect()
}

/// A prompt ready to send, paired with the options it is sent with.
/// Fields are private so a request cannot change between attempts.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest
{   prompt: String
  , options: crate::config::CompletionOptions
}

impl CompletionRequest
{   /// Validate and sanitize a prompt into a request
    pub fn new(
      prompt: &str
    , options: &crate::config::CompletionOptions
    ) -> Result<Self, crate::error::Error>
    {   if prompt.is_empty()
        {   return Err(crate::error::Error::InvalidConfiguration(
              "prompt is empty".to_string()
            ));
        }
        options.validate()?;

        Ok(CompletionRequest
        {   prompt: sanitize_prompt(prompt)
          , options: options.clone()
        })
    }

    pub fn prompt(&self) -> &str
    {   &self.prompt
    }

    pub fn options(&self) -> &crate::config::CompletionOptions
    {   &self.options
    }
}

/// One round-trip to the completion endpoint
#[derive(Debug, Clone)]
pub struct CompletionAttempt
{   /// 1-based attempt number within one `complete` call
    pub number: usize
  , pub request: CompletionRequest
  , pub outcome: Result<String, crate::error::Error>
  , pub at: SystemTime
}

/// Terminal result of a completion call
#[derive(Debug, Clone, PartialEq)]
pub enum CompletionResult
{   /// Generated text
    Success(String)
  , /// Every attempt failed; holds the last failure
    RetryExhausted
    {   attempts: usize
      , last_error: crate::error::Error
    }
}

impl CompletionResult
{   pub fn is_success(&self) -> bool
    {   matches!(self, CompletionResult::Success(_))
    }

    /// Flatten into plain text. Failures render as
    /// `GPT3 error: <last error message>`.
    pub fn into_text(self) -> String
    {   match self
        {   CompletionResult::Success(text) => text
          , CompletionResult::RetryExhausted { last_error, .. } => {
              format!("{} {}", EXHAUSTED_PREFIX, last_error)
            }
        }
    }
}
