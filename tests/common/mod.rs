#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use cover_letter::{CompletionAttempt, CompletionRequest, Error, Sleeper, TranscriptLog, Transport};

/// Fails the first `failures` calls, then answers `reply`
#[derive(Clone)]
pub struct FlakyTransport
{   pub failures: usize
  , pub reply: String
  , pub calls: Arc<AtomicUsize>
  , pub prompts: Arc<Mutex<Vec<String>>>
}

impl FlakyTransport
{   pub fn new(failures: usize, reply: &str) -> Self
    {   FlakyTransport
        {   failures
          , reply: reply.to_string()
          , calls: Arc::new(AtomicUsize::new(0))
          , prompts: Arc::new(Mutex::new(vec![]))
        }
    }

    /// Never succeeds
    pub fn broken() -> Self
    {   FlakyTransport::new(usize::MAX, "")
    }

    pub fn calls(&self) -> usize
    {   self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String>
    {   self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FlakyTransport
{   async fn complete(
      &self
    , request: &CompletionRequest
    ) -> Result<String, Error>
    {   let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.prompts.lock().unwrap().push(request.prompt().to_string());
        if call <= self.failures
        {   Err(Error::ApiError(format!("failure {}", call)))
        } else
        {   Ok(self.reply.clone())
        }
    }
}

/// Records requested pauses instead of waiting
#[derive(Clone, Default)]
pub struct RecordingSleeper
{   pub pauses: Arc<Mutex<Vec<Duration>>>
}

impl RecordingSleeper
{   pub fn pauses(&self) -> Vec<Duration>
    {   self.pauses.lock().unwrap().clone()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper
{   async fn sleep(&self, duration: Duration)
    {   self.pauses.lock().unwrap().push(duration);
    }
}

/// Keeps transcript entries in memory
#[derive(Clone, Default)]
pub struct MemoryTranscript
{   pub entries: Arc<Mutex<Vec<(usize, String)>>>
}

impl MemoryTranscript
{   pub fn entries(&self) -> Vec<(usize, String)>
    {   self.entries.lock().unwrap().clone()
    }
}

impl TranscriptLog for MemoryTranscript
{   fn record(
      &self
    , attempt: &CompletionAttempt
    , text: &str
    ) -> Result<(), Error>
    {   self.entries.lock().unwrap().push((
          attempt.number
        , cover_letter::transcript::transcript_entry(
            attempt.request.prompt()
          , text
          )
        ));
        Ok(())
    }
}

/// Refuses every write
pub struct ReadOnlyTranscript;

impl TranscriptLog for ReadOnlyTranscript
{   fn record(
      &self
    , _attempt: &CompletionAttempt
    , _text: &str
    ) -> Result<(), Error>
    {   Err(Error::Io("gpt3_logs: read-only file system".to_string()))
    }
}
