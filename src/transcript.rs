//! Append-only log of completion round-trips

use std::path::PathBuf;
use log::trace;

/// Separates the prompt from the response in a transcript entry
pub const TRANSCRIPT_DELIMITER: &str = "\n\n==========\n\n";

/// Write-only store for successful attempts
pub trait TranscriptLog: Send + Sync
{   /// Persist one attempt together with the text it produced
    fn record(
      &self
    , attempt: &crate::request::CompletionAttempt
    , text: &str
    ) -> Result<(), crate::error::Error>;
}

/// Render a transcript entry
pub fn transcript_entry(prompt: &str, text: &str) -> String
{   format!("{}{}{}", prompt, TRANSCRIPT_DELIMITER, text)
}

/// One `<timestamp>_gpt3.txt` file per entry in a directory
#[derive(Debug, Clone)]
pub struct DirectoryLog
{   dir: PathBuf
}

impl DirectoryLog
{   pub fn new(dir: impl Into<PathBuf>) -> Self
    {   DirectoryLog { dir: dir.into() }
    }
}

impl TranscriptLog for DirectoryLog
{   fn record(
      &self
    , attempt: &crate::request::CompletionAttempt
    , text: &str
    ) -> Result<(), crate::error::Error>
    {   let stem = format!(
          "{}_gpt3"
        , crate::output::timestamp_id(attempt.at)
        );
        let path = crate::output::write_unique(
          &self.dir
        , &stem
        , &transcript_entry(attempt.request.prompt(), text)
        )?;
        trace!("Transcript saved to {}", path.display());
        Ok(())
    }
}
