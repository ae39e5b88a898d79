//! Applicant profile loading and formatting

use std::path::Path;
use serde::{Deserialize, Serialize};
use log::debug;

/// One question/answer pair of the applicant profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileEntry
{   pub label: String
  , pub answer: String
}

/// Read a JSON array of `{ "label", "answer" }` records
pub fn load_profile(path: &Path)
  -> Result<Vec<ProfileEntry>, crate::error::Error>
{   let raw = std::fs::read_to_string(path)
      .map_err(|e| crate::error::Error::io(path, e))?;
    let entries: Vec<ProfileEntry> = serde_json::from_str(&raw)
      .map_err(|e| {
        crate::error::Error::ParseError(
          format!("{}: {}", path.display(), e)
        )
      })?;
    debug!("Loaded {} profile entries", entries.len());
    Ok(entries)
}

/// `label: answer` lines in profile order
pub fn text_block(entries: &[ProfileEntry]) -> String
{   entries.iter()
      .map(|e| format!("{}: {}\n", e.label, e.answer))
      .collect()
}
