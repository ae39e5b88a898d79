//! Configuration for completions and the end-to-end run

use std::path::{Path, PathBuf};
use std::time::Duration;
use serde::{Deserialize, Serialize};
use log::{debug, info};

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "cover_letter.json";

/// Sampling options for one completion call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionOptions
{   /// Model (engine) identifier
    pub model: String
  , /// Sampling randomness, 0.0 to 2.0
    pub temperature: f32
  , /// Nucleus sampling threshold, 0.0 to 1.0
    pub top_p: f32
  , /// Max tokens to generate
    pub max_tokens: u32
  , pub frequency_penalty: f32
  , pub presence_penalty: f32
  , /// Sequences that truncate generation
    pub stop: Vec<String>
}

impl Default for CompletionOptions
{   fn default() -> Self
    {   CompletionOptions
        {   model: "text-davinci-002".to_string()
          , temperature: 0.7
          , top_p: 1.0
          , max_tokens: 1000
          , frequency_penalty: 0.0
          , presence_penalty: 0.0
          , stop: vec![
              "asdfasdf".to_string()
            , "asdasdf".to_string()
            ]
        }
    }
}

impl CompletionOptions
{   /// Check every option against the range the API accepts
    pub fn validate(&self) -> Result<(), crate::error::Error>
    {   let invalid = |msg: String| -> Result<(), crate::error::Error> {
          Err(crate::error::Error::InvalidConfiguration(msg))
        };

        if self.model.trim().is_empty()
        {   return invalid("model id is empty".to_string());
        }
        if !(0.0..=2.0).contains(&self.temperature)
        {   return invalid(format!(
              "temperature {} outside [0, 2]", self.temperature
            ));
        }
        if !(0.0..=1.0).contains(&self.top_p)
        {   return invalid(format!(
              "top_p {} outside [0, 1]", self.top_p
            ));
        }
        if self.max_tokens == 0
        {   return invalid("max_tokens must be positive".to_string());
        }
        for (name, value) in [
          ("frequency_penalty", self.frequency_penalty)
        , ("presence_penalty", self.presence_penalty)
        ]
        {   if !(-2.0..=2.0).contains(&value)
            {   return invalid(format!(
                  "{} {} outside [-2, 2]", name, value
                ));
            }
        }
        Ok(())
    }
}

/// Settings for a full cover letter run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig
{   /// File holding the API secret
    pub api_key_path: PathBuf
  , /// JSON profile of label/answer records
    pub profile_path: PathBuf
  , pub cover_letter_template: PathBuf
  , pub objective_template: PathBuf
  , /// Directory receiving one transcript file per completion
    pub transcript_dir: PathBuf
  , /// Directory receiving the generated documents
    pub output_dir: PathBuf
  , /// API base URL
    pub api_base: String
  , /// Request timeout in seconds (None leaves it to the transport)
    pub timeout_secs: Option<u64>
  , /// Attempts per completion, including the first
    pub max_attempts: usize
  , /// Pause between attempts in milliseconds
    pub retry_pause_ms: u64
  , pub options: CompletionOptions
}

impl Default for AppConfig
{   fn default() -> Self
    {   AppConfig
        {   api_key_path: PathBuf::from("openaiapikey.txt")
          , profile_path: PathBuf::from("my_info.json")
          , cover_letter_template
              : PathBuf::from("prompt_cover_letter.txt")
          , objective_template
              : PathBuf::from("prompt_professional_objective.txt")
          , transcript_dir: PathBuf::from("gpt3_logs")
          , output_dir: PathBuf::from(".")
          , api_base: crate::providers::openai::OPENAI_API_BASE
              .to_string()
          , timeout_secs: None
          , max_attempts: 5
          , retry_pause_ms: 1000
          , options: CompletionOptions::default()
        }
    }
}

impl AppConfig
{   /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, crate::error::Error>
    {   debug!("Loading config from {}", path.display());
        let raw = std::fs::read_to_string(path)
          .map_err(|e| crate::error::Error::io(path, e))?;
        let config: AppConfig = serde_json::from_str(&raw)
          .map_err(|e| {
            crate::error::Error::ParseError(
              format!("{}: {}", path.display(), e)
            )
          })?;
        config.options.validate()?;
        Ok(config)
    }

    /// Use `cover_letter.json` from the working directory if present
    pub fn discover() -> Result<Self, crate::error::Error>
    {   let path = Path::new(DEFAULT_CONFIG_FILE);
        if path.exists()
        {   Self::load(path)
        } else
        {   info!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
            Ok(AppConfig::default())
        }
    }

    /// Retry policy described by this configuration
    pub fn retry_policy(&self) -> crate::failover::RetryPolicy
    {   crate::failover::RetryPolicy::new(
          self.max_attempts
        , Duration::from_millis(self.retry_pause_ms)
        )
    }
}
