use std::time::Duration;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use log::{debug, trace, error};

pub const OPENAI_API_BASE: &str
  = "https://api.openai.com/v1";

// ===== Wire Types =====

#[derive(Debug, Clone, Serialize)]
pub struct OpenAiCompletionRequest<'a>
{   pub model: &'a str
  , pub prompt: &'a str
  , pub temperature: f32
  , pub max_tokens: u32
  , pub top_p: f32
  , pub frequency_penalty: f32
  , pub presence_penalty: f32
  , #[serde(skip_serializing_if = "no_stop")]
    pub stop: &'a [String]
}

impl<'a> From<&'a crate::request::CompletionRequest>
  for OpenAiCompletionRequest<'a>
{   fn from(req: &'a crate::request::CompletionRequest) -> Self
    {   let options = req.options();
        OpenAiCompletionRequest
        {   model: &options.model
          , prompt: req.prompt()
          , temperature: options.temperature
          , max_tokens: options.max_tokens
          , top_p: options.top_p
          , frequency_penalty: options.frequency_penalty
          , presence_penalty: options.presence_penalty
          , stop: &options.stop
        }
    }
}

fn no_stop(stop: &&[String]) -> bool
{   stop.is_empty()
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiCompletionResponse
{   pub choices: Vec<Choice>
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice
{   pub text: String
}

// ===== Transport =====

/// Text-completions client for the OpenAI HTTP API
pub struct OpenAiTransport
{   api_key: crate::credentials::ApiKey
  , api_base: String
  , http_client: reqwest::Client
}

impl OpenAiTransport
{   pub fn new(api_key: crate::credentials::ApiKey) -> Self
    {   debug!("Creating OpenAiTransport");
        OpenAiTransport
        {   api_key
          , api_base: OPENAI_API_BASE.to_string()
          , http_client: reqwest::Client::new()
        }
    }

    /// Point the transport at another API base (proxies, tests)
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self
    {   let api_base: String = api_base.into();
        self.api_base = api_base.trim_end_matches('/').to_string();
        self
    }

    /// Rebuild the HTTP client with a request timeout
    pub fn with_timeout(
      mut self
    , timeout: Duration
    ) -> Result<Self, crate::error::Error>
    {   self.http_client = reqwest::Client::builder()
          .timeout(timeout)
          .build()
          .map_err(|e| {
            crate::error::Error::InvalidConfiguration(
              format!("Failed to build HTTP client: {}", e)
            )
          })?;
        Ok(self)
    }

    /// Build a transport from the run configuration
    pub fn from_config(
      api_key: crate::credentials::ApiKey
    , config: &crate::config::AppConfig
    ) -> Result<Self, crate::error::Error>
    {   let transport = OpenAiTransport::new(api_key)
          .with_api_base(config.api_base.clone());
        match config.timeout_secs
        {   Some(secs) => {
              transport.with_timeout(Duration::from_secs(secs))
            }
          , None => Ok(transport)
        }
    }
}

#[async_trait]
impl super::Transport for OpenAiTransport
{   async fn complete(
      &self
    , request: &crate::request::CompletionRequest
    ) -> Result<String, crate::error::Error>
    {   let body = OpenAiCompletionRequest::from(request);
        trace!("OpenAI request: {:?}", body);

        let response = self.http_client
          .post(format!("{}/completions", self.api_base))
          .header(
            "Authorization"
          , format!("Bearer {}", self.api_key.expose())
          )
          .json(&body)
          .send()
          .await
          .map_err(|e| {
            error!("HTTP error: {}", e);
            crate::error::Error::from(e)
          })?;

        let status = response.status();
        trace!("OpenAI response status: {}", status);

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS
        {   return Err(crate::error::Error::RateLimitExceeded);
        }

        if !status.is_success()
        {   let error_text = response.text().await
              .unwrap_or_else(|_|
                "Unknown error".to_string()
              );
            return Err(crate::error::Error::ApiError(
              format!("{}: {}", status, error_text)
            ));
        }

        let completion: OpenAiCompletionResponse
          = response.json().await
            .map_err(crate::error::Error::from)?;

        completion.choices.first()
          .map(|c| c.text.trim().to_string())
          .ok_or(crate::error::Error::NoChoicesInResponse)
    }
}
