use std::fmt;

/// Custom error type for cover letter operations
/// Implements Clone so attempts can keep their outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// API key file is empty or unreadable as a key
    MissingApiKey(String)
  , /// Options or configuration out of range
    InvalidConfiguration(String)
  , /// Local file error (profile, template, transcript, output)
    Io(String)
  , /// HTTP request error
    HttpError(String)
  , /// API returned an error response
    ApiError(String)
  , /// Failed to parse a response or input file
    ParseError(String)
  , /// No choices in API response
    NoChoicesInResponse
  , /// Rate limit exceeded
    RateLimitExceeded
  , /// Timeout error
    Timeout
}

impl Error
{   /// Wrap an I/O failure together with the path it concerns
    pub fn io(
      path: &std::path::Path
    , err: std::io::Error
    ) -> Self
    {   Error::Io(format!("{}: {}", path.display(), err))
    }

    /// Whether the error came from the remote side of a completion
    pub fn is_remote(&self) -> bool
    {   matches!(
          self
        , Error::HttpError(_)
            | Error::ApiError(_)
            | Error::ParseError(_)
            | Error::NoChoicesInResponse
            | Error::RateLimitExceeded
            | Error::Timeout
        )
    }
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::MissingApiKey(source) => {
              write!(f, "Missing API key: {}", source)
            }
          , Error::InvalidConfiguration(msg) => {
              write!(f, "Invalid configuration: {}", msg)
            }
          , Error::Io(msg) => {
              write!(f, "I/O error: {}", msg)
            }
          , Error::HttpError(msg) => {
              write!(f, "HTTP error: {}", msg)
            }
          , Error::ApiError(msg) => {
              write!(f, "API error: {}", msg)
            }
          , Error::ParseError(msg) => {
              write!(f, "Parse error: {}", msg)
            }
          , Error::NoChoicesInResponse => {
              write!(f, "API response contained no choices")
            }
          , Error::RateLimitExceeded => {
              write!(f, "API rate limit exceeded")
            }
          , Error::Timeout => {
              write!(f, "Request timed out")
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error
{   fn from(e: reqwest::Error) -> Self
    {   if e.is_timeout()
        {   Error::Timeout
        } else if e.is_decode()
        {   Error::ParseError(e.to_string())
        } else
        {   Error::HttpError(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests
{   use super::*;

    #[test]
    fn remote_errors_are_classified()
    {   assert!(Error::RateLimitExceeded.is_remote());
        assert!(Error::HttpError("reset".into()).is_remote());
        assert!(!Error::Io("gone".into()).is_remote());
        assert!(!Error::MissingApiKey("x".into()).is_remote());
    }

    #[test]
    fn io_error_mentions_path()
    {   let err = Error::io(
          std::path::Path::new("my_info.json")
        , std::io::Error::new(std::io::ErrorKind::NotFound, "nope")
        );
        assert_eq!(err.to_string(), "I/O error: my_info.json: nope");
    }
}
