//! API credential handling

use std::fmt;
use std::path::Path;
use log::debug;

/// API secret attached to every request.
/// `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey
{   pub fn new(key: impl Into<String>) -> Self
    {   ApiKey(key.into())
    }

    /// Read the key from a file, trimming surrounding whitespace
    pub fn from_file(path: &Path) -> Result<Self, crate::error::Error>
    {   debug!("Reading API key from {}", path.display());
        let raw = std::fs::read_to_string(path)
          .map_err(|e| crate::error::Error::io(path, e))?;
        let key = raw.trim();
        if key.is_empty()
        {   return Err(crate::error::Error::MissingApiKey(
              format!("{} is empty", path.display())
            ));
        }
        Ok(ApiKey(key.to_string()))
    }

    /// The raw secret, for the Authorization header only
    pub fn expose(&self) -> &str
    {   &self.0
    }
}

impl fmt::Debug for ApiKey
{   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {   f.write_str("ApiKey(***)")
    }
}
