//! Prompt templates

use std::path::Path;

/// Token replaced by the profile text block
pub const PLACEHOLDER: &str = "<<INFO>>";

pub fn load_template(path: &Path) -> Result<String, crate::error::Error>
{   std::fs::read_to_string(path)
      .map_err(|e| crate::error::Error::io(path, e))
}

/// Replace every occurrence of the placeholder with `block`
pub fn fill(template: &str, block: &str) -> String
{   template.replace(PLACEHOLDER, block)
}
