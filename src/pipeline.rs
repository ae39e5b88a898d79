//! End-to-end generation of the cover letter documents

use std::path::PathBuf;
use log::{error, info, warn};

/// Documents produced by a run, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Document
{   CoverLetter
  , ProfessionalObjective
}

impl Document
{   pub const ALL: [Document; 2]
      = [Document::CoverLetter, Document::ProfessionalObjective];

    /// Template this document is generated from
    pub fn template_path<'a>(
      &self
    , config: &'a crate::config::AppConfig
    ) -> &'a std::path::Path
    {   match self
        {   Document::CoverLetter => &config.cover_letter_template
          , Document::ProfessionalObjective => &config.objective_template
        }
    }

    /// Output file name prefix
    pub fn file_prefix(&self) -> &'static str
    {   match self
        {   Document::CoverLetter => "cover_letter"
          , Document::ProfessionalObjective => "professional_objective"
        }
    }

    /// Console heading
    pub fn heading(&self) -> &'static str
    {   match self
        {   Document::CoverLetter => "COVER LETTER"
          , Document::ProfessionalObjective => "PROFESSIONAL OBJECTIVE"
        }
    }
}

/// One document written by `run`
#[derive(Debug, Clone, PartialEq)]
pub struct Generated
{   pub document: Document
  , pub result: crate::request::CompletionResult
  , pub path: PathBuf
}

/// Generate every document from the profile and templates in `config`.
/// An exhausted completion is still written, as its error text.
pub async fn run(
  config: &crate::config::AppConfig
, client: &crate::client::CompletionClient
) -> Result<Vec<Generated>, crate::error::Error>
{   let entries = crate::profile::load_profile(&config.profile_path)?;
    let block = crate::profile::text_block(&entries);

    let mut generated = Vec::with_capacity(Document::ALL.len());
    for document in Document::ALL
    {   let template = crate::template::load_template(
          document.template_path(config)
        )?;
        let prompt = crate::template::fill(&template, &block);

        let result = client.complete(&prompt, &config.options).await?;
        if let crate::request::CompletionResult::RetryExhausted
          { attempts, last_error } = &result
        {   error!(
              "{} failed after {} attempts: {}",
              document.heading(), attempts, last_error
            );
        }

        let text = result.clone().into_text();
        println!("\n\n{}: {}", document.heading(), text);

        let path = crate::output::write_timestamped(
          &config.output_dir
        , document.file_prefix()
        , &text
        )?;
        if result.is_success()
        {   info!("{} saved to {}", document.heading(), path.display());
        } else
        {   warn!(
              "{} saved to {} with error text",
              document.heading(), path.display()
            );
        }

        generated.push(Generated { document, result, path });
    }
    Ok(generated)
}
