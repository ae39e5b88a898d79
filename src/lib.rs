pub mod error;
pub mod config;
pub mod credentials;
pub mod providers;
pub mod request;
pub mod failover;
pub mod transcript;
pub mod client;
pub mod profile;
pub mod template;
pub mod output;
pub mod pipeline;

/*

cover-letter turns a JSON profile into a cover letter and a
professional objective using a text-completion API. The one piece
with real behavior is the CompletionClient: bounded retry with a
fixed pause, an append-only transcript of every successful call,
and a result type that keeps failures apart from generated text.

cover-letter/
├── Cargo.toml
├── src/
│   ├── lib.rs          # Module list and re-exports
│   ├── main.rs         # No-argument binary
│   ├── error.rs        # Error enum
│   ├── config.rs       # CompletionOptions, AppConfig
│   ├── credentials.rs  # ApiKey
│   ├── request.rs      # CompletionRequest/Attempt/Result
│   ├── failover.rs     # RetryPolicy, Sleeper
│   ├── client.rs       # CompletionClient
│   ├── providers/      # Transport trait and OpenAI transport
│   ├── transcript.rs   # Attempt log
│   ├── profile.rs      # my_info.json -> text block
│   ├── template.rs     # <<INFO>> substitution
│   ├── output.rs       # Timestamped files
│   └── pipeline.rs     # Both documents, end to end
└── tests/

*/

pub use client::CompletionClient;
pub use config::{AppConfig, CompletionOptions};
pub use credentials::ApiKey;
pub use error::Error;
pub use failover::{RetryPolicy, Sleeper, TokioSleeper};
pub use providers::{OpenAiTransport, Transport};
pub use request::{CompletionAttempt, CompletionRequest, CompletionResult};
pub use transcript::{DirectoryLog, TranscriptLog};
