use cover_letter::client::CompletionClient;
use cover_letter::config::AppConfig;
use cover_letter::credentials::ApiKey;
use cover_letter::providers::OpenAiTransport;
use cover_letter::transcript::DirectoryLog;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>>
{   env_logger::Builder::from_env(
      env_logger::Env::default().default_filter_or("info")
    ).init();

    let config = AppConfig::discover()?;
    let api_key = ApiKey::from_file(&config.api_key_path)?;
    let transport = OpenAiTransport::from_config(api_key, &config)?;

    let client = CompletionClient::new(
      transport
    , DirectoryLog::new(config.transcript_dir.clone())
    ).with_policy(config.retry_policy());

    cover_letter::pipeline::run(&config, &client).await?;
    Ok(())
}
