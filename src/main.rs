use std::sync::Arc;

use santas_tree::app::App;
use santas_tree::config::AppConfig;
use santas_tree::error::ConfigError;
use santas_tree::llm::{create_provider, LlmBackend, LlmConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let config = AppConfig::from_env();

    // Pick the backend by which API key is set; Gemini first, like the
    // original service.
    let (backend, api_key) = resolve_backend()?;

    eprintln!("🎄 Santa's Tree v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Model: {}", config.model);
    eprintln!();

    let llm_config = LlmConfig {
        backend,
        api_key: secrecy::SecretString::from(api_key),
        model: config.model.clone(),
    };
    let llm = create_provider(&llm_config)?;

    let mut app = App::new(Arc::clone(&llm), &config);
    app.run().await?;

    eprintln!("Happy Holidays!");
    Ok(())
}

fn resolve_backend() -> Result<(LlmBackend, String), ConfigError> {
    if let Ok(key) = std::env::var("GEMINI_API_KEY") {
        return Ok((LlmBackend::Gemini, key));
    }
    if let Ok(key) = std::env::var("ANTHROPIC_API_KEY") {
        return Ok((LlmBackend::Anthropic, key));
    }
    if let Ok(key) = std::env::var("OPENAI_API_KEY") {
        return Ok((LlmBackend::OpenAi, key));
    }
    eprintln!("Error: no API key set");
    eprintln!("  export GEMINI_API_KEY=... (or ANTHROPIC_API_KEY / OPENAI_API_KEY)");
    Err(ConfigError::MissingEnvVar("GEMINI_API_KEY".to_string()))
}
