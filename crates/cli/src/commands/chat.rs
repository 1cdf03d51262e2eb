//! `parley chat` — Interactive or single-message chat mode.

use std::path::Path;

use parley_agent::{Pipeline, Session};
use parley_config::AppConfig;
use parley_memory::MEMORY_CAPACITY;
use tokio::io::BufReader;
use tracing::info;

/// Providers that serve models locally and take no API key.
const KEYLESS_PROVIDERS: [&str; 4] = ["ollama", "vllm", "llamacpp", "llama.cpp"];

pub async fn run(config_path: &Path, message: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load_with_env(config_path)
        .map_err(|e| format!("Failed to load config: {e}"))?;

    // Check for API key early — give a clear error
    if !config.has_api_key() && !KEYLESS_PROVIDERS.contains(&config.default_provider.as_str()) {
        eprintln!();
        eprintln!("  ERROR: No API key configured!");
        eprintln!();
        eprintln!("  Set one of these environment variables:");
        eprintln!("    PARLEY_API_KEY      (generic)");
        eprintln!("    OPENAI_API_KEY      (for OpenAI)");
        eprintln!("    OPENROUTER_API_KEY  (for OpenRouter)");
        eprintln!();
        eprintln!("  Or add it to your config file:");
        eprintln!("    {}", config_path.display());
        eprintln!();
        return Err("No API key found. See above for setup instructions.".into());
    }

    let router = parley_providers::build_from_config(&config)?;
    let provider = router.default().ok_or("No default provider configured")?;
    let pipeline = Pipeline::from_config(provider, &config);
    let mut session = Session::with_config(pipeline, &config.session);
    info!(
        provider = %config.default_provider,
        model = %config.default_model,
        "Session started"
    );

    if let Some(msg) = message {
        // Single message mode
        match session.handle_line(&msg).await {
            Some(response) => println!("{}: {response}", config.session.agent_label),
            None => println!("{}", config.session.farewell),
        }
        return Ok(());
    }

    println!();
    println!("  Parley — interactive mode");
    println!();
    println!("  Provider:  {}", config.default_provider);
    println!("  Model:     {}", config.default_model);
    println!("  Memory:    last {MEMORY_CAPACITY} turns");
    println!();
    println!("  Type your message and press Enter.");
    println!("  Type 'exit' or 'quit' to leave.");
    println!();

    session
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await?;

    Ok(())
}
