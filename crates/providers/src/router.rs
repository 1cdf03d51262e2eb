//! Provider router — selects the completion provider based on config.
//!
//! Handles provider creation from [`AppConfig`] and lookup by name.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parley_config::AppConfig;
use parley_core::error::ProviderError;
use parley_core::provider::Provider;
use tracing::debug;

use crate::openai_compat::OpenAiCompatProvider;

/// Routes completion requests to the configured provider.
pub struct ProviderRouter {
    providers: HashMap<String, Arc<dyn Provider>>,
    default_provider: String,
}

impl ProviderRouter {
    /// Create a new router with a default provider name.
    pub fn new(default_provider: impl Into<String>) -> Self {
        Self {
            providers: HashMap::new(),
            default_provider: default_provider.into(),
        }
    }

    /// Register a provider.
    pub fn register(&mut self, name: impl Into<String>, provider: Arc<dyn Provider>) {
        self.providers.insert(name.into(), provider);
    }

    /// Get the default provider.
    pub fn default(&self) -> Option<Arc<dyn Provider>> {
        self.providers.get(&self.default_provider).cloned()
    }

    /// Get a specific provider by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Provider>> {
        self.providers.get(name).cloned()
    }

    pub fn default_name(&self) -> &str {
        &self.default_provider
    }
}

/// Build providers from configuration.
///
/// Every entry under `[providers]` is registered, and the default provider is
/// registered even when it has no explicit entry. A provider that is not well
/// known must carry an `api_url`.
pub fn build_from_config(config: &AppConfig) -> Result<ProviderRouter, ProviderError> {
    let mut router = ProviderRouter::new(&config.default_provider);
    let timeout = Duration::from_secs(config.request_timeout_secs);

    for (name, provider_config) in &config.providers {
        let api_key = provider_config
            .api_key
            .clone()
            .or_else(|| config.api_key.clone())
            .unwrap_or_default();
        let base_url = match &provider_config.api_url {
            Some(url) => url.clone(),
            None => known_base_url(name)?,
        };

        let provider = OpenAiCompatProvider::new(name, base_url, api_key, timeout)?;
        debug!(provider = %name, base_url = %provider.base_url(), "Registering provider");
        router.register(name.clone(), Arc::new(provider));
    }

    if router.get(&config.default_provider).is_none() {
        let name = &config.default_provider;
        let api_key = config.api_key.clone().unwrap_or_default();
        let provider = OpenAiCompatProvider::new(name, known_base_url(name)?, api_key, timeout)?;
        debug!(provider = %name, base_url = %provider.base_url(), "Registering default provider");
        router.register(name.clone(), Arc::new(provider));
    }

    Ok(router)
}

/// Base URL of a well-known provider.
fn known_base_url(provider_name: &str) -> Result<String, ProviderError> {
    let url = match provider_name {
        "openai" => "https://api.openai.com/v1",
        "openrouter" => "https://openrouter.ai/api/v1",
        "ollama" => "http://localhost:11434/v1",
        "deepseek" => "https://api.deepseek.com/v1",
        "groq" => "https://api.groq.com/openai/v1",
        "together" => "https://api.together.xyz/v1",
        "fireworks" => "https://api.fireworks.ai/inference/v1",
        "vllm" => "http://localhost:8000/v1",
        "llamacpp" | "llama.cpp" => "http://localhost:8080/v1",
        _ => {
            return Err(ProviderError::NotConfigured(format!(
                "unknown provider '{provider_name}': set providers.{provider_name}.api_url"
            )));
        }
    };
    Ok(url.into())
}
