//! Thin completion client used by the analyzer and the executor.
//!
//! Wraps a [`Provider`] with the model settings chosen at startup and reduces
//! each call to "system instruction + user prompt in, text out".

use std::sync::Arc;

use parley_config::AppConfig;
use parley_core::error::ProviderError;
use parley_core::message::Message;
use parley_core::provider::{Provider, ProviderRequest};
use tracing::debug;

/// Model parameters applied to every completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionSettings {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: Option<u32>,
}

impl CompletionSettings {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            temperature: 0.7,
            max_tokens: None,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            model: config.default_model.clone(),
            temperature: config.default_temperature,
            max_tokens: Some(config.default_max_tokens),
        }
    }
}

/// A provider bound to a set of [`CompletionSettings`].
#[derive(Clone)]
pub struct CompletionClient {
    provider: Arc<dyn Provider>,
    settings: CompletionSettings,
}

impl CompletionClient {
    pub fn new(provider: Arc<dyn Provider>, settings: CompletionSettings) -> Self {
        Self { provider, settings }
    }

    /// Same provider and model, different temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.settings.temperature = temperature;
        self
    }

    pub fn settings(&self) -> &CompletionSettings {
        &self.settings
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Send `[system, user]` and return the raw generated text.
    pub async fn complete(&self, system: &str, user: &str) -> Result<String, ProviderError> {
        let request = ProviderRequest::new(
            self.settings.model.clone(),
            vec![Message::system(system), Message::user(user)],
        )
        .with_temperature(self.settings.temperature)
        .with_max_tokens(self.settings.max_tokens);

        let response = self.provider.complete(request).await?;

        if let Some(usage) = &response.usage {
            debug!(
                provider = %self.provider.name(),
                model = %response.model,
                tokens = usage.total_tokens,
                "Completion finished"
            );
        }

        Ok(response.message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::ScriptedProvider;
    use parley_core::message::Role;

    #[tokio::test]
    async fn sends_system_then_user() {
        let provider = Arc::new(ScriptedProvider::texts(&["done"]));
        let client = CompletionClient::new(provider.clone(), CompletionSettings::new("mock-model"))
            .with_temperature(0.0);

        let text = client.complete("be brief", "hello").await.unwrap();
        assert_eq!(text, "done");

        let requests = provider.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.model, "mock-model");
        assert_eq!(request.temperature, 0.0);
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, Role::System);
        assert_eq!(request.messages[0].content, "be brief");
        assert_eq!(request.messages[1].role, Role::User);
        assert_eq!(request.messages[1].content, "hello");
    }

    #[test]
    fn settings_from_config() {
        let config = AppConfig {
            default_model: "gpt-4o".into(),
            default_temperature: 0.2,
            default_max_tokens: 512,
            ..AppConfig::default()
        };
        let settings = CompletionSettings::from_config(&config);
        assert_eq!(settings.model, "gpt-4o");
        assert_eq!(settings.temperature, 0.2);
        assert_eq!(settings.max_tokens, Some(512));
    }

    #[tokio::test]
    async fn provider_errors_pass_through() {
        let provider = Arc::new(ScriptedProvider::unreachable());
        let client = CompletionClient::new(provider, CompletionSettings::new("m"));
        let err = client.complete("s", "u").await.unwrap_err();
        assert!(matches!(err, ProviderError::Network(_)));
    }
}
