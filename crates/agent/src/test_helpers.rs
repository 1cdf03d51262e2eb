//! Shared test helpers for pipeline tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use parley_core::error::ProviderError;
use parley_core::message::Message;
use parley_core::provider::{Provider, ProviderRequest, ProviderResponse, Usage};

/// A mock provider that plays back a script of results.
///
/// Each call to `complete` pops the next scripted result and records the
/// request. When the script runs out it either panics (the default) or keeps
/// failing with a network error, for simulating an unreachable backend.
pub struct ScriptedProvider {
    script: Mutex<VecDeque<Result<String, ProviderError>>>,
    requests: Mutex<Vec<ProviderRequest>>,
    fail_when_exhausted: bool,
}

impl ScriptedProvider {
    pub fn new(script: Vec<Result<String, ProviderError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            requests: Mutex::new(Vec::new()),
            fail_when_exhausted: false,
        }
    }

    /// Successful responses, in order.
    pub fn texts(texts: &[&str]) -> Self {
        Self::new(texts.iter().map(|t| Ok(t.to_string())).collect())
    }

    /// Every call fails as if the endpoint were down.
    pub fn unreachable() -> Self {
        Self {
            fail_when_exhausted: true,
            ..Self::new(Vec::new())
        }
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<ProviderRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Provider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted_mock"
    }

    async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, ProviderError> {
        let call = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(request);
            requests.len()
        };

        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(Ok(text)) => Ok(make_text_response(&text)),
            Some(Err(e)) => Err(e),
            None if self.fail_when_exhausted => {
                Err(ProviderError::Network("connection refused".into()))
            }
            None => panic!("ScriptedProvider: no more responses (call #{call})"),
        }
    }
}

/// Create a simple text response.
pub fn make_text_response(text: &str) -> ProviderResponse {
    ProviderResponse {
        message: Message::assistant(text),
        usage: Some(Usage {
            prompt_tokens: 10,
            completion_tokens: 5,
            total_tokens: 15,
        }),
        model: "mock-model".into(),
    }
}
