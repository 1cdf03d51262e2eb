//! Action executor — turns an action descriptor into the text shown to the user.
//!
//! Generative actions make exactly one completion call; fallback makes none.
//! Backend failures are rendered into the returned string, so `execute`
//! always yields something displayable and never an error.

use parley_core::action::ActionDescriptor;
use tracing::{debug, warn};

use crate::completion::CompletionClient;

/// System instruction for informational answers.
pub const RESPONSE_SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// System instruction for code generation.
pub const CODE_SYSTEM_PROMPT: &str =
    "You are a code-generation assistant. You write correct, idiomatic code with clear comments.";

/// Reply used when the intent could not be mapped to an action.
pub const FALLBACK_RESPONSE: &str = "I'm sorry, I didn't quite understand that. \
Could you rephrase your request? I can explain a topic or write some code for you.";

/// Reply used when the backend answered with nothing but whitespace.
pub const EMPTY_COMPLETION_RESPONSE: &str =
    "I'm sorry, I couldn't come up with a response to that. Please try asking in a different way.";

/// Executes planned actions against the completion backend.
pub struct ActionExecutor {
    client: CompletionClient,
}

impl ActionExecutor {
    pub fn new(client: CompletionClient) -> Self {
        Self { client }
    }

    /// Execute `action` for `user_input`; the result is never empty.
    pub async fn execute(&self, action: &ActionDescriptor, user_input: &str) -> String {
        match action {
            ActionDescriptor::GenerateResponse { topic } => {
                self.generate(RESPONSE_SYSTEM_PROMPT, &response_prompt(user_input, topic))
                    .await
            }
            ActionDescriptor::GenerateCode { requirements } => {
                self.generate(CODE_SYSTEM_PROMPT, &code_prompt(user_input, requirements))
                    .await
            }
            ActionDescriptor::Fallback => FALLBACK_RESPONSE.to_string(),
        }
    }

    async fn generate(&self, system: &str, prompt: &str) -> String {
        match self.client.complete(system, prompt).await {
            Ok(text) => {
                let text = text.trim();
                if text.is_empty() {
                    debug!("Completion was empty");
                    EMPTY_COMPLETION_RESPONSE.to_string()
                } else {
                    text.to_string()
                }
            }
            Err(e) => {
                warn!(provider = %self.client.provider_name(), error = %e, "Generation failed");
                format!("Sorry, I ran into a problem generating a response: {e}")
            }
        }
    }
}

/// Prompt for an informational answer.
pub fn response_prompt(user_input: &str, topic: &[String]) -> String {
    let mut prompt = format!(
        "Provide a clear, accurate and informative response to the following request.\n\n\
         Request: {user_input}"
    );
    if !topic.is_empty() {
        prompt.push_str(&format!("\nKey topics: {}", topic.join(", ")));
    }
    prompt
}

/// Prompt for a code answer.
pub fn code_prompt(user_input: &str, requirements: &[String]) -> String {
    let mut prompt = format!(
        "Write code that fulfils the following request. The output must be valid, \
         runnable code with comments explaining what each part does.\n\n\
         Request: {user_input}"
    );
    if !requirements.is_empty() {
        prompt.push_str(&format!("\nRequirements: {}", requirements.join(", ")));
    }
    prompt
}
