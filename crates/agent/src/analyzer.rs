//! Intent analyzer — turns raw user text into an [`IntentRecord`].
//!
//! Classification is delegated to the completion backend. This module only
//! constrains the prompt and parses the reply defensively: the reply is
//! untrusted free text, so parsing is "parse or default", never a hard error.

use parley_core::error::ProviderError;
use parley_core::intent::IntentRecord;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::completion::CompletionClient;

/// System instruction for the analysis call.
pub const ANALYZER_SYSTEM_PROMPT: &str =
    "You are an intent analyzer. You classify user requests and reply with JSON only.";

/// Why an analysis fell back to the unknown record.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The backend call itself failed.
    #[error("completion service failed: {0}")]
    Service(#[from] ProviderError),

    /// The reply contained no parseable JSON object.
    #[error("reply is not valid JSON: {0}")]
    MalformedJson(String),

    /// The reply was JSON but not an intent record.
    #[error("reply does not match the intent schema: {0}")]
    WrongShape(String),
}

/// Analyzes user input into intent records using the completion backend.
pub struct IntentAnalyzer {
    client: CompletionClient,
}

impl IntentAnalyzer {
    /// The analyzer runs its client at temperature 0 so classification is as
    /// repeatable as the backend allows.
    pub fn new(client: CompletionClient) -> Self {
        Self {
            client: client.with_temperature(0.0),
        }
    }

    /// Analyze `user_input`; any failure yields `{intent: "unknown", entities: []}`.
    pub async fn analyze(&self, user_input: &str) -> IntentRecord {
        match self.try_analyze(user_input).await {
            Ok(record) => {
                debug!(intent = %record.intent, entities = record.entities.len(), "Intent analyzed");
                record
            }
            Err(AnalysisError::Service(e)) => {
                warn!(provider = %self.client.provider_name(), error = %e, "Intent analysis call failed");
                IntentRecord::unknown()
            }
            Err(e) => {
                info!(error = %e, "Unusable intent analysis reply, treating intent as unknown");
                IntentRecord::unknown()
            }
        }
    }

    /// Analyze `user_input`, reporting why analysis failed instead of defaulting.
    pub async fn try_analyze(&self, user_input: &str) -> Result<IntentRecord, AnalysisError> {
        let reply = self
            .client
            .complete(ANALYZER_SYSTEM_PROMPT, &analysis_prompt(user_input))
            .await?;
        parse_intent(&reply)
    }
}

/// Build the instruction asking for a constrained JSON intent description.
pub fn analysis_prompt(user_input: &str) -> String {
    format!(
        "Analyze the user's request and identify its intent and key entities.\n\
         Respond with a single JSON object and nothing else, in exactly this shape:\n\
         {{\"intent\": \"<intent>\", \"entities\": [\"<entity>\", ...]}}\n\
         Use intent \"generate_info\" when the user wants information or an explanation, \
         \"code_request\" when the user wants code written, and a short snake_case label otherwise.\n\
         Entities are the short phrases from the request that matter for answering it.\n\n\
         User request: {user_input}"
    )
}

/// Parse a backend reply into an intent record.
///
/// Tolerates surrounding prose and Markdown code fences by reading the
/// outermost `{...}` span. The intent label is trimmed and lower-cased;
/// a missing `entities` field means no entities.
pub fn parse_intent(reply: &str) -> Result<IntentRecord, AnalysisError> {
    let candidate = outermost_object(reply)
        .ok_or_else(|| AnalysisError::MalformedJson("no JSON object in reply".into()))?;

    let value: serde_json::Value = serde_json::from_str(candidate)
        .map_err(|e| AnalysisError::MalformedJson(e.to_string()))?;

    let record: IntentRecord = serde_json::from_value(value)
        .map_err(|e| AnalysisError::WrongShape(e.to_string()))?;

    let intent = record.intent.trim().to_lowercase();
    if intent.is_empty() {
        return Err(AnalysisError::WrongShape("intent is empty".into()));
    }

    Ok(IntentRecord::new(intent, record.entities))
}

fn outermost_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}
