//! Intent records — the analyzer's structured reading of one user turn.

use serde::{Deserialize, Serialize};

/// The intent label used when the analyzer cannot interpret the backend output.
pub const UNKNOWN_INTENT: &str = "unknown";

/// A classified user goal plus the salient fragments extracted from the input.
///
/// Produced once per turn by the intent analyzer and consumed by the planner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentRecord {
    /// Intent label, e.g. `generate_info`, `code_request`, `unknown`
    pub intent: String,

    /// Extracted entities, in the order the backend listed them
    #[serde(default)]
    pub entities: Vec<String>,
}

impl IntentRecord {
    pub fn new(intent: impl Into<String>, entities: Vec<String>) -> Self {
        Self {
            intent: intent.into(),
            entities,
        }
    }

    /// The record substituted whenever analysis fails.
    pub fn unknown() -> Self {
        Self::new(UNKNOWN_INTENT, Vec::new())
    }

    pub fn is_unknown(&self) -> bool {
        self.intent == UNKNOWN_INTENT
    }
}

impl Default for IntentRecord {
    fn default() -> Self {
        Self::unknown()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unknown_with_no_entities() {
        let record = IntentRecord::default();
        assert_eq!(record.intent, "unknown");
        assert!(record.entities.is_empty());
        assert!(record.is_unknown());
    }

    #[test]
    fn entities_default_when_missing() {
        let record: IntentRecord = serde_json::from_str(r#"{"intent":"generate_info"}"#).unwrap();
        assert_eq!(record.intent, "generate_info");
        assert!(record.entities.is_empty());
    }

    #[test]
    fn intent_is_required() {
        let parsed = serde_json::from_str::<IntentRecord>(r#"{"entities":["x"]}"#);
        assert!(parsed.is_err());
    }
}
