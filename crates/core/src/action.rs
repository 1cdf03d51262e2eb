//! Action descriptors — the planner's chosen strategy for one turn.
//!
//! The set of actions is closed: adding one means adding a variant here, a
//! planner row, and an executor arm, and the compiler flags every match that
//! still needs the new arm.

use serde::{Deserialize, Serialize};

/// What the executor should do with a turn, with its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "parameters", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionDescriptor {
    /// Answer an informational request
    GenerateResponse { topic: Vec<String> },
    /// Produce commented source code
    GenerateCode { requirements: Vec<String> },
    /// Ask the user to rephrase; no backend call
    Fallback,
}

/// The parameter-free discriminant of an [`ActionDescriptor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKind {
    GenerateResponse,
    GenerateCode,
    Fallback,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::GenerateResponse => "GENERATE_RESPONSE",
            ActionKind::GenerateCode => "GENERATE_CODE",
            ActionKind::Fallback => "FALLBACK",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ActionDescriptor {
    pub fn kind(&self) -> ActionKind {
        match self {
            ActionDescriptor::GenerateResponse { .. } => ActionKind::GenerateResponse,
            ActionDescriptor::GenerateCode { .. } => ActionKind::GenerateCode,
            ActionDescriptor::Fallback => ActionKind::Fallback,
        }
    }

    /// The descriptor's parameters as a string-keyed map (`{}` for fallback).
    pub fn parameters(&self) -> serde_json::Map<String, serde_json::Value> {
        let mut params = serde_json::Map::new();
        match self {
            ActionDescriptor::GenerateResponse { topic } => {
                params.insert("topic".into(), serde_json::json!(topic));
            }
            ActionDescriptor::GenerateCode { requirements } => {
                params.insert("requirements".into(), serde_json::json!(requirements));
            }
            ActionDescriptor::Fallback => {}
        }
        params
    }
}
