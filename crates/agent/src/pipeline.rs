//! The analyze → plan → execute pipeline for a single turn.

use std::sync::Arc;

use parley_config::AppConfig;
use parley_core::action::ActionKind;
use parley_core::provider::Provider;
use tracing::debug;

use crate::analyzer::IntentAnalyzer;
use crate::completion::{CompletionClient, CompletionSettings};
use crate::executor::ActionExecutor;
use crate::planner::plan;

/// What one pass through the pipeline produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    /// The action the planner chose
    pub action: ActionKind,
    /// The text to show the user (never empty)
    pub response: String,
}

/// Analyzer and executor sharing one completion backend.
pub struct Pipeline {
    analyzer: IntentAnalyzer,
    executor: ActionExecutor,
}

impl Pipeline {
    pub fn new(client: CompletionClient) -> Self {
        Self {
            analyzer: IntentAnalyzer::new(client.clone()),
            executor: ActionExecutor::new(client),
        }
    }

    /// Build a pipeline using the model settings from `config`.
    pub fn from_config(provider: Arc<dyn Provider>, config: &AppConfig) -> Self {
        Self::new(CompletionClient::new(
            provider,
            CompletionSettings::from_config(config),
        ))
    }

    /// Run the three stages in order for `user_input`.
    pub async fn respond(&self, user_input: &str) -> TurnOutcome {
        let record = self.analyzer.analyze(user_input).await;
        let action = plan(record);
        debug!(action = %action.kind(), parameters = ?action.parameters(), "Action planned");

        let response = self.executor.execute(&action, user_input).await;
        TurnOutcome {
            action: action.kind(),
            response,
        }
    }
}
