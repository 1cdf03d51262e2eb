//! The per-turn pipeline — the heart of Parley.
//!
//! Every turn follows an **Analyze → Plan → Execute → Record** cycle:
//!
//! 1. **Analyze** the raw input into an intent record (one completion call)
//! 2. **Plan** an action from the intent (pure, no I/O)
//! 3. **Execute** the action into a response string (zero or one completion call)
//! 4. **Record** the turn in the session's bounded memory
//!
//! No stage fails outward: backend errors and unusable model output turn into
//! safe defaults, so the session loop always has something to print.

pub mod analyzer;
pub mod completion;
pub mod executor;
pub mod pipeline;
pub mod planner;
pub mod session;

#[cfg(test)]
mod test_helpers;

pub use analyzer::{AnalysisError, IntentAnalyzer};
pub use completion::{CompletionClient, CompletionSettings};
pub use executor::ActionExecutor;
pub use pipeline::{Pipeline, TurnOutcome};
pub use planner::plan;
pub use session::{Session, SessionState, is_termination_token};
