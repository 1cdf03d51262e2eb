//! Action planner — maps an intent record to an action descriptor.
//!
//! Pure and total: no I/O, no failure. This table is the single place that
//! decides which intents get which behavior.

use parley_core::action::ActionDescriptor;
use parley_core::intent::IntentRecord;

/// Intent label for informational requests.
pub const GENERATE_INFO_INTENT: &str = "generate_info";

/// Intent label for code-writing requests.
pub const CODE_REQUEST_INTENT: &str = "code_request";

/// Choose the action for one turn.
///
/// | intent            | action            | parameters              |
/// |-------------------|-------------------|-------------------------|
/// | `generate_info`   | GenerateResponse  | `topic: entities`       |
/// | `code_request`    | GenerateCode      | `requirements: entities`|
/// | anything else     | Fallback          | none                    |
pub fn plan(record: IntentRecord) -> ActionDescriptor {
    match record.intent.as_str() {
        GENERATE_INFO_INTENT => ActionDescriptor::GenerateResponse {
            topic: record.entities,
        },
        CODE_REQUEST_INTENT => ActionDescriptor::GenerateCode {
            requirements: record.entities,
        },
        _ => ActionDescriptor::Fallback,
    }
}
