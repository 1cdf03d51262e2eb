//! Memory entry — one completed turn as recorded in the interaction log.

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};

/// Timestamp layout for memory entries (local time).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single recorded turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryEntry {
    /// Local time the turn was recorded, `YYYY-MM-DD HH:MM:SS`
    pub timestamp: String,

    /// What the user typed
    pub user_input: String,

    /// What the agent answered
    pub agent_output: String,
}

impl MemoryEntry {
    /// Create an entry stamped with the current local time.
    pub fn now(user_input: impl Into<String>, agent_output: impl Into<String>) -> Self {
        Self::at(&Local::now(), user_input, agent_output)
    }

    /// Create an entry stamped with the given time.
    pub fn at<Tz: TimeZone>(
        time: &DateTime<Tz>,
        user_input: impl Into<String>,
        agent_output: impl Into<String>,
    ) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            timestamp: time.format(TIMESTAMP_FORMAT).to_string(),
            user_input: user_input.into(),
            agent_output: agent_output.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn timestamp_uses_fixed_layout() {
        let time = Local
            .with_ymd_and_hms(2024, 3, 7, 9, 5, 2)
            .single()
            .unwrap();
        let entry = MemoryEntry::at(&time, "hi", "hello");
        assert_eq!(entry.timestamp, "2024-03-07 09:05:02");
        assert_eq!(entry.user_input, "hi");
        assert_eq!(entry.agent_output, "hello");
    }

    #[test]
    fn now_produces_parseable_timestamp() {
        let entry = MemoryEntry::now("a", "b");
        assert_eq!(entry.timestamp.len(), 19);
        assert!(NaiveDateTime::parse_from_str(&entry.timestamp, TIMESTAMP_FORMAT).is_ok());
    }
}
