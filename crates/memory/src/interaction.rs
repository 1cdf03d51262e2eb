//! Interaction memory — a fixed-capacity FIFO log of completed turns.
//!
//! Backed by a `VecDeque` so appending and evicting are both O(1). The oldest
//! entry is dropped as soon as an append would take the log past capacity.

use std::collections::VecDeque;

use parley_core::memory::MemoryEntry;
use serde::Serialize;
use tracing::debug;

/// Maximum number of turns retained by a session.
pub const MEMORY_CAPACITY: usize = 10;

/// Ordered log of the session's most recent turns (oldest first).
#[derive(Debug, Clone, Serialize)]
pub struct InteractionMemory {
    entries: VecDeque<MemoryEntry>,
    #[serde(skip)]
    capacity: usize,
}

impl Default for InteractionMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionMemory {
    /// Create an empty memory holding at most [`MEMORY_CAPACITY`] turns.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(MEMORY_CAPACITY + 1),
            capacity: MEMORY_CAPACITY,
        }
    }

    /// Record a completed turn stamped with the current local time.
    pub fn record(&mut self, user_input: &str, agent_output: &str) {
        self.push(MemoryEntry::now(user_input, agent_output));
    }

    /// Append a prepared entry, evicting the oldest when over capacity.
    pub fn push(&mut self, entry: MemoryEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > self.capacity {
            if let Some(evicted) = self.entries.pop_front() {
                debug!(timestamp = %evicted.timestamp, "Evicted oldest interaction");
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &MemoryEntry> {
        self.entries.iter()
    }

    /// The most recently recorded turn.
    pub fn latest(&self) -> Option<&MemoryEntry> {
        self.entries.back()
    }
}
