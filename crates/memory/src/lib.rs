//! Memory implementations for Parley.
//!
//! A session keeps a short, bounded log of its turns. Nothing here touches
//! disk; the log lives exactly as long as the session that owns it.

pub mod interaction;

pub use interaction::{InteractionMemory, MEMORY_CAPACITY};
