//! # Parley Core
//!
//! Domain types, traits, and error definitions for the Parley conversational
//! agent. This crate has **no runtime dependencies** — it defines the domain
//! model that the other crates implement against.
//!
//! ## Design Philosophy
//!
//! The completion backend is defined as a trait here and implemented in
//! `parley-providers`. The per-turn records (intent, action, memory entry) are
//! plain values so the pipeline stages stay easy to test in isolation.

pub mod error;
pub mod message;
pub mod provider;
pub mod intent;
pub mod action;
pub mod memory;

// Re-export key types at crate root for ergonomics
pub use error::{Error, ProviderError, Result};
pub use message::{Message, Role};
pub use provider::{Provider, ProviderRequest, ProviderResponse, Usage};
pub use intent::IntentRecord;
pub use action::{ActionDescriptor, ActionKind};
pub use memory::MemoryEntry;
