//! Subcommand implementations.

pub mod chat;
pub mod doctor;
pub mod init;
