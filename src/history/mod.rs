//! Undo/Redo system for profile edits.
//!
//! This module provides a bounded command history that lets the settings page undo and
//! redo confirmed edits. Every reversible change (a field update on blur, a new profile
//! photo) is recorded as a command that knows how to apply and reverse itself.
//!
//! ## Timeline
//!
//! The history is linear. Undoing moves a cursor back without discarding anything; the
//! next `execute` drops every command past the cursor before appending.
//!
//! ## Module Structure
//!
//! - [`command`] - Command trait shared by all reversible operations
//! - [`commands`] - ProfileCommand enum defining the profile edits
//! - [`command_history`] - CommandHistory for tracking the timeline and cursor

mod command;
mod command_history;
mod commands;


// Re-exports
pub use command::Command;
pub use command_history::CommandHistory;
pub use commands::ProfileCommand;

/// Maximum number of commands to keep in history
pub const MAX_HISTORY_SIZE: usize = 50;
