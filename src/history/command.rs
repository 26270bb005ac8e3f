//! Command trait for undo/redo operations.

use chrono::{DateTime, Local};

/// A single reversible change to some externally owned state.
///
/// `apply` and `reverse` write straight into the target. They must not go through any
/// path that records new commands, and calling either twice in a row leaves the target
/// as a single call would.
pub trait Command {
    /// State the command mutates, supplied by the caller on every call.
    type Target;

    /// Set the target to the command's new value.
    fn apply(&self, target: &mut Self::Target);

    /// Set the target back to the command's old value.
    fn reverse(&self, target: &mut Self::Target);

    /// Short summary for the history panel.
    fn describe(&self) -> String;

    /// When the command was created.
    fn created_at(&self) -> DateTime<Local>;
}
