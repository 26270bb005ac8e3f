//! Command history for tracking undo/redo state.

use tracing::debug;

use super::MAX_HISTORY_SIZE;
use super::command::Command;

/// Bounded, linear command history with a cursor.
///
/// `applied` counts the commands at the front of `entries` that are currently in effect,
/// so the cursor of the last applied command is `applied - 1` and a pristine history has
/// `applied == 0`. Entries at `applied..` are the redo branch.
#[derive(Debug)]
pub struct CommandHistory<C> {
    entries: Vec<C>,
    applied: usize,
    limit: usize,
}

impl<C> Default for CommandHistory<C> {
    fn default() -> Self {
        Self::with_limit(MAX_HISTORY_SIZE)
    }
}

impl<C: Command> CommandHistory<C> {
    /// Apply a new command and record it, dropping any redo branch first
    pub fn execute(&mut self, command: C, target: &mut C::Target) {
        let pruned = self.entries.len() - self.applied;
        if pruned > 0 {
            debug!("Discarding {} redoable command(s)", pruned);
        }
        self.entries.truncate(self.applied);

        command.apply(target);
        debug!("Executed: {}", command.describe());
        self.entries.push(command);
        self.applied += 1;

        if self.entries.len() > self.limit {
            let evicted = self.entries.remove(0);
            self.applied -= 1;
            debug!("History full, evicted: {}", evicted.describe());
        }
    }

    /// Reverse the last applied command. No-op when nothing is applied.
    pub fn undo(&mut self, target: &mut C::Target) {
        if !self.can_undo() {
            return;
        }
        let command = &self.entries[self.applied - 1];
        command.reverse(target);
        debug!("Undid: {}", command.describe());
        self.applied -= 1;
    }

    /// Re-apply the next command on the redo branch. No-op when there is none.
    pub fn redo(&mut self, target: &mut C::Target) {
        if !self.can_redo() {
            return;
        }
        self.applied += 1;
        let command = &self.entries[self.applied - 1];
        command.apply(target);
        debug!("Redid: {}", command.describe());
    }
}

impl<C> CommandHistory<C> {
    /// Create an empty history holding at most `limit` commands (at least one)
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            applied: 0,
            limit: limit.max(1),
        }
    }

    /// Check if there are commands to undo
    pub fn can_undo(&self) -> bool {
        self.applied > 0
    }

    /// Check if there are commands to redo
    pub fn can_redo(&self) -> bool {
        self.applied < self.entries.len()
    }

    /// True whenever anything is recorded, even if every command has been undone
    pub fn has_changes(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Forget all commands without reversing any of them
    pub fn clear_history(&mut self) {
        self.entries.clear();
        self.applied = 0;
    }

    /// Index of the last applied command, `None` when pristine
    pub fn current_index(&self) -> Option<usize> {
        self.applied.checked_sub(1)
    }

    /// All recorded commands, oldest first, including the redo branch
    pub fn entries(&self) -> &[C] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}
