//! Account profile editor for the Mailroom client.
//!
//! The settings page edits a profile through a [`settings::SettingsSession`], which
//! records every confirmed edit in a bounded [`history::CommandHistory`] so it can be
//! undone and redone until the profile is saved.

pub mod config;
pub mod constants;
pub mod history;
pub mod logging;
pub mod paths;
pub mod settings;
