//! Profile command enum for undo/redo operations.

use chrono::{DateTime, Local};

use crate::settings::{ProfileField, ProfileForm};

use super::command::Command;

/// A reversible edit on the profile form
#[derive(Clone, Debug, PartialEq)]
pub enum ProfileCommand {
    /// A text field was changed and confirmed
    FieldUpdate {
        field: ProfileField,
        old_value: String,
        new_value: String,
        created_at: DateTime<Local>,
    },
    /// The profile photo was replaced
    PhotoUpdate {
        /// Image reference (data URI or URL) shown before the change
        old_photo: String,
        /// Image reference shown after the change
        new_photo: String,
        created_at: DateTime<Local>,
    },
}

impl ProfileCommand {
    pub fn field_update(
        field: ProfileField,
        old_value: impl Into<String>,
        new_value: impl Into<String>,
    ) -> Self {
        ProfileCommand::FieldUpdate {
            field,
            old_value: old_value.into(),
            new_value: new_value.into(),
            created_at: Local::now(),
        }
    }

    pub fn photo_update(old_photo: impl Into<String>, new_photo: impl Into<String>) -> Self {
        ProfileCommand::PhotoUpdate {
            old_photo: old_photo.into(),
            new_photo: new_photo.into(),
            created_at: Local::now(),
        }
    }
}

impl Command for ProfileCommand {
    type Target = ProfileForm;

    fn apply(&self, form: &mut ProfileForm) {
        match self {
            ProfileCommand::FieldUpdate {
                field, new_value, ..
            } => form.set_silent(*field, new_value.clone()),
            ProfileCommand::PhotoUpdate { new_photo, .. } => {
                form.set_photo_silent(new_photo.clone())
            }
        }
    }

    fn reverse(&self, form: &mut ProfileForm) {
        match self {
            ProfileCommand::FieldUpdate {
                field, old_value, ..
            } => form.set_silent(*field, old_value.clone()),
            ProfileCommand::PhotoUpdate { old_photo, .. } => {
                form.set_photo_silent(old_photo.clone())
            }
        }
    }

    fn describe(&self) -> String {
        match self {
            ProfileCommand::FieldUpdate { field, .. } => format!("Changed {}", field),
            ProfileCommand::PhotoUpdate { .. } => "Changed profile photo".to_string(),
        }
    }

    fn created_at(&self) -> DateTime<Local> {
        match self {
            ProfileCommand::FieldUpdate { created_at, .. }
            | ProfileCommand::PhotoUpdate { created_at, .. } => *created_at,
        }
    }
}
