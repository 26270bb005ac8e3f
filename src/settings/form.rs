//! Editable profile form state.
//!
//! User edits and programmatic writes take different paths. `edit` is what a keystroke
//! does: it changes the value and marks the field dirty, which is what makes the next
//! blur eligible to record a command. The `*_silent` setters are used by commands and by
//! loading; a silent write replaces any pending user edit and leaves the field pristine,
//! so undo/redo can never spawn new commands.

use std::collections::BTreeSet;

use super::profile::{Profile, ProfileField};
use super::validation::{ValidationError, validate_field};

#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    profile: Profile,
    dirty: BTreeSet<ProfileField>,
}

impl ProfileForm {
    pub fn from_profile(profile: Profile) -> Self {
        Self {
            profile,
            dirty: BTreeSet::new(),
        }
    }

    /// Replace every value and reset dirty tracking
    pub fn load_profile(&mut self, profile: Profile) {
        self.profile = profile;
        self.dirty.clear();
    }

    pub fn value(&self, field: ProfileField) -> &str {
        self.profile.field(field)
    }

    pub fn photo(&self) -> &str {
        &self.profile.profile_photo
    }

    /// User edit of a field. Rejected for read-only fields.
    pub fn edit(
        &mut self,
        field: ProfileField,
        value: impl Into<String>,
    ) -> Result<(), ValidationError> {
        if field.is_read_only() {
            return Err(ValidationError::ReadOnly(field));
        }
        self.profile.set_field(field, value.into());
        self.dirty.insert(field);
        Ok(())
    }

    /// Programmatic write that does not count as a user edit
    pub fn set_silent(&mut self, field: ProfileField, value: String) {
        self.profile.set_field(field, value);
        self.dirty.remove(&field);
    }

    pub fn set_photo_silent(&mut self, photo: String) {
        self.profile.profile_photo = photo;
    }

    pub fn is_dirty(&self, field: ProfileField) -> bool {
        self.dirty.contains(&field)
    }

    pub fn mark_pristine(&mut self, field: ProfileField) {
        self.dirty.remove(&field);
    }

    pub fn mark_all_pristine(&mut self) {
        self.dirty.clear();
    }

    pub fn validate_field(&self, field: ProfileField) -> Result<(), ValidationError> {
        validate_field(field, self.value(field))
    }

    /// Validate every field, reporting the first failure
    pub fn validate(&self) -> Result<(), ValidationError> {
        ProfileField::ALL
            .into_iter()
            .try_for_each(|field| self.validate_field(field))
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn to_profile(&self) -> Profile {
        self.profile.clone()
    }
}
