//! Settings page controller.
//!
//! A [`SettingsSession`] owns the form, the undo/redo history for that form and the
//! profile store it was opened with. One session corresponds to one visit to the settings
//! page; nothing here is shared between sessions.

use chrono::{DateTime, Local};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::history::{Command, CommandHistory, ProfileCommand};

use super::form::ProfileForm;
use super::photo::encode_data_uri;
use super::profile::{Profile, ProfileField};
use super::store::{ProfileStore, StoreError};
use super::validation::{ValidationError, validate_photo};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Please fill in all required fields: {0}")]
    InvalidForm(ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One row of the history panel
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub description: String,
    pub created_at: DateTime<Local>,
    /// False for commands that were undone and can be redone
    pub applied: bool,
}

pub struct SettingsSession {
    form: ProfileForm,
    history: CommandHistory<ProfileCommand>,
    /// Last confirmed value of every field; blur compares against this
    baseline: Profile,
    store: Box<dyn ProfileStore>,
}

impl SettingsSession {
    /// Start a session, loading the current profile from `store`.
    ///
    /// A missing or unreadable profile falls back to an empty one with the default photo.
    pub fn open(store: Box<dyn ProfileStore>, history_limit: usize) -> Self {
        let mut session = Self {
            form: ProfileForm::default(),
            history: CommandHistory::with_limit(history_limit),
            baseline: Profile::default(),
            store,
        };
        if let Err(e) = session.reload() {
            warn!("Failed to load profile, starting from defaults: {}", e);
        }
        session
    }

    /// Load the profile from the store into the form and reset the baseline
    fn reload(&mut self) -> Result<(), StoreError> {
        let profile = self.store.load()?.unwrap_or_default();
        self.form.load_profile(profile.clone());
        self.baseline = profile;
        Ok(())
    }

    pub fn form(&self) -> &ProfileForm {
        &self.form
    }

    /// User typing into a field
    pub fn edit_field(
        &mut self,
        field: ProfileField,
        value: impl Into<String>,
    ) -> Result<(), ValidationError> {
        self.form.edit(field, value)
    }

    /// Blur handler: record a command if the field was edited to a new, valid value.
    ///
    /// Returns `Ok(true)` when a command was recorded.
    pub fn on_field_change(&mut self, field: ProfileField) -> Result<bool, ValidationError> {
        if !self.form.is_dirty(field) {
            return Ok(false);
        }
        self.form.validate_field(field)?;

        let old_value = self.baseline.field(field);
        let new_value = self.form.value(field);
        if old_value == new_value {
            self.form.mark_pristine(field);
            return Ok(false);
        }

        let command = ProfileCommand::field_update(field, old_value, new_value);
        self.baseline.set_field(field, new_value.to_string());
        self.history.execute(command, &mut self.form);
        self.form.mark_pristine(field);
        Ok(true)
    }

    /// Photo picker handler: validate, decode and record the new photo.
    ///
    /// Returns `Ok(true)` when a command was recorded.
    pub fn on_photo_select(&mut self, bytes: &[u8], mime: &str) -> Result<bool, ValidationError> {
        validate_photo(bytes.len(), mime)?;

        let new_photo = encode_data_uri(mime, bytes);
        if new_photo == self.form.photo() {
            debug!("Selected photo is already the profile photo");
            return Ok(false);
        }

        let command = ProfileCommand::photo_update(self.form.photo(), new_photo.clone());
        self.baseline.profile_photo = new_photo;
        self.history.execute(command, &mut self.form);
        Ok(true)
    }

    pub fn undo(&mut self) {
        self.history.undo(&mut self.form);
        self.sync_baseline();
    }

    pub fn redo(&mut self) {
        self.history.redo(&mut self.form);
        self.sync_baseline();
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Unsaved work exists while anything is recorded, even if it has all been undone
    pub fn has_unsaved_changes(&self) -> bool {
        self.history.has_changes()
    }

    /// Persist the form. History is cleared only once the store accepts the profile.
    pub fn save_all(&mut self) -> Result<(), SettingsError> {
        self.form.validate().map_err(SettingsError::InvalidForm)?;

        let profile = self.form.to_profile();
        self.store.save(&profile)?;

        self.history.clear_history();
        self.form.mark_all_pristine();
        self.baseline = profile;
        info!("Profile saved");
        Ok(())
    }

    /// Roll back every applied command, forget the history and reload from the store
    pub fn discard_all(&mut self) -> Result<(), SettingsError> {
        while self.history.can_undo() {
            self.history.undo(&mut self.form);
        }
        self.history.clear_history();
        self.form.mark_all_pristine();
        self.sync_baseline();
        info!("Discarded all profile changes");

        self.reload()?;
        Ok(())
    }

    pub fn history_log(&self) -> Vec<HistoryEntry> {
        let applied = self.history.current_index().map_or(0, |i| i + 1);
        self.history
            .entries()
            .iter()
            .enumerate()
            .map(|(i, command)| HistoryEntry {
                description: command.describe(),
                created_at: command.created_at(),
                applied: i < applied,
            })
            .collect()
    }

    /// After undo/redo, pristine fields compare against what is now displayed
    fn sync_baseline(&mut self) {
        for field in ProfileField::ALL {
            if !self.form.is_dirty(field) {
                self.baseline
                    .set_field(field, self.form.value(field).to_string());
            }
        }
        self.baseline.profile_photo = self.form.photo().to_string();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::constants::DEFAULT_PROFILE_PHOTO;

    /// In-memory store whose contents stay visible to the test after boxing
    #[derive(Clone, Default)]
    struct SharedStore {
        profile: Rc<RefCell<Option<Profile>>>,
        fail: Rc<RefCell<bool>>,
    }

    impl ProfileStore for SharedStore {
        fn load(&self) -> Result<Option<Profile>, StoreError> {
            if *self.fail.borrow() {
                return Err(StoreError::Unavailable("offline".to_string()));
            }
            Ok(self.profile.borrow().clone())
        }

        fn save(&mut self, profile: &Profile) -> Result<(), StoreError> {
            if *self.fail.borrow() {
                return Err(StoreError::Unavailable("offline".to_string()));
            }
            *self.profile.borrow_mut() = Some(profile.clone());
            Ok(())
        }
    }

    fn alice() -> Profile {
        Profile {
            full_name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            ..Profile::default()
        }
    }

    fn open_with(profile: Option<Profile>) -> (SettingsSession, SharedStore) {
        let store = SharedStore::default();
        *store.profile.borrow_mut() = profile;
        let session = SettingsSession::open(Box::new(store.clone()), 50);
        (session, store)
    }

    #[test]
    fn test_open_loads_profile() {
        let (session, _) = open_with(Some(alice()));
        assert_eq!(session.form().value(ProfileField::FullName), "Alice");
        assert!(!session.has_unsaved_changes());
    }

    #[test]
    fn test_open_falls_back_to_defaults_when_store_fails() {
        let store = SharedStore::default();
        *store.fail.borrow_mut() = true;
        let session = SettingsSession::open(Box::new(store), 50);
        assert_eq!(session.form().value(ProfileField::FullName), "");
        assert_eq!(session.form().photo(), DEFAULT_PROFILE_PHOTO);
    }

    #[test]
    fn test_blur_records_field_change() {
        let (mut session, _) = open_with(Some(alice()));
        session
            .edit_field(ProfileField::FullName, "Alice B")
            .unwrap();
        assert_eq!(session.on_field_change(ProfileField::FullName), Ok(true));
        assert!(session.can_undo());
        assert!(!session.form().is_dirty(ProfileField::FullName));

        session.undo();
        assert_eq!(session.form().value(ProfileField::FullName), "Alice");
        assert!(!session.can_undo());
        assert!(session.can_redo());

        session.redo();
        assert_eq!(session.form().value(ProfileField::FullName), "Alice B");
    }

    #[test]
    fn test_blur_without_edit_records_nothing() {
        let (mut session, _) = open_with(Some(alice()));
        assert_eq!(session.on_field_change(ProfileField::FullName), Ok(false));
        assert!(!session.has_unsaved_changes());
    }

    #[test]
    fn test_blur_with_unchanged_value_records_nothing() {
        let (mut session, _) = open_with(Some(alice()));
        session.edit_field(ProfileField::FullName, "Alice").unwrap();
        assert_eq!(session.on_field_change(ProfileField::FullName), Ok(false));
        assert!(!session.has_unsaved_changes());
    }

    #[test]
    fn test_blur_with_invalid_value_records_nothing() {
        let (mut session, _) = open_with(Some(alice()));
        session.edit_field(ProfileField::FullName, "").unwrap();
        assert_eq!(
            session.on_field_change(ProfileField::FullName),
            Err(ValidationError::Required(ProfileField::FullName))
        );
        assert!(!session.has_unsaved_changes());
        assert!(session.form().is_dirty(ProfileField::FullName));
    }

    #[test]
    fn test_undo_does_not_make_field_recordable() {
        let (mut session, _) = open_with(Some(alice()));
        session.edit_field(ProfileField::Phone, "555-0100").unwrap();
        session.on_field_change(ProfileField::Phone).unwrap();

        session.undo();
        // A blur after undo must not re-record the programmatic write
        assert_eq!(session.on_field_change(ProfileField::Phone), Ok(false));
        assert_eq!(session.history_log().len(), 1);
        assert!(session.can_redo());
    }

    #[test]
    fn test_undo_over_pending_invalid_edit_keeps_redo_branch() {
        let (mut session, _) = open_with(Some(alice()));
        session.edit_field(ProfileField::FullName, "Bob").unwrap();
        assert_eq!(session.on_field_change(ProfileField::FullName), Ok(true));

        // Invalid edit left pending, then rolled back
        session.edit_field(ProfileField::FullName, "").unwrap();
        assert!(session.on_field_change(ProfileField::FullName).is_err());
        session.undo();
        assert_eq!(session.form().value(ProfileField::FullName), "Alice");
        assert!(!session.form().is_dirty(ProfileField::FullName));

        assert_eq!(session.on_field_change(ProfileField::FullName), Ok(false));
        assert!(session.can_redo());
        assert_eq!(session.history_log().len(), 1);

        session.redo();
        assert_eq!(session.form().value(ProfileField::FullName), "Bob");
    }

    #[test]
    fn test_edit_after_undo_compares_against_displayed_value() {
        let (mut session, _) = open_with(Some(alice()));
        session.edit_field(ProfileField::JobTitle, "Engineer").unwrap();
        session.on_field_change(ProfileField::JobTitle).unwrap();
        session.undo();

        session.edit_field(ProfileField::JobTitle, "Manager").unwrap();
        session.on_field_change(ProfileField::JobTitle).unwrap();

        session.undo();
        assert_eq!(session.form().value(ProfileField::JobTitle), "");
        assert_eq!(session.history_log().len(), 1);
    }

    #[test]
    fn test_photo_select_and_undo() {
        let (mut session, _) = open_with(Some(alice()));
        assert_eq!(session.on_photo_select(b"png-bytes", "image/png"), Ok(true));
        assert!(session.form().photo().starts_with("data:image/png;base64,"));

        session.undo();
        assert_eq!(session.form().photo(), DEFAULT_PROFILE_PHOTO);
    }

    #[test]
    fn test_same_photo_twice_records_once() {
        let (mut session, _) = open_with(Some(alice()));
        session.on_photo_select(b"png-bytes", "image/png").unwrap();
        assert_eq!(session.on_photo_select(b"png-bytes", "image/png"), Ok(false));
        assert_eq!(session.history_log().len(), 1);
    }

    #[test]
    fn test_rejected_photo_records_nothing() {
        let (mut session, _) = open_with(Some(alice()));
        let result = session.on_photo_select(b"%PDF", "application/pdf");
        assert!(matches!(
            result,
            Err(ValidationError::UnsupportedPhotoType(_))
        ));
        assert!(!session.has_unsaved_changes());
    }

    #[test]
    fn test_save_clears_history_and_persists() {
        let (mut session, store) = open_with(Some(alice()));
        session.edit_field(ProfileField::Bio, "Hello").unwrap();
        session.on_field_change(ProfileField::Bio).unwrap();

        session.save_all().unwrap();
        assert!(!session.has_unsaved_changes());
        assert!(!session.can_undo());
        assert_eq!(store.profile.borrow().as_ref().unwrap().bio, "Hello");
    }

    #[test]
    fn test_save_rejects_invalid_form() {
        let (mut session, store) = open_with(None);
        assert!(matches!(
            session.save_all(),
            Err(SettingsError::InvalidForm(ValidationError::Required(
                ProfileField::FullName
            )))
        ));
        assert!(store.profile.borrow().is_none());
    }

    #[test]
    fn test_failed_save_keeps_history() {
        let (mut session, store) = open_with(Some(alice()));
        session.edit_field(ProfileField::Phone, "555-0100").unwrap();
        session.on_field_change(ProfileField::Phone).unwrap();

        *store.fail.borrow_mut() = true;
        assert!(matches!(session.save_all(), Err(SettingsError::Store(_))));
        assert!(session.has_unsaved_changes());
        assert!(session.can_undo());
    }

    #[test]
    fn test_discard_all_restores_stored_profile() {
        let (mut session, _) = open_with(Some(alice()));
        session.edit_field(ProfileField::FullName, "Bob").unwrap();
        session.on_field_change(ProfileField::FullName).unwrap();
        session.on_photo_select(b"gif", "image/gif").unwrap();

        session.discard_all().unwrap();
        assert_eq!(session.form().value(ProfileField::FullName), "Alice");
        assert_eq!(session.form().photo(), DEFAULT_PROFILE_PHOTO);
        assert!(!session.has_unsaved_changes());
    }

    #[test]
    fn test_has_unsaved_changes_after_undoing_everything() {
        let (mut session, _) = open_with(Some(alice()));
        session.edit_field(ProfileField::Phone, "555-0100").unwrap();
        session.on_field_change(ProfileField::Phone).unwrap();
        session.undo();

        assert_eq!(session.form().profile(), &alice());
        assert!(session.has_unsaved_changes());
    }

    #[test]
    fn test_history_log_marks_redo_branch() {
        let (mut session, _) = open_with(Some(alice()));
        session.edit_field(ProfileField::Phone, "555-0100").unwrap();
        session.on_field_change(ProfileField::Phone).unwrap();
        session.on_photo_select(b"png", "image/png").unwrap();
        session.undo();

        let log = session.history_log();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].description, "Changed phone");
        assert!(log[0].applied);
        assert_eq!(log[1].description, "Changed profile photo");
        assert!(!log[1].applied);
    }
}
