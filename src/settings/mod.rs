//! Account settings page: profile form, validation and the editing session.
//!
//! ## Module Structure
//!
//! - [`profile`] - Profile record and field keys
//! - [`form`] - Form state with dirty tracking and silent programmatic writes
//! - [`validation`] - Field and photo rules
//! - [`photo`] - MIME detection and data URI encoding for selected photos
//! - [`store`] - ProfileStore trait and the JSON file store
//! - [`session`] - SettingsSession controller owning one undo/redo history

mod form;
mod photo;
mod profile;
mod session;
mod store;
mod validation;

pub use form::ProfileForm;
pub use photo::{encode_data_uri, guess_mime};
pub use profile::{Profile, ProfileField};
pub use session::{HistoryEntry, SettingsError, SettingsSession};
pub use store::{JsonProfileStore, ProfileStore, StoreError};
pub use validation::{ValidationError, validate_field, validate_photo};
