//! Field and photo validation rules for the settings form.

use thiserror::Error;

use crate::constants::{MAX_BIO_LENGTH, MAX_PHOTO_BYTES};

use super::profile::ProfileField;

/// Why an edit or a photo was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(ProfileField),

    #[error("{field} must be at most {max} characters (got {actual})")]
    TooLong {
        field: ProfileField,
        max: usize,
        actual: usize,
    },

    #[error("{0} cannot be edited")]
    ReadOnly(ProfileField),

    #[error("No photo selected")]
    EmptyPhoto,

    #[error("Photo must be under 1MB (got {size} bytes)")]
    PhotoTooLarge { size: usize },

    #[error("Unsupported photo type: {0}")]
    UnsupportedPhotoType(String),
}

/// Check a single field value
pub fn validate_field(field: ProfileField, value: &str) -> Result<(), ValidationError> {
    match field {
        ProfileField::FullName if value.trim().is_empty() => Err(ValidationError::Required(field)),
        ProfileField::Bio => {
            let actual = value.chars().count();
            if actual > MAX_BIO_LENGTH {
                Err(ValidationError::TooLong {
                    field,
                    max: MAX_BIO_LENGTH,
                    actual,
                })
            } else {
                Ok(())
            }
        }
        _ => Ok(()),
    }
}

/// Check a selected photo before it is decoded
pub fn validate_photo(size: usize, mime: &str) -> Result<(), ValidationError> {
    if size == 0 {
        return Err(ValidationError::EmptyPhoto);
    }
    if size > MAX_PHOTO_BYTES {
        return Err(ValidationError::PhotoTooLarge { size });
    }
    if !mime.starts_with("image/") {
        return Err(ValidationError::UnsupportedPhotoType(mime.to_string()));
    }
    Ok(())
}
