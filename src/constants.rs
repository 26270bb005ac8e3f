//! Centralized constants used across the application.
//!
//! This module contains limits and defaults that are used in multiple places or
//! would benefit from being named constants.

/// Photo shown when the profile has none
pub const DEFAULT_PROFILE_PHOTO: &str = "assets/default-avatar.png";

/// Largest accepted profile photo in bytes (1 MiB)
pub const MAX_PHOTO_BYTES: usize = 1024 * 1024;

/// Maximum number of characters in the bio field
pub const MAX_BIO_LENGTH: usize = 500;

/// Log filter used when neither RUST_LOG nor the config provides one
pub const DEFAULT_LOG_FILTER: &str = "info,mailroom_settings=debug";
