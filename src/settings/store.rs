//! Profile store seam.
//!
//! The settings page reads and writes the profile through [`ProfileStore`]. The JSON file
//! store is the local stand-in for the account backend.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use super::profile::Profile;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Could not access profile file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Profile file {path:?} is corrupted: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize profile: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Profile backend unavailable: {0}")]
    Unavailable(String),
}

/// Where profiles are loaded from and saved to
pub trait ProfileStore {
    /// Load the stored profile, `None` if nothing has been saved yet
    fn load(&self) -> Result<Option<Profile>, StoreError>;

    fn save(&mut self, profile: &Profile) -> Result<(), StoreError>;
}

/// Stores the profile as pretty-printed JSON in a single file
#[derive(Debug, Clone)]
pub struct JsonProfileStore {
    path: PathBuf,
}

impl JsonProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProfileStore for JsonProfileStore {
    fn load(&self) -> Result<Option<Profile>, StoreError> {
        if !self.path.exists() {
            info!("No profile found at {:?}", self.path);
            return Ok(None);
        }

        let json = std::fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        let profile = serde_json::from_str(&json).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })?;
        info!("Loaded profile from {:?}", self.path);
        Ok(Some(profile))
    }

    fn save(&mut self, profile: &Profile) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(profile)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        std::fs::write(&self.path, json).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        info!("Profile saved to {:?}", self.path);
        Ok(())
    }
}
