//! Profile record and the editable field keys.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PROFILE_PHOTO;

/// Editable text fields on the settings page
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProfileField {
    FullName,
    Email,
    JobTitle,
    Phone,
    Bio,
}

impl ProfileField {
    pub const ALL: [ProfileField; 5] = [
        ProfileField::FullName,
        ProfileField::Email,
        ProfileField::JobTitle,
        ProfileField::Phone,
        ProfileField::Bio,
    ];

    /// Key used in the profile JSON and in history descriptions
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileField::FullName => "fullName",
            ProfileField::Email => "email",
            ProfileField::JobTitle => "jobTitle",
            ProfileField::Phone => "phone",
            ProfileField::Bio => "bio",
        }
    }

    /// The account email is shown but cannot be edited here
    pub fn is_read_only(&self) -> bool {
        matches!(self, ProfileField::Email)
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProfileField::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown profile field: {}", s))
    }
}

fn default_photo() -> String {
    DEFAULT_PROFILE_PHOTO.to_string()
}

/// User profile as exchanged with the profile store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default = "default_photo")]
    pub profile_photo: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            job_title: String::new(),
            phone: String::new(),
            bio: String::new(),
            profile_photo: default_photo(),
        }
    }
}

impl Profile {
    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::FullName => &self.full_name,
            ProfileField::Email => &self.email,
            ProfileField::JobTitle => &self.job_title,
            ProfileField::Phone => &self.phone,
            ProfileField::Bio => &self.bio,
        }
    }

    pub fn set_field(&mut self, field: ProfileField, value: String) {
        let slot = match field {
            ProfileField::FullName => &mut self.full_name,
            ProfileField::Email => &mut self.email,
            ProfileField::JobTitle => &mut self.job_title,
            ProfileField::Phone => &mut self.phone,
            ProfileField::Bio => &mut self.bio,
        };
        *slot = value;
    }
}
