//! The catalog entry type and its validation rules.

use serde::Deserialize;
use thiserror::Error;

/// Fixed filename marking a directory as a discoverable utility.
pub const METADATA_FILE: &str = "util.yaml";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidateError {
    #[error("missing name")]
    MissingName,
    #[error("missing description")]
    MissingDescription,
}

/// One published utility, decoded from a [`METADATA_FILE`] mapping.
///
/// All fields default to empty so that a missing key surfaces as a
/// validation error naming the field, not as a decode failure. Unknown
/// keys in the metadata file are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Utility {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// URL path segment; empty until [`Utility::validate`] fills the default.
    #[serde(default)]
    pub slug: String,
}

impl Utility {
    /// Ensure mandatory fields are present and derive fallbacks.
    ///
    /// An empty slug is not an error: it is filled with `default_slug`,
    /// the utility directory's own name on disk.
    pub fn validate(&mut self, default_slug: &str) -> Result<(), ValidateError> {
        if self.name.is_empty() {
            return Err(ValidateError::MissingName);
        }

        if self.description.is_empty() {
            return Err(ValidateError::MissingDescription);
        }

        if self.slug.is_empty() {
            self.slug = default_slug.to_string();
        }

        Ok(())
    }
}
