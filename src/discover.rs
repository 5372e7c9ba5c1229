//! Utility discovery.
//!
//! Stage 1 of the utildex build. Walks the immediate children of a root
//! directory, loads the metadata file from each child that has one, validates
//! the result, and produces a name-sorted entry list.
//!
//! ## Directory Structure
//!
//! ```text
//! utilities/                       # Root passed to discover()
//! ├── color-picker/
//! │   ├── util.yaml                # name/description (+ optional slug)
//! │   └── index.html
//! ├── json-formatter/
//! │   └── util.yaml
//! ├── scripts/                     # No util.yaml → silently skipped
//! └── README.md                    # Not a directory → ignored
//! ```
//!
//! ## Failure Policy
//!
//! Only "metadata file does not exist" is benign. Any other problem in any
//! candidate directory — unreadable file, malformed YAML, missing required
//! field — aborts the whole discovery with an error naming the directory.
//! A partial list is never returned.

use crate::types::{METADATA_FILE, Utility, ValidateError};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiscoverError {
    #[error("read root: {0}")]
    ReadRoot(#[source] io::Error),
    #[error("load utility {dir:?}: {source}")]
    Utility { dir: String, source: LoadError },
}

/// What went wrong inside one candidate directory.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("open metadata: {0}")]
    Open(#[from] io::Error),
    #[error("decode metadata: {0}")]
    Decode(#[from] serde_yaml::Error),
    #[error("validate metadata: {0}")]
    Validate(#[from] ValidateError),
}

/// Load all utilities beneath `root`, sorted ascending by name.
///
/// Sorting is plain byte-wise `String` ordering; entries with equal names
/// keep their relative order.
pub fn discover(root: &Path) -> Result<Vec<Utility>, DiscoverError> {
    let entries = fs::read_dir(root).map_err(DiscoverError::ReadRoot)?;

    let mut utils = Vec::new();

    for entry in entries {
        let entry = entry.map_err(DiscoverError::ReadRoot)?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let dir_name = entry.file_name().to_string_lossy().to_string();
        match load_utility(&path, &dir_name) {
            Ok(Some(util)) => utils.push(util),
            Ok(None) => {}
            Err(source) => {
                return Err(DiscoverError::Utility {
                    dir: dir_name,
                    source,
                });
            }
        }
    }

    utils.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(utils)
}

/// Load one candidate directory.
///
/// `Ok(None)` means the metadata file does not exist — the directory is
/// simply not a utility. Every other failure is fatal to the caller.
fn load_utility(dir: &Path, default_slug: &str) -> Result<Option<Utility>, LoadError> {
    let raw = match fs::read_to_string(dir.join(METADATA_FILE)) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(LoadError::Open(err)),
    };

    let mut util: Utility = serde_yaml::from_str(&raw)?;
    util.validate(default_slug)?;

    Ok(Some(util))
}
