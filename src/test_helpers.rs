//! Shared fixture helpers for unit tests.

use crate::types::METADATA_FILE;
use std::fs;
use std::path::Path;

/// Create a utility directory under `root` with the given metadata content.
pub(crate) fn write_utility(root: &Path, dir: &str, yaml: &str) {
    let dir = root.join(dir);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(METADATA_FILE), yaml).unwrap();
}
