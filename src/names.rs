//! Name validation and normalization for databases and collections.
use crate::{RdocsError, Result};

/// Normalizes a collection name so that every spelling of it maps to the same file.
///
/// The name is trimmed and lower-cased, path separators and leading dots are removed and
/// anything from the next `.` onwards is dropped, so a caller can never smuggle in an extension.
pub fn normalize_collection_name(name: &str) -> Result<String> {
    let cleaned: String = name
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| *c != '/' && *c != '\\')
        .collect();

    let cleaned = cleaned.trim_start_matches('.');

    let stem = match cleaned.split_once('.') {
        Some((stem, _)) => stem,
        None => cleaned,
    };
    let stem = stem.trim();

    if stem.is_empty() {
        return Err(RdocsError::invalid_name(
            name,
            "collection name is empty after normalization",
        ));
    }

    Ok(stem.to_string())
}

/// Checks that a database name can be used as a single directory under the root.
pub fn validate_database_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(RdocsError::invalid_name(name, "database name is empty"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(RdocsError::invalid_name(
            name,
            "database name contains a path separator",
        ));
    }
    if name == "." || name == ".." {
        return Err(RdocsError::invalid_name(
            name,
            "database name refers to a relative directory",
        ));
    }
    Ok(())
}
