//! Subfolder path checks.
//!
//! A subfolder locates a directory inside a repository. It must be a clean
//! relative path: `[A-Za-z0-9-_./]` only, no leading or trailing `/`, and no
//! empty, `.` or `..` segments. The empty string means "repository root".

use crate::error::ValidationError;

/// Segments that never appear in a clean path.
const FORBIDDEN_SEGMENTS: [&str; 3] = ["", ".", ".."];

fn subfolder_error(path: &str, cause: impl Into<String>) -> ValidationError {
    ValidationError::Subfolder {
        path: path.to_owned(),
        cause: cause.into(),
    }
}

/// Validates a single subfolder path character without regex.
///
/// Valid characters: ASCII letters, digits, `-`, `_`, `.` and `/`.
#[inline]
#[must_use]
pub fn is_valid_path_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/')
}

/// Validate a subfolder path.
///
/// # Errors
/// Returns [`ValidationError::Subfolder`] naming the first rule the path
/// breaks.
pub fn validate_subfolder_path(path: &str) -> Result<(), ValidationError> {
    if path.is_empty() {
        return Ok(());
    }

    if path.starts_with('/') {
        return Err(subfolder_error(path, "must be relative (leading '/')"));
    }

    if path.ends_with('/') {
        return Err(subfolder_error(path, "must not end with '/'"));
    }

    if let Some(c) = path.chars().find(|&c| !is_valid_path_char(c)) {
        return Err(subfolder_error(
            path,
            format!("character '{}' is not allowed, use [A-Za-z0-9-_./]", c.escape_default()),
        ));
    }

    let forbidden = path
        .split('/')
        .enumerate()
        .find(|(_, segment)| FORBIDDEN_SEGMENTS.contains(segment));
    if let Some((i, segment)) = forbidden {
        let cause = if segment.is_empty() {
            format!("segment #{} is empty (consecutive '/')", i + 1)
        } else {
            format!("segment #{} is '{segment}', traversal segments are not allowed", i + 1)
        };
        return Err(subfolder_error(path, cause));
    }

    Ok(())
}

/// Whether `path` is a clean relative subfolder path (or empty).
#[must_use]
pub fn is_valid_subfolder_path(path: &str) -> bool {
    validate_subfolder_path(path).is_ok()
}
