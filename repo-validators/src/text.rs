//! Plain string checks.

use crate::error::ValidationError;

/// Whether `value` contains no ASCII space (`' '`).
///
/// Tabs, newlines and other whitespace are not considered.
#[inline]
#[must_use]
pub fn has_no_spaces(value: &str) -> bool {
    !value.contains(' ')
}

/// Reject `value` if it contains an ASCII space.
///
/// # Errors
/// Returns [`ValidationError::ContainsSpace`] pointing at the first space.
pub fn validate_no_spaces(value: &str) -> Result<(), ValidationError> {
    if let Some(offset) = value.find(' ') {
        return Err(ValidationError::ContainsSpace {
            value: value.to_owned(),
            offset,
        });
    }
    Ok(())
}
