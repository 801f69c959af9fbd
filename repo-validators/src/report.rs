//! Validation report types.

use serde::Serialize;

use crate::error::ValidationError;

/// A single rejected field of a repository configuration.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct FieldError {
    /// Name of the repository configuration the field belongs to.
    pub repository: String,
    /// Field name as written in configuration files (e.g. `subfolder`).
    pub field: String,
    /// The raw field value.
    pub value: String,
    /// Human-readable error description
    pub error: String,
}

impl FieldError {
    pub(crate) fn new(repository: &str, field: &str, value: &str, error: &ValidationError) -> Self {
        Self {
            repository: repository.to_owned(),
            field: field.to_owned(),
            value: value.to_owned(),
            error: error.to_string(),
        }
    }

    /// Format the error for human-readable output: `{repository}.{field}: {error}`.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        format!("{}.{}: {}", self.repository, self.field, self.error)
    }
}

/// Result of checking a batch of repository configurations.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct ConfigReport {
    /// Number of configurations checked.
    pub checked: usize,
    /// Number of configurations with at least one rejected field.
    pub failed: usize,
    /// Whether every configuration passed.
    pub ok: bool,
    /// Every rejected field, in configuration order.
    pub errors: Vec<FieldError>,
}

impl Default for ConfigReport {
    fn default() -> Self {
        Self {
            checked: 0,
            failed: 0,
            ok: true,
            errors: Vec::new(),
        }
    }
}

impl ConfigReport {
    /// Number of rejected fields.
    #[must_use]
    pub fn errors_count(&self) -> usize {
        self.errors.len()
    }

    /// Fold another report into this one.
    pub fn merge(&mut self, other: Self) {
        self.checked += other.checked;
        self.failed += other.failed;
        self.errors.extend(other.errors);
        self.ok = self.failed == 0;
    }
}
