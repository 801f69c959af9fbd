//! Error types for repository input validation.

use std::path::PathBuf;

use thiserror::Error;

use crate::source::RepositorySource;

/// Why a piece of user-supplied repository input was rejected.
///
/// Every variant carries the offending input so callers can surface it
/// without keeping their own copy around.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    /// The repository source tag does not name a supported provider.
    #[error("Unknown repository source '{tag}' (expected one of: {expected})")]
    UnknownSource {
        /// The raw tag as supplied.
        tag: String,
        /// Comma-separated list of accepted tags.
        expected: String,
    },

    /// The URL is not a repository URL for the requested provider.
    #[error("Invalid {provider} repository URL '{url}': {cause}")]
    RepositoryUrl {
        /// Provider the URL was checked against.
        provider: RepositorySource,
        /// The raw URL string.
        url: String,
        /// Human-readable description of the problem.
        cause: String,
    },

    /// The value contains an ASCII space.
    #[error("'{value}' must not contain spaces (found one at byte {offset})")]
    ContainsSpace {
        /// The raw value.
        value: String,
        /// Byte offset of the first space.
        offset: usize,
    },

    /// The string is not an acceptable http(s) URL.
    #[error("Invalid URL '{url}': {cause}")]
    Url {
        /// The raw URL string.
        url: String,
        /// Human-readable description of the problem.
        cause: String,
    },

    /// The subfolder path is not a clean relative path.
    #[error("Invalid subfolder path '{path}': {cause}")]
    Subfolder {
        /// The raw path string.
        path: String,
        /// Human-readable description of the problem.
        cause: String,
    },
}

/// Errors from loading repository configuration documents.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigLoadError {
    /// The file extension does not name a supported document format.
    #[error("{}: unsupported file extension (expected .json, .yaml or .yml)", .path.display())]
    UnsupportedFormat {
        /// The file that was not loaded.
        path: PathBuf,
    },

    /// The JSON document is malformed or does not describe repository configs.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The YAML stream is malformed.
    #[error("YAML parse error: {0}")]
    Yaml(String),
}
