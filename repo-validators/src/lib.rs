//! # repo-validators
//!
//! Validation primitives for user-supplied repository configuration.
//!
//! Four independent, pure predicates form the core:
//!
//! - [`is_valid_repository_url`]: a GitHub or GitLab `owner/repo` URL for a given provider
//! - [`has_no_spaces`]: no ASCII space in a string
//! - [`is_valid_url`]: a well-formed, non-local http(s) URL
//! - [`is_valid_subfolder_path`]: a clean relative path inside a repository
//!
//! Each predicate has a `validate_*` counterpart returning a
//! [`ValidationError`] that explains the rejection. [`RepositoryConfig`] and
//! [`check_configs`] apply all of them to whole configuration documents.
//!
//! ## Quick Start
//!
//! ```rust
//! use repo_validators::{
//!     RepositorySource, has_no_spaces, is_valid_repository_url, is_valid_subfolder_path,
//!     is_valid_url,
//! };
//!
//! assert!(is_valid_repository_url(RepositorySource::GitHub, "https://github.com/foo/bar"));
//! assert!(!is_valid_repository_url(RepositorySource::GitHub, "https://gitlab.com/foo/bar"));
//! assert!(has_no_spaces("feature/login"));
//! assert!(!is_valid_url("http://localhost:3000"));
//! assert!(is_valid_subfolder_path("src/app.ts"));
//! assert!(!is_valid_subfolder_path("a/../b"));
//! ```

mod config;
mod error;
mod http_url;
pub mod output;
mod report;
mod repository;
mod source;
mod subfolder;
mod text;

pub use config::{
    ContentFormat, RepositoryConfig, check_configs, content_format_for, load_configs,
    parse_configs,
};
pub use error::{ConfigLoadError, ValidationError};
pub use http_url::{is_valid_url, validate_url};
pub use report::{ConfigReport, FieldError};
pub use repository::{
    RepositoryUrl, is_valid_repository_url, is_valid_repository_url_tag, validate_repository_url,
};
pub use source::RepositorySource;
pub use subfolder::{is_valid_path_char, is_valid_subfolder_path, validate_subfolder_path};
pub use text::{has_no_spaces, validate_no_spaces};
