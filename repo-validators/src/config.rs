//! User-supplied repository configuration and the guard applied to it.
//!
//! Configurations arrive as JSON or YAML documents holding either a single
//! object or a list of them. Every field is checked independently so that one
//! run reports every problem, not just the first.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

use crate::error::{ConfigLoadError, ValidationError};
use crate::http_url::validate_url;
use crate::report::{ConfigReport, FieldError};
use crate::repository::validate_repository_url;
use crate::source::RepositorySource;
use crate::subfolder::validate_subfolder_path;
use crate::text::validate_no_spaces;

/// A repository the user wants to register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RepositoryConfig {
    /// Short identifier labelling the repository in reports. No spaces.
    pub name: String,
    /// Hosting provider the URL must belong to.
    pub source: RepositorySource,
    /// Repository URL, e.g. `https://github.com/owner/repo`.
    pub url: String,
    /// Branch to track. Branch names cannot contain spaces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    /// Directory inside the repository; absent or empty means the root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subfolder: Option<String>,
    /// Project homepage, any public http(s) URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
}

impl RepositoryConfig {
    /// A configuration with only the required fields set.
    #[must_use]
    pub fn new(name: impl Into<String>, source: RepositorySource, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source,
            url: url.into(),
            branch: None,
            subfolder: None,
            homepage: None,
        }
    }

    /// Run every field guard and collect the rejected fields.
    #[must_use]
    pub fn check(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        let mut reject = |field: &str, value: &str, err: &ValidationError| {
            trace!(repository = %self.name, field, %err, "field rejected");
            errors.push(FieldError::new(&self.name, field, value, err));
        };

        if let Err(err) = validate_no_spaces(&self.name) {
            reject("name", &self.name, &err);
        }
        if let Err(err) = validate_repository_url(self.source, &self.url) {
            reject("url", &self.url, &err);
        }
        if let Some(branch) = &self.branch
            && let Err(err) = validate_no_spaces(branch)
        {
            reject("branch", branch, &err);
        }
        if let Some(subfolder) = &self.subfolder
            && let Err(err) = validate_subfolder_path(subfolder)
        {
            reject("subfolder", subfolder, &err);
        }
        if let Some(homepage) = &self.homepage
            && let Err(err) = validate_url(homepage)
        {
            reject("homepage", homepage, &err);
        }

        debug!(
            repository = %self.name,
            source = %self.source,
            rejected = errors.len(),
            "checked repository configuration"
        );
        errors
    }
}

/// Check a batch of configurations.
#[must_use]
pub fn check_configs(configs: &[RepositoryConfig]) -> ConfigReport {
    let mut report = ConfigReport::default();
    for config in configs {
        let errors = config.check();
        report.checked += 1;
        if !errors.is_empty() {
            report.failed += 1;
        }
        report.errors.extend(errors);
    }
    report.ok = report.failed == 0;
    report
}

/// Document format of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    Json,
    Yaml,
}

/// Pick the document format from a file extension.
#[must_use]
pub fn content_format_for(path: &Path) -> Option<ContentFormat> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Some(ContentFormat::Json),
        Some("yaml" | "yml") => Some(ContentFormat::Yaml),
        _ => None,
    }
}

/// Parse a document holding one configuration object or an array of them.
///
/// YAML input may be a multi-document stream (`---` separated); configurations
/// from every document are returned in order and empty documents are skipped.
///
/// # Errors
///
/// Returns [`ConfigLoadError`] if the document is malformed, or if it is
/// well-formed but does not describe repository configurations (missing
/// required fields, unknown fields, unknown source tag).
pub fn parse_configs(
    content: &str,
    format: ContentFormat,
) -> Result<Vec<RepositoryConfig>, ConfigLoadError> {
    let documents: Vec<Value> = match format {
        ContentFormat::Json => vec![serde_json::from_str(content)?],
        ContentFormat::Yaml => serde_saphyr::from_multiple(content)
            .map_err(|e| ConfigLoadError::Yaml(e.to_string()))?,
    };

    let mut configs = Vec::new();
    for document in documents {
        match document {
            Value::Null => {}
            Value::Array(_) => {
                configs.extend(serde_json::from_value::<Vec<RepositoryConfig>>(document)?);
            }
            _ => configs.push(serde_json::from_value(document)?),
        }
    }
    Ok(configs)
}

/// Read and parse a configuration file, choosing the format by extension.
///
/// # Errors
///
/// Returns an error if the extension is not `.json`, `.yaml` or `.yml`, if
/// the file cannot be read, or if [`parse_configs`] rejects its content.
pub fn load_configs(path: &Path) -> anyhow::Result<Vec<RepositoryConfig>> {
    let Some(format) = content_format_for(path) else {
        return Err(ConfigLoadError::UnsupportedFormat {
            path: path.to_owned(),
        }
        .into());
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let configs = parse_configs(&content, format)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    debug!(path = %path.display(), count = configs.len(), "loaded repository configurations");
    Ok(configs)
}
