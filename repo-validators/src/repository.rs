//! Repository URL matching for the supported hosting providers.
//!
//! A single pattern covers every provider: the host alternation is built from
//! [`RepositorySource::ALL`] and the captured host is then compared with the
//! host of the provider being checked. Owner and repository names share one
//! segment pattern.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::ValidationError;
use crate::source::RepositorySource;

/// Owner and repository names: ASCII word characters, dots and dashes.
const NAME_PATTERN: &str = r"[A-Za-z0-9_.-]+";

static REPOSITORY_URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let hosts = RepositorySource::ALL
        .into_iter()
        .map(|source| regex::escape(source.host()))
        .collect::<Vec<_>>()
        .join("|");
    let pattern = format!(
        r"^(?P<scheme>https?)://(?P<www>www\.)?(?P<host>{hosts})/(?P<owner>{NAME_PATTERN})/(?P<repo>{NAME_PATTERN})/?$"
    );
    match Regex::new(&pattern) {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid repository URL regex: {err}"),
    }
});

/// The pieces of an accepted repository URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryUrl {
    /// Provider whose host matched.
    pub source: RepositorySource,
    /// `https` rather than `http`.
    pub secure: bool,
    /// Host was written with a `www.` prefix.
    pub www: bool,
    /// Owner (user, organisation or group) name.
    pub owner: String,
    /// Repository name.
    pub repo: String,
}

impl RepositoryUrl {
    /// `owner/repo`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

fn expected_format(source: RepositorySource) -> String {
    format!("http(s)://[www.]{}/<owner>/<repo>", source.host())
}

fn group<'h>(caps: &Captures<'h>, name: &str) -> &'h str {
    caps.name(name).map_or("", |m| m.as_str())
}

/// Validate `url` as a repository URL for `source`.
///
/// Matching is purely syntactic and case-sensitive. An optional trailing
/// slash is accepted; anything after the repository name is not.
///
/// # Errors
/// Returns [`ValidationError::RepositoryUrl`] if the URL does not have the
/// `http(s)://[www.]<host>/<owner>/<repo>[/]` shape, or if it does but the
/// host belongs to a different provider.
pub fn validate_repository_url(
    source: RepositorySource,
    url: &str,
) -> Result<RepositoryUrl, ValidationError> {
    let Some(caps) = REPOSITORY_URL_PATTERN.captures(url) else {
        return Err(ValidationError::RepositoryUrl {
            provider: source,
            url: url.to_owned(),
            cause: format!("expected format: {}", expected_format(source)),
        });
    };

    let host = group(&caps, "host");
    if host != source.host() {
        let provider_note = RepositorySource::from_host(host)
            .map_or_else(String::new, |other| format!(" ({other})"));
        return Err(ValidationError::RepositoryUrl {
            provider: source,
            url: url.to_owned(),
            cause: format!("host '{host}'{provider_note} is not '{}'", source.host()),
        });
    }

    Ok(RepositoryUrl {
        source,
        secure: group(&caps, "scheme") == "https",
        www: caps.name("www").is_some(),
        owner: group(&caps, "owner").to_owned(),
        repo: group(&caps, "repo").to_owned(),
    })
}

/// Whether `url` is a repository URL for `source`.
#[must_use]
pub fn is_valid_repository_url(source: RepositorySource, url: &str) -> bool {
    validate_repository_url(source, url).is_ok()
}

/// Like [`is_valid_repository_url`] for a provider given by tag.
///
/// Unknown tags are never valid.
#[must_use]
pub fn is_valid_repository_url_tag(tag: &str, url: &str) -> bool {
    tag.parse::<RepositorySource>()
        .is_ok_and(|source| is_valid_repository_url(source, url))
}
