//! Supported repository hosting providers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Which hosting provider's URL format a repository URL is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepositorySource {
    GitHub,
    GitLab,
}

impl RepositorySource {
    /// Every supported provider, in tag order.
    pub const ALL: [Self; 2] = [Self::GitHub, Self::GitLab];

    /// The only host accepted for this provider.
    #[must_use]
    pub const fn host(self) -> &'static str {
        match self {
            Self::GitHub => "github.com",
            Self::GitLab => "gitlab.com",
        }
    }

    /// Lowercase tag used on the command line and in configuration files.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::GitHub => "github",
            Self::GitLab => "gitlab",
        }
    }

    /// Reverse lookup of [`RepositorySource::host`]. Case-sensitive.
    #[must_use]
    pub fn from_host(host: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|source| source.host() == host)
    }

    fn expected_tags() -> String {
        Self::ALL
            .into_iter()
            .map(Self::tag)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for RepositorySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for RepositorySource {
    type Err = ValidationError;

    /// Tags are matched ignoring ASCII case and surrounding whitespace.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let wanted = tag.trim();
        Self::ALL
            .into_iter()
            .find(|source| source.tag().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::UnknownSource {
                tag: tag.to_owned(),
                expected: Self::expected_tags(),
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_hosts() {
        assert_eq!(RepositorySource::GitHub.host(), "github.com");
        assert_eq!(RepositorySource::GitLab.host(), "gitlab.com");
    }

    #[test]
    fn test_from_host_is_exact() {
        assert_eq!(
            RepositorySource::from_host("gitlab.com"),
            Some(RepositorySource::GitLab)
        );
        assert_eq!(RepositorySource::from_host("GitHub.com"), None);
        assert_eq!(RepositorySource::from_host("bitbucket.org"), None);
    }

    #[test]
    fn test_parse_tags_ignoring_case() {
        assert_eq!(
            "github".parse::<RepositorySource>().unwrap(),
            RepositorySource::GitHub
        );
        assert_eq!(
            " GitLab ".parse::<RepositorySource>().unwrap(),
            RepositorySource::GitLab
        );
    }

    #[test]
    fn test_parse_unknown_tag() {
        let err = "bitbucket".parse::<RepositorySource>().unwrap_err();
        match err {
            ValidationError::UnknownSource { tag, expected } => {
                assert_eq!(tag, "bitbucket");
                assert_eq!(expected, "github, gitlab");
            }
            other => panic!("expected UnknownSource, got: {other}"),
        }
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for source in RepositorySource::ALL {
            assert_eq!(source.to_string().parse::<RepositorySource>().unwrap(), source);
        }
    }

    #[test]
    fn test_serde_uses_lowercase_tags() {
        let json = serde_json::to_string(&RepositorySource::GitHub).unwrap();
        assert_eq!(json, "\"github\"");
        let parsed: RepositorySource = serde_json::from_str("\"gitlab\"").unwrap();
        assert_eq!(parsed, RepositorySource::GitLab);
    }
}
