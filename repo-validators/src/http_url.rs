//! Generic http(s) URL checks.

use url::Url;

use crate::error::ValidationError;

/// Hostname that is never accepted, whatever the port.
const LOCALHOST: &str = "localhost";

fn url_error(url: &str, cause: impl Into<String>) -> ValidationError {
    ValidationError::Url {
        url: url.to_owned(),
        cause: cause.into(),
    }
}

/// The authority part (`[userinfo@]host[:port]`) of the text after `scheme:`.
///
/// `None` unless that text starts with `//`.
fn raw_authority(after_scheme: &str) -> Option<&str> {
    let rest = after_scheme.strip_prefix("//")?;
    let end = rest.find(['/', '?', '#', '\\']).unwrap_or(rest.len());
    Some(&rest[..end])
}

/// Hostname as written: userinfo, port and IPv6 brackets removed, case kept.
fn raw_hostname(authority: &str) -> &str {
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, hp)| hp);
    if let Some(bracketed) = host_port.strip_prefix('[') {
        return bracketed.split_once(']').map_or(bracketed, |(host, _)| host);
    }
    match host_port.rsplit_once(':') {
        Some((host, port)) if port.bytes().all(|b| b.is_ascii_digit()) => host,
        _ => host_port,
    }
}

/// Parse `raw` and accept it only as a non-local http(s) URL.
///
/// No network access: reachability, DNS and TLS are not checked. The input
/// is checked as written: whitespace and control characters are rejected
/// rather than trimmed, the scheme must be followed by `//` and a non-empty
/// host, and the `localhost` comparison is exact and case-sensitive on the
/// raw hostname (port and userinfo ignored).
///
/// # Errors
/// Returns [`ValidationError::Url`] if the string contains whitespace or
/// control characters, does not parse as an absolute URL, the scheme is not
/// `http`/`https`, the host is empty, or the host is `localhost`.
pub fn validate_url(raw: &str) -> Result<Url, ValidationError> {
    if let Some(c) = raw
        .chars()
        .find(|c| c.is_ascii_whitespace() || c.is_control())
    {
        return Err(url_error(
            raw,
            format!("contains whitespace or control character '{}'", c.escape_default()),
        ));
    }

    let parsed = Url::parse(raw).map_err(|err| url_error(raw, err.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(url_error(
                raw,
                format!("scheme '{scheme}' is not http or https"),
            ));
        }
    }

    let authority = raw
        .split_once(':')
        .and_then(|(_, after_scheme)| raw_authority(after_scheme));
    let Some(authority) = authority else {
        return Err(url_error(raw, "expected '//' and a host after the scheme"));
    };

    match raw_hostname(authority) {
        "" => Err(url_error(raw, "host is empty")),
        LOCALHOST => Err(url_error(raw, "localhost is not allowed")),
        _ => Ok(parsed),
    }
}

/// Whether `raw` is a well-formed, non-local http(s) URL.
#[must_use]
pub fn is_valid_url(raw: &str) -> bool {
    validate_url(raw).is_ok()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_urls() {
        assert!(is_valid_url("https://example.com"));
        assert!(is_valid_url("http://example.com/path?q=1#frag"));
        assert!(is_valid_url("https://docs.example.com:8443/guide"));
        assert!(is_valid_url("http://192.0.2.10/"));
        assert!(is_valid_url("https://github.com/foo/bar"));
    }

    #[test]
    fn test_unparseable() {
        assert!(!is_valid_url("not a url"));
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("example.com"));
        assert!(!is_valid_url("http://exa mple.com"));
    }

    #[test]
    fn test_whitespace_and_control_characters_are_not_trimmed() {
        for raw in [
            " https://example.com",
            "https://example.com ",
            "https://example.com\n",
            "https://exa\tmple.com",
            "https://example.com/a b",
            "https://example.com/\u{7f}",
        ] {
            assert!(!is_valid_url(raw), "accepted: {raw}");
        }
    }

    #[test]
    fn test_scheme_must_be_http_or_https() {
        assert!(!is_valid_url("ftp://example.com"));
        assert!(!is_valid_url("mailto:someone@example.com"));
        assert!(!is_valid_url("file:///etc/passwd"));
        assert!(!is_valid_url("ws://example.com"));
    }

    #[test]
    fn test_empty_host() {
        assert!(!is_valid_url("https://"));
        assert!(!is_valid_url("http://"));
        assert!(!is_valid_url("http://user@"));
    }

    #[test]
    fn test_host_must_follow_double_slash() {
        assert!(!is_valid_url("https:example.com"));
        assert!(!is_valid_url("http:///example.com"));
        assert!(!is_valid_url("http:\\\\example.com"));
        assert!(!is_valid_url("http:/example.com"));
    }

    #[test]
    fn test_localhost_rejected_with_any_port() {
        assert!(!is_valid_url("http://localhost"));
        assert!(!is_valid_url("http://localhost:3000/api"));
        assert!(!is_valid_url("http://user:pw@localhost:8080"));
    }

    #[test]
    fn test_localhost_match_is_case_sensitive() {
        assert!(is_valid_url("https://LOCALHOST"));
        assert!(is_valid_url("http://LocalHost:3000"));
    }

    #[test]
    fn test_raw_hostname() {
        assert_eq!(raw_hostname("example.com"), "example.com");
        assert_eq!(raw_hostname("example.com:8080"), "example.com");
        assert_eq!(raw_hostname("user:pw@LOCALHOST:1"), "LOCALHOST");
        assert_eq!(raw_hostname("[::1]:443"), "::1");
        assert_eq!(raw_hostname(""), "");
    }

    #[test]
    fn test_localhost_subdomain_is_not_localhost() {
        assert!(is_valid_url("https://localhost.example.com"));
    }

    #[test]
    fn test_returns_parsed_url() {
        let parsed = validate_url("https://example.com:8080/a").unwrap();
        assert_eq!(parsed.host_str(), Some("example.com"));
        assert_eq!(parsed.port(), Some(8080));
    }

    #[test]
    fn test_causes() {
        let err = validate_url("ftp://example.com").unwrap_err();
        assert!(err.to_string().contains("scheme 'ftp'"), "got: {err}");

        let err = validate_url("https:example.com").unwrap_err();
        assert!(err.to_string().contains("expected '//'"), "got: {err}");

        let err = validate_url("https://example.com\n").unwrap_err();
        assert!(err.to_string().contains("control character '\\n'"), "got: {err}");

        let err = validate_url("http://localhost").unwrap_err();
        assert!(err.to_string().contains("localhost is not allowed"), "got: {err}");
    }
}
