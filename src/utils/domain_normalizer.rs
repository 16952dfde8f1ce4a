//! Domain normalization shared by every join site.
//!
//! The intelligence index and the guest domain resolver both key on the output
//! of [`normalize_domain`]. [`CanonicalDomain`] can only be built through it, so
//! an un-normalized string can never reach an index lookup.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

/// Characters allowed in a canonical domain.
static DOMAIN_CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9.-]+$").unwrap());

const MIN_DOMAIN_LEN: usize = 4;
const MIN_TOP_LEVEL_LABEL_LEN: usize = 2;

/// Reasons a domain-like string is rejected.
///
/// Rejection is a normal outcome: callers treat it as "no domain".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainNormalizationError {
    #[error("Domain is empty")]
    Empty,

    #[error("Domain has no dot: {0}")]
    MissingDot(String),

    #[error("Domain is shorter than 4 characters: {0}")]
    TooShort(String),

    #[error("Domain contains characters outside [a-z0-9.-]: {0}")]
    InvalidCharacters(String),

    #[error("Domain starts or ends with '.' or '-': {0}")]
    InvalidBoundary(String),

    #[error("Domain still carries a www. prefix: {0}")]
    WwwPrefix(String),

    #[error("Top-level label is shorter than 2 characters: {0}")]
    TopLevelLabelTooShort(String),
}

/// A domain in canonical form: lower-case, no scheme, no `www.`, no path.
///
/// Only constructible through [`CanonicalDomain::parse`], which runs
/// [`normalize_domain`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CanonicalDomain(String);

impl CanonicalDomain {
    /// Normalizes `raw` and wraps the result.
    ///
    /// # Errors
    ///
    /// Returns the [`DomainNormalizationError`] describing why `raw` is not a domain.
    pub fn parse(raw: &str) -> Result<Self, DomainNormalizationError> {
        normalize_domain(raw).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CanonicalDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalDomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Normalizes a domain-like string to its canonical form.
///
/// # Normalization Rules
///
/// Applied in order, each at most once:
///
/// 1. Trim surrounding whitespace
/// 2. Drop everything from the first `?` (query string)
/// 3. Drop everything from the first `#` (fragment)
/// 4. Strip trailing `/`
/// 5. Strip a leading `http://` or `https://` (any case)
/// 6. Strip a leading `www.` (any case)
/// 7. Drop everything from the first remaining `/` (path)
/// 8. Lower-case
///
/// # Validation
///
/// The result must be at least 4 characters, contain a dot, use only
/// `[a-z0-9.-]`, not start or end with `.` or `-`, not start with `www.`,
/// and end in a label of at least 2 characters.
///
/// # Errors
///
/// Returns a [`DomainNormalizationError`] naming the first failed check.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     normalize_domain("https://WWW.Example.com/path?x=1").unwrap(),
///     "example.com"
/// );
/// assert!(normalize_domain("localhost").is_err());
/// ```
pub fn normalize_domain(raw: &str) -> Result<String, DomainNormalizationError> {
    let mut domain = raw.trim();
    if domain.is_empty() {
        return Err(DomainNormalizationError::Empty);
    }

    domain = truncate_at(domain, '?');
    domain = truncate_at(domain, '#');
    domain = domain.trim_end_matches('/');

    domain = strip_prefix_ignore_ascii_case(domain, "https://")
        .or_else(|| strip_prefix_ignore_ascii_case(domain, "http://"))
        .unwrap_or(domain);
    domain = strip_prefix_ignore_ascii_case(domain, "www.").unwrap_or(domain);
    domain = truncate_at(domain, '/');

    let domain = domain.to_ascii_lowercase();
    validate(&domain)?;

    Ok(domain)
}

/// Returns the canonical domain for `raw`, or `None` when it is rejected.
pub fn canonical_domain(raw: &str) -> Option<CanonicalDomain> {
    match CanonicalDomain::parse(raw) {
        Ok(domain) => Some(domain),
        Err(e) => {
            tracing::trace!(raw, reason = %e, "Domain rejected");
            None
        }
    }
}

fn validate(domain: &str) -> Result<(), DomainNormalizationError> {
    if domain.is_empty() {
        return Err(DomainNormalizationError::Empty);
    }
    if !domain.contains('.') {
        return Err(DomainNormalizationError::MissingDot(domain.to_string()));
    }
    if domain.len() < MIN_DOMAIN_LEN {
        return Err(DomainNormalizationError::TooShort(domain.to_string()));
    }
    if !DOMAIN_CHARSET_REGEX.is_match(domain) {
        return Err(DomainNormalizationError::InvalidCharacters(
            domain.to_string(),
        ));
    }
    if domain.starts_with(['.', '-']) || domain.ends_with(['.', '-']) {
        return Err(DomainNormalizationError::InvalidBoundary(domain.to_string()));
    }
    // A second `www.` would be stripped on re-normalization.
    if domain.starts_with("www.") {
        return Err(DomainNormalizationError::WwwPrefix(domain.to_string()));
    }

    let top_level = domain.rsplit('.').next().unwrap_or_default();
    if top_level.len() < MIN_TOP_LEVEL_LABEL_LEN {
        return Err(DomainNormalizationError::TopLevelLabelTooShort(
            domain.to_string(),
        ));
    }

    Ok(())
}

fn truncate_at(value: &str, delimiter: char) -> &str {
    value.split(delimiter).next().unwrap_or(value)
}

fn strip_prefix_ignore_ascii_case<'a>(value: &'a str, prefix: &str) -> Option<&'a str> {
    let head = value.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &value[prefix.len()..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_bare_domain() {
        let result = normalize_domain("example.com");
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "example.com");
    }

    #[test]
    fn test_normalize_full_url() {
        let result = normalize_domain("https://WWW.Example.com/path?x=1");
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "example.com");
    }

    #[test]
    fn test_normalize_http_scheme() {
        let result = normalize_domain("http://example.com");
        assert_eq!(result.unwrap(), "example.com");
    }

    #[test]
    fn test_normalize_uppercase_scheme() {
        let result = normalize_domain("HTTPS://Example.COM");
        assert_eq!(result.unwrap(), "example.com");
    }

    #[test]
    fn test_normalize_trailing_slashes() {
        let result = normalize_domain("https://www.example.com///");
        assert_eq!(result.unwrap(), "example.com");
    }

    #[test]
    fn test_normalize_fragment() {
        let result = normalize_domain("example.com/#team");
        assert_eq!(result.unwrap(), "example.com");
    }

    #[test]
    fn test_normalize_query_before_path() {
        let result = normalize_domain("example.com?next=/login/");
        assert_eq!(result.unwrap(), "example.com");
    }

    #[test]
    fn test_normalize_keeps_subdomain() {
        let result = normalize_domain("https://app.example.io/dashboard");
        assert_eq!(result.unwrap(), "app.example.io");
    }

    #[test]
    fn test_normalize_surrounding_whitespace() {
        let result = normalize_domain("  Example.com \n");
        assert_eq!(result.unwrap(), "example.com");
    }

    #[test]
    fn test_normalize_hyphenated_domain() {
        let result = normalize_domain("my-company.co.uk");
        assert_eq!(result.unwrap(), "my-company.co.uk");
    }

    #[test]
    fn test_normalize_empty_string() {
        assert_eq!(normalize_domain(""), Err(DomainNormalizationError::Empty));
        assert_eq!(normalize_domain("   "), Err(DomainNormalizationError::Empty));
    }

    #[test]
    fn test_normalize_only_prefixes() {
        assert_eq!(
            normalize_domain("https://www."),
            Err(DomainNormalizationError::Empty)
        );
    }

    #[test]
    fn test_normalize_localhost() {
        assert!(matches!(
            normalize_domain("localhost"),
            Err(DomainNormalizationError::MissingDot(_))
        ));
    }

    #[test]
    fn test_normalize_too_short() {
        assert!(matches!(
            normalize_domain("a.b"),
            Err(DomainNormalizationError::TooShort(_))
        ));
    }

    #[test]
    fn test_normalize_leading_dot() {
        assert!(matches!(
            normalize_domain(".com"),
            Err(DomainNormalizationError::InvalidBoundary(_))
        ));
    }

    #[test]
    fn test_normalize_trailing_hyphen() {
        assert!(matches!(
            normalize_domain("example.com-"),
            Err(DomainNormalizationError::InvalidBoundary(_))
        ));
    }

    #[test]
    fn test_normalize_embedded_space() {
        assert!(matches!(
            normalize_domain("exa mple.com"),
            Err(DomainNormalizationError::InvalidCharacters(_))
        ));
    }

    #[test]
    fn test_normalize_port_rejected() {
        assert!(matches!(
            normalize_domain("example.com:8080"),
            Err(DomainNormalizationError::InvalidCharacters(_))
        ));
    }

    #[test]
    fn test_normalize_unicode_rejected() {
        assert!(matches!(
            normalize_domain("münchen.de"),
            Err(DomainNormalizationError::InvalidCharacters(_))
        ));
    }

    #[test]
    fn test_normalize_short_top_level_label() {
        assert!(matches!(
            normalize_domain("example.c"),
            Err(DomainNormalizationError::TopLevelLabelTooShort(_))
        ));
    }

    #[test]
    fn test_normalize_double_www_rejected() {
        assert!(matches!(
            normalize_domain("www.www.example.com"),
            Err(DomainNormalizationError::WwwPrefix(_))
        ));
    }

    #[test]
    fn test_scheme_stripped_once() {
        assert!(normalize_domain("https://http://example.com").is_err());
    }

    #[test]
    fn test_normalize_email_is_rejected() {
        assert!(matches!(
            normalize_domain("jane@example.com"),
            Err(DomainNormalizationError::InvalidCharacters(_))
        ));
    }

    #[test]
    fn test_canonical_domain_roundtrip_is_stable() {
        let domain = CanonicalDomain::parse("https://Example.com/").unwrap();
        assert_eq!(domain.as_str(), "example.com");
        assert_eq!(domain.to_string(), "example.com");
        assert_eq!(CanonicalDomain::parse(domain.as_str()).unwrap(), domain);
    }

    #[test]
    fn test_canonical_domain_option_form() {
        assert!(canonical_domain("example.com").is_some());
        assert!(canonical_domain("not a domain").is_none());
    }

    #[test]
    fn test_canonical_domain_serializes_as_string() {
        let domain = CanonicalDomain::parse("example.com").unwrap();
        assert_eq!(serde_json::to_string(&domain).unwrap(), "\"example.com\"");
    }
}
