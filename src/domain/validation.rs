//! Slug and URL validation rules.
//!
//! Both validators are pure functions: they inspect a string and either accept
//! it or return a [`ValidationFailure`] naming the field and the violated rule.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;
use url::Url;

/// Maximum slug length in characters.
pub const MAX_SLUG_LENGTH: usize = 50;

/// Maximum URL length in characters.
pub const MAX_URL_LENGTH: usize = 200;

/// Route names that a slug may not take, since the router matches them first.
pub const RESERVED_SLUGS: &[&str] = &["shorten", "unshorten", "slug", "urls", "health"];

const ALLOWED_SCHEMES: &[&str] = &["http", "https", "ftp", "ftps"];

static SLUG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// The input field a validation rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Slug,
    Url,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Slug => f.write_str("slug"),
            Field::Url => f.write_str("url"),
        }
    }
}

/// A failed validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: {reason}")]
pub struct ValidationFailure {
    pub field: Field,
    pub reason: String,
}

impl ValidationFailure {
    pub fn new(field: Field, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Returns true if `slug` collides with a route name.
pub fn is_reserved_slug(slug: &str) -> bool {
    RESERVED_SLUGS.contains(&slug)
}

/// Validates a slug.
///
/// # Rules
///
/// 1. Non-empty and at most [`MAX_SLUG_LENGTH`] characters
/// 2. Only ASCII letters, digits, hyphens and underscores
/// 3. Not one of [`RESERVED_SLUGS`]
pub fn validate_slug(slug: &str) -> Result<(), ValidationFailure> {
    check_slug_format(slug)?;

    if is_reserved_slug(slug) {
        return Err(ValidationFailure::new(
            Field::Slug,
            format!("'{slug}' is reserved"),
        ));
    }

    Ok(())
}

/// Returns whether `slug` follows the slug grammar and length bounds.
///
/// Reserved names pass; lookups use this to skip the store for input that can
/// never have been stored.
pub fn is_well_formed_slug(slug: &str) -> bool {
    check_slug_format(slug).is_ok()
}

fn check_slug_format(slug: &str) -> Result<(), ValidationFailure> {
    if slug.is_empty() {
        return Err(ValidationFailure::new(Field::Slug, "must not be empty"));
    }

    let length = slug.chars().count();
    if length > MAX_SLUG_LENGTH {
        return Err(ValidationFailure::new(
            Field::Slug,
            format!("must be at most {MAX_SLUG_LENGTH} characters, got {length}"),
        ));
    }

    if !SLUG_REGEX.is_match(slug) {
        return Err(ValidationFailure::new(
            Field::Slug,
            "must contain only letters, digits, hyphens or underscores",
        ));
    }

    Ok(())
}

/// Validates a long URL.
///
/// # Rules
///
/// 1. At most [`MAX_URL_LENGTH`] characters
/// 2. No whitespace or control characters anywhere
/// 3. Parses as an absolute URL written as `scheme://...`
/// 4. Scheme is one of `http`, `https`, `ftp`, `ftps`
/// 5. Has a non-empty host
///
/// The URL is stored as given, so input that the parser would silently
/// repair (trimmed spaces, stripped tabs and newlines, backslashes, `http:host`)
/// is rejected.
pub fn validate_url(url: &str) -> Result<(), ValidationFailure> {
    let length = url.chars().count();
    if length > MAX_URL_LENGTH {
        return Err(ValidationFailure::new(
            Field::Url,
            format!("must be at most {MAX_URL_LENGTH} characters, got {length}"),
        ));
    }

    if url.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(ValidationFailure::new(
            Field::Url,
            "must not contain whitespace or control characters",
        ));
    }

    if url.contains('\\') {
        return Err(ValidationFailure::new(Field::Url, "must not contain '\\'"));
    }

    let parsed = Url::parse(url)
        .map_err(|e| ValidationFailure::new(Field::Url, format!("not a valid URL ({e})")))?;

    let scheme = parsed.scheme();
    if !ALLOWED_SCHEMES.contains(&scheme) {
        return Err(ValidationFailure::new(
            Field::Url,
            format!("unsupported scheme '{scheme}'"),
        ));
    }

    let authority_prefix = format!("{scheme}://");
    let has_authority_prefix = url
        .get(..authority_prefix.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(&authority_prefix));
    if !has_authority_prefix {
        return Err(ValidationFailure::new(
            Field::Url,
            format!("must start with '{authority_prefix}'"),
        ));
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(ValidationFailure::new(Field::Url, "must include a host"));
    }

    Ok(())
}
