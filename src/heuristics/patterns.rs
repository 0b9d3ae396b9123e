//! Compiled regex patterns and header keyword lists for field inference.

use regex::Regex;

/// Anchored email pattern: the whole string must be an email address.
pub static EMAIL_ANCHORED_PATTERN: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("Invalid anchored email pattern")
});

/// Unanchored email pattern: finds the first email-shaped substring inside
/// free-form cell content (e.g. "Contact: a@b.com").
pub static EMAIL_SCAN_PATTERN: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")
        .expect("Invalid email scan pattern")
});

/// Header keywords that mark a first-name column.
///
/// Matching is substring containment against the lower-cased, trimmed field
/// name, and the first matching field in table order wins.
pub const FIRST_NAME_KEYWORDS: [&str; 4] = ["first", "fname", "firstname", "given"];

/// Header keywords that mark a last-name column.
pub const LAST_NAME_KEYWORDS: [&str; 5] = ["last", "lname", "lastname", "surname", "family"];

/// Header keywords that mark an email column.
///
/// Substring semantics are intentionally loose: a field named "mailing
/// address" matches via "mail" and "address". Callers rely on this exact
/// matching order for compatibility.
pub const EMAIL_KEYWORDS: [&str; 4] = ["email", "e-mail", "mail", "address"];

/// Returns true if the lower-cased, trimmed field name contains any keyword.
pub fn name_matches(field_name: &str, keywords: &[&str]) -> bool {
    let normalized = field_name.trim().to_lowercase();
    keywords.iter().any(|kw| normalized.contains(kw))
}
