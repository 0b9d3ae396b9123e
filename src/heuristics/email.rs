//! Shared email extraction primitive.

use super::patterns::{EMAIL_ANCHORED_PATTERN, EMAIL_SCAN_PATTERN};

/// Extract an email address from free-form cell content.
///
/// Two-tier check: a cell that is *exactly* an email (after trimming) passes
/// the strict anchored pattern and is returned verbatim; otherwise the cell is
/// scanned for the first email-shaped substring (so "Contact: a@b.com" still
/// yields "a@b.com"). Returns None for blank cells and cells without a match.
pub fn extract_email(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if EMAIL_ANCHORED_PATTERN.is_match(trimmed) {
        return Some(trimmed.to_string());
    }

    EMAIL_SCAN_PATTERN
        .find(trimmed)
        .map(|m| m.as_str().to_string())
}

/// Returns true if the cell yields an email under [`extract_email`].
#[inline]
pub fn contains_email(value: &str) -> bool {
    extract_email(value).is_some()
}
