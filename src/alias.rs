//! Alias address generation.

use uuid::Uuid;

/// Fixed domain for generated alias addresses.
pub const ALIAS_DOMAIN: &str = "aliasmail.dev";

/// Base-36 alphabet for the random fragment.
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate an alias address for a valid email using [`ALIAS_DOMAIN`].
pub fn generate_alias(email: &str) -> String {
    generate_alias_with_domain(email, ALIAS_DOMAIN)
}

/// Generate an alias address: the lower-cased first character of the email's
/// local part, a random integer in [0, 10000), a random base-36 fragment of
/// length 3, and the given domain.
///
/// Deterministic in shape, randomized in content. The random source is a v4
/// UUID, which is not cryptographically meaningful here; collisions between
/// two calls are possible and left to the caller to guard against.
pub fn generate_alias_with_domain(email: &str, domain: &str) -> String {
    let local = email.split('@').next().unwrap_or("");

    let mut alias = String::new();
    if let Some(c) = local.chars().next() {
        alias.push(c.to_ascii_lowercase());
    }

    let bits = Uuid::new_v4().as_u128();
    alias.push_str(&(bits % 10_000).to_string());

    let mut rest = bits >> 16;
    for _ in 0..3 {
        alias.push(BASE36[(rest % 36) as usize] as char);
        rest /= 36;
    }

    alias.push('@');
    alias.push_str(domain);
    alias
}
