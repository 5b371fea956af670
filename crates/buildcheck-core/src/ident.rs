// crates/buildcheck-core/src/ident.rs
// ============================================================================
// Module: Identifier Generation
// Description: Random identifiers and secrets for test entities.
// Purpose: Keep entity ids unique per scenario and valid for the server.
// Dependencies: rand
// ============================================================================

//! ## Overview
//! The build server accepts external ids that start with a latin letter and
//! continue with ASCII letters, digits or underscores. Random suffixes make
//! collisions between parallel scenarios negligible.

use rand::RngCore;
use rand::rngs::OsRng;

/// Length of the random suffix appended to generated identifiers.
pub const ID_SUFFIX_LEN: usize = 10;

/// Length of generated secrets (passwords).
pub const SECRET_LEN: usize = 16;

/// Maximum identifier length accepted by the server.
pub const MAX_IDENTIFIER_LEN: usize = 225;

/// Returns `prefix` followed by a random lowercase alphanumeric suffix.
///
/// A prefix that does not start with a letter is prepended with `id_` so the
/// result stays within the server's identifier grammar.
#[must_use]
pub fn random_identifier(prefix: &str) -> String {
    let suffix = random_alphanumeric(ID_SUFFIX_LEN).to_ascii_lowercase();
    let starts_with_letter = prefix.chars().next().is_some_and(|ch| ch.is_ascii_alphabetic());
    if starts_with_letter {
        format!("{prefix}{suffix}")
    } else {
        format!("id_{prefix}{suffix}")
    }
}

/// Returns a random mixed-case alphanumeric secret.
#[must_use]
pub fn random_secret() -> String {
    random_alphanumeric(SECRET_LEN)
}

/// Returns true when `value` is a valid server-side external identifier.
#[must_use]
pub fn is_valid_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    value.len() <= MAX_IDENTIFIER_LEN
        && first.is_ascii_alphabetic()
        && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

/// Characters used for random suffixes and secrets.
const ALPHABET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Samples `len` characters from `[A-Za-z0-9]` using OS entropy.
fn random_alphanumeric(len: usize) -> String {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes.iter().map(|byte| char::from(ALPHABET[usize::from(*byte) % ALPHABET.len()])).collect()
}
