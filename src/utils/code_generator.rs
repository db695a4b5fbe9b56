//! Short code generation utilities.
//!
//! Codes are drawn at random from the base-36 alphabet. Uniqueness against already
//! stored links is not checked: two links may, rarely, share a code.

use rand::Rng;

/// Number of characters in a generated code.
pub const CODE_LENGTH: usize = 6;

/// Base-36 alphabet: digits followed by lowercase ASCII letters.
const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generates a random short code of [`CODE_LENGTH`] base-36 characters.
///
/// # Examples
///
/// ```
/// use shortlink::utils::code_generator::{CODE_LENGTH, generate_code};
///
/// let code = generate_code();
/// assert_eq!(code.len(), CODE_LENGTH);
/// assert!(code.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Returns true if `code` looks like something a link could be stored under.
///
/// Used by the admin CLI to reject obvious typos before hitting the database.
pub fn is_valid_code(code: &str) -> bool {
    !code.is_empty() && code.chars().all(|c| c.is_ascii_alphanumeric())
}
