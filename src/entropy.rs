//! Entropy estimator based on observed character classes.

use secrecy::{ExposeSecret, SecretString};

const LOWERCASE_POOL: u32 = 26;
const UPPERCASE_POOL: u32 = 26;
const DIGIT_POOL: u32 = 10;
// Conservative estimate of the printable symbol set.
const SYMBOL_POOL: u32 = 32;

/// Estimates password entropy in bits.
///
/// The pool size is the sum of the character-class alphabets observed in the
/// password (lowercase, uppercase, digits, symbols); the estimate is
/// `length * log2(pool)`. This assumes a uniform random draw from the
/// observed alphabet, so it deliberately overstates unpredictability for
/// short passwords that happen to mix classes.
///
/// Empty passwords, and passwords whose characters fall outside all four
/// classes, estimate to 0.0 bits.
pub fn estimate_entropy(password: &SecretString) -> f64 {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return 0.0;
    }

    let has_lower = pwd.chars().any(|c| c.is_lowercase());
    let has_upper = pwd.chars().any(|c| c.is_uppercase());
    let has_digit = pwd.chars().any(|c| c.is_ascii_digit());
    let has_symbol = pwd.chars().any(|c| !c.is_alphanumeric());

    let mut pool: u32 = 0;
    if has_lower {
        pool += LOWERCASE_POOL;
    }
    if has_upper {
        pool += UPPERCASE_POOL;
    }
    if has_digit {
        pool += DIGIT_POOL;
    }
    if has_symbol {
        pool += SYMBOL_POOL;
    }

    if pool == 0 {
        return 0.0;
    }

    pwd.chars().count() as f64 * f64::from(pool).log2()
}
