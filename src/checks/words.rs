//! Year suffix and common base word checks.

use secrecy::{ExposeSecret, SecretString};
use super::CheckResult;
use crate::types::{PatternFinding, PatternKind};

/// Base words that dominate leaked password dumps.
const COMMON_BASE_WORDS: &[&str] = &[
    "password", "passwd", "admin", "welcome", "letmein", "iloveyou",
];

/// Checks whether the password ends in four digits, a very common way of
/// appending a birth or current year.
pub fn year_suffix_check(password: &SecretString) -> CheckResult {
    let chars: Vec<char> = password.expose_secret().chars().collect();
    if chars.len() >= 4 && chars[chars.len() - 4..].iter().all(|c| c.is_ascii_digit()) {
        return Some(PatternFinding::new(
            PatternKind::YearSuffix,
            "Password ends with a 4-digit year-style suffix",
        ));
    }
    None
}

/// Checks for very common base words, case-insensitive.
///
/// Only the first matching word is reported; the finding does not name it.
pub fn common_word_check(password: &SecretString) -> CheckResult {
    let lowered = password.expose_secret().to_lowercase();
    if COMMON_BASE_WORDS.iter().any(|word| lowered.contains(word)) {
        return Some(PatternFinding::new(
            PatternKind::CommonWord,
            "Password contains a very common base word",
        ));
    }
    None
}
