//! Digits-only check.

use secrecy::{ExposeSecret, SecretString};
use super::CheckResult;
use crate::types::{PatternFinding, PatternKind};

/// Checks whether the password consists entirely of digits.
///
/// # Returns
/// - `Some(finding)` if the password is non-empty and all ASCII digits
/// - `None` otherwise
pub fn digits_only_check(password: &SecretString) -> CheckResult {
    let pwd = password.expose_secret();
    if !pwd.is_empty() && pwd.chars().all(|c| c.is_ascii_digit()) {
        return Some(PatternFinding::new(
            PatternKind::DigitsOnly,
            "Password is made up entirely of digits",
        ));
    }
    None
}
