//! Short length check.

use secrecy::{ExposeSecret, SecretString};
use super::CheckResult;
use crate::types::{PatternFinding, PatternKind};

const MIN_LENGTH: usize = 8;

/// Checks whether the password meets the minimum length.
///
/// # Returns
/// - `Some(finding)` if the password is shorter than 8 characters
/// - `None` otherwise
pub fn short_length_check(password: &SecretString) -> CheckResult {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return Some(PatternFinding::new(
            PatternKind::ShortLength,
            format!("Password is shorter than {} characters", MIN_LENGTH),
        ));
    }
    None
}
