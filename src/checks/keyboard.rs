//! Keyboard walk check.

use secrecy::{ExposeSecret, SecretString};
use super::CheckResult;
use crate::types::{PatternFinding, PatternKind};

/// Physical-keyboard sequences commonly used as password filler.
const KEYBOARD_WALKS: &[&str] = &["qwert", "asdf", "zxcv", "1q2w", "qaz"];

/// Checks for known keyboard walks as a case-insensitive substring.
///
/// The finding deliberately does not name the matched walk, so the
/// description can never echo part of the password.
///
/// # Returns
/// - `Some(finding)` if any known walk appears in the password
/// - `None` otherwise
pub fn keyboard_pattern_check(password: &SecretString) -> CheckResult {
    let lowered = password.expose_secret().to_lowercase();
    if KEYBOARD_WALKS.iter().any(|walk| lowered.contains(walk)) {
        return Some(PatternFinding::new(
            PatternKind::KeyboardPattern,
            "Password contains a common keyboard sequence",
        ));
    }
    None
}
