//! Repeated character check.

use secrecy::{ExposeSecret, SecretString};
use super::CheckResult;
use crate::types::{PatternFinding, PatternKind};

const MIN_REPEAT: usize = 4;

/// Checks for identical consecutive characters.
///
/// # Returns
/// - `Some(finding)` if 4 or more identical characters appear in a row
/// - `None` otherwise
pub fn repeated_char_check(password: &SecretString) -> CheckResult {
    let chars: Vec<char> = password.expose_secret().chars().collect();

    let mut run = 1;
    for pair in chars.windows(2) {
        run = if pair[1] == pair[0] { run + 1 } else { 1 };
        if run >= MIN_REPEAT {
            return Some(PatternFinding::new(
                PatternKind::RepeatedCharacter,
                "Password contains 4 or more repeated characters in a row",
            ));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_repeated_run_in_middle() {
        let result = repeated_char_check(&secret("pwaaaa17"));
        assert!(matches!(result, Some(f) if f.kind == PatternKind::RepeatedCharacter));
    }

    #[test]
    fn test_entirely_one_character() {
        assert!(repeated_char_check(&secret("aaaaaaaa")).is_some());
    }

    #[test]
    fn test_three_in_a_row_passes() {
        assert_eq!(repeated_char_check(&secret("pwaaa17b")), None);
    }

    #[test]
    fn test_non_consecutive_repeats_pass() {
        assert_eq!(repeated_char_check(&secret("aXaXaXaX")), None);
    }

    #[test]
    fn test_empty_password() {
        assert_eq!(repeated_char_check(&secret("")), None);
    }
}
