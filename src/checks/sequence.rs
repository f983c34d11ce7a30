//! Sequential run check.

use secrecy::{ExposeSecret, SecretString};
use super::CheckResult;
use crate::types::{PatternFinding, PatternKind};

const MIN_RUN: usize = 4;

/// Checks for an ascending or descending run of consecutive code points.
///
/// A run must keep a single direction: `1234` and `dcba` count, `abab` does
/// not.
///
/// # Returns
/// - `Some(finding)` if a run of at least 4 consecutive characters exists
/// - `None` otherwise
pub fn sequential_run_check(password: &SecretString) -> CheckResult {
    let chars: Vec<char> = password.expose_secret().chars().collect();
    if chars.len() < MIN_RUN {
        return None;
    }

    let mut ascending = 1;
    let mut descending = 1;
    for pair in chars.windows(2) {
        let prev = pair[0] as i64;
        let curr = pair[1] as i64;
        ascending = if curr == prev + 1 { ascending + 1 } else { 1 };
        descending = if curr == prev - 1 { descending + 1 } else { 1 };
        if ascending >= MIN_RUN || descending >= MIN_RUN {
            return Some(PatternFinding::new(
                PatternKind::SequentialRun,
                "Password contains a run of sequential characters",
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
    fn test_ascending_digits() {
        let result = sequential_run_check(&secret("xx1234xx"));
        assert!(matches!(result, Some(f) if f.kind == PatternKind::SequentialRun));
    }

    #[test]
    fn test_descending_digits() {
        assert!(sequential_run_check(&secret("pw4321")).is_some());
    }

    #[test]
    fn test_ascending_letters() {
        assert!(sequential_run_check(&secret("testabcd")).is_some());
    }

    #[test]
    fn test_three_is_not_enough() {
        assert_eq!(sequential_run_check(&secret("xyz123xyz")), None);
    }

    #[test]
    fn test_alternating_direction_is_not_a_run() {
        assert_eq!(sequential_run_check(&secret("ababab")), None);
    }

    #[test]
    fn test_too_short() {
        assert_eq!(sequential_run_check(&secret("123")), None);
    }
}
