//! Heuristic weak-pattern checks
//!
//! Each check inspects one specific weakness and yields at most one finding.

mod digits;
mod keyboard;
mod length;
mod repeat;
mod sequence;
mod words;

pub use digits::digits_only_check;
pub use keyboard::keyboard_pattern_check;
pub use length::short_length_check;
pub use repeat::repeated_char_check;
pub use sequence::sequential_run_check;
pub use words::{common_word_check, year_suffix_check};

use crate::types::PatternFinding;
use secrecy::SecretString;

/// Result type for individual checks.
/// - `Some(finding)` - Weakness detected
/// - `None` - Check passed
pub type CheckResult = Option<PatternFinding>;

/// Runs the full battery of checks in a fixed order.
///
/// Every check runs regardless of earlier results; the order is fixed so
/// that repeated calls on the same input yield identical findings.
pub fn run_checks(password: &SecretString) -> Vec<PatternFinding> {
    let checks: [fn(&SecretString) -> CheckResult; 7] = [
        digits_only_check,
        sequential_run_check,
        repeated_char_check,
        keyboard_pattern_check,
        year_suffix_check,
        common_word_check,
        short_length_check,
    ];

    checks.iter().filter_map(|check| check(password)).collect()
}
