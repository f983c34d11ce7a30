//! Core result types produced by the analysis engine.

use std::fmt;

/// Strength label assigned to an analyzed password.
///
/// Variants are ordered weakest to strongest, so labels can be compared
/// directly (e.g. `strength < Strength::Strong`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl Strength {
    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Moderate => "Moderate",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse, illustrative estimate of how quickly the password could be
/// guessed. Derived from the entropy estimate alone; not a guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CrackTime {
    Instant,
    Hours,
    DaysToWeeks,
    Months,
    YearsPlus,
}

impl fmt::Display for CrackTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CrackTime::Instant => "instant",
            CrackTime::Hours => "hours",
            CrackTime::DaysToWeeks => "days to weeks",
            CrackTime::Months => "months",
            CrackTime::YearsPlus => "years or more",
        };
        f.write_str(s)
    }
}

/// Kind of heuristic weakness detected in a password.
///
/// Each variant has a stable kebab-case tag, used in tests and machine
/// output; the human-readable text lives in [`PatternFinding::description`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    DigitsOnly,
    SequentialRun,
    RepeatedCharacter,
    KeyboardPattern,
    YearSuffix,
    CommonWord,
    ShortLength,
}

impl PatternKind {
    /// Stable identifier for this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            PatternKind::DigitsOnly => "digits-only",
            PatternKind::SequentialRun => "sequential-run",
            PatternKind::RepeatedCharacter => "repeated-character",
            PatternKind::KeyboardPattern => "keyboard-pattern",
            PatternKind::YearSuffix => "year-suffix",
            PatternKind::CommonWord => "common-word",
            PatternKind::ShortLength => "short-length",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A single weakness found by the pattern detector.
///
/// Descriptions never quote text from the analyzed password, so they are
/// safe to show or relay without revealing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternFinding {
    pub kind: PatternKind,
    pub description: String,
}

impl PatternFinding {
    pub(crate) fn new(kind: PatternKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
        }
    }
}

/// Complete analysis verdict for one password.
///
/// Created fresh per [`analyze`](crate::analyze) call and owned by the
/// caller; the analyzed password itself is intentionally not part of the
/// report.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    /// Estimated entropy in bits. Non-negative.
    pub entropy_bits: f64,
    /// Overall strength label.
    pub strength: Strength,
    /// 1-based rank in the breach list, if the password was found there.
    pub breach_rank: Option<usize>,
    /// Coarse crack-time bucket derived from the entropy estimate.
    pub crack_time: CrackTime,
    /// Heuristic weaknesses, in detector order.
    pub findings: Vec<PatternFinding>,
    /// Short, non-revealing improvement suggestions, in display order.
    pub suggestions: Vec<String>,
}

impl AnalysisReport {
    /// Entropy rounded to one decimal, for display only.
    pub fn entropy_display(&self) -> String {
        format!("{:.1}", self.entropy_bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_ordering() {
        assert!(Strength::Weak < Strength::Moderate);
        assert!(Strength::Moderate < Strength::Strong);
        assert!(Strength::Strong < Strength::VeryStrong);
    }

    #[test]
    fn test_strength_labels() {
        assert_eq!(Strength::VeryStrong.label(), "Very Strong");
        assert_eq!(Strength::Weak.to_string(), "Weak");
    }

    #[test]
    fn test_pattern_kind_tags_are_kebab_case() {
        let kinds = [
            PatternKind::DigitsOnly,
            PatternKind::SequentialRun,
            PatternKind::RepeatedCharacter,
            PatternKind::KeyboardPattern,
            PatternKind::YearSuffix,
            PatternKind::CommonWord,
            PatternKind::ShortLength,
        ];
        for kind in kinds {
            let tag = kind.tag();
            assert!(!tag.is_empty());
            assert!(tag.chars().all(|c| c.is_ascii_lowercase() || c == '-'));
        }
    }

    #[test]
    fn test_entropy_display_one_decimal() {
        let report = AnalysisReport {
            entropy_bits: 46.528,
            strength: Strength::Weak,
            breach_rank: None,
            crack_time: CrackTime::DaysToWeeks,
            findings: Vec::new(),
            suggestions: Vec::new(),
        };
        assert_eq!(report.entropy_display(), "46.5");
    }
}
