//! Strength classification, crack-time bucketing, and suggestion generation.

use rand::Rng;
use secrecy::{ExposeSecret, SecretString};

use crate::types::{CrackTime, PatternFinding, PatternKind, Strength};

// Strength thresholds in bits. Heuristic constants, kept together so they
// can be tuned in one place.
const WEAK_BELOW_BITS: f64 = 28.0;
const MODERATE_BELOW_BITS: f64 = 36.0;
const STRONG_BELOW_BITS: f64 = 60.0;

// Crack-time bucket boundaries in bits. Illustrative only.
const INSTANT_BELOW_BITS: f64 = 20.0;
const HOURS_BELOW_BITS: f64 = 35.0;
const DAYS_TO_WEEKS_BELOW_BITS: f64 = 50.0;
const MONTHS_BELOW_BITS: f64 = 65.0;

const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*;?";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Assigns the strength label. First matching rule wins:
///
/// 1. Present in the breach list: Weak, regardless of entropy.
/// 2. Entropy below 28 bits, or a digits-only, short-length, or
///    repeated-character finding: Weak.
/// 3. Below 36 bits: Moderate.
/// 4. Below 60 bits: Strong.
/// 5. Otherwise: Very Strong.
pub fn classify_strength(
    entropy_bits: f64,
    findings: &[PatternFinding],
    breach_rank: Option<usize>,
) -> Strength {
    if breach_rank.is_some() {
        return Strength::Weak;
    }

    let degenerate = findings.iter().any(|f| {
        matches!(
            f.kind,
            PatternKind::DigitsOnly | PatternKind::ShortLength | PatternKind::RepeatedCharacter
        )
    });

    if entropy_bits < WEAK_BELOW_BITS || degenerate {
        Strength::Weak
    } else if entropy_bits < MODERATE_BELOW_BITS {
        Strength::Moderate
    } else if entropy_bits < STRONG_BELOW_BITS {
        Strength::Strong
    } else {
        Strength::VeryStrong
    }
}

/// Maps the entropy estimate to a coarse crack-time bucket.
pub fn crack_time_bucket(entropy_bits: f64) -> CrackTime {
    if entropy_bits < INSTANT_BELOW_BITS {
        CrackTime::Instant
    } else if entropy_bits < HOURS_BELOW_BITS {
        CrackTime::Hours
    } else if entropy_bits < DAYS_TO_WEEKS_BELOW_BITS {
        CrackTime::DaysToWeeks
    } else if entropy_bits < MONTHS_BELOW_BITS {
        CrackTime::Months
    } else {
        CrackTime::YearsPlus
    }
}

/// Builds the suggestion list for a classified password.
///
/// Order: breach warning first when the password is breached, then one
/// warning per pattern finding, then (below Strong) a short suggested
/// addition of 1-2 characters drawn from classes absent in the password.
/// None of the suggestions ever quote the password itself.
pub fn build_suggestions<R: Rng>(
    password: &SecretString,
    strength: Strength,
    findings: &[PatternFinding],
    breach_rank: Option<usize>,
    rng: &mut R,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    if let Some(rank) = breach_rank {
        suggestions.push(format!(
            "This password appears in public breach lists (rank {rank}); do NOT use it."
        ));
    }

    for finding in findings {
        suggestions.push(format!("Weak pattern detected: {}", finding.description));
    }

    if strength < Strength::Strong {
        let addition = suggested_addition(password.expose_secret(), rng);
        suggestions.push(format!(
            "Try adding: {addition} (add these characters somewhere in your password)"
        ));
    }

    suggestions
}

/// Picks 1-2 characters from classes the password does not use yet, digits
/// and symbols first. Falls back to digit+symbol when every class is
/// already present.
fn suggested_addition<R: Rng>(pwd: &str, rng: &mut R) -> String {
    let mut pools: Vec<&[u8]> = Vec::new();
    if !pwd.chars().any(|c| c.is_ascii_digit()) {
        pools.push(DIGITS);
    }
    if !pwd.chars().any(|c| !c.is_alphanumeric()) {
        pools.push(SYMBOLS);
    }
    if !pwd.chars().any(|c| c.is_lowercase()) {
        pools.push(LOWERCASE);
    }
    if !pwd.chars().any(|c| c.is_uppercase()) {
        pools.push(UPPERCASE);
    }
    if pools.is_empty() {
        pools.push(DIGITS);
        pools.push(SYMBOLS);
    }
    pools.truncate(2);

    pools
        .iter()
        .map(|pool| pool[rng.random_range(0..pool.len())] as char)
        .collect()
}
