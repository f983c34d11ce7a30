//! Password analyzer - main engine entry point.

use rand::Rng;
use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::breach::BreachList;
use crate::checks::run_checks;
use crate::classifier::{build_suggestions, classify_strength, crack_time_bucket};
use crate::entropy::estimate_entropy;
use crate::types::AnalysisReport;

/// Analyzes a password and returns the complete report.
///
/// Breach lookup, entropy estimation, and pattern detection run
/// independently; the classifier combines their outputs. Passing `None` for
/// the breach list runs in degraded mode: the report always carries
/// `breach_rank: None`.
///
/// Total for every string input, including the empty string. The password is
/// neither stored nor echoed into the report.
pub fn analyze(password: &SecretString, breach: Option<&BreachList>) -> AnalysisReport {
    analyze_with_rng(password, breach, &mut rand::rng())
}

/// [`analyze`] with an explicit random generator.
///
/// The generator only feeds suggestion-character selection; inject a seeded
/// [`rand::rngs::StdRng`] to make suggestions deterministic in tests.
pub fn analyze_with_rng<R: Rng>(
    password: &SecretString,
    breach: Option<&BreachList>,
    rng: &mut R,
) -> AnalysisReport {
    let breach_rank = breach.and_then(|list| list.lookup(password.expose_secret()));
    let entropy_bits = estimate_entropy(password);
    let findings = run_checks(password);

    let strength = classify_strength(entropy_bits, &findings, breach_rank);
    let crack_time = crack_time_bucket(entropy_bits);
    let suggestions = build_suggestions(password, strength, &findings, breach_rank, rng);

    AnalysisReport {
        entropy_bits,
        strength,
        breach_rank,
        crack_time,
        findings,
        suggestions,
    }
}

/// Async version that sends the report via channel.
///
/// Sleeps a short debounce interval first, then checks the cancellation
/// token; a cancelled analysis sends nothing. Useful for type-ahead hosts
/// that fire one analysis per keystroke and cancel the stale ones.
#[cfg(feature = "async")]
pub async fn analyze_tx(
    password: &SecretString,
    breach: Option<&BreachList>,
    token: CancellationToken,
    tx: mpsc::Sender<AnalysisReport>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("analysis is about to start...");

    tokio::time::sleep(Duration::from_millis(300)).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("analysis cancelled before evaluation");
        return;
    }

    let report = analyze(password, breach);

    if let Err(e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send analysis report: {}", e);
    }
}
