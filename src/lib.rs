//! Password strength analysis library
//!
//! This library estimates password strength from character composition,
//! detects common weak patterns, and looks up rank in a locally cached
//! breached-password list.
//!
//! # Features
//!
//! - `async` (default): Enables async analysis with cancellation support
//! - `tracing`: Enables logging via tracing crate
//! - `cli`: Builds the interactive `pwd-audit` binary
//! - `fetch`: Enables the one-time breach-list download helper
//!
//! # Environment Variables
//!
//! - `PWD_BREACH_LIST_PATH`: Custom path to the breach list file
//!   (default: `./assets/pwned-top100k.txt`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_audit::{analyze, BreachList};
//! use secrecy::SecretString;
//!
//! // Load the breach list once at startup; analysis degrades gracefully
//! // without it.
//! let breach = BreachList::load().ok();
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let report = analyze(&password, breach.as_ref());
//!
//! println!("Entropy: {} bits", report.entropy_display());
//! println!("Strength: {}", report.strength);
//! ```

// Internal modules
mod analyzer;
mod breach;
mod checks;
mod classifier;
mod entropy;
#[cfg(feature = "fetch")]
mod fetch;
mod types;

// Public API
pub use analyzer::{analyze, analyze_with_rng};
pub use breach::{default_list_path, BreachList, BreachListError};
pub use checks::run_checks;
pub use entropy::estimate_entropy;
pub use types::{AnalysisReport, CrackTime, PatternFinding, PatternKind, Strength};

#[cfg(feature = "async")]
pub use analyzer::analyze_tx;

#[cfg(feature = "fetch")]
pub use fetch::{download_breach_list, FetchError, FALLBACK_URL, PRIMARY_URL};
