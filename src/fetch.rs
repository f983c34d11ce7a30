//! One-time breach list download.
//!
//! Not part of the analysis path; fetches the top-password list once and
//! writes it to the local cache consumed by [`BreachList`](crate::BreachList).

use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// NCSC top-100k breached passwords, raw text.
pub const PRIMARY_URL: &str =
    "https://www.ncsc.gov.uk/static-assets/documents/PwnedPasswordsTop100k.txt";

/// SecLists top-10k fallback, raw text.
pub const FALLBACK_URL: &str =
    "https://raw.githubusercontent.com/danielmiessler/SecLists/master/Passwords/Common-Credentials/10-million-password-list-top-10000.txt";

const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {0}")]
    Client(reqwest::Error),
    #[error("Failed to write breach list to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("All download attempts failed:\n{0}")]
    AllAttemptsFailed(String),
}

/// Downloads the breach list, trying the primary URL then the fallback.
///
/// The downloaded text is written to `dest` as-is; line order defines rank.
///
/// # Errors
///
/// Returns error if the HTTP client cannot be built, the file cannot be
/// written, or every URL fails. The `AllAttemptsFailed` message lists each
/// URL with its failure.
pub fn download_breach_list<P: AsRef<Path>>(dest: P) -> Result<(), FetchError> {
    let dest = dest.as_ref();
    let client = reqwest::blocking::Client::builder()
        .timeout(DOWNLOAD_TIMEOUT)
        .build()
        .map_err(FetchError::Client)?;

    let mut tried = Vec::new();
    for url in [PRIMARY_URL, FALLBACK_URL] {
        #[cfg(feature = "tracing")]
        tracing::info!("Attempting breach list download from {}", url);

        match fetch_text(&client, url) {
            Ok(body) => {
                std::fs::write(dest, body).map_err(|source| FetchError::Write {
                    path: dest.to_path_buf(),
                    source,
                })?;

                #[cfg(feature = "tracing")]
                tracing::info!("Breach list saved to {:?}", dest);

                return Ok(());
            }
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Download failed from {}: {}", url, e);
                tried.push(format!("{url}: {e}"));
            }
        }
    }

    Err(FetchError::AllAttemptsFailed(tried.join("\n")))
}

fn fetch_text(client: &reqwest::blocking::Client, url: &str) -> Result<String, reqwest::Error> {
    client.get(url).send()?.error_for_status()?.text()
}
