//! Breach list management module
//!
//! Handles loading and querying the local list of known-breached passwords.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BreachListError {
    #[error("Breach list file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read breach list file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Breach list file is empty")]
    EmptyFile,
}

/// Returns the breach list file path.
///
/// Priority:
/// 1. Environment variable `PWD_BREACH_LIST_PATH`
/// 2. Default path `./assets/pwned-top100k.txt`
pub fn default_list_path() -> PathBuf {
    std::env::var("PWD_BREACH_LIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/pwned-top100k.txt"))
}

/// Immutable mapping from breached password to its 1-based rank.
///
/// The source file is ordered by descending commonality, so rank 1 is the
/// most common password. The list is read-only after construction and can be
/// shared freely across concurrent analysis calls.
#[derive(Debug, Clone)]
pub struct BreachList {
    ranks: HashMap<String, usize>,
}

impl BreachList {
    /// Loads the breach list from the default location.
    ///
    /// # Environment Variable
    ///
    /// Set `PWD_BREACH_LIST_PATH` to specify a custom file location.
    /// If not set, defaults to `./assets/pwned-top100k.txt`.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File is empty
    pub fn load() -> Result<Self, BreachListError> {
        Self::load_from_path(default_list_path())
    }

    /// Loads the breach list from a specific file path.
    ///
    /// The file is newline-delimited, one password per line, most common
    /// first; the 1-based line number becomes the rank. Only the first
    /// whitespace token of each line is kept. Blank lines consume a rank but
    /// add no entry, and the earliest occurrence of a duplicate wins.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File contains no entries
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, BreachListError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Breach list load FAILED: FileNotFound {}", path.display());
            return Err(BreachListError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Breach list load FAILED: Empty file {}", path.display());
            return Err(BreachListError::EmptyFile);
        }

        let mut ranks = HashMap::new();
        for (rank, line) in content.lines().enumerate() {
            let Some(password) = line.split_whitespace().next() else {
                continue;
            };
            ranks.entry(password.to_string()).or_insert(rank + 1);
        }

        #[cfg(feature = "tracing")]
        tracing::info!("Breach list loaded: {} passwords from {:?}", ranks.len(), path);

        Ok(Self { ranks })
    }

    /// Looks up a password's rank in the breach list.
    ///
    /// Exact, case-sensitive match; no fuzzy matching. Returns `None` if the
    /// password is not present verbatim.
    pub fn lookup(&self, password: &str) -> Option<usize> {
        self.ranks.get(password).copied()
    }

    /// Number of distinct passwords in the list.
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use serial_test::serial;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::remove_var(key); }
    }

    fn write_list(passwords: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for pwd in passwords {
            writeln!(temp_file, "{}", pwd).expect("Failed to write");
        }
        temp_file
    }

    #[test]
    #[serial]
    fn test_default_list_path_default() {
        remove_env("PWD_BREACH_LIST_PATH");

        let path = default_list_path();
        assert_eq!(path, PathBuf::from("./assets/pwned-top100k.txt"));
    }

    #[test]
    #[serial]
    fn test_default_list_path_from_env() {
        let custom_path = "/custom/path/top-list.txt";
        set_env("PWD_BREACH_LIST_PATH", custom_path);

        let path = default_list_path();
        assert_eq!(path, PathBuf::from(custom_path));

        remove_env("PWD_BREACH_LIST_PATH");
    }

    #[test]
    fn test_load_file_not_found() {
        let result = BreachList::load_from_path("/nonexistent/path/top-list.txt");
        assert!(matches!(result, Err(BreachListError::FileNotFound(_))));
    }

    #[test]
    fn test_load_empty_file() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "  \n\n  ").expect("Failed to write");

        let result = BreachList::load_from_path(temp_file.path());
        assert!(matches!(result, Err(BreachListError::EmptyFile)));
    }

    #[test]
    fn test_load_assigns_line_number_ranks() {
        let temp_file = write_list(&["123456", "password", "qwerty"]);

        let list = BreachList::load_from_path(temp_file.path()).expect("load should succeed");
        assert_eq!(list.len(), 3);
        assert_eq!(list.lookup("123456"), Some(1));
        assert_eq!(list.lookup("password"), Some(2));
        assert_eq!(list.lookup("qwerty"), Some(3));
    }

    #[test]
    fn test_load_blank_lines_consume_ranks() {
        let temp_file = write_list(&["123456", "", "qwerty"]);

        let list = BreachList::load_from_path(temp_file.path()).expect("load should succeed");
        assert_eq!(list.len(), 2);
        assert_eq!(list.lookup("qwerty"), Some(3));
    }

    #[test]
    fn test_load_duplicate_keeps_earliest_rank() {
        let temp_file = write_list(&["123456", "qwerty", "123456"]);

        let list = BreachList::load_from_path(temp_file.path()).expect("load should succeed");
        assert_eq!(list.lookup("123456"), Some(1));
    }

    #[test]
    fn test_load_takes_first_whitespace_token() {
        let temp_file = write_list(&["123456 extra token"]);

        let list = BreachList::load_from_path(temp_file.path()).expect("load should succeed");
        assert_eq!(list.lookup("123456"), Some(1));
        assert_eq!(list.lookup("123456 extra token"), None);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let temp_file = write_list(&["password"]);

        let list = BreachList::load_from_path(temp_file.path()).expect("load should succeed");
        assert_eq!(list.lookup("password"), Some(1));
        assert_eq!(list.lookup("PASSWORD"), None);
        assert_eq!(list.lookup("Password"), None);
    }

    #[test]
    fn test_lookup_absent() {
        let temp_file = write_list(&["common123"]);

        let list = BreachList::load_from_path(temp_file.path()).expect("load should succeed");
        assert_eq!(list.lookup("veryuncommonpassword987"), None);
    }
}
