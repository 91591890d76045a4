//! Container-style secret files.
//!
//! A secret named `model_name` is looked up at `<root>/model_name` and then at
//! `<root>/model_name.txt`. The first candidate holding non-whitespace content
//! wins. Missing, empty or unreadable files never fail the lookup; they only
//! move resolution on to the next candidate and finally to the caller's default.

use std::io;
use std::path::{Path, PathBuf};

/// Root directory where the orchestrator mounts secrets.
pub const DEFAULT_SECRETS_DIR: &str = "/run/secrets";

/// Outcome of probing a single candidate file.
#[derive(Debug)]
pub enum SecretProbe {
    /// File exists and holds non-whitespace content (already trimmed).
    Found(String),
    /// File exists but is empty or whitespace-only.
    Empty,
    /// File does not exist.
    Missing,
    /// File exists but could not be read (permissions, not UTF-8, raced deletion...).
    Unreadable(io::Error),
}

/// Reads named secrets from a directory of plain-text files.
#[derive(Debug, Clone)]
pub struct SecretStore {
    root: PathBuf,
}

impl Default for SecretStore {
    fn default() -> Self {
        Self::new(DEFAULT_SECRETS_DIR)
    }
}

impl SecretStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Candidate paths for `name`, in probe order.
    pub fn candidates(&self, name: &str) -> [PathBuf; 2] {
        [
            self.root.join(name),
            self.root.join(format!("{}.txt", name)),
        ]
    }

    /// Probe one candidate file.
    pub fn probe(path: &Path) -> SecretProbe {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let trimmed = content.trim();
                if trimmed.is_empty() {
                    SecretProbe::Empty
                } else {
                    SecretProbe::Found(trimmed.to_string())
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => SecretProbe::Missing,
            Err(e) => SecretProbe::Unreadable(e),
        }
    }

    /// Resolve a secret, returning `None` when no candidate yields a value.
    pub fn lookup(&self, name: &str) -> Option<String> {
        for path in self.candidates(name) {
            match Self::probe(&path) {
                SecretProbe::Found(value) => {
                    tracing::debug!(
                        event = "core.secrets.resolved",
                        name = name,
                        path = %path.display()
                    );
                    return Some(value);
                }
                SecretProbe::Unreadable(e) => {
                    tracing::debug!(
                        event = "core.secrets.read_failed",
                        name = name,
                        path = %path.display(),
                        error = %e
                    );
                }
                SecretProbe::Empty | SecretProbe::Missing => {}
            }
        }
        None
    }

    /// Resolve a secret, falling back to `default`.
    pub fn read_secret(&self, name: &str, default: &str) -> String {
        self.lookup(name).unwrap_or_else(|| default.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn store() -> (tempfile::TempDir, SecretStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = SecretStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn test_default_root() {
        assert_eq!(SecretStore::default().root(), Path::new("/run/secrets"));
    }

    #[test]
    fn test_candidates_order() {
        let store = SecretStore::new("/run/secrets");
        let [bare, txt] = store.candidates("model_name");
        assert_eq!(bare, PathBuf::from("/run/secrets/model_name"));
        assert_eq!(txt, PathBuf::from("/run/secrets/model_name.txt"));
    }

    #[test]
    fn test_missing_secret_returns_default() {
        let (_dir, store) = store();
        assert_eq!(store.read_secret("model_name", "gpt-4"), "gpt-4");
        assert!(store.lookup("model_name").is_none());
    }

    #[test]
    fn test_content_is_trimmed() {
        let (dir, store) = store();
        fs::write(dir.path().join("model_name"), "  claude-3\n\n").unwrap();
        assert_eq!(store.read_secret("model_name", "gpt-4"), "claude-3");
    }

    #[test]
    fn test_whitespace_only_is_treated_as_absent() {
        let (dir, store) = store();
        fs::write(dir.path().join("model_name"), " \n\t ").unwrap();
        assert_eq!(store.read_secret("model_name", "fallback"), "fallback");
        assert!(matches!(
            SecretStore::probe(&dir.path().join("model_name")),
            SecretProbe::Empty
        ));
    }

    #[test]
    fn test_bare_path_wins_over_txt() {
        let (dir, store) = store();
        fs::write(dir.path().join("model_name"), "bare").unwrap();
        fs::write(dir.path().join("model_name.txt"), "suffixed").unwrap();
        assert_eq!(store.read_secret("model_name", ""), "bare");
    }

    #[test]
    fn test_txt_variant_used_when_bare_is_empty() {
        let (dir, store) = store();
        fs::write(dir.path().join("model_name"), "\n").unwrap();
        fs::write(dir.path().join("model_name.txt"), "suffixed\n").unwrap();
        assert_eq!(store.read_secret("model_name", ""), "suffixed");
    }

    #[test]
    fn test_txt_variant_used_when_bare_is_missing() {
        let (dir, store) = store();
        fs::write(dir.path().join("model_name.txt"), "suffixed").unwrap();
        assert_eq!(store.lookup("model_name"), Some("suffixed".to_string()));
    }

    #[test]
    fn test_unreadable_candidate_falls_through() {
        let (dir, store) = store();
        // A directory where a file is expected fails to read without being NotFound.
        fs::create_dir(dir.path().join("model_name")).unwrap();
        fs::write(dir.path().join("model_name.txt"), "suffixed").unwrap();
        assert_eq!(store.read_secret("model_name", ""), "suffixed");
    }

    #[test]
    fn test_non_utf8_content_is_unreadable() {
        let (dir, store) = store();
        let path = dir.path().join("model_name");
        fs::write(&path, [0xff, 0xfe, 0xfd]).unwrap();
        assert!(matches!(
            SecretStore::probe(&path),
            SecretProbe::Unreadable(_)
        ));
        assert_eq!(store.read_secret("model_name", "default"), "default");
    }
}
