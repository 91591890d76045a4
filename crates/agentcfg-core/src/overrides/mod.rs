//! Admin override document.
//!
//! An external process maintains a JSON file whose `"agent"` object holds
//! runtime overrides:
//!
//! ```json
//! { "agent": { "model": "gpt-4o", "temperature": 0.2, "max_iterations": 50 } }
//! ```
//!
//! The file is re-read on every call. A missing file is the normal state; an
//! unreadable or half-written file is logged and treated as empty.

use crate::errors::OverrideError;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Fixed location of the admin override document.
pub const DEFAULT_ADMIN_CONFIG_PATH: &str = "/workspace/_shared/admin_config.json";

/// Sub-object holding agent overrides.
pub const AGENT_SECTION: &str = "agent";

/// Loader for the admin override document.
#[derive(Debug, Clone)]
pub struct AdminOverrides {
    path: PathBuf,
}

impl Default for AdminOverrides {
    fn default() -> Self {
        Self::new(DEFAULT_ADMIN_CONFIG_PATH)
    }
}

impl AdminOverrides {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the document.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    pub fn read_document(&self) -> Result<Option<Map<String, Value>>, OverrideError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(OverrideError::Unreadable {
                    path: self.path.display().to_string(),
                    source: e,
                });
            }
        };

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => Ok(Some(map)),
            Ok(_) => Err(OverrideError::NotAnObject {
                path: self.path.display().to_string(),
            }),
            Err(e) => Err(OverrideError::Malformed {
                path: self.path.display().to_string(),
                source: e,
            }),
        }
    }

    /// Load the document, or an empty mapping if it is missing or unusable.
    pub fn load(&self) -> Map<String, Value> {
        match self.read_document() {
            Ok(Some(map)) => map,
            Ok(None) => Map::new(),
            Err(e) => {
                // WARN (not error): the writer may be mid-update; the next read
                // usually succeeds.
                tracing::warn!(
                    event = "core.overrides.load_failed",
                    path = %self.path.display(),
                    error = %e
                );
                Map::new()
            }
        }
    }

    /// The `"agent"` object, or an empty mapping when absent or not an object.
    pub fn agent_section(&self) -> Map<String, Value> {
        match self.load().remove(AGENT_SECTION) {
            Some(Value::Object(section)) => section,
            _ => Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    fn overrides_with(content: Option<&str>) -> (tempfile::TempDir, AdminOverrides) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("admin_config.json");
        if let Some(content) = content {
            fs::write(&path, content).unwrap();
        }
        (dir, AdminOverrides::new(path))
    }

    #[test]
    fn test_default_path() {
        assert_eq!(
            AdminOverrides::default().path(),
            Path::new("/workspace/_shared/admin_config.json")
        );
    }

    #[test]
    fn test_missing_file_is_empty() {
        let (_dir, overrides) = overrides_with(None);
        assert!(matches!(overrides.read_document(), Ok(None)));
        assert!(overrides.load().is_empty());
        assert!(overrides.agent_section().is_empty());
    }

    #[test]
    fn test_invalid_json_is_empty() {
        let (_dir, overrides) = overrides_with(Some("{\"agent\": {\"model\": "));
        assert!(matches!(
            overrides.read_document(),
            Err(OverrideError::Malformed { .. })
        ));
        assert!(overrides.load().is_empty());
    }

    #[test]
    fn test_non_object_document_is_empty() {
        let (_dir, overrides) = overrides_with(Some("[1, 2, 3]"));
        assert!(matches!(
            overrides.read_document(),
            Err(OverrideError::NotAnObject { .. })
        ));
        assert!(overrides.load().is_empty());
    }

    #[test]
    fn test_unreadable_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        // A directory at the document path cannot be read as a file.
        let overrides = AdminOverrides::new(dir.path());
        assert!(matches!(
            overrides.read_document(),
            Err(OverrideError::Unreadable { .. })
        ));
        assert!(overrides.load().is_empty());
    }

    #[test]
    fn test_loads_full_document() {
        let (_dir, overrides) =
            overrides_with(Some(r#"{"agent": {"model": "gpt-4o"}, "bot": {"enabled": true}}"#));
        let document = overrides.load();
        assert_eq!(document["agent"], json!({"model": "gpt-4o"}));
        assert_eq!(document["bot"], json!({"enabled": true}));
    }

    #[test]
    fn test_agent_section() {
        let (_dir, overrides) =
            overrides_with(Some(r#"{"agent": {"max_iterations": 50, "temperature": 0.1}}"#));
        let section = overrides.agent_section();
        assert_eq!(section["max_iterations"], json!(50));
        assert_eq!(section["temperature"], json!(0.1));
    }

    #[test]
    fn test_missing_or_non_object_agent_section_is_empty() {
        let (_dir, overrides) = overrides_with(Some(r#"{"bot": {}}"#));
        assert!(overrides.agent_section().is_empty());

        let (_dir, overrides) = overrides_with(Some(r#"{"agent": "gpt-4o"}"#));
        assert!(overrides.agent_section().is_empty());
    }

    #[test]
    fn test_reload_observes_external_edits() {
        let (dir, overrides) = overrides_with(Some(r#"{"agent": {"model": "a"}}"#));
        assert_eq!(overrides.agent_section()["model"], json!("a"));

        fs::write(
            dir.path().join("admin_config.json"),
            r#"{"agent": {"model": "b"}}"#,
        )
        .unwrap();
        assert_eq!(overrides.agent_section()["model"], json!("b"));
    }
}
