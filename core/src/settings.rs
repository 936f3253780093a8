//! File-backed settings store.
//!
//! The durable slot for the base URL, kept as a small JSON document under
//! the key `apiBaseUrl`. No expiry, no schema version. Reads degrade to
//! None on any problem (missing file, unreadable file, malformed JSON);
//! writes log a warning and continue, per the [`SettingsStore`] contract.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::surface::SettingsStore;

#[derive(Debug, Default, Serialize, Deserialize)]
struct SettingsDoc {
    #[serde(rename = "apiBaseUrl", skip_serializing_if = "Option::is_none")]
    api_base_url: Option<String>,
}

/// [`SettingsStore`] persisted as JSON at a caller-chosen path.
#[derive(Debug)]
pub struct FileSettings {
    path: PathBuf,
}

impl FileSettings {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read(&self) -> SettingsDoc {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return SettingsDoc::default();
        };
        serde_json::from_str(&raw).unwrap_or_default()
    }
}

impl SettingsStore for FileSettings {
    fn load_base_url(&self) -> Option<String> {
        self.read().api_base_url
    }

    fn save_base_url(&mut self, url: &str) {
        let doc = SettingsDoc {
            api_base_url: Some(url.to_string()),
        };
        let raw = match serde_json::to_string_pretty(&doc) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(error = %err, "failed to encode settings");
                return;
            }
        };
        if let Err(err) = fs::write(&self.path, raw) {
            tracing::warn!(error = %err, path = %self.path.display(), "failed to write settings");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_in(dir: &tempfile::TempDir) -> FileSettings {
        FileSettings::new(dir.path().join("settings.json"))
    }

    #[test]
    fn load_returns_none_when_file_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(settings_in(&dir).load_base_url(), None);
    }

    #[test]
    fn saved_url_survives_a_reload() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = settings_in(&dir);
        settings.save_base_url("http://localhost:5002/api");

        let reopened = settings_in(&dir);
        assert_eq!(
            reopened.load_base_url().as_deref(),
            Some("http://localhost:5002/api")
        );
    }

    #[test]
    fn save_overwrites_the_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = settings_in(&dir);
        settings.save_base_url("http://old");
        settings.save_base_url("http://new");
        assert_eq!(settings.load_base_url().as_deref(), Some("http://new"));
    }

    #[test]
    fn corrupt_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{not json").unwrap();
        assert_eq!(FileSettings::new(&path).load_base_url(), None);
    }

    #[test]
    fn stored_document_uses_the_api_base_url_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut settings = FileSettings::new(&path);
        settings.save_base_url("http://localhost:5002/api");

        let raw = fs::read_to_string(&path).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(doc["apiBaseUrl"], "http://localhost:5002/api");
    }
}
