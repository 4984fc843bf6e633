//! Local key-value preference store.
//!
//! DESIGN
//! ======
//! A single JSON object of string keys to string values, kept in memory and
//! rewritten whole on every `set`. A missing or unreadable file opens as an
//! empty store so a corrupt preference never blocks startup.

use std::collections::BTreeMap;
use std::path::PathBuf;

use tracing::warn;

#[derive(Debug, thiserror::Error)]
pub enum PrefsError {
    #[error("preference write failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("preference encode failed: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug)]
pub struct PrefsStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl PrefsStore {
    /// Open the store at `path`, starting empty if it does not exist or
    /// cannot be parsed.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match std::fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_else(|e| {
                warn!(error = %e, path = %path.display(), "preference file unreadable; starting empty");
                BTreeMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                warn!(error = %e, path = %path.display(), "preference file unreadable; starting empty");
                BTreeMap::new()
            }
        };
        Self { path, values }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Set `key` and write the store back to disk. The in-memory value is
    /// updated even when the write fails.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.values.insert(key.to_string(), value.to_string());
        let encoded = serde_json::to_vec_pretty(&self.values)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, encoded)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "prefs_test.rs"]
mod tests;
