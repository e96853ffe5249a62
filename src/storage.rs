use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{error, warn};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(#[from] io::Error),
    #[error("storage encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Client-local key/value persistence, the desktop analog of the browser's
/// `window.localStorage`: string keys, string values, one JSON object file.
///
/// A corrupt or unreadable file yields an empty store; write failures are
/// logged and swallowed. Nothing in this layer is fatal to the app.
pub struct KeyValueStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl KeyValueStore {
    pub fn open(dir: impl AsRef<Path>) -> Self {
        let path = dir.as_ref().join("storage.json");
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<BTreeMap<String, String>>(&raw) {
                Ok(map) => map,
                Err(e) => {
                    warn!(
                        "Persisted store at {} is corrupt ({}), starting empty",
                        path.display(),
                        e
                    );
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                warn!("Could not read persisted store at {}: {}", path.display(), e);
                BTreeMap::new()
            }
        };

        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    pub fn set(&self, key: &str, value: impl Into<String>) {
        let mut entries = self.entries.lock();
        entries.insert(key.to_string(), value.into());
        if let Err(e) = self.flush(&entries) {
            error!("Failed to persist {}: {}", key, e);
        }
    }

    pub fn remove(&self, key: &str) {
        let mut entries = self.entries.lock();
        if entries.remove(key).is_some() {
            if let Err(e) = self.flush(&entries) {
                error!("Failed to persist removal of {}: {}", key, e);
            }
        }
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

fn default_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("FOLIO_STORAGE_DIR") {
        return PathBuf::from(dir);
    }
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("folio")
}

// Shared store used by every command; last writer wins, consistent with the
// single-threaded event-driven execution of the page.
pub static STORE: Lazy<KeyValueStore> = Lazy::new(|| KeyValueStore::open(default_dir()));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = KeyValueStore::open(dir.path());

        assert_eq!(store.get("visit-count"), None);
        store.set("visit-count", "3");
        assert_eq!(store.get("visit-count"), Some("3".to_string()));

        // A fresh handle sees what the previous one flushed.
        let reopened = KeyValueStore::open(dir.path());
        assert_eq!(reopened.get("visit-count"), Some("3".to_string()));
    }

    #[test]
    fn test_remove() {
        let dir = tempfile::tempdir().unwrap();
        let store = KeyValueStore::open(dir.path());

        store.set("announcementDismissed", "true");
        store.remove("announcementDismissed");
        assert_eq!(store.get("announcementDismissed"), None);

        let reopened = KeyValueStore::open(dir.path());
        assert_eq!(reopened.get("announcementDismissed"), None);
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("storage.json"), "{not json").unwrap();

        let store = KeyValueStore::open(dir.path());
        assert_eq!(store.get("anything"), None);

        // The store stays usable and recovers the file on the next write.
        store.set("theme", "dark");
        let reopened = KeyValueStore::open(dir.path());
        assert_eq!(reopened.get("theme"), Some("dark".to_string()));
    }
}
