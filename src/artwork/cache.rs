//! Persisted URL cache for resolved artwork.
//!
//! Each store is a single JSON object on disk mapping normalized lookup
//! keys to URL strings. An empty-string value records a confirmed miss so
//! the same key is not retried. Two separate stores exist (multi-provider
//! and MusicBrainz) so their formats never mix.
//!
//! Entries persist indefinitely - there is no TTL. `cover-scout cache clear`
//! is the manual invalidation path.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

/// Key-value store for resolved artwork URLs.
///
/// Implementations must treat an empty-string value as a valid entry
/// (a confirmed "no artwork" result), distinct from an absent key.
/// Persistence failures stay internal; none of these methods can fail.
pub trait UrlCache: Send + Sync {
    /// Stored value for `key`, or `None` if the key was never written
    fn get(&self, key: &str) -> Option<String>;

    /// Store (or overwrite) the value for `key`
    fn set(&self, key: &str, value: &str);

    /// Drop every entry
    fn clear(&self);

    /// Number of stored entries
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// File-backed cache: one JSON object per store file.
///
/// The file is read once at open and rewritten after every update. A
/// missing, unreadable, or corrupt file yields an empty cache rather than
/// an error; write failures are logged and otherwise ignored.
pub struct JsonFileCache {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

/// Store file for the multi-provider resolver cache
const ARTWORK_STORE: &str = "artwork.json";

/// Store file for the MusicBrainz/Cover Art Archive cache
const MUSICBRAINZ_STORE: &str = "musicbrainz.json";

impl JsonFileCache {
    /// Open the store at `path`, loading any existing entries
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = load_entries(&path);
        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    /// Default location of the multi-provider store inside `dir`,
    /// or the standard cache directory when `dir` is `None`
    pub fn artwork_store(dir: Option<&Path>) -> PathBuf {
        store_dir(dir).join(ARTWORK_STORE)
    }

    /// Default location of the MusicBrainz store inside `dir`,
    /// or the standard cache directory when `dir` is `None`
    pub fn musicbrainz_store(dir: Option<&Path>) -> PathBuf {
        store_dir(dir).join(MUSICBRAINZ_STORE)
    }

    /// Rewrite the store file from the current entries
    fn persist(&self, entries: &HashMap<String, String>) {
        if let Some(parent) = self.path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            tracing::warn!("Failed to create cache directory {:?}: {}", parent, e);
            return;
        }

        match serde_json::to_string(entries) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&self.path, json) {
                    tracing::warn!("Failed to write cache store {:?}: {}", self.path, e);
                }
            }
            Err(e) => {
                tracing::warn!("Failed to serialize cache store {:?}: {}", self.path, e);
            }
        }
    }
}

impl UrlCache for JsonFileCache {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.entries.lock();
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries);
    }

    fn clear(&self) {
        let mut entries = self.entries.lock();
        entries.clear();
        self.persist(&entries);
    }

    fn len(&self) -> usize {
        self.entries.lock().len()
    }
}

/// Cache directory for store files: the explicit override, or the
/// OS-standard per-user cache dir, or the temp dir as a last resort
fn store_dir(dir: Option<&Path>) -> PathBuf {
    match dir {
        Some(dir) => dir.to_path_buf(),
        None => dirs::cache_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("cover-scout"),
    }
}

fn load_entries(path: &Path) -> HashMap<String, String> {
    let Ok(raw) = std::fs::read_to_string(path) else {
        return HashMap::new();
    };
    match serde_json::from_str(&raw) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("Ignoring corrupt cache store {:?}: {}", path, e);
            HashMap::new()
        }
    }
}

/// In-memory cache with no persistence, for tests and cache-less runs
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UrlCache for MemoryCache {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.lock().insert(key.to_string(), value.to_string());
    }

    fn clear(&self) {
        self.entries.lock().clear();
    }

    fn len(&self) -> usize {
        self.entries.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_and_get() {
        let dir = TempDir::new().unwrap();
        let cache = JsonFileCache::open(dir.path().join("store.json"));

        assert_eq!(cache.get("artist|radiohead"), None);
        cache.set("artist|radiohead", "https://img.example/r.jpg");
        assert_eq!(
            cache.get("artist|radiohead"),
            Some("https://img.example/r.jpg".to_string())
        );
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_empty_value_is_a_real_entry() {
        let dir = TempDir::new().unwrap();
        let cache = JsonFileCache::open(dir.path().join("store.json"));

        cache.set("artist|nobody", "");
        assert_eq!(cache.get("artist|nobody"), Some(String::new()));
        assert_eq!(cache.get("artist|missing"), None);
    }

    #[test]
    fn test_entries_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");

        {
            let cache = JsonFileCache::open(&path);
            cache.set("album|a|b", "https://img.example/ab.jpg");
            cache.set("album|c|d", "");
        }

        let reopened = JsonFileCache::open(&path);
        assert_eq!(reopened.len(), 2);
        assert_eq!(
            reopened.get("album|a|b"),
            Some("https://img.example/ab.jpg".to_string())
        );
        assert_eq!(reopened.get("album|c|d"), Some(String::new()));
    }

    #[test]
    fn test_corrupt_store_is_treated_as_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "{not json at all").unwrap();

        let cache = JsonFileCache::open(&path);
        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());

        // Still usable after the bad load
        cache.set("artist|x", "https://img.example/x.jpg");
        assert_eq!(cache.get("artist|x"), Some("https://img.example/x.jpg".to_string()));
    }

    #[test]
    fn test_clear_removes_entries_and_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");

        let cache = JsonFileCache::open(&path);
        cache.set("artist|a", "https://img.example/a.jpg");
        cache.set("artist|b", "https://img.example/b.jpg");
        cache.clear();
        assert_eq!(cache.len(), 0);

        let reopened = JsonFileCache::open(&path);
        assert_eq!(reopened.len(), 0);
    }

    #[test]
    fn test_open_creates_missing_parent_on_first_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("store.json");

        let cache = JsonFileCache::open(&path);
        cache.set("track|a|b", "https://img.example/t.jpg");
        assert!(path.exists());
    }

    #[test]
    fn test_store_file_names() {
        let dir = TempDir::new().unwrap();
        let artwork = JsonFileCache::artwork_store(Some(dir.path()));
        let musicbrainz = JsonFileCache::musicbrainz_store(Some(dir.path()));

        assert_eq!(artwork.file_name().unwrap(), "artwork.json");
        assert_eq!(musicbrainz.file_name().unwrap(), "musicbrainz.json");
        assert_ne!(artwork, musicbrainz);
    }

    #[test]
    fn test_memory_cache() {
        let cache = MemoryCache::new();
        cache.set("artist|x", "url");
        assert_eq!(cache.get("artist|x"), Some("url".to_string()));
        cache.clear();
        assert!(cache.is_empty());
    }
}
