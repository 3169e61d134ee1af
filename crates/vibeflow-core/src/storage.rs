use crate::error::{Result, VibeflowError};
use crate::io;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Storage
// ---------------------------------------------------------------------------

/// Synchronous device-local key-value store. Values are unbounded strings.
///
/// `get` never fails: an unreadable value is reported as absent so a broken
/// record degrades to "no data" instead of taking the screen down. Writes
/// and removals do fail loudly; losing a mutation silently would be worse.
pub trait Storage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

// ---------------------------------------------------------------------------
// FileStorage
// ---------------------------------------------------------------------------

/// One file per key under a data directory. Keys are ASCII slugs and
/// camelCase identifiers from `keys`, so they map directly to file names.
#[derive(Debug)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Open (creating if needed) the store rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        io::ensure_dir(&root)?;
        Ok(Self { root })
    }

    /// The default per-user data directory, `~/.vibeflow`.
    pub fn default_root() -> Result<PathBuf> {
        home::home_dir()
            .map(|h| h.join(".vibeflow"))
            .ok_or(VibeflowError::HomeNotFound)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        match std::fs::read_to_string(self.key_path(key)) {
            Ok(value) => Some(value),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to read stored value; treating as absent");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        io::atomic_write(&self.key_path(key), value.as_bytes())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        match std::fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// ---------------------------------------------------------------------------
// MemoryStorage
// ---------------------------------------------------------------------------

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_storage_roundtrip() {
        let dir = TempDir::new().unwrap();
        let mut storage = FileStorage::open(dir.path()).unwrap();

        assert_eq!(storage.get("someKey"), None);
        storage.set("someKey", "[1,2,3]").unwrap();
        assert_eq!(storage.get("someKey").as_deref(), Some("[1,2,3]"));

        storage.set("someKey", "[]").unwrap();
        assert_eq!(storage.get("someKey").as_deref(), Some("[]"));
    }

    #[test]
    fn file_storage_remove_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let mut storage = FileStorage::open(dir.path()).unwrap();

        storage.set("k", "v").unwrap();
        storage.remove("k").unwrap();
        storage.remove("k").unwrap();
        assert_eq!(storage.get("k"), None);
    }

    #[test]
    fn file_storage_open_creates_root() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("nested/data");
        let storage = FileStorage::open(&root).unwrap();
        assert!(storage.root().is_dir());
    }

    #[test]
    fn memory_storage_roundtrip() {
        let mut storage = MemoryStorage::new();
        assert!(storage.is_empty());

        storage.set("a", "1").unwrap();
        storage.set("b", "2").unwrap();
        assert_eq!(storage.len(), 2);
        assert_eq!(storage.get("a").as_deref(), Some("1"));

        storage.remove("a").unwrap();
        assert_eq!(storage.get("a"), None);
        assert_eq!(storage.keys().collect::<Vec<_>>(), vec!["b"]);
    }
}
