//! Atomic JSON slot file operations.
//!
//! Each durable slot is one JSON file, written via tmp file + fsync +
//! atomic rename, with an advisory file lock serializing concurrent
//! writers.

use serde::{de::DeserializeOwned, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// Errors that can occur during atomic JSON operations.
#[derive(Debug)]
pub enum AtomicJsonError {
    /// File I/O error.
    Io(std::io::Error),
    /// JSON serialization/deserialization error.
    Json(serde_json::Error),
    /// File locking error.
    Lock(String),
}

impl std::fmt::Display for AtomicJsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AtomicJsonError::Io(e) => write!(f, "I/O error: {}", e),
            AtomicJsonError::Json(e) => write!(f, "JSON error: {}", e),
            AtomicJsonError::Lock(e) => write!(f, "Lock error: {}", e),
        }
    }
}

impl std::error::Error for AtomicJsonError {}

impl From<std::io::Error> for AtomicJsonError {
    fn from(e: std::io::Error) -> Self {
        AtomicJsonError::Io(e)
    }
}

impl From<serde_json::Error> for AtomicJsonError {
    fn from(e: serde_json::Error) -> Self {
        AtomicJsonError::Json(e)
    }
}

/// A handle to one JSON slot file.
///
/// Provides:
/// - **Atomicity**: writes are all-or-nothing via tmp file + atomic rename
/// - **Isolation**: advisory file locking around each write
/// - **Durability**: explicit fsync before rename
pub struct AtomicJsonFile<T> {
    path: PathBuf,
    _phantom: PhantomData<T>,
}

impl<T> Clone for AtomicJsonFile<T> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T> AtomicJsonFile<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Creates a new slot file handle.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _phantom: PhantomData,
        }
    }

    /// Loads and deserializes the slot.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(T))`: successfully loaded and deserialized
    /// - `Ok(None)`: file doesn't exist or is empty
    /// - `Err`: failed to read or parse the file
    pub fn load(&self) -> Result<Option<T>, AtomicJsonError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;

        if content.trim().is_empty() {
            return Ok(None);
        }

        let data: T = serde_json::from_str(&content)?;
        Ok(Some(data))
    }

    /// Saves data to the slot atomically, under the advisory file lock.
    pub fn save(&self, data: &T) -> Result<(), AtomicJsonError> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let _lock = FileLock::acquire(&self.path)?;

        let json = serde_json::to_string_pretty(data)?;

        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(json.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }

    fn temp_path(&self) -> Result<PathBuf, AtomicJsonError> {
        let parent = self.path.parent().ok_or_else(|| {
            AtomicJsonError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path has no parent directory",
            ))
        })?;

        let file_name = self.path.file_name().ok_or_else(|| {
            AtomicJsonError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path has no file name",
            ))
        })?;

        Ok(parent.join(format!(".{}.tmp", file_name.to_string_lossy())))
    }
}

/// A file lock guard that releases the lock when dropped.
struct FileLock {
    #[allow(dead_code)]
    file: File,
    lock_path: PathBuf,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self, AtomicJsonError> {
        let lock_path = path.with_extension("lock");

        if let Some(parent) = lock_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .open(&lock_path)?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive()
                .map_err(|e| AtomicJsonError::Lock(format!("Failed to acquire lock: {}", e)))?;
        }

        #[cfg(not(unix))]
        {
            // No file locking on non-Unix systems; acceptable for a
            // single-user client.
        }

        Ok(FileLock { file, lock_path })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // Unlock is automatic when the file handle is dropped.
        let _ = fs::remove_file(&self.lock_path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestSlot {
        name: String,
        count: u32,
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let slot = AtomicJsonFile::<TestSlot>::new(temp_dir.path().join("slot.json"));

        let data = TestSlot {
            name: "cart".to_string(),
            count: 3,
        };
        slot.save(&data).unwrap();

        let loaded = slot.load().unwrap().unwrap();
        assert_eq!(loaded, data);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = TempDir::new().unwrap();
        let slot = AtomicJsonFile::<TestSlot>::new(temp_dir.path().join("missing.json"));

        assert!(slot.load().unwrap().is_none());
    }

    #[test]
    fn test_load_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.json");
        fs::write(&path, "   \n").unwrap();

        let slot = AtomicJsonFile::<TestSlot>::new(path);
        assert!(slot.load().unwrap().is_none());
    }

    #[test]
    fn test_load_malformed_file_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();

        let slot = AtomicJsonFile::<TestSlot>::new(path);
        assert!(matches!(slot.load(), Err(AtomicJsonError::Json(_))));
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("slot.json");
        let slot = AtomicJsonFile::<TestSlot>::new(path.clone());

        slot.save(&TestSlot {
            name: "cart".to_string(),
            count: 1,
        })
        .unwrap();

        assert!(!temp_dir.path().join(".slot.json.tmp").exists());
        assert!(path.exists());
    }

    #[test]
    fn test_save_releases_lock_file() {
        let temp_dir = TempDir::new().unwrap();
        let slot = AtomicJsonFile::<TestSlot>::new(temp_dir.path().join("slot.json"));

        let data = TestSlot {
            name: "cart".to_string(),
            count: 1,
        };
        slot.save(&data).unwrap();
        // A second save re-acquires the lock cleanly.
        slot.save(&data).unwrap();

        assert!(!temp_dir.path().join("slot.lock").exists());
        assert_eq!(slot.load().unwrap().unwrap(), data);
    }
}
