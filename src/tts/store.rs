//! Key/value storage for synthesized audio.

use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing::debug;

/// Errors raised by an audio store. These are not recovered by the service.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid cache key: {0}")]
    InvalidKey(String),

    #[error("Cache IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Summary of what a store currently holds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheStats {
    pub file_count: usize,
    pub total_bytes: u64,
    pub location: String,
}

impl CacheStats {
    /// Total size in megabytes, rounded to two decimals.
    pub fn total_size_mb(&self) -> f64 {
        let mb = self.total_bytes as f64 / (1024.0 * 1024.0);
        (mb * 100.0).round() / 100.0
    }
}

/// Mapping from cache key to a complete WAV blob.
///
/// Entries are written once and never expire. Implementations must make a
/// successful `store` visible to every later `lookup`.
#[cfg_attr(test, mockall::automock)]
pub trait AudioStore: Send + Sync {
    /// Fetch the audio stored under `key`, if any.
    fn lookup(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Store `audio` under `key`, replacing any previous entry whole.
    fn store(&self, key: &str, audio: &[u8]) -> Result<(), StoreError>;

    /// Count and size the stored entries.
    fn stats(&self) -> Result<CacheStats, StoreError>;

    /// Remove every entry, returning how many were removed.
    fn clear(&self) -> Result<usize, StoreError>;
}

fn validate_key(key: &str) -> Result<(), StoreError> {
    if key.is_empty() {
        return Err(StoreError::InvalidKey("Key cannot be empty".to_string()));
    }

    if key.contains('/') || key.contains('\\') || key.contains("..") {
        return Err(StoreError::InvalidKey(key.to_string()));
    }

    Ok(())
}

/// One `<key>.wav` file per entry in a flat directory.
pub struct FsAudioStore {
    dir: PathBuf,
}

impl FsAudioStore {
    /// Open the store, creating `dir` if it does not exist yet.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Directory holding the cached files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.wav"))
    }

    fn entries(&self) -> Result<Vec<PathBuf>, StoreError> {
        let mut paths = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "wav") {
                paths.push(path);
            }
        }
        Ok(paths)
    }
}

impl AudioStore for FsAudioStore {
    fn lookup(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        validate_key(key)?;

        match std::fs::read(self.entry_path(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn store(&self, key: &str, audio: &[u8]) -> Result<(), StoreError> {
        validate_key(key)?;

        // Stage next to the target so the rename stays on one filesystem
        let mut staged = tempfile::NamedTempFile::new_in(&self.dir)?;
        staged.write_all(audio)?;
        staged.flush()?;

        let path = self.entry_path(key);
        staged.persist(&path).map_err(|e| e.error)?;
        debug!(path = %path.display(), bytes = audio.len(), "cached audio");

        Ok(())
    }

    fn stats(&self) -> Result<CacheStats, StoreError> {
        let entries = self.entries()?;
        let mut total_bytes = 0;
        for path in &entries {
            total_bytes += std::fs::metadata(path)?.len();
        }

        Ok(CacheStats {
            file_count: entries.len(),
            total_bytes,
            location: self.dir.display().to_string(),
        })
    }

    fn clear(&self) -> Result<usize, StoreError> {
        let entries = self.entries()?;
        for path in &entries {
            std::fs::remove_file(path)?;
        }
        Ok(entries.len())
    }
}

/// In-process store, useful for tests and short-lived embedding.
#[derive(Default)]
pub struct MemoryAudioStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryAudioStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn map(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl AudioStore for MemoryAudioStore {
    fn lookup(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        validate_key(key)?;
        Ok(self.map().get(key).cloned())
    }

    fn store(&self, key: &str, audio: &[u8]) -> Result<(), StoreError> {
        validate_key(key)?;
        self.map().insert(key.to_string(), audio.to_vec());
        Ok(())
    }

    fn stats(&self) -> Result<CacheStats, StoreError> {
        let map = self.map();
        Ok(CacheStats {
            file_count: map.len(),
            total_bytes: map.values().map(|v| v.len() as u64).sum(),
            location: "memory".to_string(),
        })
    }

    fn clear(&self) -> Result<usize, StoreError> {
        let mut map = self.map();
        let count = map.len();
        map.clear();
        Ok(count)
    }
}
