use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::dlog;
use crate::error::StoreError;
use crate::types::Workout;

/// Snapshot name, one file holding the whole list.
pub const SNAPSHOT_NAME: &str = "workouts.json";

/// Whole-collection persistence. Every save overwrites the previous snapshot.
pub trait Store {
    /// `Ok(None)` when nothing has been saved yet.
    fn load_all(&self) -> Result<Option<Vec<Workout>>, StoreError>;

    fn save_all(&mut self, workouts: &[Workout]) -> Result<(), StoreError>;

    fn clear(&mut self) -> Result<(), StoreError>;
}

/// JSON array on disk, replaced atomically on save.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<dir>/workouts.json`
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(SNAPSHOT_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_err(&self, source: io::Error) -> StoreError {
        StoreError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl Store for JsonFileStore {
    fn load_all(&self) -> Result<Option<Vec<Workout>>, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                dlog!("no snapshot at {}", self.path.display());
                return Ok(None);
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let workouts: Vec<Workout> =
            serde_json::from_slice(&bytes).map_err(|source| StoreError::Corrupt {
                path: self.path.clone(),
                source,
            })?;
        tracing::debug!(path = %self.path.display(), count = workouts.len(), "snapshot loaded");
        Ok(Some(workouts))
    }

    fn save_all(&mut self, workouts: &[Workout]) -> Result<(), StoreError> {
        let json = serde_json::to_vec(workouts)?;

        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|e| self.write_err(e))?;

        let mut tmp = NamedTempFile::new_in(&dir).map_err(|e| self.write_err(e))?;
        tmp.write_all(&json).map_err(|e| self.write_err(e))?;
        tmp.persist(&self.path).map_err(|e| self.write_err(e.error))?;

        tracing::debug!(path = %self.path.display(), count = workouts.len(), "snapshot saved");
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.write_err(e)),
        }
    }
}

/// Keeps the serialized snapshot in memory. Used for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    snapshot: Option<String>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with an existing serialized snapshot.
    pub fn with_snapshot(json: impl Into<String>) -> Self {
        Self {
            snapshot: Some(json.into()),
            saves: 0,
        }
    }

    pub fn snapshot(&self) -> Option<&str> {
        self.snapshot.as_deref()
    }

    /// How many times `save_all` has run.
    pub const fn saves(&self) -> usize {
        self.saves
    }
}

impl Store for MemoryStore {
    fn load_all(&self) -> Result<Option<Vec<Workout>>, StoreError> {
        let Some(json) = self.snapshot.as_deref() else {
            return Ok(None);
        };
        let workouts = serde_json::from_str(json).map_err(|source| StoreError::Corrupt {
            path: PathBuf::from("<memory>"),
            source,
        })?;
        Ok(Some(workouts))
    }

    fn save_all(&mut self, workouts: &[Workout]) -> Result<(), StoreError> {
        self.snapshot = Some(serde_json::to_string(workouts)?);
        self.saves += 1;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.snapshot = None;
        Ok(())
    }
}
