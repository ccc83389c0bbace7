//! Template store
//!
//! Persists the editing session (template, style settings, print options and
//! rows) as a single named JSON blob. Saves are synchronous and
//! last-write-wins. A blob that does not decode into the current schema is
//! treated as absent.

use crate::model::{LabelRow, Template};
use chrono::{DateTime, Utc};
use labelkit_settings::{PrintOptions, StyleSettings};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Default blob name
pub const DEFAULT_BLOB_KEY: &str = "label_session";

/// Errors raised while writing or removing the session blob
#[derive(Error, Debug)]
pub enum StoreError {
    /// Filesystem failure
    #[error("Storage I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot could not be encoded
    #[error("Failed to encode session: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Raw key/value storage for session blobs
pub trait BlobStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn write(&mut self, key: &str, data: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// One JSON file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> StoreError + '_ {
    move |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

impl BlobStore for FileBlobStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(&path)(e)),
        }
    }

    fn write(&mut self, key: &str, data: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir).map_err(io_error(&self.dir))?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, data).map_err(io_error(&tmp))?;
        std::fs::rename(&tmp, &path).map_err(io_error(&path))?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(&path)(e)),
        }
    }
}

/// In-memory blobs. Clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryBlobStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.blobs.borrow().get(key).cloned())
    }

    fn write(&mut self, key: &str, data: &str) -> Result<(), StoreError> {
        self.blobs.borrow_mut().insert(key.to_string(), data.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.blobs.borrow_mut().remove(key);
        Ok(())
    }
}

/// Persisted session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub template: Template,
    pub style: StyleSettings,
    #[serde(default)]
    pub options: PrintOptions,
    #[serde(default)]
    pub rows: Vec<LabelRow>,
    pub saved_at: DateTime<Utc>,
}

#[derive(Serialize)]
struct SnapshotRef<'a> {
    template: &'a Template,
    style: &'a StyleSettings,
    options: &'a PrintOptions,
    rows: &'a [LabelRow],
    saved_at: DateTime<Utc>,
}

/// Reads and writes the session blob
pub struct TemplateStore {
    backend: Box<dyn BlobStore>,
    key: String,
}

impl TemplateStore {
    pub fn new(backend: impl BlobStore + 'static, key: impl Into<String>) -> Self {
        Self {
            backend: Box::new(backend),
            key: key.into(),
        }
    }

    /// Store backed by memory only; nothing survives the process.
    pub fn in_memory() -> Self {
        Self::new(MemoryBlobStore::new(), DEFAULT_BLOB_KEY)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Last saved session, `None` on first run or when the blob is unusable.
    pub fn load(&self) -> Option<SessionSnapshot> {
        let data = match self.backend.read(&self.key) {
            Ok(Some(data)) => data,
            Ok(None) => {
                debug!("No saved session under '{}'", self.key);
                return None;
            }
            Err(e) => {
                warn!("Could not read saved session: {}", e);
                return None;
            }
        };

        match serde_json::from_str::<SessionSnapshot>(&data) {
            Ok(snapshot) => {
                info!(
                    "Loaded session '{}' saved at {}",
                    self.key,
                    snapshot.saved_at.to_rfc3339()
                );
                Some(snapshot)
            }
            Err(e) => {
                warn!("Ignoring incompatible saved session '{}': {}", self.key, e);
                None
            }
        }
    }

    /// Overwrite the saved session.
    pub fn save(
        &mut self,
        template: &Template,
        style: &StyleSettings,
        options: &PrintOptions,
        rows: &[LabelRow],
    ) -> Result<(), StoreError> {
        let snapshot = SnapshotRef {
            template,
            style,
            options,
            rows,
            saved_at: Utc::now(),
        };
        let data = serde_json::to_string_pretty(&snapshot)?;
        self.backend.write(&self.key, &data)?;
        debug!("Saved session '{}' ({} bytes)", self.key, data.len());
        Ok(())
    }

    /// Remove the saved session.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.backend.remove(&self.key)?;
        info!("Cleared saved session '{}'", self.key);
        Ok(())
    }
}

impl std::fmt::Debug for TemplateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateStore")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
