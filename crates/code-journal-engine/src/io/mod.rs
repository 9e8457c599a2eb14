use crate::models::Entry;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid journal file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to serialize entries: {0}")]
    Serialize(serde_json::Error),
}

/// Persistence for the whole list of entries. Every save replaces the list.
pub trait EntryStore {
    fn load_all(&self) -> Result<Vec<Entry>, StoreError>;
    fn save_all(&self, entries: &[Entry]) -> Result<(), StoreError>;
}

/// Entries kept as one JSON array in a file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EntryStore for JsonFileStore {
    /// A missing file is an empty journal
    fn load_all(&self) -> Result<Vec<Entry>, StoreError> {
        if !self.path.exists() {
            log::debug!("no journal file at {}", self.path.display());
            return Ok(vec![]);
        }

        let raw = fs::read_to_string(&self.path)?;
        let entries: Vec<Entry> =
            serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })?;
        log::debug!(
            "loaded {} entries from {}",
            entries.len(),
            self.path.display()
        );
        Ok(entries)
    }

    fn save_all(&self, entries: &[Entry]) -> Result<(), StoreError> {
        // Create parent directories if they don't exist
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(entries).map_err(StoreError::Serialize)?;
        fs::write(&self.path, json)?;
        log::debug!("saved {} entries to {}", entries.len(), self.path.display());
        Ok(())
    }
}

/// In-memory store for tests and throwaway previews
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<Vec<Entry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<Entry>) -> Self {
        Self {
            entries: RefCell::new(entries),
        }
    }
}

impl EntryStore for MemoryStore {
    fn load_all(&self) -> Result<Vec<Entry>, StoreError> {
        Ok(self.entries.borrow().clone())
    }

    fn save_all(&self, entries: &[Entry]) -> Result<(), StoreError> {
        *self.entries.borrow_mut() = entries.to_vec();
        Ok(())
    }
}
