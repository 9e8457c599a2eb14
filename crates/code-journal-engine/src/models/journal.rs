use chrono::NaiveDate;

use super::entry::{Entry, EntryDraft, RenderedEntry};
use crate::io::{EntryStore, StoreError};

pub const WELCOME_TITLE: &str = "Hello Journal!";

const WELCOME_CONTENT: &str = "### Markdown Guide

A lightweight Markdown converter for your notes.

- Headings with # ## ###
- Unordered lists with - or *
- Ordered lists with 1. 2. 3.
- **Bold** with **text**, *italics* with *text*
- Links [text](https://example.com)

```rust
// fenced code starts and ends on a line of its own
fn main() {}
```";

const SECOND_TITLE: &str = "Second entry";
const SECOND_CONTENT: &str = "Testing the second entry.";

#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    #[error("Entry not found: {0}")]
    EntryNotFound(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Application state around a store: the entries plus which one is open.
///
/// The open entry is explicit state owned here; nothing else tracks it.
#[derive(Debug)]
pub struct Journal<S: EntryStore> {
    store: S,
    current: Option<String>,
}

impl<S: EntryStore> Journal<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            current: None,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Id of the open entry, if any
    pub fn current_id(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Write the starter entries when the store is empty.
    ///
    /// Returns whether anything was written.
    pub fn seed_if_empty(&self, today: NaiveDate) -> Result<bool, JournalError> {
        if !self.store.load_all()?.is_empty() {
            return Ok(false);
        }

        let seeded = [
            Entry::new(EntryDraft::new(WELCOME_TITLE, today, WELCOME_CONTENT)),
            Entry::new(EntryDraft::new(SECOND_TITLE, today, SECOND_CONTENT)),
        ];
        self.store.save_all(&seeded)?;
        log::info!("seeded empty journal with {} entries", seeded.len());
        Ok(true)
    }

    pub fn entries(&self) -> Result<Vec<Entry>, JournalError> {
        Ok(self.store.load_all()?)
    }

    pub fn get(&self, id: &str) -> Result<Entry, JournalError> {
        self.store
            .load_all()?
            .into_iter()
            .find(|e| e.id == id)
            .ok_or_else(|| JournalError::EntryNotFound(id.to_string()))
    }

    /// The open entry, or `None` when nothing is open or it has since been removed
    pub fn current_entry(&self) -> Result<Option<Entry>, JournalError> {
        let Some(id) = self.current.as_deref() else {
            return Ok(None);
        };
        Ok(self.store.load_all()?.into_iter().find(|e| e.id == id))
    }

    /// Save a draft.
    ///
    /// Overwrites the open entry when it still exists; otherwise appends a
    /// new entry and opens it.
    pub fn save(&mut self, draft: EntryDraft) -> Result<Entry, JournalError> {
        let mut entries = self.store.load_all()?;

        let existing = self
            .current
            .as_deref()
            .and_then(|id| entries.iter_mut().find(|e| e.id == id));

        let saved = match existing {
            Some(entry) => {
                entry.apply(draft);
                log::debug!("updated entry {}", entry.id);
                entry.clone()
            }
            None => {
                let entry = Entry::new(draft);
                log::debug!("created entry {}", entry.id);
                entries.push(entry.clone());
                entry
            }
        };

        self.store.save_all(&entries)?;
        self.current = Some(saved.id.clone());
        Ok(saved)
    }

    /// Open an entry and render it for display
    pub fn open(&mut self, id: &str) -> Result<RenderedEntry, JournalError> {
        let entry = self.get(id)?;
        self.current = Some(entry.id.clone());
        Ok(entry.render())
    }

    /// Draft for editing the open entry, if there is one
    pub fn edit_current(&self) -> Result<Option<EntryDraft>, JournalError> {
        Ok(self.current_entry()?.map(|e| e.to_draft()))
    }

    /// Render a draft without saving it
    pub fn preview(&self, draft: &EntryDraft) -> RenderedEntry {
        draft.render()
    }

    /// Clear the selection so the next save creates a new entry
    pub fn start_new(&mut self) {
        self.current = None;
    }

    /// Delete the open entry. Returns `false` when nothing is open.
    pub fn delete_current(&mut self) -> Result<bool, JournalError> {
        let Some(id) = self.current.take() else {
            return Ok(false);
        };

        let mut entries = self.store.load_all()?;
        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() == before {
            log::warn!("open entry {id} was already gone");
        }
        self.store.save_all(&entries)?;
        Ok(true)
    }

    pub fn delete(&mut self, id: &str) -> Result<(), JournalError> {
        self.open(id)?;
        self.delete_current()?;
        Ok(())
    }
}
