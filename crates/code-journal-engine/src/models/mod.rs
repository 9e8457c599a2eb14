pub mod entry;
pub mod journal;

pub use entry::{Entry, EntryDraft, RenderedEntry, UNTITLED, new_entry_id};
pub use journal::{Journal, JournalError};
