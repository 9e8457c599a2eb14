use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::render::{escape_html, render_str};

/// Shown in place of an empty title.
pub const UNTITLED: &str = "(Untitled)";

/// Generates a fresh, opaque entry id.
pub fn new_entry_id() -> String {
    Uuid::new_v4().simple().to_string().to_uppercase()
}

/// A saved journal entry. Serialized with exactly these field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub content: String,
}

impl Entry {
    /// Create a new entry from a draft, with a fresh id
    pub fn new(draft: EntryDraft) -> Self {
        Self::with_id(new_entry_id(), draft)
    }

    pub fn with_id(id: impl Into<String>, draft: EntryDraft) -> Self {
        let EntryDraft {
            title,
            date,
            content,
        } = draft;
        Self {
            id: id.into(),
            title,
            date,
            content,
        }
    }

    /// Replace title, date and content, keeping the id
    pub fn apply(&mut self, draft: EntryDraft) {
        self.title = draft.title;
        self.date = draft.date;
        self.content = draft.content;
    }

    /// Title for list views; empty titles read as `(Untitled)`
    pub fn display_title(&self) -> &str {
        display_title(&self.title)
    }

    pub fn to_draft(&self) -> EntryDraft {
        EntryDraft {
            title: self.title.clone(),
            date: self.date,
            content: self.content.clone(),
        }
    }

    pub fn render(&self) -> RenderedEntry {
        RenderedEntry::new(&self.title, self.date, &self.content)
    }
}

/// Form data for an entry that may not have been saved yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub title: String,
    pub date: NaiveDate,
    pub content: String,
}

impl EntryDraft {
    /// Build a draft; the title is trimmed, content is kept verbatim
    pub fn new(title: &str, date: NaiveDate, content: impl Into<String>) -> Self {
        Self {
            title: title.trim().to_string(),
            date,
            content: content.into(),
        }
    }

    pub fn render(&self) -> RenderedEntry {
        RenderedEntry::new(&self.title, self.date, &self.content)
    }
}

/// An entry ready to be inserted into a page: the title as escaped text and
/// the content as rendered HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEntry {
    pub title_html: String,
    pub date: NaiveDate,
    pub content_html: String,
}

impl RenderedEntry {
    fn new(title: &str, date: NaiveDate, content: &str) -> Self {
        Self {
            title_html: escape_html(display_title(title)),
            date,
            content_html: render_str(content),
        }
    }
}

fn display_title(title: &str) -> &str {
    if title.is_empty() { UNTITLED } else { title }
}
