//! # Line Pass
//!
//! Two-phase line processing over a text segment (fenced code has already
//! been lifted out).
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` (heading, list item, blank, plain) from local facts only
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` runs the list-run
//!    state machine, rendering headings and wrapping runs of same-family list
//!    items in one container
//!
//! ## Modules
//!
//! - **`kinds`**: block-specific types owning their syntax (CodeFence, Heading, ListItem)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine (`None` / `InList(family)`)
//!
//! ## Key Invariants
//!
//! - Lists are flat: indentation never nests
//! - A run only continues while consecutive lines share a family
//! - Line order is preserved

pub mod builder;
pub mod classify;
pub mod kinds;

pub use builder::{BlockBuilder, RunState};
pub use classify::{LineClass, MarkdownLineClassifier};

/// Runs the line pass over a text segment and returns the rewritten text.
pub fn build_blocks(text: &str) -> String {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for line in text.split('\n') {
        let lc = classifier.classify(line);
        builder.push(&lc);
    }

    builder.finish().join("\n")
}
