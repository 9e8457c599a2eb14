//! # Inline Pass
//!
//! Text-level substitutions applied after the line pass, within lines and
//! never across them.
//!
//! ## Modules
//!
//! - **`kinds`**: inline types owning their delimiters (Strong, Emphasis, Link)
//! - **`parser`**: `apply_inline()` runs the passes in precedence order
//!
//! ## Pass Order
//!
//! Strong runs before emphasis so `**x**` is not consumed as two `*`
//! delimiters; links run last so the anchor's own attributes
//! (`target="_blank"`) are never seen by the emphasis pass.

pub mod kinds;
pub mod parser;

pub use parser::apply_inline;
