//! # Inline Kinds
//!
//! Inline-specific types that own their syntax: the delimiter patterns and
//! the markup each one produces.
//!
//! ## Types
//!
//! - **`Strong`**: `**x**` / `__x__` → `<strong>`
//! - **`Emphasis`**: `*x*` / `_x_` → `<em>`
//! - **`Link`**: `[label](url)` → `<a href=… target="_blank" rel="noopener noreferrer">`

pub mod emphasis;
pub mod link;

pub use emphasis::{Emphasis, Strong};
pub use link::Link;
