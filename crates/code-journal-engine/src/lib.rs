pub mod io;
pub mod models;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use models::*;
pub use render::{escape_html, render, render_str};
