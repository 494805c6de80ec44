//! Rotate 8x8 sprite literals in source files from the usual horizontal
//! (row-per-byte) layout to the vertical (column-per-byte) layout.

pub mod hex;
pub mod rewrite;
pub mod sprite;

pub use rewrite::{rewrite, Rewrite};
