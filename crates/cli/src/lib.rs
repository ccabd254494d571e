//! fontcss CLI library.

pub mod cli;

// Re-export from the core crate for convenience
pub use fontcss_core::{FontFace, FontFormat, GenerateOptions, Slant, Weight};
