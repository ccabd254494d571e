//! fontcss core - generates CDN-backed `@font-face` stylesheets from a
//! directory tree of font family folders.

pub mod config;
pub mod css;
pub mod error;
pub mod naming;
pub mod pipeline;
pub mod scan;
pub mod style;

pub use css::{FontFace, stylesheet};
pub use error::{Error, Result};
pub use pipeline::{GenerateOptions, clean, generate};
pub use style::{FontFormat, Slant, Weight, infer_weight_and_slant};
