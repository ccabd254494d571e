//! Configuration constants for stylesheet generation.

/// Default output directory name. Generated stylesheets land here, and the
/// directory is excluded from family scanning.
pub const DEFAULT_OUTPUT_DIR: &str = "css";

/// Default CDN root prefixed to every generated font URL.
pub const DEFAULT_BASE_URL: &str = "https://cdn.jsdelivr.net/gh/asboy2035/fonts@master";
