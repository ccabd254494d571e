//! `@font-face` rule construction and rendering.

use std::path::Path;

use crate::naming::encode_url_segment;
use crate::style::{FontFormat, Slant, Weight, infer_weight_and_slant};

/// One `@font-face` rule for a single font file in a family folder.
#[derive(Debug, Clone)]
pub struct FontFace {
    /// CSS `font-family` value: the trimmed folder name.
    pub family: String,
    /// Full CDN URL of the font file.
    pub url: String,
    pub format: FontFormat,
    pub weight: Weight,
    pub slant: Slant,
}

impl FontFace {
    /// Build the rule for one file, inferring weight and slant from the file
    /// stem and the URL from the percent-encoded folder and file names.
    pub fn new(base_url: &str, folder_name: &str, file_name: &str, format: FontFormat) -> Self {
        let stem = Path::new(file_name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(file_name);
        let (weight, slant) = infer_weight_and_slant(stem);
        let url = format!(
            "{base_url}/{}/{}",
            encode_url_segment(folder_name),
            encode_url_segment(file_name)
        );

        Self {
            family: folder_name.trim().to_string(),
            url,
            format,
            weight,
            slant,
        }
    }

    /// Render the rule followed by a single blank line.
    pub fn render(&self) -> String {
        format!(
            "@font-face {{\n  \
             font-family: '{}';\n  \
             src: url('{}') format('{}');\n  \
             font-weight: {};\n  \
             font-style: {};\n  \
             font-display: swap;\n\
             }}\n\n",
            self.family,
            self.url,
            self.format.css_token(),
            self.weight.css_value(),
            self.slant.css_value(),
        )
    }
}

/// Concatenate rules into one stylesheet, in the given order.
pub fn stylesheet(faces: &[FontFace]) -> String {
    faces.iter().map(FontFace::render).collect()
}
