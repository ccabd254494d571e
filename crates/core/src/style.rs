//! Weight, slant, and format inference from font file names.
//!
//! No font data is ever parsed; everything is derived from the file name
//! string alone.

/// CSS `font-style` keyword inferred from a filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slant {
    Normal,
    Italic,
    Oblique,
}

impl Slant {
    pub const fn css_value(self) -> &'static str {
        match self {
            Slant::Normal => "normal",
            Slant::Italic => "italic",
            Slant::Oblique => "oblique",
        }
    }

    pub const fn is_italic(self) -> bool {
        matches!(self, Slant::Italic)
    }
}

/// CSS `font-weight` inferred from a filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    Thin,
    ExtraLight,
    Light,
    Regular,
    Medium,
    SemiBold,
    Bold,
    ExtraBold,
    Black,
}

impl Weight {
    pub const fn css_value(self) -> &'static str {
        match self {
            Weight::Thin => "100",
            Weight::ExtraLight => "200",
            Weight::Light => "300",
            Weight::Regular => "400",
            Weight::Medium => "500",
            Weight::SemiBold => "600",
            Weight::Bold => "700",
            Weight::ExtraBold => "800",
            Weight::Black => "900",
        }
    }
}

/// Font container type, derived from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFormat {
    Woff,
    Woff2,
    TrueType,
    OpenType,
    EmbeddedOpenType,
    Svg,
}

impl FontFormat {
    /// Map a file extension (without the dot, any case) to a format.
    ///
    /// Returns `None` for unrecognized extensions; the file filter uses this
    /// same mapping, so every file that reaches stylesheet generation has a
    /// known format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "woff" => Some(Self::Woff),
            "woff2" => Some(Self::Woff2),
            "ttf" => Some(Self::TrueType),
            "otf" => Some(Self::OpenType),
            "eot" => Some(Self::EmbeddedOpenType),
            "svg" => Some(Self::Svg),
            _ => None,
        }
    }

    /// The CSS `format()` token.
    pub const fn css_token(self) -> &'static str {
        match self {
            Self::Woff => "woff",
            Self::Woff2 => "woff2",
            Self::TrueType => "truetype",
            Self::OpenType => "opentype",
            Self::EmbeddedOpenType => "embedded-opentype",
            Self::Svg => "svg",
        }
    }
}

/// Infer weight and slant from a font file stem (extension already stripped).
///
/// Case-insensitive substring matching, first match wins. Specific variants
/// must be tested before the generic keywords they contain: "extralight"
/// before "light", "extrabold" before "bold". Reordering those checks would
/// silently misclassify the extra weights.
pub fn infer_weight_and_slant(stem: &str) -> (Weight, Slant) {
    let lower = stem.to_lowercase();

    let weight = if lower.contains("thin") {
        Weight::Thin
    } else if lower.contains("extralight") || lower.contains("extra-light") {
        Weight::ExtraLight
    } else if lower.contains("light") {
        Weight::Light
    } else if lower.contains("regular") || lower.contains("normal") {
        Weight::Regular
    } else if lower.contains("medium") {
        Weight::Medium
    } else if lower.contains("semibold") || lower.contains("semi-bold") {
        Weight::SemiBold
    } else if lower.contains("extrabold") || lower.contains("extra-bold") || lower.contains("heavy")
    {
        Weight::ExtraBold
    } else if lower.contains("bold") {
        Weight::Bold
    } else if lower.contains("black") {
        Weight::Black
    } else {
        Weight::Regular
    };

    let slant = if lower.contains("italic") {
        Slant::Italic
    } else if lower.contains("oblique") {
        Slant::Oblique
    } else {
        Slant::Normal
    };

    (weight, slant)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_bold() {
        let (weight, slant) = infer_weight_and_slant("MyFont-Bold");
        assert_eq!(weight, Weight::Bold);
        assert_eq!(slant, Slant::Normal);
    }

    #[test]
    fn test_infer_extra_bold_italic() {
        let (weight, slant) = infer_weight_and_slant("MyFont-ExtraBoldItalic");
        assert_eq!(weight, Weight::ExtraBold);
        assert_eq!(slant, Slant::Italic);
        assert!(slant.is_italic());
    }

    #[test]
    fn test_infer_extra_light_before_light() {
        let (weight, _) = infer_weight_and_slant("MyFont-ExtraLight");
        assert_eq!(weight, Weight::ExtraLight);
        let (weight, _) = infer_weight_and_slant("MyFont-Extra-Light");
        assert_eq!(weight, Weight::ExtraLight);
        let (weight, _) = infer_weight_and_slant("MyFont-Light");
        assert_eq!(weight, Weight::Light);
    }

    #[test]
    fn test_infer_semi_bold_before_bold() {
        let (weight, _) = infer_weight_and_slant("myfont-semibold");
        assert_eq!(weight, Weight::SemiBold);
    }

    #[test]
    fn test_infer_heavy() {
        let (weight, _) = infer_weight_and_slant("MyFont-Heavy");
        assert_eq!(weight, Weight::ExtraBold);
    }

    #[test]
    fn test_infer_default_weight() {
        let (weight, slant) = infer_weight_and_slant("MyFont");
        assert_eq!(weight, Weight::Regular);
        assert_eq!(slant, Slant::Normal);
        assert_eq!(weight.css_value(), "400");
    }

    #[test]
    fn test_infer_oblique() {
        let (_, slant) = infer_weight_and_slant("MyFont-LightOblique");
        assert_eq!(slant, Slant::Oblique);
    }

    #[test]
    fn test_format_case_insensitive() {
        assert_eq!(FontFormat::from_extension("WOFF2"), Some(FontFormat::Woff2));
        assert_eq!(FontFormat::from_extension("Ttf"), Some(FontFormat::TrueType));
    }

    #[test]
    fn test_format_tokens() {
        assert_eq!(FontFormat::from_extension("woff").unwrap().css_token(), "woff");
        assert_eq!(FontFormat::from_extension("woff2").unwrap().css_token(), "woff2");
        assert_eq!(FontFormat::from_extension("ttf").unwrap().css_token(), "truetype");
        assert_eq!(FontFormat::from_extension("otf").unwrap().css_token(), "opentype");
        assert_eq!(
            FontFormat::from_extension("eot").unwrap().css_token(),
            "embedded-opentype"
        );
        assert_eq!(FontFormat::from_extension("svg").unwrap().css_token(), "svg");
    }

    #[test]
    fn test_format_unrecognized() {
        assert_eq!(FontFormat::from_extension("txt"), None);
        assert_eq!(FontFormat::from_extension(""), None);
    }
}
