//! Stylesheet file naming and URL escaping.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left verbatim by JavaScript's `encodeURIComponent`, which the
/// CDN URLs were originally built with.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode one path segment of a font URL.
pub fn encode_url_segment(segment: &str) -> String {
    utf8_percent_encode(segment, URI_COMPONENT).to_string()
}

/// Stylesheet filename for a family folder: capitalize the first character of
/// each whitespace-separated word, join without a separator, append `.css`.
///
/// "Open Sans" -> "OpenSans.css"; "opensans" -> "Opensans.css". Not
/// injective; characters without a case pass through unchanged.
pub fn stylesheet_file_name(folder_name: &str) -> String {
    let mut name = String::new();
    for word in folder_name.trim().split_whitespace() {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            name.extend(first.to_uppercase());
            name.push_str(chars.as_str());
        }
    }
    name.push_str(".css");
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_multi_word() {
        assert_eq!(stylesheet_file_name("Open Sans"), "OpenSans.css");
    }

    #[test]
    fn test_file_name_single_word() {
        assert_eq!(stylesheet_file_name("opensans"), "Opensans.css");
    }

    #[test]
    fn test_file_name_trims_and_collapses_whitespace() {
        assert_eq!(stylesheet_file_name("  fira   code  "), "FiraCode.css");
    }

    #[test]
    fn test_file_name_caseless_first_char() {
        assert_eq!(stylesheet_file_name("2up mono"), "2upMono.css");
    }

    #[test]
    fn test_encode_spaces_and_unicode() {
        assert_eq!(encode_url_segment("Open Sans"), "Open%20Sans");
        assert_eq!(encode_url_segment("Ubuntü"), "Ubunt%C3%BC");
    }

    #[test]
    fn test_encode_keeps_unreserved_marks() {
        // encodeURIComponent leaves - _ . ! ~ * ' ( ) alone.
        assert_eq!(encode_url_segment("A-B_c.d!e~f*g'h(i)"), "A-B_c.d!e~f*g'h(i)");
        assert_eq!(encode_url_segment("a/b&c"), "a%2Fb%26c");
    }
}
