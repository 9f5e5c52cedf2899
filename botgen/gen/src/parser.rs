//! Literal extraction from schema descriptions.
//!
//! Some value sets exist only in prose, e.g. the `Sticker.type` description:
//! `Type of the sticker, currently one of “regular”, “mask”, “custom_emoji”.`

use std::sync::LazyLock;

use regex::Regex;

/// A literal enclosed in straight (`"..."`) or typographic (`“...”`) quotes.
static QUOTED_LITERAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"["“]([^"“”]*)["”]"#).expect("Invalid quoted literal regex")
});

/// Extracts every quoted literal from a description, left to right.
///
/// Repeated literals are returned as often as they occur.
///
/// ## Examples
///
/// ```
/// use botgen_gen::parser::extract_quoted_values;
///
/// assert_eq!(
///     extract_quoted_values(r#"Type of the sticker, currently one of "regular", "mask""#),
///     vec!["regular", "mask"]
/// );
/// assert_eq!(
///     extract_quoted_values("one of “regular”, “custom_emoji”"),
///     vec!["regular", "custom_emoji"]
/// );
/// assert!(extract_quoted_values("no literals here").is_empty());
/// ```
pub fn extract_quoted_values(description: &str) -> Vec<&str> {
    QUOTED_LITERAL_RE
        .captures_iter(description)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}
