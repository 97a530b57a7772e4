//! Part number canonicalization.
//!
//! Every matching path compares part numbers through this one function so
//! that `HT-195 27_33111` and `ht1952733111` land on the same key.

const STRIPPED: [char; 5] = ['-', '_', '.', '/', '\\'];

/// Normalize a free-text part number into a comparable key.
///
/// Uppercases the input, strips whitespace and the separator characters
/// `- _ . / \`. Returns `None` when nothing remains.
pub fn canonicalize(text: &str) -> Option<String> {
    let key: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && !STRIPPED.contains(c))
        .flat_map(char::to_uppercase)
        .collect();

    if key.is_empty() {
        None
    } else {
        Some(key)
    }
}

/// Canonicalize an optional field, treating blank input as absent.
pub fn canonicalize_opt(text: Option<&str>) -> Option<String> {
    text.and_then(canonicalize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_separators_and_uppercases() {
        assert_eq!(
            canonicalize("HT-195 27_33111"),
            canonicalize("ht1952733111")
        );
        assert_eq!(canonicalize("ht-195"), Some("HT195".to_string()));
        assert_eq!(canonicalize("a.b/c\\d_e"), Some("ABCDE".to_string()));
    }

    #[test]
    fn empty_and_separator_only_input_yields_none() {
        assert_eq!(canonicalize(""), None);
        assert_eq!(canonicalize("   "), None);
        assert_eq!(canonicalize("-_./\\"), None);
    }

    #[test]
    fn optional_wrapper() {
        assert_eq!(canonicalize_opt(None), None);
        assert_eq!(canonicalize_opt(Some("  ")), None);
        assert_eq!(canonicalize_opt(Some("abc-123")), Some("ABC123".to_string()));
    }
}
