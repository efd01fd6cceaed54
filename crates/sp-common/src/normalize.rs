use std::collections::HashSet;

/// Placeholder some profiles use to say "nothing to report".
const NONE_PLACEHOLDER: &str = "none";

/// Splits a comma separated attribute into lower-cased tags.
///
/// Pieces are trimmed; empty pieces and the literal `none` (any case) are
/// dropped. Input order is kept and duplicates are not removed here.
/// Applying the function to its own joined output yields the same tags.
pub fn parse_tag_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_lowercase)
        .filter(|piece| piece != NONE_PLACEHOLDER)
        .collect()
}

/// Same as [`parse_tag_list`] but collapsed into a set for overlap checks.
pub fn tag_set(raw: &str) -> HashSet<String> {
    parse_tag_list(raw).into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn drops_none_and_empty_pieces() {
        assert_eq!(
            parse_tag_list("AI, Machine Learning, None, "),
            vec!["ai".to_string(), "machine learning".to_string()]
        );
    }

    #[test]
    fn empty_input_yields_no_tags() {
        assert!(parse_tag_list("").is_empty());
        assert!(parse_tag_list("  ,  , ").is_empty());
        assert!(parse_tag_list("NONE").is_empty());
    }

    #[test]
    fn keeps_order_and_duplicates() {
        assert_eq!(
            parse_tag_list("Rust,python , rust"),
            vec!["rust".to_string(), "python".to_string(), "rust".to_string()]
        );
        assert_eq!(tag_set("Rust,python , rust").len(), 2);
    }

    #[test]
    fn none_only_matches_whole_piece() {
        assert_eq!(parse_tag_list("nonexistent, none of these"), vec![
            "nonexistent".to_string(),
            "none of these".to_string()
        ]);
    }

    proptest! {
        #[test]
        fn normalization_is_idempotent(raw in "[ a-zA-Z,]{0,40}") {
            let once = parse_tag_list(&raw);
            let twice = parse_tag_list(&once.join(","));
            prop_assert_eq!(once, twice);
        }
    }
}
