/// Keeps the ordered subsequence of review texts that still contain
/// visible characters after trimming. Kept entries are preserved
/// byte-for-byte; only empty and whitespace-only entries are dropped.
pub fn filter_review_texts(texts: &[String]) -> Vec<&str> {
    texts
        .iter()
        .map(String::as_str)
        .filter(|text| !text.trim().is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(filter_review_texts(&[]).is_empty());
    }

    #[test]
    fn whitespace_only_entries_are_dropped() {
        let whitespace_variations = vec![
            "", " ", "  ", "\t", "\n", "\r\n", " \t \n ", "\t\t\t",
        ];
        let texts: Vec<String> = whitespace_variations.iter().map(|s| s.to_string()).collect();

        assert!(
            filter_review_texts(&texts).is_empty(),
            "should drop all whitespace variations"
        );
    }

    #[test]
    fn order_is_preserved() {
        let texts = vec![
            "first".to_string(),
            "   ".to_string(),
            "second".to_string(),
            "".to_string(),
            "third".to_string(),
        ];

        assert_eq!(filter_review_texts(&texts), vec!["first", "second", "third"]);
    }

    #[test]
    fn kept_entries_are_not_trimmed() {
        let texts = vec!["  padded review  ".to_string()];
        assert_eq!(filter_review_texts(&texts), vec!["  padded review  "]);
    }
}
