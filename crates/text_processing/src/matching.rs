//! Keyword containment
//!
//! All keyword matching goes through here. Matching is case-folded substring
//! containment, not word matching: a keyword inside a longer word counts as
//! a hit ("add" matches "address"). Hinglish spelling variants rely on this.

/// Case-fold text for matching
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// First keyword (in list order) contained in `folded`
///
/// `folded` and `keywords` must already be case-folded.
pub fn contains_any<'k>(folded: &str, keywords: &'k [String]) -> Option<&'k str> {
    keywords
        .iter()
        .map(String::as_str)
        .find(|keyword| !keyword.is_empty() && folded.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_first_keyword_in_list_order() {
        let keywords = words(&["sold", "sell"]);
        assert_eq!(contains_any("sell it, sold it", &keywords), Some("sold"));
    }

    #[test]
    fn test_substring_collisions_are_hits() {
        let keywords = words(&["add"]);
        assert_eq!(contains_any(&fold_case("New ADDRESS"), &keywords), Some("add"));
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(contains_any("", &words(&["got"])), None);
        assert_eq!(contains_any("anything", &words(&[""])), None);
        assert_eq!(contains_any("anything", &[]), None);
    }

    #[test]
    fn test_devanagari_containment() {
        let keywords = words(&["लिया"]);
        assert_eq!(contains_any("मैंने 500 लिया रमेश से", &keywords), Some("लिया"));
    }
}
