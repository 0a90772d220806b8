//! Item names for stock events

use echobiz_core::Fallbacks;

use super::{capitalize, first_match, strip_punctuation, NameGuard, NameMatch, PatternRule};
use crate::error::Result;
use crate::hindi::devanagari_digits_to_ascii;
use crate::lexicon::Lexicon;
use crate::matching::fold_case;

/// Latin or Devanagari item token
const ITEM_TOKEN: &str = r"(?-i:[A-Za-z\x{0900}-\x{0963}\x{0971}-\x{097F}]+)";

/// Orderings of {verb or location, number, unit, item}, most specific first
const TEMPLATES: &[(&str, &str)] = &[
    (
        "verb_then_item",
        r"(?i)\b(?:add|stock|restock|jodo|जोड़ो|स्टॉक)\s+(?:[0-9]+\s+)?({item})",
    ),
    (
        "item_number_verb",
        r"(?i)\b({item})\s+[0-9]+\s+(?:add|stock|kharida|जोड़|खरीदा)",
    ),
    (
        "location_then_item",
        r"(?i)\b(?:inventory|stock|स्टॉक)\s+(?:me|mein|में)\s+({item})",
    ),
    ("number_unit_item", r"(?i)[0-9]+\s*(?:{unit})\s+({item})"),
    ("item_number_unit", r"(?i)\b({item})\s+[0-9]+\s*(?:{unit})\b"),
    (
        "sale_then_item",
        r"(?i)\b(?:sell|sold|becha|bech|nikala|reduce|बेचा|निकाला)\s+(?:[0-9]+\s*)?(?:(?:{unit})\s+)?({item})",
    ),
    ("number_item", r"(?i)[0-9]+\s+({item})"),
];

/// Finds what was stocked or sold
///
/// Patterns are tried first; when none yields a usable word the transcript is
/// scanned for a known item name, and failing that the default is used.
#[derive(Debug, Clone)]
pub struct ItemNameExtractor {
    rules: Vec<PatternRule>,
    guard: NameGuard,
    items: Vec<String>,
    units: Vec<String>,
    default_name: String,
}

impl ItemNameExtractor {
    pub fn new(lexicon: &Lexicon, fallbacks: &Fallbacks) -> Result<Self> {
        let units = unit_alternation(&lexicon.units);
        let rules = TEMPLATES
            .iter()
            .map(|&(label, template)| {
                let pattern = template.replace("{item}", ITEM_TOKEN).replace("{unit}", &units);
                PatternRule::new(label, &pattern)
            })
            .collect::<Result<Vec<_>>>()?;

        let words = lexicon
            .units
            .iter()
            .chain(&lexicon.fillers)
            .map(String::as_str)
            .chain(lexicon.all_keywords());

        Ok(Self {
            rules,
            guard: NameGuard::new(words),
            items: lexicon.items.clone(),
            units: lexicon.units.clone(),
            default_name: fallbacks.item.clone(),
        })
    }

    /// Matched item and the rule (or `"lexicon"`) that found it
    pub fn find(&self, transcript: &str) -> Option<NameMatch> {
        let text = devanagari_digits_to_ascii(transcript);

        if let Some((rule, capture)) =
            first_match(&self.rules, &text, |candidate| self.guard.accepts(candidate))
        {
            if let Some(value) = self.finish(capture) {
                return Some(NameMatch { value, rule });
            }
        }

        let folded = fold_case(&text);
        self.items
            .iter()
            .find(|item| !item.is_empty() && folded.contains(item.as_str()))
            .and_then(|item| self.finish(item))
            .map(|value| NameMatch {
                value,
                rule: "lexicon",
            })
    }

    /// Item name, or the configured default when nothing matches
    pub fn extract(&self, transcript: &str) -> String {
        match self.find(transcript) {
            Some(found) => {
                tracing::debug!(rule = found.rule, item = %found.value, "Item name matched");
                found.value
            }
            None => {
                tracing::warn!(default = %self.default_name, "No item name found, using default");
                self.default_name.clone()
            }
        }
    }

    /// Strip, capitalise and make sure a unit word never comes out as an item
    fn finish(&self, raw: &str) -> Option<String> {
        let cleaned = strip_punctuation(raw);
        if cleaned.is_empty() || self.is_unit(&cleaned) {
            return None;
        }
        Some(capitalize(&cleaned))
    }

    fn is_unit(&self, word: &str) -> bool {
        let word = fold_case(word);
        self.units.iter().any(|unit| *unit == word)
    }
}

/// Regex alternation of unit words, longest first
fn unit_alternation(units: &[String]) -> String {
    let mut sorted: Vec<&str> = units
        .iter()
        .map(String::as_str)
        .filter(|unit| !unit.is_empty())
        .collect();
    sorted.sort_by_key(|unit| std::cmp::Reverse(unit.chars().count()));
    sorted
        .into_iter()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> ItemNameExtractor {
        ItemNameExtractor::new(&Lexicon::default(), &Fallbacks::default()).unwrap()
    }

    fn found(transcript: &str) -> Option<(String, &'static str)> {
        extractor().find(transcript).map(|m| (m.value, m.rule))
    }

    #[test]
    fn test_verb_then_item() {
        assert_eq!(
            found("Add 10 atta to stock"),
            Some(("Atta".to_string(), "verb_then_item"))
        );
        assert_eq!(found("restock sugar"), Some(("Sugar".to_string(), "verb_then_item")));
    }

    #[test]
    fn test_item_number_verb() {
        assert_eq!(
            found("chawal 5 kharida"),
            Some(("Chawal".to_string(), "item_number_verb"))
        );
    }

    #[test]
    fn test_location_then_item() {
        // "stock me" and "add karo" are skipped by the guard
        assert_eq!(
            found("stock me besan add karo"),
            Some(("Besan".to_string(), "location_then_item"))
        );
    }

    #[test]
    fn test_units_are_never_items() {
        assert_eq!(
            found("2 kg rice sold"),
            Some(("Rice".to_string(), "number_unit_item"))
        );
        assert_eq!(
            found("2 kg atta added to stock"),
            Some(("Atta".to_string(), "number_unit_item"))
        );
        assert_eq!(
            found("5 packets biscuit"),
            Some(("Biscuit".to_string(), "number_unit_item"))
        );
    }

    #[test]
    fn test_item_number_unit() {
        assert_eq!(
            found("sugar 3 kg aaya"),
            Some(("Sugar".to_string(), "item_number_unit"))
        );
    }

    #[test]
    fn test_sale_then_item() {
        assert_eq!(found("sold oil"), Some(("Oil".to_string(), "sale_then_item")));
        assert_eq!(
            found("becha namak"),
            Some(("Namak".to_string(), "sale_then_item"))
        );
        // With a number and unit the earlier ordering rule gets there first
        assert_eq!(
            found("sold 2 bottle oil"),
            Some(("Oil".to_string(), "number_unit_item"))
        );
    }

    #[test]
    fn test_devanagari_item() {
        assert_eq!(
            found("10 आटा स्टॉक में जोड़ो"),
            Some(("आटा".to_string(), "number_item"))
        );
        assert_eq!(
            found("२ किलो चावल बेचा"),
            Some(("चावल".to_string(), "number_unit_item"))
        );
    }

    #[test]
    fn test_lexicon_fallback() {
        // Every pattern capture here is a unit, filler or keyword
        assert_eq!(
            found("bought 5 packets of maggi"),
            Some(("Maggi".to_string(), "lexicon"))
        );
    }

    #[test]
    fn test_default_item() {
        let extractor = extractor();
        assert_eq!(extractor.extract("stock"), "Item");
        assert_eq!(extractor.extract("add 3 kg"), "Item");
        assert_eq!(extractor.extract(""), "Item");
    }

    #[test]
    fn test_unit_alternation_prefers_longer_units() {
        let units = vec!["kg".to_string(), "kgs".to_string(), "k.g".to_string()];
        assert_eq!(unit_alternation(&units), r"kgs|k\.g|kg");
    }
}
