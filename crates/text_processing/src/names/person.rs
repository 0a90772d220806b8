//! Counterparty names for money events

use once_cell::sync::Lazy;

use echobiz_core::Fallbacks;

use super::{capitalize, first_match, NameGuard, NameMatch, PatternRule, DEVANAGARI_TOKEN, LATIN_TOKEN};
use crate::error::Result;
use crate::hindi::devanagari_digits_to_ascii;
use crate::lexicon::Lexicon;

/// (label, template); `{name}` is replaced by the script's name token
const LATIN_TEMPLATES: &[(&str, &str)] = &[
    ("from_name", r"(?i)\b(?:from|se|से)\s+({name})"),
    ("to_name", r"(?i)\b(?:to|ko|को)\s+({name})"),
    ("name_preposition", r"(?i)\b({name})\s+(?:se|ko|से|को)\b"),
    (
        "maine_verb_name",
        r"(?i)\bmaine\s+(?:[0-9]+(?:\.[0-9]+)?\s+)?(?:liya|paya|diya)\s+({name})",
    ),
    ("name_verb", r"(?i)\b({name})\s+(?:liya|paya|diya|को|से)\b"),
];

const DEVANAGARI_TEMPLATES: &[(&str, &str)] = &[
    ("devanagari_from_name", r"\bसे\s+({name})"),
    ("devanagari_to_name", r"\bको\s+({name})"),
    ("devanagari_name_preposition", r"\b({name})\s+(?:से|को)\b"),
    (
        "devanagari_maine_verb_name",
        r"\bमैंने\s+(?:[0-9]+(?:\.[0-9]+)?\s+)?(?:लिया|पाया|दिया)\s+({name})",
    ),
    ("devanagari_name_verb", r"\b({name})\s+(?:लिया|पाया|दिया)\b"),
];

fn compile(templates: &[(&'static str, &str)], token: &str) -> Result<Vec<PatternRule>> {
    templates
        .iter()
        .map(|&(label, template)| PatternRule::new(label, &template.replace("{name}", token)))
        .collect()
}

static LATIN_RULES: Lazy<Vec<PatternRule>> =
    Lazy::new(|| compile(LATIN_TEMPLATES, LATIN_TOKEN).unwrap());

static DEVANAGARI_RULES: Lazy<Vec<PatternRule>> =
    Lazy::new(|| compile(DEVANAGARI_TEMPLATES, DEVANAGARI_TOKEN).unwrap());

/// Finds who money was received from or paid to
///
/// Names are Latin-script by default. Devanagari names ("रमेश से") are only
/// captured after [`PersonNameExtractor::with_devanagari_names`].
#[derive(Debug, Clone)]
pub struct PersonNameExtractor {
    guard: NameGuard,
    default_name: String,
    devanagari: bool,
}

impl Default for PersonNameExtractor {
    fn default() -> Self {
        Self::new(&Lexicon::default(), &Fallbacks::default())
    }
}

impl PersonNameExtractor {
    pub fn new(lexicon: &Lexicon, fallbacks: &Fallbacks) -> Self {
        // Fillers only: "Diya" and "Mila" are names as well as keywords
        Self {
            guard: NameGuard::new(lexicon.fillers.iter().map(String::as_str)),
            default_name: fallbacks.counterparty.clone(),
            devanagari: false,
        }
    }

    /// Also try the Devanagari rule set after the Latin one
    pub fn with_devanagari_names(mut self) -> Self {
        self.devanagari = true;
        self
    }

    /// Matched name and the rule that found it
    pub fn find(&self, transcript: &str) -> Option<NameMatch> {
        let text = devanagari_digits_to_ascii(transcript);
        let extra: &[PatternRule] = if self.devanagari { &DEVANAGARI_RULES } else { &[] };
        let rules = LATIN_RULES.iter().chain(extra);

        first_match(rules, &text, |candidate| self.guard.accepts(candidate)).map(
            |(rule, capture)| NameMatch {
                value: capitalize(capture),
                rule,
            },
        )
    }

    /// Counterparty name, or the configured default when nothing matches
    pub fn extract(&self, transcript: &str) -> String {
        match self.find(transcript) {
            Some(found) => {
                tracing::debug!(rule = found.rule, name = %found.value, "Person name matched");
                found.value
            }
            None => {
                tracing::warn!(default = %self.default_name, "No person name found, using default");
                self.default_name.clone()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule_for(transcript: &str) -> Option<&'static str> {
        PersonNameExtractor::default().find(transcript).map(|m| m.rule)
    }

    #[test]
    fn test_english_prepositions() {
        let extractor = PersonNameExtractor::default();
        assert_eq!(extractor.extract("I received 500 from Ramesh"), "Ramesh");
        assert_eq!(extractor.extract("I paid 500 to suresh"), "Suresh");
        assert_eq!(rule_for("I received 500 from Ramesh"), Some("from_name"));
        assert_eq!(rule_for("I paid 500 to suresh"), Some("to_name"));
    }

    #[test]
    fn test_hinglish_postpositions() {
        let extractor = PersonNameExtractor::default();
        assert_eq!(extractor.extract("Maine 500 liya Ramesh se"), "Ramesh");
        assert_eq!(extractor.extract("500 diya Suresh ko"), "Suresh");
        assert_eq!(rule_for("500 diya Suresh ko"), Some("name_preposition"));
    }

    #[test]
    fn test_verb_rules() {
        let extractor = PersonNameExtractor::default();
        assert_eq!(extractor.extract("maine 200 diya mohan"), "Mohan");
        assert_eq!(rule_for("maine 200 diya mohan"), Some("maine_verb_name"));

        assert_eq!(extractor.extract("200 Mohan liya"), "Mohan");
        assert_eq!(rule_for("200 Mohan liya"), Some("name_verb"));
    }

    #[test]
    fn test_normalizes_case() {
        let extractor = PersonNameExtractor::default();
        assert_eq!(extractor.extract("received 10 FROM RAMESH"), "Ramesh");
    }

    #[test]
    fn test_fillers_are_skipped() {
        let extractor = PersonNameExtractor::default();
        // "the" is skipped and no other rule matches
        assert_eq!(extractor.extract("paid 500 to the"), "Unknown");
        // "from me" is skipped, the later "to Suresh" wins
        assert_eq!(extractor.extract("sent from me to Suresh"), "Suresh");
    }

    #[test]
    fn test_names_that_are_also_keywords() {
        let extractor = PersonNameExtractor::default();
        assert_eq!(extractor.extract("I paid 500 to Diya"), "Diya");
        assert_eq!(extractor.extract("received 500 from Mila"), "Mila");
        assert_eq!(extractor.extract("Diya ko 500 diya"), "Diya");
        assert_eq!(rule_for("Diya ko 500 diya"), Some("name_preposition"));
    }

    #[test]
    fn test_latin_names_are_ascii_only() {
        let extractor = PersonNameExtractor::default();
        // KELVIN SIGN and LONG S fold to 'k' and 's' under case-insensitive matching
        assert_eq!(extractor.extract("paid 500 to \u{212A}umar"), "Unknown");
        assert_eq!(extractor.extract("received 500 from \u{017F}uresh"), "Unknown");
        assert_eq!(extractor.extract("paid 500 to KUMAR"), "Kumar");
    }

    #[test]
    fn test_words_inside_longer_words_are_not_prepositions() {
        let extractor = PersonNameExtractor::default();
        assert_eq!(extractor.extract("got 500 tomorrow"), "Unknown");
    }

    #[test]
    fn test_default_when_nothing_matches() {
        let extractor = PersonNameExtractor::default();
        assert_eq!(extractor.extract("received 500"), "Unknown");
        assert_eq!(extractor.extract(""), "Unknown");
    }

    #[test]
    fn test_devanagari_names_are_opt_in() {
        let plain = PersonNameExtractor::default();
        assert_eq!(plain.extract("मैंने 500 लिया रमेश से"), "Unknown");

        let extended = PersonNameExtractor::default().with_devanagari_names();
        assert_eq!(extended.extract("मैंने 500 लिया रमेश से"), "रमेश");
        assert_eq!(extended.extract("500 दिया सुरेश को"), "सुरेश");
        assert_eq!(extended.extract("मैंने ३०० दिया मोहन"), "मोहन");
        // Latin names still come first
        assert_eq!(extended.extract("500 दिया Suresh को"), "Suresh");
    }

    #[test]
    fn test_custom_default() {
        let fallbacks = Fallbacks {
            counterparty: "Customer".to_string(),
            ..Fallbacks::default()
        };
        let extractor = PersonNameExtractor::new(&Lexicon::default(), &fallbacks);
        assert_eq!(extractor.extract("received 500"), "Customer");
    }
}
