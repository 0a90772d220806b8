//! Name extraction
//!
//! Person names (money path) and item names (inventory path) are both pulled
//! out with an ordered list of regex rules. Each rule has one capture group.
//! Rules are tried in order, every match of a rule is considered, and the
//! first capture that the guard accepts wins. The person guard turns away
//! captures that are exactly a filler word. The item guard also turns away
//! unit words and classification keywords.

mod item;
mod person;

pub use item::ItemNameExtractor;
pub use person::PersonNameExtractor;

use regex::Regex;
use std::collections::HashSet;

use crate::error::Result;
use crate::hindi::is_devanagari;
use crate::matching::fold_case;

/// Latin-script name token
///
/// Case folding is switched off inside the token so that `(?i)` patterns do
/// not let U+212A or U+017F through.
pub(crate) const LATIN_TOKEN: &str = r"(?-i:[A-Za-z]+)";

/// Devanagari letters and signs, without dandas and digits
pub(crate) const DEVANAGARI_TOKEN: &str = r"[\x{0900}-\x{0963}\x{0971}-\x{097F}]+";

/// A single capture rule
#[derive(Debug, Clone)]
pub struct PatternRule {
    label: &'static str,
    regex: Regex,
}

impl PatternRule {
    pub fn new(label: &'static str, pattern: &str) -> Result<Self> {
        Ok(Self {
            label,
            regex: Regex::new(pattern)?,
        })
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// First group-1 capture accepted by `accept`, scanning every match
    pub fn first_capture<'t>(&self, text: &'t str, accept: impl Fn(&str) -> bool) -> Option<&'t str> {
        self.regex
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .find(|candidate| accept(*candidate))
    }
}

/// A name plus the rule that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameMatch {
    pub value: String,
    pub rule: &'static str,
}

/// Run `rules` in order and return the first accepted capture
pub(crate) fn first_match<'t, 'r>(
    rules: impl IntoIterator<Item = &'r PatternRule>,
    text: &'t str,
    accept: impl Fn(&str) -> bool,
) -> Option<(&'static str, &'t str)> {
    rules.into_iter().find_map(|rule| {
        rule.first_capture(text, &accept)
            .map(|capture| (rule.label(), capture))
    })
}

/// Words that may never be returned as a name
#[derive(Debug, Clone, Default)]
pub(crate) struct NameGuard {
    rejected: HashSet<String>,
}

impl NameGuard {
    pub(crate) fn new<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            rejected: words.into_iter().map(fold_case).collect(),
        }
    }

    pub(crate) fn accepts(&self, candidate: &str) -> bool {
        let candidate = candidate.trim();
        !candidate.is_empty() && !self.rejected.contains(&fold_case(candidate))
    }
}

/// Upper-case the first character and lower-case the rest
///
/// Devanagari has no case, so Devanagari names pass through unchanged.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Drop punctuation (dandas included), keeping word characters, Devanagari
/// signs and inner spaces
pub(crate) fn strip_punctuation(name: &str) -> String {
    let kept: String = name
        .chars()
        .filter(|&c| {
            let devanagari_sign = is_devanagari(c) && !matches!(c, '\u{0964}' | '\u{0965}');
            c.is_alphanumeric() || c == '_' || c.is_whitespace() || devanagari_sign
        })
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}
