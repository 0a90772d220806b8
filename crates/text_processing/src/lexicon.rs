//! Keyword, item and unit tables
//!
//! Built-in tables cover English, Devanagari Hindi and Hinglish. A lexicon
//! can also be loaded from YAML; any list left out of the file keeps its
//! built-in contents.
//!
//! ```yaml
//! credit: ["received", "liya", "लिया"]
//! items: ["atta", "chawal"]
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, TextProcessingError};
use crate::matching::fold_case;

const STOCK_ADD: &[&str] = &[
    "add", "stock", "buy", "bought", "purchase", "restock", "kharid", "khareed", "jodo",
    "jod diya", "daalo", "daala", "maal aaya", "स्टॉक", "जोड़", "जोड", "जोड़ो", "जोड़ें",
    "खरीद", "माल आया",
];

const STOCK_REDUCE: &[&str] = &[
    "reduce", "sell", "sold", "remove", "bech", "nikal", "ghata", "khatam", "बेच", "बेचा",
    "बेची", "निकाल", "निकाला", "घटा", "खत्म",
];

const CREDIT: &[&str] = &[
    "received", "receive", "got", "took", "credit", "liya", "mila", "aaya", "paya", "लिया",
    "मिला", "मिले", "आया", "पाया", "प्राप्त",
];

const DEBIT: &[&str] = &[
    "paid", "pay", "gave", "give", "sent", "debit", "diya", "diye", "bheja", "chukaya", "दिया",
    "दिए", "भेजा", "चुकाया",
];

const ITEMS: &[&str] = &[
    "atta", "aata", "rice", "chawal", "dal", "daal", "sugar", "cheeni", "chini", "salt",
    "namak", "oil", "tel", "ghee", "milk", "doodh", "tea", "chai", "coffee", "soap", "sabun",
    "biscuit", "bread", "egg", "anda", "paneer", "butter", "besan", "maida", "sooji", "haldi",
    "mirchi", "jeera", "masala", "poha", "maggi", "noodles", "detergent", "shampoo",
    "toothpaste", "chips", "namkeen", "onion", "pyaz", "potato", "aloo", "tomato", "tamatar",
    "आटा", "चावल", "दाल", "चीनी", "नमक", "तेल", "घी", "दूध", "चाय", "साबुन", "बिस्कुट",
    "अंडा", "प्याज", "आलू",
];

const UNITS: &[&str] = &[
    "kilogram", "kilograms", "kilo", "kilos", "kgs", "kg", "gram", "grams", "gm", "gms",
    "litre", "litres", "liter", "liters", "ltr", "ml", "packet", "packets", "pack", "packs",
    "bag", "bags", "bori", "boriya", "piece", "pieces", "pcs", "pc", "bottle", "bottles", "box",
    "boxes", "dozen", "dabba", "dabbe", "dibba", "thaila", "thaile", "किलो", "ग्राम", "लीटर",
    "पैकेट", "थैला", "बोरी", "डिब्बा", "बोतल", "पीस", "दर्जन",
];

const FILLERS: &[&str] = &[
    "a", "an", "the", "to", "from", "in", "into", "on", "of", "for", "and", "by", "i", "me",
    "my", "we", "it", "is", "was", "mein", "main", "maine", "mujhe", "humne", "usne",
    "unko", "se", "ko", "ka", "ki", "ke", "hai", "tha", "rs", "rupees", "rupaye", "rupay",
    "kar", "karo", "kiya", "kiye", "do", "hua", "gaya", "please", "में", "से", "को", "का",
    "की", "के", "है", "था", "मैंने", "मुझे", "रुपये", "कर", "करो", "किया", "दो",
];

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn default_stock_add() -> Vec<String> {
    owned(STOCK_ADD)
}

fn default_stock_reduce() -> Vec<String> {
    owned(STOCK_REDUCE)
}

fn default_credit() -> Vec<String> {
    owned(CREDIT)
}

fn default_debit() -> Vec<String> {
    owned(DEBIT)
}

fn default_items() -> Vec<String> {
    owned(ITEMS)
}

fn default_units() -> Vec<String> {
    owned(UNITS)
}

fn default_fillers() -> Vec<String> {
    owned(FILLERS)
}

/// Per-category keyword lists plus item and unit vocabularies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lexicon {
    /// Checked first: buying or adding stock
    #[serde(default = "default_stock_add")]
    pub stock_add: Vec<String>,
    /// Checked second: selling or removing stock
    #[serde(default = "default_stock_reduce")]
    pub stock_reduce: Vec<String>,
    /// Checked third: money received
    #[serde(default = "default_credit")]
    pub credit: Vec<String>,
    /// Checked last: money paid
    #[serde(default = "default_debit")]
    pub debit: Vec<String>,
    /// Common inventory items, scanned in order when no item pattern matches
    #[serde(default = "default_items")]
    pub items: Vec<String>,
    /// Unit words that must never become an item name
    #[serde(default = "default_units")]
    pub units: Vec<String>,
    /// Prepositions, pronouns and particles that must never become a name
    #[serde(default = "default_fillers")]
    pub fillers: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            stock_add: default_stock_add(),
            stock_reduce: default_stock_reduce(),
            credit: default_credit(),
            debit: default_debit(),
            items: default_items(),
            units: default_units(),
            fillers: default_fillers(),
        }
    }
}

impl Lexicon {
    /// Load from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            TextProcessingError::LexiconNotFound {
                path: path.as_ref().display().to_string(),
                message: e.to_string(),
            }
        })?;
        Self::from_yaml_str(&content)
    }

    /// Parse YAML, then case-fold and validate
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let lexicon: Lexicon = serde_yaml::from_str(yaml)
            .map_err(|e| TextProcessingError::LexiconParse(e.to_string()))?;
        lexicon.normalized()
    }

    /// Case-fold and trim every entry, drop blanks, and reject empty categories
    pub fn normalized(self) -> Result<Self> {
        let lexicon = Self {
            stock_add: fold_list(self.stock_add),
            stock_reduce: fold_list(self.stock_reduce),
            credit: fold_list(self.credit),
            debit: fold_list(self.debit),
            items: fold_list(self.items),
            units: fold_list(self.units),
            fillers: fold_list(self.fillers),
        };

        for (name, list) in [
            ("stock_add", &lexicon.stock_add),
            ("stock_reduce", &lexicon.stock_reduce),
            ("credit", &lexicon.credit),
            ("debit", &lexicon.debit),
            ("units", &lexicon.units),
        ] {
            if list.is_empty() {
                return Err(TextProcessingError::InvalidLexicon(format!(
                    "{} must contain at least one entry",
                    name
                )));
            }
        }
        if lexicon.items.is_empty() {
            tracing::warn!("Lexicon has no item names; item fallback scan is disabled");
        }

        Ok(lexicon)
    }

    /// Every classification keyword, in category order
    pub fn all_keywords(&self) -> impl Iterator<Item = &str> {
        self.stock_add
            .iter()
            .chain(&self.stock_reduce)
            .chain(&self.credit)
            .chain(&self.debit)
            .map(String::as_str)
    }

    pub fn is_unit(&self, word: &str) -> bool {
        let word = fold_case(word.trim());
        self.units.iter().any(|unit| *unit == word)
    }
}

fn fold_list(list: Vec<String>) -> Vec<String> {
    let mut folded: Vec<String> = Vec::with_capacity(list.len());
    for entry in list {
        let entry = fold_case(entry.trim());
        if !entry.is_empty() && !folded.contains(&entry) {
            folded.push(entry);
        }
    }
    folded
}
