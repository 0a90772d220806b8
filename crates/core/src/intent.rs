//! Intent of a single utterance

use serde::{Deserialize, Serialize};

/// Classified purpose of an utterance
///
/// Exactly one intent is produced per transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Credit,
    Debit,
    StockAdded,
    StockReduced,
    Unrecognized,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Credit => "credit",
            Self::Debit => "debit",
            Self::StockAdded => "stock_added",
            Self::StockReduced => "stock_reduced",
            Self::Unrecognized => "unrecognized",
        }
    }

    /// Inventory intents are extracted with the item-name path
    pub fn is_stock(&self) -> bool {
        matches!(self, Self::StockAdded | Self::StockReduced)
    }

    /// Money intents are extracted with the person-name path
    pub fn is_money(&self) -> bool {
        matches!(self, Self::Credit | Self::Debit)
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transient classifier output, consumed by the interpreter to drive extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationResult {
    pub intent: Intent,
    pub raw_transcript: String,
    /// Lexicon entry that decided the intent, if any
    pub matched_keyword: Option<String>,
}

impl ClassificationResult {
    pub fn unrecognized(transcript: &str) -> Self {
        Self {
            intent: Intent::Unrecognized,
            raw_transcript: transcript.to_string(),
            matched_keyword: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_groups() {
        assert!(Intent::StockAdded.is_stock());
        assert!(Intent::StockReduced.is_stock());
        assert!(Intent::Credit.is_money());
        assert!(Intent::Debit.is_money());
        assert!(!Intent::Unrecognized.is_money());
        assert!(!Intent::Unrecognized.is_stock());
    }

    #[test]
    fn test_intent_serde_names() {
        let json = serde_json::to_string(&Intent::StockReduced).unwrap();
        assert_eq!(json, "\"stock_reduced\"");
        assert_eq!(Intent::Credit.to_string(), "credit");
    }
}
