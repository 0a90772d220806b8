//! Intent classification
//!
//! Keyword categories are checked in a fixed order and the first category
//! with any keyword contained in the case-folded transcript wins:
//!
//! 1. stock added
//! 2. stock reduced
//! 3. credit
//! 4. debit
//!
//! Order encodes precedence: "stock se 2 nikala" is stock added, because
//! "stock" is an add keyword and the add category is checked before "nikal".
//!
//! # Example
//!
//! ```
//! use echobiz_core::Intent;
//! use echobiz_text_processing::{IntentClassifier, Lexicon};
//!
//! let classifier = IntentClassifier::new(&Lexicon::default());
//! assert_eq!(classifier.classify("Maine 500 liya Ramesh se"), Intent::Credit);
//! assert_eq!(classifier.classify("hello there"), Intent::Unrecognized);
//! ```

use echobiz_core::{ClassificationResult, Intent};

use crate::lexicon::Lexicon;
use crate::matching::{contains_any, fold_case};

/// Keyword-containment classifier
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    /// (intent, keywords) in precedence order
    categories: Vec<(Intent, Vec<String>)>,
}

impl IntentClassifier {
    /// Build from a normalized lexicon
    pub fn new(lexicon: &Lexicon) -> Self {
        Self {
            categories: vec![
                (Intent::StockAdded, lexicon.stock_add.clone()),
                (Intent::StockReduced, lexicon.stock_reduce.clone()),
                (Intent::Credit, lexicon.credit.clone()),
                (Intent::Debit, lexicon.debit.clone()),
            ],
        }
    }

    pub fn classify(&self, transcript: &str) -> Intent {
        self.classify_transcript(transcript).intent
    }

    /// Classify and keep the keyword that decided the intent
    pub fn classify_transcript(&self, transcript: &str) -> ClassificationResult {
        let folded = fold_case(transcript.trim());
        if folded.is_empty() {
            return ClassificationResult::unrecognized(transcript);
        }

        for (intent, keywords) in &self.categories {
            if let Some(keyword) = contains_any(&folded, keywords) {
                tracing::debug!(intent = %intent, keyword, "Intent matched");
                return ClassificationResult {
                    intent: *intent,
                    raw_transcript: transcript.to_string(),
                    matched_keyword: Some(keyword.to_string()),
                };
            }
        }

        tracing::debug!("No intent keyword found");
        ClassificationResult::unrecognized(transcript)
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new(&Lexicon::default())
    }
}
