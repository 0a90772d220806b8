//! Command interpreter
//!
//! Turns one transcript into one ledger entry, or a rejection when no intent
//! keyword is found. Interpretation is a single pure pass: nothing is
//! recorded here and no state is kept between calls, so one interpreter can
//! be shared freely across threads.

use echobiz_core::{Fallbacks, Intent, LedgerEntry, MoneyEvent, MoneyKind, Rejection, StockAction, StockEvent};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TextProcessingError};
use crate::intent::IntentClassifier;
use crate::lexicon::Lexicon;
use crate::names::{ItemNameExtractor, PersonNameExtractor};
use crate::quantity::QuantityExtractor;

/// Interpreter options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterpreterConfig {
    #[serde(default)]
    pub fallbacks: Fallbacks,
    /// Also capture Devanagari person names
    #[serde(default)]
    pub devanagari_names: bool,
}

/// Classifier plus extractors
#[derive(Debug, Clone)]
pub struct CommandInterpreter {
    classifier: IntentClassifier,
    quantities: QuantityExtractor,
    persons: PersonNameExtractor,
    items: ItemNameExtractor,
    fallbacks: Fallbacks,
}

impl CommandInterpreter {
    /// Build from a lexicon
    ///
    /// Fails on an empty keyword category, a fallback that is zero or blank,
    /// or an item pattern that cannot be compiled.
    pub fn new(lexicon: Lexicon, config: InterpreterConfig) -> Result<Self> {
        let lexicon = lexicon.normalized()?;
        if let Some((field, message)) = config.fallbacks.invalid_field() {
            return Err(TextProcessingError::InvalidFallback { field, message });
        }

        let mut persons = PersonNameExtractor::new(&lexicon, &config.fallbacks);
        if config.devanagari_names {
            persons = persons.with_devanagari_names();
        }

        Ok(Self {
            classifier: IntentClassifier::new(&lexicon),
            quantities: QuantityExtractor::new(&config.fallbacks),
            items: ItemNameExtractor::new(&lexicon, &config.fallbacks)?,
            persons,
            fallbacks: config.fallbacks,
        })
    }

    /// Built-in lexicon and default fallbacks
    pub fn with_defaults() -> Result<Self> {
        Self::new(Lexicon::default(), InterpreterConfig::default())
    }

    pub fn classifier(&self) -> &IntentClassifier {
        &self.classifier
    }

    /// Interpret one transcript
    ///
    /// Never fails on malformed input: empty or unmatched text comes back as
    /// a [`Rejection`].
    pub fn interpret(&self, transcript: &str) -> std::result::Result<LedgerEntry, Rejection> {
        let classification = self.classifier.classify_transcript(transcript);

        let intent = classification.intent;
        let entry: LedgerEntry = if intent.is_stock() {
            let action = if intent == Intent::StockAdded {
                StockAction::Added
            } else {
                StockAction::Reduced
            };
            let quantity = self.quantities.stock_quantity(transcript);
            let item = self.items.extract(transcript);
            StockEvent::from_extraction(action, &item, quantity, &self.fallbacks).into()
        } else if intent.is_money() {
            let kind = if intent == Intent::Credit {
                MoneyKind::Credit
            } else {
                MoneyKind::Debit
            };
            let amount = self.quantities.money_amount(transcript);
            let person = self.persons.extract(transcript);
            MoneyEvent::from_extraction(kind, amount, &person, &self.fallbacks).into()
        } else {
            tracing::info!(transcript, "No credit, debit or stock action detected");
            return Err(Rejection::unrecognized(transcript));
        };

        tracing::info!(
            intent = %classification.intent,
            keyword = classification.matched_keyword.as_deref().unwrap_or_default(),
            name = entry.name(),
            "Command interpreted"
        );
        Ok(entry)
    }
}
