//! Quantity extraction
//!
//! Takes the first digit run in the transcript. Money amounts may carry one
//! decimal part, stock quantities are whole numbers. Devanagari digits are
//! mapped to ASCII first. Anything missing or not strictly positive falls
//! back to the configured default.

use once_cell::sync::Lazy;
use regex::Regex;

use echobiz_core::Fallbacks;

use crate::hindi::devanagari_digits_to_ascii;

// `\d` is Unicode-aware in `regex`; keep the runs ASCII after normalisation
static MONEY_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?").unwrap());
static STOCK_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());

/// First-number extractor with per-kind defaults
#[derive(Debug, Clone)]
pub struct QuantityExtractor {
    default_amount: f64,
    default_quantity: u64,
}

impl Default for QuantityExtractor {
    fn default() -> Self {
        Self::new(&Fallbacks::default())
    }
}

impl QuantityExtractor {
    pub fn new(fallbacks: &Fallbacks) -> Self {
        Self {
            default_amount: fallbacks.money_amount,
            default_quantity: fallbacks.stock_quantity,
        }
    }

    /// Amount of money mentioned in the transcript
    pub fn money_amount(&self, transcript: &str) -> f64 {
        let text = devanagari_digits_to_ascii(transcript);
        let parsed = MONEY_PATTERN
            .find(&text)
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .filter(|amount| amount.is_finite() && *amount > 0.0);

        match parsed {
            Some(amount) => amount,
            None => {
                tracing::warn!(default = self.default_amount, "No usable amount, using default");
                self.default_amount
            }
        }
    }

    /// Whole-number stock quantity mentioned in the transcript
    ///
    /// "2.5 kg" counts as 2: only the leading integer run is taken.
    pub fn stock_quantity(&self, transcript: &str) -> u64 {
        let text = devanagari_digits_to_ascii(transcript);
        let parsed = STOCK_PATTERN
            .find(&text)
            .and_then(|m| m.as_str().parse::<u64>().ok())
            .filter(|quantity| *quantity > 0);

        match parsed {
            Some(quantity) => quantity,
            None => {
                tracing::warn!(default = self.default_quantity, "No usable quantity, using default");
                self.default_quantity
            }
        }
    }
}
