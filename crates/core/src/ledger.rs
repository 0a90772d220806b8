//! Ledger and inventory events
//!
//! Events are produced either by the command interpreter (voice path) or by
//! the manual-entry constructors below. Both paths share the same types and
//! both guarantee a strictly positive quantity and a non-empty name.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, InputProblem, Result};

/// Direction of a money transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoneyKind {
    /// Money received from the counterparty
    Credit,
    /// Money paid to the counterparty
    Debit,
}

impl MoneyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Credit => "credit",
            Self::Debit => "debit",
        }
    }
}

/// Direction of a stock change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockAction {
    Added,
    Reduced,
}

impl StockAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Reduced => "reduced",
        }
    }
}

/// A credit or debit against a named counterparty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoneyEvent {
    pub id: Uuid,
    pub kind: MoneyKind,
    pub amount: f64,
    pub counterparty: String,
    #[serde(rename = "timestamp")]
    pub occurred_at: DateTime<Utc>,
}

impl MoneyEvent {
    /// Build an event from already-extracted values
    ///
    /// Callers are expected to have applied fallbacks; the interpreter always does.
    pub(crate) fn new(kind: MoneyKind, amount: f64, counterparty: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            amount,
            counterparty,
            occurred_at: Utc::now(),
        }
    }

    /// Create an event from extracted values, substituting fallbacks for
    /// anything that would break the positivity or non-empty invariants
    pub fn from_extraction(
        kind: MoneyKind,
        amount: f64,
        counterparty: &str,
        fallbacks: &Fallbacks,
    ) -> Self {
        let amount = if amount.is_finite() && amount > 0.0 {
            amount
        } else {
            fallbacks.money_amount
        };
        let counterparty = non_blank_or(counterparty, &fallbacks.counterparty);
        Self::new(kind, amount, counterparty)
    }

    /// Manual entry with an already-parsed amount
    pub fn manual(kind: MoneyKind, amount: f64, person: &str) -> Result<Self> {
        let person = person.trim();
        if person.is_empty() {
            return Err(Error::missing("person"));
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(Error::invalid("amount", InputProblem::NotPositive));
        }
        Ok(Self::new(kind, amount, person.to_string()))
    }

    /// Manual entry straight from form text
    pub fn from_manual_input(kind: MoneyKind, amount_text: &str, person: &str) -> Result<Self> {
        let amount_text = amount_text.trim();
        if amount_text.is_empty() {
            return Err(Error::missing("amount"));
        }
        if person.trim().is_empty() {
            return Err(Error::missing("person"));
        }
        let amount: f64 = amount_text
            .parse()
            .map_err(|_| Error::invalid("amount", InputProblem::NotANumber))?;
        Self::manual(kind, amount, person)
    }
}

/// A stock change for a named item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockEvent {
    pub id: Uuid,
    pub item_name: String,
    pub quantity: u64,
    pub action: StockAction,
    #[serde(rename = "timestamp")]
    pub occurred_at: DateTime<Utc>,
}

impl StockEvent {
    pub(crate) fn new(action: StockAction, item_name: String, quantity: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            item_name,
            quantity,
            action,
            occurred_at: Utc::now(),
        }
    }

    /// Create an event from extracted values, substituting fallbacks as needed
    pub fn from_extraction(
        action: StockAction,
        item_name: &str,
        quantity: u64,
        fallbacks: &Fallbacks,
    ) -> Self {
        let quantity = if quantity > 0 {
            quantity
        } else {
            fallbacks.stock_quantity
        };
        let item_name = non_blank_or(item_name, &fallbacks.item);
        Self::new(action, item_name, quantity)
    }

    /// Manual entry with an already-parsed quantity
    pub fn manual(action: StockAction, item_name: &str, quantity: u64) -> Result<Self> {
        let item_name = item_name.trim();
        if item_name.is_empty() {
            return Err(Error::missing("item"));
        }
        if quantity == 0 {
            return Err(Error::invalid("quantity", InputProblem::NotPositive));
        }
        Ok(Self::new(action, item_name.to_string(), quantity))
    }

    /// Manual entry straight from form text
    pub fn from_manual_input(action: StockAction, item_name: &str, quantity_text: &str) -> Result<Self> {
        let quantity_text = quantity_text.trim();
        if item_name.trim().is_empty() {
            return Err(Error::missing("item"));
        }
        if quantity_text.is_empty() {
            return Err(Error::missing("quantity"));
        }
        let quantity = parse_whole_quantity(quantity_text)?;
        Self::manual(action, item_name, quantity)
    }
}

fn parse_whole_quantity(text: &str) -> Result<u64> {
    if let Ok(quantity) = text.parse::<u64>() {
        return Ok(quantity);
    }
    // Distinguish "-3" / "2.5" from plain garbage for a better message
    match text.parse::<f64>() {
        Ok(value) if !value.is_finite() || value <= 0.0 => {
            Err(Error::invalid("quantity", InputProblem::NotPositive))
        }
        Ok(_) => Err(Error::invalid("quantity", InputProblem::NotWhole)),
        Err(_) => Err(Error::invalid("quantity", InputProblem::NotANumber)),
    }
}

fn non_blank_or(value: &str, fallback: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

/// Any event that can be recorded in the history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum LedgerEntry {
    Money(MoneyEvent),
    Stock(StockEvent),
}

impl LedgerEntry {
    pub fn id(&self) -> Uuid {
        match self {
            Self::Money(e) => e.id,
            Self::Stock(e) => e.id,
        }
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            Self::Money(e) => e.occurred_at,
            Self::Stock(e) => e.occurred_at,
        }
    }

    /// Counterparty for money events, item name for stock events
    pub fn name(&self) -> &str {
        match self {
            Self::Money(e) => &e.counterparty,
            Self::Stock(e) => &e.item_name,
        }
    }

    pub fn as_money(&self) -> Option<&MoneyEvent> {
        match self {
            Self::Money(e) => Some(e),
            Self::Stock(_) => None,
        }
    }

    pub fn as_stock(&self) -> Option<&StockEvent> {
        match self {
            Self::Stock(e) => Some(e),
            Self::Money(_) => None,
        }
    }
}

impl From<MoneyEvent> for LedgerEntry {
    fn from(event: MoneyEvent) -> Self {
        Self::Money(event)
    }
}

impl From<StockEvent> for LedgerEntry {
    fn from(event: StockEvent) -> Self {
        Self::Stock(event)
    }
}

/// Values substituted when extraction finds nothing usable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fallbacks {
    #[serde(default = "default_money_amount")]
    pub money_amount: f64,
    #[serde(default = "default_stock_quantity")]
    pub stock_quantity: u64,
    #[serde(default = "default_counterparty")]
    pub counterparty: String,
    #[serde(default = "default_item")]
    pub item: String,
}

fn default_money_amount() -> f64 {
    500.0
}

fn default_stock_quantity() -> u64 {
    1
}

fn default_counterparty() -> String {
    "Unknown".to_string()
}

fn default_item() -> String {
    "Item".to_string()
}

impl Default for Fallbacks {
    fn default() -> Self {
        Self {
            money_amount: default_money_amount(),
            stock_quantity: default_stock_quantity(),
            counterparty: default_counterparty(),
            item: default_item(),
        }
    }
}

impl Fallbacks {
    /// First field that would let an event through with a zero or blank
    /// value, and what is wrong with it
    pub fn invalid_field(&self) -> Option<(&'static str, &'static str)> {
        if !self.money_amount.is_finite() || self.money_amount <= 0.0 {
            return Some(("money_amount", "must be greater than zero"));
        }
        if self.stock_quantity == 0 {
            return Some(("stock_quantity", "must be greater than zero"));
        }
        if self.counterparty.trim().is_empty() {
            return Some(("counterparty", "must not be blank"));
        }
        if self.item.trim().is_empty() {
            return Some(("item", "must not be blank"));
        }
        None
    }
}

/// Why the interpreter produced no event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RejectionReason {
    Unrecognized,
}

/// Interpreter rejection, surfaced to the user as a neutral notice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("no credit, debit or stock action detected in {transcript:?}")]
pub struct Rejection {
    pub reason: RejectionReason,
    pub transcript: String,
}

impl Rejection {
    pub fn unrecognized(transcript: &str) -> Self {
        Self {
            reason: RejectionReason::Unrecognized,
            transcript: transcript.to_string(),
        }
    }
}

impl From<Rejection> for Error {
    fn from(rejection: Rejection) -> Self {
        match rejection.reason {
            RejectionReason::Unrecognized => Error::UnrecognizedIntent,
        }
    }
}
