//! Caller-owned rolling history of recorded events
//!
//! The interpreter never holds on to events; the host keeps one of these and
//! prepends whatever the interpreter or manual entry returns.

use serde::{Deserialize, Serialize};

use crate::ledger::{LedgerEntry, MoneyKind, StockAction};

/// Newest-first, in-memory list of ledger entries
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LedgerHistory {
    entries: Vec<LedgerEntry>,
}

impl LedgerHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend an entry so it becomes the most recent one
    pub fn record(&mut self, entry: impl Into<LedgerEntry>) -> &LedgerEntry {
        self.entries.insert(0, entry.into());
        &self.entries[0]
    }

    /// Up to `limit` entries, most recent first
    pub fn recent(&self, limit: usize) -> &[LedgerEntry] {
        &self.entries[..limit.min(self.entries.len())]
    }

    pub fn iter(&self) -> impl Iterator<Item = &LedgerEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Credits minus debits over the whole history
    pub fn net_balance(&self) -> f64 {
        self.entries
            .iter()
            .filter_map(LedgerEntry::as_money)
            .map(|e| match e.kind {
                MoneyKind::Credit => e.amount,
                MoneyKind::Debit => -e.amount,
            })
            .sum()
    }

    /// Units added minus units reduced for one item (case-insensitive name match)
    pub fn stock_delta(&self, item: &str) -> i64 {
        let item = item.to_lowercase();
        self.entries
            .iter()
            .filter_map(LedgerEntry::as_stock)
            .filter(|e| e.item_name.to_lowercase() == item)
            .map(|e| {
                let quantity = i64::try_from(e.quantity).unwrap_or(i64::MAX);
                match e.action {
                    StockAction::Added => quantity,
                    StockAction::Reduced => -quantity,
                }
            })
            .fold(0i64, i64::saturating_add)
    }
}
