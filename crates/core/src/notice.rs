//! User-facing acknowledgements
//!
//! Short title/description pairs the host shows after each command, plus the
//! one-line rendering used for history rows.

use serde::{Deserialize, Serialize};

use crate::capture::CaptureError;
use crate::error::{Error, InputProblem};
use crate::ledger::{LedgerEntry, MoneyKind, Rejection, StockAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notice {
    fn new(title: impl Into<String>, description: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity,
        }
    }

    /// Acknowledge a recorded event
    pub fn recorded(entry: &LedgerEntry) -> Self {
        match entry {
            LedgerEntry::Money(e) => match e.kind {
                MoneyKind::Credit => Self::new(
                    "Credit Added",
                    format!("₹{} received from {}", e.amount, e.counterparty),
                    Severity::Success,
                ),
                MoneyKind::Debit => Self::new(
                    "Payment Added",
                    format!("₹{} paid to {}", e.amount, e.counterparty),
                    Severity::Success,
                ),
            },
            LedgerEntry::Stock(e) => match e.action {
                StockAction::Added => Self::new(
                    "Stock Added",
                    format!("{} × {} added to inventory", e.quantity, e.item_name),
                    Severity::Success,
                ),
                StockAction::Reduced => Self::new(
                    "Stock Reduced",
                    format!("{} × {} removed from inventory", e.quantity, e.item_name),
                    Severity::Success,
                ),
            },
        }
    }

    pub fn rejected(_rejection: &Rejection) -> Self {
        Self::new(
            "Unknown Command",
            "Could not detect credit, debit or stock action.",
            Severity::Info,
        )
    }

    pub fn error(error: &Error) -> Self {
        match error {
            Error::UnrecognizedIntent => Self::new(
                "Unknown Command",
                "Could not detect credit, debit or stock action.",
                Severity::Info,
            ),
            Error::InvalidManualInput {
                problem: InputProblem::Missing,
                ..
            } => Self::new(
                "Missing Information",
                "Please enter both an amount and a name",
                Severity::Destructive,
            ),
            Error::InvalidManualInput { field: "quantity", .. } => Self::new(
                "Invalid Quantity",
                "Please enter a whole number greater than zero",
                Severity::Destructive,
            ),
            Error::InvalidManualInput { .. } => Self::new(
                "Invalid Amount",
                "Please enter a valid amount",
                Severity::Destructive,
            ),
        }
    }

    pub fn capture_error(error: &CaptureError) -> Self {
        match error {
            CaptureError::Unsupported => Self::new(
                "Speech Recognition Not Supported",
                "This device does not support voice commands.",
                Severity::Destructive,
            ),
            CaptureError::Network => Self::new(
                "Microphone Error",
                "Speech recognition requires a secure connection.",
                Severity::Destructive,
            ),
            CaptureError::PermissionDenied => Self::new(
                "Microphone Error",
                "Microphone permission was denied.",
                Severity::Destructive,
            ),
            CaptureError::Other(detail) => {
                Self::new("Microphone Error", detail.clone(), Severity::Destructive)
            }
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}

/// One history row, e.g. `Received from Ramesh  +₹500`
pub fn history_line(entry: &LedgerEntry) -> String {
    match entry {
        LedgerEntry::Money(e) => match e.kind {
            MoneyKind::Credit => format!("Received from {}  +₹{}", e.counterparty, e.amount),
            MoneyKind::Debit => format!("Paid to {}  -₹{}", e.counterparty, e.amount),
        },
        LedgerEntry::Stock(e) => match e.action {
            StockAction::Added => format!("Stocked {}  +{}", e.item_name, e.quantity),
            StockAction::Reduced => format!("Sold/used {}  -{}", e.item_name, e.quantity),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{MoneyEvent, StockEvent};

    #[test]
    fn test_money_notices() {
        let credit: LedgerEntry = MoneyEvent::manual(MoneyKind::Credit, 500.0, "Ramesh")
            .unwrap()
            .into();
        let notice = Notice::recorded(&credit);
        assert_eq!(notice.title, "Credit Added");
        assert_eq!(notice.description, "₹500 received from Ramesh");
        assert_eq!(history_line(&credit), "Received from Ramesh  +₹500");

        let debit: LedgerEntry = MoneyEvent::manual(MoneyKind::Debit, 12.5, "Suresh")
            .unwrap()
            .into();
        assert_eq!(Notice::recorded(&debit).description, "₹12.5 paid to Suresh");
        assert_eq!(history_line(&debit), "Paid to Suresh  -₹12.5");
    }

    #[test]
    fn test_stock_notice() {
        let entry: LedgerEntry = StockEvent::manual(StockAction::Reduced, "Rice", 2)
            .unwrap()
            .into();
        let notice = Notice::recorded(&entry);
        assert_eq!(notice.title, "Stock Reduced");
        assert_eq!(notice.description, "2 × Rice removed from inventory");
    }

    #[test]
    fn test_error_notices() {
        let missing = MoneyEvent::from_manual_input(MoneyKind::Credit, "", "x").unwrap_err();
        assert_eq!(Notice::error(&missing).title, "Missing Information");

        let invalid = MoneyEvent::from_manual_input(MoneyKind::Credit, "-4", "x").unwrap_err();
        assert_eq!(Notice::error(&invalid).title, "Invalid Amount");

        let fractional = StockEvent::from_manual_input(StockAction::Added, "Atta", "1.5").unwrap_err();
        assert_eq!(Notice::error(&fractional).title, "Invalid Quantity");

        let rejected = Notice::rejected(&Rejection::unrecognized("hello"));
        assert_eq!(rejected.severity, Severity::Info);
    }

    #[test]
    fn test_capture_notice() {
        let notice = Notice::capture_error(&CaptureError::Network);
        assert!(notice.description.contains("secure connection"));
    }
}
