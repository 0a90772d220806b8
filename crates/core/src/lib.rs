//! Core types for the EchoBiz voice ledger
//!
//! This crate provides the types shared by every other crate:
//! - Intents and classification results
//! - Money and stock events, plus manual-entry constructors
//! - The caller-owned rolling history
//! - Speech-capture session bookkeeping
//! - Display languages and user-facing notices
//! - Error types

pub mod capture;
pub mod error;
pub mod history;
pub mod intent;
pub mod language;
pub mod ledger;
pub mod notice;

pub use capture::{CaptureController, CaptureError, CaptureOutcome, CaptureSessionId, Toggle};
pub use error::{Error, InputProblem, Result};
pub use history::LedgerHistory;
pub use intent::{ClassificationResult, Intent};
pub use language::Language;
pub use ledger::{
    Fallbacks, LedgerEntry, MoneyEvent, MoneyKind, Rejection, RejectionReason, StockAction,
    StockEvent,
};
pub use notice::{history_line, Notice, Severity};
