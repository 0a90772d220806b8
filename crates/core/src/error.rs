//! Error types for the ledger core

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What was wrong with a manually entered field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputProblem {
    /// Field left empty (or whitespace only)
    Missing,
    /// Text could not be parsed as a number
    NotANumber,
    /// Zero, negative or non-finite value
    NotPositive,
    /// Fractional value where a whole count is required
    NotWhole,
}

impl std::fmt::Display for InputProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing => write!(f, "value is missing"),
            Self::NotANumber => write!(f, "not a number"),
            Self::NotPositive => write!(f, "must be greater than zero"),
            Self::NotWhole => write!(f, "must be a whole number"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// No credit, debit or stock keyword was found in the transcript
    #[error("no credit, debit or stock action detected")]
    UnrecognizedIntent,

    /// Manual entry rejected before anything was committed
    #[error("invalid manual input for {field}: {problem}")]
    InvalidManualInput {
        field: &'static str,
        problem: InputProblem,
    },
}

impl Error {
    pub(crate) fn missing(field: &'static str) -> Self {
        Self::InvalidManualInput {
            field,
            problem: InputProblem::Missing,
        }
    }

    pub(crate) fn invalid(field: &'static str, problem: InputProblem) -> Self {
        Self::InvalidManualInput { field, problem }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
