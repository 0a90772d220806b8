//! Input line parsing
//!
//! Plain lines are transcripts. Lines starting with `/` are commands:
//!
//! ```text
//! /credit <amount> <person>     record money received
//! /debit <amount> <person>      record money paid
//! /add <quantity> <item>        record stock added
//! /reduce <quantity> <item>     record stock sold or used
//! /history                      show recent entries
//! /balance                      show credits minus debits
//! /stock <item>                 show net stock change for an item
//! /examples                     show example commands
//! /language <code>              switch display language (en, hi, hinglish)
//! /help                         show this list
//! ```

use echobiz_core::{LedgerEntry, MoneyEvent, MoneyKind, StockAction, StockEvent};

pub const USAGE: &str = "\
/credit <amount> <person>     record money received
/debit <amount> <person>      record money paid
/add <quantity> <item>        record stock added
/reduce <quantity> <item>     record stock sold or used
/history                      show recent entries
/balance                      show credits minus debits
/stock <item>                 show net stock change for an item
/examples                     show example commands
/language <code>              switch display language (en, hi, hinglish)
/help                         show this list";

/// Manual entry as typed, validated only when built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManualEntry {
    Money {
        kind: MoneyKind,
        amount: String,
        person: String,
    },
    Stock {
        action: StockAction,
        quantity: String,
        item: String,
    },
}

impl ManualEntry {
    pub fn build(&self) -> echobiz_core::Result<LedgerEntry> {
        match self {
            Self::Money {
                kind,
                amount,
                person,
            } => MoneyEvent::from_manual_input(*kind, amount, person).map(Into::into),
            Self::Stock {
                action,
                quantity,
                item,
            } => StockEvent::from_manual_input(*action, item, quantity).map(Into::into),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Transcript(String),
    Manual(ManualEntry),
    History,
    Balance,
    Stock(String),
    Examples,
    Language(String),
    Help,
    Unknown(String),
}

/// Parse one input line; blank lines yield `None`
pub fn parse(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let Some(rest) = line.strip_prefix('/') else {
        return Some(Command::Transcript(line.to_string()));
    };

    let (name, args) = match rest.split_once(char::is_whitespace) {
        Some((name, args)) => (name, args.trim()),
        None => (rest, ""),
    };
    let (first, remainder) = match args.split_once(char::is_whitespace) {
        Some((first, remainder)) => (first.to_string(), remainder.trim().to_string()),
        None => (args.to_string(), String::new()),
    };

    let command = match name.to_lowercase().as_str() {
        "credit" | "debit" => Command::Manual(ManualEntry::Money {
            kind: if name.eq_ignore_ascii_case("credit") {
                MoneyKind::Credit
            } else {
                MoneyKind::Debit
            },
            amount: first,
            person: remainder,
        }),
        "add" | "reduce" => Command::Manual(ManualEntry::Stock {
            action: if name.eq_ignore_ascii_case("add") {
                StockAction::Added
            } else {
                StockAction::Reduced
            },
            quantity: first,
            item: remainder,
        }),
        "history" => Command::History,
        "balance" => Command::Balance,
        "stock" => Command::Stock(args.to_string()),
        "examples" => Command::Examples,
        "language" => Command::Language(args.to_string()),
        "help" => Command::Help,
        _ => Command::Unknown(name.to_string()),
    };
    Some(command)
}
