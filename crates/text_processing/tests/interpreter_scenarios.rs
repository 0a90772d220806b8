//! End-to-end interpretation of shop-keeping utterances
//!
//! These tests drive the interpreter the way a host app does: transcript in,
//! entry recorded in a caller-owned history, acknowledgement out.

use echobiz_core::{
    history_line, Intent, LedgerEntry, LedgerHistory, MoneyKind, Notice, StockAction,
};
use echobiz_core::Fallbacks;
use echobiz_text_processing::{CommandInterpreter, InterpreterConfig, Lexicon, TextProcessingError};

fn interpreter() -> CommandInterpreter {
    CommandInterpreter::with_defaults().unwrap()
}

fn money(entry: &LedgerEntry) -> (MoneyKind, f64, &str) {
    let event = entry.as_money().expect("money event");
    (event.kind, event.amount, event.counterparty.as_str())
}

fn stock(entry: &LedgerEntry) -> (StockAction, u64, &str) {
    let event = entry.as_stock().expect("stock event");
    (event.action, event.quantity, event.item_name.as_str())
}

#[test]
fn test_english_credit() {
    let entry = interpreter().interpret("I received 500 from Ramesh").unwrap();
    assert_eq!(money(&entry), (MoneyKind::Credit, 500.0, "Ramesh"));
}

#[test]
fn test_hinglish_credit() {
    let entry = interpreter().interpret("Maine 500 liya Ramesh se").unwrap();
    assert_eq!(money(&entry), (MoneyKind::Credit, 500.0, "Ramesh"));
}

#[test]
fn test_hinglish_debit() {
    let entry = interpreter().interpret("500 diya Suresh ko").unwrap();
    assert_eq!(money(&entry), (MoneyKind::Debit, 500.0, "Suresh"));
}

#[test]
fn test_english_debit() {
    let entry = interpreter().interpret("I paid 300 to Suresh").unwrap();
    assert_eq!(money(&entry), (MoneyKind::Debit, 300.0, "Suresh"));
}

#[test]
fn test_names_that_are_also_keywords() {
    let interpreter = interpreter();

    let entry = interpreter.interpret("I paid 500 to Diya").unwrap();
    assert_eq!(money(&entry), (MoneyKind::Debit, 500.0, "Diya"));

    let entry = interpreter.interpret("received 500 from Mila").unwrap();
    assert_eq!(money(&entry), (MoneyKind::Credit, 500.0, "Mila"));

    let entry = interpreter.interpret("Diya ko 500 diya").unwrap();
    assert_eq!(money(&entry), (MoneyKind::Debit, 500.0, "Diya"));
}

#[test]
fn test_stock_added() {
    let entry = interpreter().interpret("Add 10 atta to stock").unwrap();
    assert_eq!(stock(&entry), (StockAction::Added, 10, "Atta"));
}

#[test]
fn test_stock_reduced_with_unit() {
    let entry = interpreter().interpret("2 kg rice sold").unwrap();
    assert_eq!(stock(&entry), (StockAction::Reduced, 2, "Rice"));
}

#[test]
fn test_unit_word_is_not_the_item() {
    let entry = interpreter().interpret("2 kg atta added to stock").unwrap();
    assert_eq!(stock(&entry), (StockAction::Added, 2, "Atta"));
}

#[test]
fn test_hindi_stock_added() {
    let entry = interpreter().interpret("10 आटा स्टॉक में जोड़ो").unwrap();
    assert_eq!(stock(&entry), (StockAction::Added, 10, "आटा"));
}

#[test]
fn test_hinglish_sale() {
    let entry = interpreter().interpret("2 kg chawal becha").unwrap();
    assert_eq!(stock(&entry), (StockAction::Reduced, 2, "Chawal"));
}

#[test]
fn test_devanagari_digits() {
    let entry = interpreter().interpret("५०० दिया सुरेश को").unwrap();
    let (kind, amount, _) = money(&entry);
    assert_eq!((kind, amount), (MoneyKind::Debit, 500.0));
}

#[test]
fn test_devanagari_person_names() {
    // Off by default
    let entry = interpreter().interpret("मैंने 500 लिया रमेश से").unwrap();
    assert_eq!(money(&entry), (MoneyKind::Credit, 500.0, "Unknown"));

    let config = InterpreterConfig {
        devanagari_names: true,
        ..InterpreterConfig::default()
    };
    let interpreter = CommandInterpreter::new(Lexicon::default(), config).unwrap();
    let entry = interpreter.interpret("मैंने 500 लिया रमेश से").unwrap();
    assert_eq!(money(&entry), (MoneyKind::Credit, 500.0, "रमेश"));
}

#[test]
fn test_defaults_when_nothing_extracted() {
    let interpreter = interpreter();

    let entry = interpreter.interpret("got money").unwrap();
    assert_eq!(money(&entry), (MoneyKind::Credit, 500.0, "Unknown"));

    let entry = interpreter.interpret("stock").unwrap();
    assert_eq!(stock(&entry), (StockAction::Added, 1, "Item"));
}

#[test]
fn test_first_number_only() {
    let entry = interpreter()
        .interpret("I received 500 from Ramesh but paid 200 later")
        .unwrap();
    assert_eq!(money(&entry), (MoneyKind::Credit, 500.0, "Ramesh"));
}

#[test]
fn test_unrecognized_is_a_rejection() {
    let interpreter = interpreter();
    for transcript in ["hello there", "", "   "] {
        let rejection = interpreter.interpret(transcript).unwrap_err();
        assert_eq!(rejection.transcript, transcript);
        assert_eq!(Notice::rejected(&rejection).title, "Unknown Command");
    }
    assert_eq!(interpreter.classifier().classify("hello there"), Intent::Unrecognized);
}

#[test]
fn test_interpretation_is_repeatable() {
    let interpreter = interpreter();
    let first = interpreter.interpret("500 diya Suresh ko").unwrap();
    let second = interpreter.interpret("500 diya Suresh ko").unwrap();

    assert_ne!(first.id(), second.id());
    assert_eq!(money(&first), money(&second));
}

#[test]
fn test_every_event_is_positive_and_named() {
    let interpreter = interpreter();
    let transcripts = [
        "received 0 from",
        "paid to the",
        "add kg",
        "sold 0 packet",
        "liya",
        "बेचा",
        "stock me me",
    ];
    for transcript in transcripts {
        match interpreter.interpret(transcript).unwrap() {
            LedgerEntry::Money(event) => {
                assert!(event.amount > 0.0, "{transcript}");
                assert!(!event.counterparty.trim().is_empty(), "{transcript}");
            }
            LedgerEntry::Stock(event) => {
                assert!(event.quantity > 0, "{transcript}");
                assert!(!event.item_name.trim().is_empty(), "{transcript}");
            }
        }
    }
}

#[test]
fn test_caller_owns_history() {
    let interpreter = interpreter();
    let mut history = LedgerHistory::new();

    for transcript in [
        "I received 500 from Ramesh",
        "hello there",
        "500 diya Suresh ko",
        "Add 10 atta to stock",
        "2 kg atta sold",
    ] {
        match interpreter.interpret(transcript) {
            Ok(entry) => {
                let entry = history.record(entry);
                assert!(!Notice::recorded(entry).title.is_empty());
            }
            Err(rejection) => assert_eq!(rejection.transcript, "hello there"),
        }
    }

    assert_eq!(history.len(), 4);
    assert_eq!(history.net_balance(), 0.0);
    assert_eq!(history.stock_delta("atta"), 8);

    let latest = &history.recent(1)[0];
    assert_eq!(history_line(latest), "Sold/used Atta  -2");
}

#[test]
fn test_custom_lexicon_from_file() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "credit: [jama]").unwrap();
    writeln!(file, "items: [kurkure]").unwrap();

    let lexicon = Lexicon::load(file.path()).unwrap();
    let interpreter = CommandInterpreter::new(lexicon, InterpreterConfig::default()).unwrap();

    let entry = interpreter.interpret("Ramesh se 200 jama").unwrap();
    assert_eq!(money(&entry), (MoneyKind::Credit, 200.0, "Ramesh"));

    let entry = interpreter.interpret("kurkure restock").unwrap();
    assert_eq!(stock(&entry), (StockAction::Added, 1, "Kurkure"));
}

#[test]
fn test_fallbacks_that_break_events_are_refused() {
    let config = InterpreterConfig {
        fallbacks: Fallbacks {
            money_amount: 0.0,
            stock_quantity: 0,
            counterparty: String::new(),
            item: "  ".to_string(),
        },
        devanagari_names: false,
    };
    let err = CommandInterpreter::new(Lexicon::default(), config).unwrap_err();
    assert!(matches!(
        err,
        TextProcessingError::InvalidFallback { field: "money_amount", .. }
    ));
}
