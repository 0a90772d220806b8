//! Command interpretation for EchoBiz
//!
//! Turns short shop-keeping utterances in English, Hindi (Devanagari) and
//! Hinglish into ledger entries:
//!
//! - **Intent**: keyword classification into credit, debit, stock added,
//!   stock reduced or unrecognized
//! - **Quantity**: first number in the utterance, with defaults
//! - **Names**: counterparty for money, item for stock
//! - **Interpreter**: classifier and extractors wired together
//!
//! # Example
//!
//! ```
//! use echobiz_text_processing::CommandInterpreter;
//!
//! let interpreter = CommandInterpreter::with_defaults().unwrap();
//! let entry = interpreter.interpret("500 diya Suresh ko").unwrap();
//! assert_eq!(entry.name(), "Suresh");
//! ```

pub mod error;
pub mod hindi;
pub mod intent;
pub mod interpreter;
pub mod lexicon;
pub mod matching;
pub mod names;
pub mod quantity;

pub use error::{Result, TextProcessingError};
pub use intent::IntentClassifier;
pub use interpreter::{CommandInterpreter, InterpreterConfig};
pub use lexicon::Lexicon;
pub use names::{ItemNameExtractor, NameMatch, PersonNameExtractor};
pub use quantity::QuantityExtractor;
