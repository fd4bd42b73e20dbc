//! Core letter model
//!
//! Letters, alphabets, the locale registry and the word tokenizer. These are
//! pure in-memory types with no I/O.

mod alphabet;
mod letter;
mod locale;
mod word;

pub use alphabet::{Alphabet, LetterCase, RESERVED_CHARACTERS};
pub use letter::Letter;
pub use locale::{DEFAULT_LOCALE, LocaleRegistry};
pub use word::{Word, lowercase, tokenize, uppercase};
