//! Regular-expression search drivers
//!
//! Two ways to search besides joker matching: a raw pattern over free text
//! and a positional glob over a word list.

pub mod glob;
pub mod grep;

pub use glob::GlobSearch;
pub use grep::RegexSearch;
