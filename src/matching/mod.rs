//! Joker (wildcard) matching over letter multisets
//!
//! Entries are compared as bags of letters, not as sequences: a query
//! matches when its known letters plus one letter per joker make up the
//! entry exactly.

mod bag;
mod engine;

pub use bag::LetterBag;
pub use engine::{JOKER, MatchEngine, MatchResult, search};
