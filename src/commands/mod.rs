//! Command implementations

pub mod benchmark;
pub mod letters;
pub mod repl;
pub mod search;

pub use benchmark::{BenchConfig, BenchmarkResult, run_benchmark};
pub use letters::{AlphabetSummary, describe_alphabet};
pub use repl::run_interactive;
pub use search::{SearchConfig, SearchHit, SearchMode, SearchReport, Searcher};
