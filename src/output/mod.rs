//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_alphabet_summary, print_benchmark_result, print_search_report, write_search_report,
};
