//! Letterbag
//!
//! Locale-aware letter handling and wildcard word search. Text is segmented
//! into letters of a per-locale alphabet, which may hold multi-byte letters,
//! and dictionary entries are matched against queries in which `?` stands
//! for an unknown letter.
//!
//! # Quick Start
//!
//! ```rust
//! use letterbag::core::{DEFAULT_LOCALE, LocaleRegistry};
//! use letterbag::matching::MatchEngine;
//!
//! let registry = LocaleRegistry::new();
//! let engine = MatchEngine::new(&["cat", "cot", "dog"], DEFAULT_LOCALE, &registry).unwrap();
//!
//! for result in engine.search("c?t") {
//!     println!("{} {}", result.text, result.joker_string());
//! }
//! ```

// Core domain types
pub mod core;

// Joker matching
pub mod matching;

// Regex and glob search
pub mod search;

// Word lists and alphabet files
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Error types
pub mod error;

pub use error::{Error, Result};
