//! Search commands
//!
//! Prepares one of the three search modes over its source text and runs
//! queries against it.

use crate::core::{Alphabet, DEFAULT_LOCALE, LocaleRegistry};
use crate::error::Result;
use crate::matching::MatchEngine;
use crate::search::{GlobSearch, RegexSearch};
use log::info;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// How queries are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Position-agnostic joker matching over a word list
    Joker,
    /// Positional wildcard matching over a word list
    Glob,
    /// Regular expression over free text
    Grep,
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Joker => "joker",
            Self::Glob => "glob",
            Self::Grep => "grep",
        };
        f.write_str(name)
    }
}

/// Configuration for a search session
pub struct SearchConfig {
    pub mode: SearchMode,
    pub locale: String,
}

impl SearchConfig {
    #[must_use]
    pub fn new(mode: SearchMode) -> Self {
        Self {
            mode,
            locale: DEFAULT_LOCALE.to_string(),
        }
    }

    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }
}

/// One line of search output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub text: String,
    /// Letters that filled the jokers, for joker queries with at least one
    pub jokers: Option<String>,
}

/// Result of one query
pub struct SearchReport {
    pub query: String,
    pub hits: Vec<SearchHit>,
    pub duration: Duration,
}

/// A search mode bound to its prepared source
#[derive(Debug)]
pub enum Searcher {
    Joker(MatchEngine),
    Glob {
        entries: Vec<String>,
        alphabet: Arc<Alphabet>,
    },
    Grep {
        text: String,
    },
}

impl Searcher {
    /// Prepare `source` for repeated queries
    ///
    /// Word-list modes treat each trimmed non-blank line of `source` as one
    /// entry. Grep keeps `source` as is.
    ///
    /// # Errors
    /// Returns [`Error::NotFound`](crate::Error::NotFound) if the configured
    /// locale is not registered.
    pub fn new(config: &SearchConfig, source: String, registry: &LocaleRegistry) -> Result<Self> {
        let searcher = match config.mode {
            SearchMode::Joker => {
                let entries = dictionary_lines(&source);
                Self::Joker(MatchEngine::new(&entries, &config.locale, registry)?)
            }
            SearchMode::Glob => Self::Glob {
                alphabet: registry.resolve_shared(&config.locale)?,
                entries: dictionary_lines(&source)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            },
            SearchMode::Grep => Self::Grep { text: source },
        };
        info!("Prepared {} search ({} entries)", config.mode, searcher.len());
        Ok(searcher)
    }

    #[must_use]
    pub const fn mode(&self) -> SearchMode {
        match self {
            Self::Joker(_) => SearchMode::Joker,
            Self::Glob { .. } => SearchMode::Glob,
            Self::Grep { .. } => SearchMode::Grep,
        }
    }

    /// Number of entries searched, or lines for grep
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Joker(engine) => engine.len(),
            Self::Glob { entries, .. } => entries.len(),
            Self::Grep { text } => text.lines().count(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run one query
    ///
    /// # Errors
    /// Returns [`Error::Pattern`](crate::Error::Pattern) if a glob or grep
    /// query does not compile. Joker queries never fail.
    pub fn run(&self, query: &str) -> Result<SearchReport> {
        let start = Instant::now();

        let hits = match self {
            Self::Joker(engine) => engine
                .search(query)
                .into_iter()
                .map(|result| SearchHit {
                    text: result.text.to_string(),
                    jokers: (!result.joker_letters.is_empty()).then(|| result.joker_string()),
                })
                .collect(),
            Self::Glob { entries, alphabet } => GlobSearch::new(query, Arc::clone(alphabet))?
                .filter(entries)
                .into_iter()
                .map(plain_hit)
                .collect(),
            Self::Grep { text } => RegexSearch::new(query)?
                .find_all(text)
                .into_iter()
                .map(plain_hit)
                .collect(),
        };

        Ok(SearchReport {
            query: query.to_string(),
            hits,
            duration: start.elapsed(),
        })
    }
}

fn plain_hit(text: &str) -> SearchHit {
    SearchHit {
        text: text.to_string(),
        jokers: None,
    }
}

fn dictionary_lines(source: &str) -> Vec<&str> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
