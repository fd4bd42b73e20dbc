//! Positional glob search over a word list
//!
//! A glob query is a word in which `?` stands for exactly one letter and `*`
//! for one or more. Unlike joker matching, positions matter. Spaces count as
//! letters so multi-word entries can be matched.

use crate::core::{Alphabet, LetterCase, lowercase};
use crate::error::Result;
use log::debug;
use regex::Regex;
use std::sync::Arc;

/// Single-letter wildcard
pub const ANY_LETTER: char = '?';
/// One-or-more-letters wildcard
pub const ANY_LETTERS: char = '*';

/// Compiled glob query bound to one alphabet
#[derive(Debug, Clone)]
pub struct GlobSearch {
    regex: Regex,
    alphabet: Arc<Alphabet>,
}

impl GlobSearch {
    /// Compile `query` under `alphabet`
    ///
    /// The query is lowercased first. Literal characters are escaped, so only
    /// the two wildcards are special.
    ///
    /// # Errors
    /// Returns [`Error::Pattern`](crate::Error::Pattern) if the generated
    /// expression fails to compile.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use letterbag::core::Alphabet;
    /// use letterbag::search::GlobSearch;
    ///
    /// let glob = GlobSearch::new("C?T", Arc::new(Alphabet::ascii())).unwrap();
    /// assert!(glob.matches("cat"));
    /// assert!(!glob.matches("act"));
    /// ```
    pub fn new(query: &str, alphabet: Arc<Alphabet>) -> Result<Self> {
        let letter = alphabet.pattern_fragment(LetterCase::Lower);
        let any_letter = if letter.is_empty() {
            " ".to_string()
        } else {
            format!("(?:{letter}| )")
        };

        let mut pattern = String::from("^");
        for ch in lowercase(query, &alphabet).chars() {
            match ch {
                ANY_LETTER => pattern.push_str(&any_letter),
                ANY_LETTERS => {
                    pattern.push_str(&any_letter);
                    pattern.push('+');
                }
                _ => pattern.push_str(&regex::escape(ch.encode_utf8(&mut [0u8; 4]))),
            }
        }
        pattern.push('$');

        debug!("Glob '{query}' compiled to {pattern}");
        let regex = Regex::new(&pattern)?;
        Ok(Self { regex, alphabet })
    }

    /// Whether the lowercase form of `entry` matches
    #[must_use]
    pub fn matches(&self, entry: &str) -> bool {
        self.regex.is_match(&lowercase(entry, &self.alphabet))
    }

    /// Matching entries in input order
    pub fn filter<'e, S: AsRef<str>>(&self, entries: &'e [S]) -> Vec<&'e str> {
        entries
            .iter()
            .map(|entry| entry.as_ref())
            .filter(|entry| self.matches(entry))
            .collect()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}
