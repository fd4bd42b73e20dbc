//! Joker search over a preprocessed word list

use super::LetterBag;
use crate::core::{Alphabet, Letter, LocaleRegistry, Word};
use crate::error::Result;
use log::debug;
use rayon::prelude::*;
use std::sync::Arc;

/// Wildcard marker in joker queries
pub const JOKER: char = '?';

/// One dictionary entry reduced to its lowercase letters and their bag
#[derive(Debug, Clone)]
struct IndexedEntry {
    lower: Word,
    bag: LetterBag,
}

impl IndexedEntry {
    fn new(text: &str, locale: &str, alphabet: &Arc<Alphabet>) -> Self {
        let lower = Word::with_alphabet(text, locale, Arc::clone(alphabet)).tolower();
        let bag = lower.iter().collect();
        Self { lower, bag }
    }

    /// Find one of this entry's own letters by hash
    fn letter_for_hash(&self, hash: u64) -> Option<Letter<'_>> {
        self.lower.iter().find(|letter| letter.content_hash() == hash)
    }
}

/// A dictionary entry accepted by a joker query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult<'a> {
    /// Position of the entry in the dictionary
    pub index: usize,
    /// Lowercase form of the entry
    pub text: &'a str,
    /// Letters that fill the joker slots, in hash order
    pub joker_letters: Vec<Letter<'a>>,
}

impl MatchResult<'_> {
    /// Joker letters concatenated into one string
    #[must_use]
    pub fn joker_string(&self) -> String {
        self.joker_letters
            .iter()
            .map(|letter| letter.to_text())
            .collect()
    }
}

/// Position-agnostic wildcard search over a word list
///
/// The word list is tokenized and reduced to letter bags once; every query
/// reuses that index. A query matches an entry of the same letter length
/// when the entry's letters are exactly the query's known letters (up to
/// multiplicity) plus one letter per joker. Letter positions are not
/// compared, so `b?b` accepts `abb`.
#[derive(Debug)]
pub struct MatchEngine {
    locale: String,
    alphabet: Arc<Alphabet>,
    entries: Vec<IndexedEntry>,
}

impl MatchEngine {
    /// Preprocess `dictionary` under the alphabet registered for `locale`
    ///
    /// # Errors
    /// Returns [`Error::NotFound`](crate::Error::NotFound) if `locale` is
    /// not registered.
    ///
    /// # Examples
    /// ```
    /// use letterbag::core::{DEFAULT_LOCALE, LocaleRegistry};
    /// use letterbag::matching::MatchEngine;
    ///
    /// let registry = LocaleRegistry::new();
    /// let engine = MatchEngine::new(&["cat", "cot", "dog"], DEFAULT_LOCALE, &registry).unwrap();
    ///
    /// let results = engine.search("c?t");
    /// assert_eq!(results.len(), 2);
    /// assert_eq!(results[0].text, "cat");
    /// assert_eq!(results[0].joker_string(), "a");
    /// assert_eq!(results[1].joker_string(), "o");
    /// ```
    pub fn new<S>(dictionary: &[S], locale: &str, registry: &LocaleRegistry) -> Result<Self>
    where
        S: AsRef<str> + Sync,
    {
        let alphabet = registry.resolve_shared(locale)?;
        Ok(Self::with_alphabet(dictionary, locale, alphabet))
    }

    /// Preprocess `dictionary` under an already resolved alphabet
    ///
    /// Entries are tokenized in parallel; their order is preserved.
    pub fn with_alphabet<S>(dictionary: &[S], locale: &str, alphabet: Arc<Alphabet>) -> Self
    where
        S: AsRef<str> + Sync,
    {
        let entries: Vec<IndexedEntry> = dictionary
            .par_iter()
            .map(|text| IndexedEntry::new(text.as_ref(), locale, &alphabet))
            .collect();

        debug!(
            "Indexed {} dictionary entries for locale '{locale}'",
            entries.len()
        );

        Self {
            locale: locale.to_string(),
            alphabet,
            entries,
        }
    }

    /// Number of indexed entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Find every entry reconcilable with `query`
    ///
    /// Each [`JOKER`] in `query` stands for exactly one unknown letter.
    /// Results come in dictionary order.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<MatchResult<'_>> {
        let query = Word::with_alphabet(query, self.locale.as_str(), Arc::clone(&self.alphabet))
            .tolower();
        let query_len = query.len();
        let jokers = query.text().matches(JOKER).count();

        let mut joker_buf = [0u8; 4];
        let joker_letter = Letter::new(JOKER.encode_utf8(&mut joker_buf));
        let known: LetterBag = query.iter().filter(|&letter| letter != joker_letter).collect();

        let results: Vec<MatchResult<'_>> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.lower.len() == query_len)
            .filter(|(_, entry)| known.intersection_len(&entry.bag) + jokers == query_len)
            .map(|(index, entry)| MatchResult {
                index,
                text: entry.lower.text(),
                joker_letters: self.joker_letters(entry, &known),
            })
            .collect();

        debug!(
            "Query '{}' ({query_len} letters, {jokers} jokers): {} matches",
            query.text(),
            results.len()
        );
        results
    }

    /// Letters left in `entry` once the query's known letters are removed
    fn joker_letters<'a>(&'a self, entry: &'a IndexedEntry, known: &LetterBag) -> Vec<Letter<'a>> {
        entry
            .bag
            .difference(known)
            .hashes()
            .filter_map(|hash| {
                // Every residual hash comes from the entry, whose letters are
                // exact; the alphabet is only consulted as a last resort.
                entry
                    .letter_for_hash(hash)
                    .or_else(|| self.alphabet.letter_for_hash(hash).ok())
            })
            .collect()
    }
}

/// Run one joker query over `dictionary` without keeping the index
///
/// Returns each matching entry's lowercase text with its joker letters, in
/// dictionary order. Build a [`MatchEngine`] instead when running more than
/// one query over the same word list.
///
/// # Errors
/// Returns [`Error::NotFound`](crate::Error::NotFound) if `locale` is not
/// registered.
///
/// # Examples
/// ```
/// use letterbag::core::{DEFAULT_LOCALE, LocaleRegistry};
/// use letterbag::matching::search;
///
/// let results = search(&["cat", "cot", "dog"], "c?t", DEFAULT_LOCALE, &LocaleRegistry::new()).unwrap();
/// assert_eq!(results[0], ("cat".to_string(), vec!["a".to_string()]));
/// ```
pub fn search<S>(
    dictionary: &[S],
    query: &str,
    locale: &str,
    registry: &LocaleRegistry,
) -> Result<Vec<(String, Vec<String>)>>
where
    S: AsRef<str> + Sync,
{
    let engine = MatchEngine::new(dictionary, locale, registry)?;
    Ok(engine
        .search(query)
        .into_iter()
        .map(|result| {
            let jokers = result
                .joker_letters
                .iter()
                .map(|letter| letter.to_text().into_owned())
                .collect();
            (result.text.to_string(), jokers)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DEFAULT_LOCALE;

    fn english(dictionary: &[&str]) -> MatchEngine {
        MatchEngine::new(dictionary, DEFAULT_LOCALE, &LocaleRegistry::new()).unwrap()
    }

    fn summary(results: &[MatchResult<'_>]) -> Vec<(String, String)> {
        results
            .iter()
            .map(|r| (r.text.to_string(), r.joker_string()))
            .collect()
    }

    #[test]
    fn single_joker_reports_missing_letter() {
        let engine = english(&["cat", "cot", "dog"]);
        let results = engine.search("c?t");

        assert_eq!(
            summary(&results),
            vec![
                ("cat".to_string(), "a".to_string()),
                ("cot".to_string(), "o".to_string()),
            ]
        );
        assert_eq!(results[0].index, 0);
        assert_eq!(results[1].index, 1);
    }

    #[test]
    fn matching_ignores_positions() {
        let engine = english(&["abb"]);
        let results = engine.search("b?b");

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].joker_letters, vec![Letter::new("a")]);
    }

    #[test]
    fn length_must_match() {
        let engine = english(&["cat", "cats", "ca"]);
        let results = engine.search("c?t");
        assert_eq!(summary(&results), vec![("cat".to_string(), "a".to_string())]);
    }

    #[test]
    fn zero_jokers_is_anagram_search() {
        let engine = english(&["act", "cat", "tac", "cot"]);
        let results = engine.search("tca");

        let texts: Vec<&str> = results.iter().map(|r| r.text).collect();
        assert_eq!(texts, vec!["act", "cat", "tac"]);
        assert!(results.iter().all(|r| r.joker_letters.is_empty()));
    }

    #[test]
    fn known_letters_respect_multiplicity() {
        let engine = english(&["level", "lever", "revel"]);

        // Two l's required: only "level" has them
        let results = engine.search("ll???");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].text, "level");

        let mut jokers: Vec<String> = results[0]
            .joker_letters
            .iter()
            .map(|l| l.to_text().into_owned())
            .collect();
        jokers.sort();
        assert_eq!(jokers, vec!["e", "e", "v"]);
    }

    #[test]
    fn joker_letters_are_in_hash_order() {
        let engine = english(&["stone"]);
        let results = engine.search("?????");

        assert_eq!(results.len(), 1);
        let hashes: Vec<u64> = results[0]
            .joker_letters
            .iter()
            .map(|l| l.content_hash())
            .collect();
        assert_eq!(hashes.len(), 5);
        assert!(hashes.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn query_and_entries_are_case_folded() {
        let engine = english(&["Cat", "COT"]);
        let results = engine.search("C?T");

        assert_eq!(
            summary(&results),
            vec![
                ("cat".to_string(), "a".to_string()),
                ("cot".to_string(), "o".to_string()),
            ]
        );
    }

    #[test]
    fn too_many_known_letters_rejects() {
        let engine = english(&["cat"]);
        // Known letters c, a, x: only two are shared
        assert!(engine.search("cax").is_empty());
        // Joker count must be exact, not at least
        assert!(engine.search("c??").len() == 1);
        assert!(engine.search("x??").is_empty());
    }

    #[test]
    fn multibyte_alphabet() {
        let mut registry = LocaleRegistry::new();
        registry
            .register(
                "tr",
                Alphabet::new(&["a", "ç", "ı", "k", "ş"], &["A", "Ç", "I", "K", "Ş"]).unwrap(),
            )
            .unwrap();
        let engine = MatchEngine::new(&["KAŞIK", "kaçak"], "tr", &registry).unwrap();

        let results = engine.search("ka?ık");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].text, "kaşık");
        assert_eq!(results[0].joker_letters, vec![Letter::new("ş")]);
    }

    #[test]
    fn non_alphabet_bytes_resolve_from_entry() {
        let engine = english(&["a-b"]);
        let results = engine.search("a?b");

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].joker_letters, vec![Letter::new("-")]);
    }

    #[test]
    fn joker_letters_borrow_from_the_entry() {
        let engine = english(&["cat"]);
        let results = engine.search("c?t");
        let entry = results[0].text.as_bytes().as_ptr_range();

        assert_eq!(results[0].joker_letters.len(), 1);
        assert!(entry.contains(&results[0].joker_letters[0].as_bytes().as_ptr()));
    }

    #[test]
    fn one_shot_search() {
        let registry = LocaleRegistry::new();
        let results = search(&["cat", "cot", "dog"], "c?t", DEFAULT_LOCALE, &registry).unwrap();

        assert_eq!(
            results,
            vec![
                ("cat".to_string(), vec!["a".to_string()]),
                ("cot".to_string(), vec!["o".to_string()]),
            ]
        );
        assert!(search(&["dog"], "c?t", DEFAULT_LOCALE, &registry).unwrap().is_empty());
    }

    #[test]
    fn one_shot_search_unknown_locale_fails() {
        let registry = LocaleRegistry::new();
        assert!(matches!(
            search(&["cat"], "c?t", "xx", &registry),
            Err(crate::Error::NotFound(_))
        ));
    }

    #[test]
    fn unknown_locale_fails() {
        let registry = LocaleRegistry::new();
        assert!(matches!(
            MatchEngine::new(&["cat"], "xx", &registry),
            Err(crate::Error::NotFound(_))
        ));
    }

    #[test]
    fn empty_dictionary_and_query() {
        let engine = english(&[]);
        assert!(engine.is_empty());
        assert!(engine.search("c?t").is_empty());

        let engine = english(&["", "a"]);
        let results = engine.search("");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].index, 0);
    }

    #[test]
    fn engine_is_reusable_across_queries() {
        let engine = english(&["cat", "cot", "cut", "dog"]);
        assert_eq!(engine.len(), 4);
        assert_eq!(engine.search("c?t").len(), 3);
        assert_eq!(engine.search("?og").len(), 1);
        assert_eq!(engine.search("???").len(), 4);
    }
}
