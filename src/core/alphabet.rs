//! Alphabet: the closed letter set of a writing system and its case pairing
//!
//! An alphabet is built once from two parallel lists, lowercase and
//! uppercase, where the entries at the same index form one case pair. Letters
//! are keyed internally by [`Letter::content_hash`].

use super::Letter;
use crate::error::{Error, Result};
use log::debug;
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

/// Characters that may not occur anywhere inside a letter
///
/// Letters are spliced verbatim into generated regex patterns, so none of
/// them may carry pattern metasyntax.
pub const RESERVED_CHARACTERS: &[char] = &[
    '\\', '^', '$', '.', '|', '?', '*', '+', '(', ')', '[', ']', '{', '}',
];

/// Which part of the alphabet an operation applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterCase {
    Lower,
    Upper,
    All,
}

/// An immutable, bidirectional case-mapping table over a fixed letter set
#[derive(Debug, Clone)]
pub struct Alphabet {
    lowercase: FxHashMap<u64, String>,
    uppercase: FxHashMap<u64, String>,
    to_lower: FxHashMap<u64, u64>,
    to_upper: FxHashMap<u64, u64>,
    /// (lower, upper) hashes in construction order
    pairs: Vec<(u64, u64)>,
    max_lower_len: usize,
    max_upper_len: usize,
}

impl Alphabet {
    /// Define an alphabet from paired lowercase and uppercase letters
    ///
    /// The entries at the same index form one case pair.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if:
    /// - The lists differ in length
    /// - Any letter is empty or contains a [`RESERVED_CHARACTERS`] entry
    /// - Either list contains a duplicate
    /// - Two distinct letters share a content hash
    ///
    /// # Examples
    /// ```
    /// use letterbag::core::{Alphabet, Letter};
    ///
    /// let alphabet = Alphabet::new(&["ç", "ş"], &["Ç", "Ş"]).unwrap();
    /// assert_eq!(alphabet.tolower(Letter::new("Ş")), Letter::new("ş"));
    ///
    /// assert!(Alphabet::new(&["a"], &["A", "B"]).is_err());
    /// assert!(Alphabet::new(&["a."], &["A."]).is_err());
    /// ```
    pub fn new<S: AsRef<str>>(lowercase: &[S], uppercase: &[S]) -> Result<Self> {
        if lowercase.len() != uppercase.len() {
            return Err(Error::invalid_argument(format!(
                "Lowercase letter count must be equal to uppercase letter count [{} vs {}]",
                lowercase.len(),
                uppercase.len()
            )));
        }

        for text in lowercase.iter().chain(uppercase).map(|text| text.as_ref()) {
            if text.is_empty() {
                return Err(Error::invalid_argument("Letter is empty"));
            }
            if text.contains(RESERVED_CHARACTERS) {
                return Err(Error::invalid_argument(format!(
                    "Letter contains regex special character: {text}"
                )));
            }
        }

        let mut alphabet = Self {
            lowercase: FxHashMap::default(),
            uppercase: FxHashMap::default(),
            to_lower: FxHashMap::default(),
            to_upper: FxHashMap::default(),
            pairs: Vec::with_capacity(lowercase.len()),
            max_lower_len: 0,
            max_upper_len: 0,
        };
        // Every distinct text seen so far, across both cases
        let mut seen: FxHashMap<u64, &str> = FxHashMap::default();

        for (lower, upper) in lowercase.iter().zip(uppercase) {
            let (lower, upper) = (lower.as_ref(), upper.as_ref());
            let lower_hash = checked_hash(&mut seen, lower)?;
            let upper_hash = checked_hash(&mut seen, upper)?;

            if alphabet.lowercase.insert(lower_hash, lower.to_owned()).is_some() {
                return Err(Error::invalid_argument(format!(
                    "Lowercase letter is duplicate: {lower}"
                )));
            }
            if alphabet.uppercase.insert(upper_hash, upper.to_owned()).is_some() {
                return Err(Error::invalid_argument(format!(
                    "Uppercase letter is duplicate: {upper}"
                )));
            }

            alphabet.to_lower.insert(upper_hash, lower_hash);
            alphabet.to_upper.insert(lower_hash, upper_hash);
            alphabet.pairs.push((lower_hash, upper_hash));
            alphabet.max_lower_len = alphabet.max_lower_len.max(lower.len());
            alphabet.max_upper_len = alphabet.max_upper_len.max(upper.len());
        }

        debug!(
            "Built alphabet with {} case pairs (max letter length {} bytes)",
            alphabet.pairs.len(),
            alphabet.max_letter_len(LetterCase::All)
        );
        Ok(alphabet)
    }

    /// Plain ASCII alphabet, `a`-`z` paired with `A`-`Z`
    #[must_use]
    pub fn ascii() -> Self {
        let lowercase: Vec<String> = ('a'..='z').map(String::from).collect();
        let uppercase: Vec<String> = ('A'..='Z').map(String::from).collect();
        // ASCII letters are distinct and carry no reserved characters
        Self::new(&lowercase, &uppercase).unwrap_or_else(|_| unreachable!())
    }

    /// Number of case pairs
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Map an uppercase letter to its lowercase pair
    ///
    /// Letters that are not registered uppercase letters are returned
    /// unchanged, so foreign characters pass through a conversion.
    #[must_use]
    pub fn tolower<'a>(&'a self, letter: Letter<'a>) -> Letter<'a> {
        Self::convert(&self.uppercase, &self.to_lower, &self.lowercase, letter)
    }

    /// Map a lowercase letter to its uppercase pair
    ///
    /// Letters that are not registered lowercase letters are returned
    /// unchanged.
    #[must_use]
    pub fn toupper<'a>(&'a self, letter: Letter<'a>) -> Letter<'a> {
        Self::convert(&self.lowercase, &self.to_upper, &self.uppercase, letter)
    }

    fn convert<'a>(
        from: &FxHashMap<u64, String>,
        mapping: &FxHashMap<u64, u64>,
        to: &'a FxHashMap<u64, String>,
        letter: Letter<'a>,
    ) -> Letter<'a> {
        let hash = letter.content_hash();
        let registered = from
            .get(&hash)
            .is_some_and(|text| text.as_bytes() == letter.as_bytes());
        if !registered {
            return letter;
        }
        mapping
            .get(&hash)
            .and_then(|target| to.get(target))
            .map_or(letter, |text| Letter::new(text))
    }

    /// Snapshot of the requested letters, ordered by byte content
    #[must_use]
    pub fn letters(&self, case: LetterCase) -> BTreeSet<Letter<'_>> {
        self.texts(case).into_iter().map(Letter::new).collect()
    }

    #[must_use]
    pub fn lowercase_letters(&self) -> BTreeSet<Letter<'_>> {
        self.letters(LetterCase::Lower)
    }

    #[must_use]
    pub fn uppercase_letters(&self) -> BTreeSet<Letter<'_>> {
        self.letters(LetterCase::Upper)
    }

    #[must_use]
    pub fn all_letters(&self) -> BTreeSet<Letter<'_>> {
        self.letters(LetterCase::All)
    }

    /// Case pairs in construction order
    #[must_use]
    pub fn pairs(&self) -> Vec<(Letter<'_>, Letter<'_>)> {
        self.pairs
            .iter()
            .filter_map(|(lower, upper)| {
                Some((
                    Letter::new(self.lowercase.get(lower)?),
                    Letter::new(self.uppercase.get(upper)?),
                ))
            })
            .collect()
    }

    /// Regex alternation matching any one of the requested letters
    ///
    /// Similar to `[a-z]` for ASCII, but letters may span several
    /// characters, so the result is a group like `(a|b|c)`. An empty subset
    /// yields an empty string.
    ///
    /// # Examples
    /// ```
    /// use letterbag::core::{Alphabet, LetterCase};
    ///
    /// let alphabet = Alphabet::new(&["b", "a"], &["B", "A"]).unwrap();
    /// assert_eq!(alphabet.pattern_fragment(LetterCase::Lower), "(a|b)");
    /// assert_eq!(alphabet.pattern_fragment(LetterCase::All), "(A|B|a|b)");
    /// ```
    #[must_use]
    pub fn pattern_fragment(&self, case: LetterCase) -> String {
        let texts = self.texts(case);
        if texts.is_empty() {
            return String::new();
        }
        let alternatives: Vec<&str> = texts.into_iter().collect();
        format!("({})", alternatives.join("|"))
    }

    /// Reverse lookup from a content hash to a registered letter
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] if no letter of this alphabet has `hash`.
    pub fn letter_for_hash(&self, hash: u64) -> Result<Letter<'_>> {
        self.lowercase
            .get(&hash)
            .or_else(|| self.uppercase.get(&hash))
            .map(|text| Letter::new(text))
            .ok_or_else(|| Error::not_found(format!("No letter with hash {hash:#018x}")))
    }

    /// Check whether `bytes` is exactly one registered letter of either case
    #[must_use]
    pub fn contains(&self, bytes: &[u8]) -> bool {
        let hash = Letter::from_bytes(bytes).content_hash();
        [&self.lowercase, &self.uppercase].into_iter().any(|table| {
            table
                .get(&hash)
                .is_some_and(|text| text.as_bytes() == bytes)
        })
    }

    /// Maximum byte length of a letter in the requested subset, 0 if empty
    #[must_use]
    pub const fn max_letter_len(&self, case: LetterCase) -> usize {
        match case {
            LetterCase::Lower => self.max_lower_len,
            LetterCase::Upper => self.max_upper_len,
            LetterCase::All => {
                if self.max_lower_len > self.max_upper_len {
                    self.max_lower_len
                } else {
                    self.max_upper_len
                }
            }
        }
    }

    fn texts(&self, case: LetterCase) -> BTreeSet<&str> {
        let lower = self.lowercase.values().map(String::as_str);
        let upper = self.uppercase.values().map(String::as_str);
        match case {
            LetterCase::Lower => lower.collect(),
            LetterCase::Upper => upper.collect(),
            LetterCase::All => lower.chain(upper).collect(),
        }
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::ascii()
    }
}

/// Hash `text`, failing if a different text already produced the same hash
fn checked_hash<'s>(seen: &mut FxHashMap<u64, &'s str>, text: &'s str) -> Result<u64> {
    let hash = Letter::new(text).content_hash();
    match seen.get(&hash) {
        Some(&existing) if existing != text => Err(Error::invalid_argument(format!(
            "Letters {existing:?} and {text:?} share content hash {hash:#018x}"
        ))),
        Some(_) => Ok(hash),
        None => {
            seen.insert(hash, text);
            Ok(hash)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turkish_subset() -> Alphabet {
        Alphabet::new(&["a", "ç", "ı", "i", "ş"], &["A", "Ç", "I", "İ", "Ş"]).unwrap()
    }

    #[test]
    fn new_rejects_length_mismatch() {
        let err = Alphabet::new(&["a", "b"], &["A"]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert!(err.to_string().contains("[2 vs 1]"));
    }

    #[test]
    fn new_rejects_reserved_characters() {
        for &reserved in RESERVED_CHARACTERS {
            let lower = format!("a{reserved}");
            let result = Alphabet::new(&[lower.as_str()], &["A"]);
            assert!(
                matches!(result, Err(Error::InvalidArgument(_))),
                "{reserved:?} should be rejected"
            );
        }
        // Uppercase side is checked too
        assert!(Alphabet::new(&["a"], &["A*"]).is_err());
    }

    #[test]
    fn new_rejects_duplicates_within_one_case() {
        assert!(matches!(
            Alphabet::new(&["a", "a"], &["A", "B"]),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            Alphabet::new(&["a", "b"], &["A", "A"]),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn new_allows_duplicates_across_cases() {
        // A letter without case distinction pairs with itself
        let alphabet = Alphabet::new(&["a", "ß"], &["A", "ß"]).unwrap();
        assert_eq!(alphabet.len(), 2);
        assert_eq!(alphabet.tolower(Letter::new("ß")), Letter::new("ß"));
        assert_eq!(alphabet.toupper(Letter::new("ß")), Letter::new("ß"));
    }

    #[test]
    fn new_rejects_empty_letter() {
        assert!(Alphabet::new(&[""], &["A"]).is_err());
    }

    #[test]
    fn new_accepts_empty_lists() {
        let alphabet = Alphabet::new::<&str>(&[], &[]).unwrap();
        assert!(alphabet.is_empty());
        assert_eq!(alphabet.max_letter_len(LetterCase::All), 0);
        assert_eq!(alphabet.pattern_fragment(LetterCase::All), "");
    }

    #[test]
    fn case_conversion_round_trips() {
        let alphabet = turkish_subset();
        for lower in alphabet.lowercase_letters() {
            let upper = alphabet.toupper(lower);
            assert_ne!(upper, lower);
            assert_eq!(alphabet.tolower(upper), lower);
        }
        for upper in alphabet.uppercase_letters() {
            assert_eq!(alphabet.toupper(alphabet.tolower(upper)), upper);
        }
    }

    #[test]
    fn case_pairing_is_by_index_not_content() {
        let alphabet = turkish_subset();
        assert_eq!(alphabet.toupper(Letter::new("i")), Letter::new("İ"));
        assert_eq!(alphabet.toupper(Letter::new("ı")), Letter::new("I"));
        assert_eq!(alphabet.tolower(Letter::new("I")), Letter::new("ı"));
    }

    #[test]
    fn unknown_letters_pass_through() {
        let alphabet = turkish_subset();
        assert_eq!(alphabet.tolower(Letter::new("Z")), Letter::new("Z"));
        assert_eq!(alphabet.toupper(Letter::new("-")), Letter::new("-"));
        // Already lowercase stays as is
        assert_eq!(alphabet.tolower(Letter::new("ç")), Letter::new("ç"));
    }

    #[test]
    fn letter_sets_are_byte_ordered() {
        let alphabet = Alphabet::new(&["c", "a", "b"], &["C", "A", "B"]).unwrap();
        let lower: Vec<_> = alphabet.lowercase_letters().into_iter().collect();
        assert_eq!(
            lower,
            vec![Letter::new("a"), Letter::new("b"), Letter::new("c")]
        );
        assert_eq!(alphabet.all_letters().len(), 6);
    }

    #[test]
    fn pairs_keep_construction_order() {
        let alphabet = Alphabet::new(&["c", "a"], &["C", "A"]).unwrap();
        assert_eq!(
            alphabet.pairs(),
            vec![
                (Letter::new("c"), Letter::new("C")),
                (Letter::new("a"), Letter::new("A")),
            ]
        );
    }

    #[test]
    fn pattern_fragment_per_case() {
        let alphabet = Alphabet::new(&["a", "ch"], &["A", "CH"]).unwrap();
        assert_eq!(alphabet.pattern_fragment(LetterCase::Lower), "(a|ch)");
        assert_eq!(alphabet.pattern_fragment(LetterCase::Upper), "(A|CH)");
        assert_eq!(alphabet.pattern_fragment(LetterCase::All), "(A|CH|a|ch)");
    }

    #[test]
    fn letter_for_hash_finds_both_cases() {
        let alphabet = turkish_subset();
        let lower = Letter::new("ş");
        let upper = Letter::new("Ş");
        assert_eq!(alphabet.letter_for_hash(lower.content_hash()).unwrap(), lower);
        assert_eq!(alphabet.letter_for_hash(upper.content_hash()).unwrap(), upper);
    }

    #[test]
    fn letter_for_hash_unknown_fails() {
        let alphabet = turkish_subset();
        let hash = Letter::new("q").content_hash();
        assert!(matches!(
            alphabet.letter_for_hash(hash),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn contains_checks_exact_letters() {
        let alphabet = turkish_subset();
        assert!(alphabet.contains("ç".as_bytes()));
        assert!(alphabet.contains(b"A"));
        assert!(!alphabet.contains(b"c"));
        assert!(!alphabet.contains(&"ç".as_bytes()[..1]));
    }

    #[test]
    fn max_letter_len_per_case() {
        let alphabet = Alphabet::new(&["a", "ch"], &["A", "Ç"]).unwrap();
        assert_eq!(alphabet.max_letter_len(LetterCase::Lower), 2);
        assert_eq!(alphabet.max_letter_len(LetterCase::Upper), 2);
        assert_eq!(Alphabet::ascii().max_letter_len(LetterCase::All), 1);
    }

    #[test]
    fn ascii_alphabet_pairs_by_position() {
        let alphabet = Alphabet::ascii();
        assert_eq!(alphabet.len(), 26);
        assert_eq!(alphabet.toupper(Letter::new("q")), Letter::new("Q"));
        assert_eq!(alphabet.tolower(Letter::new("Z")), Letter::new("z"));
    }
}
