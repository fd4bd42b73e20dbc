//! Word representation and letter tokenization
//!
//! A Word stores a raw string together with its segmentation into letters
//! under one locale's alphabet.

use super::{Alphabet, Letter, LetterCase, LocaleRegistry};
use crate::error::Result;
use std::fmt;
use std::sync::Arc;

/// Segment `raw` into letters of `alphabet`
///
/// Scans left to right. At each offset the candidate lengths `1..=M` are
/// tried in increasing order, where `M` is the longest letter of the
/// alphabet, and the first (shortest) candidate that is a registered letter
/// wins. Bytes that start no letter are emitted one at a time.
///
/// Matching is shortest-first, not longest-first: if one letter is a byte
/// prefix of another, the longer one is never produced.
///
/// # Examples
/// ```
/// use letterbag::core::{Alphabet, Letter, tokenize};
///
/// let alphabet = Alphabet::new(&["a", "ab"], &["A", "AB"]).unwrap();
/// let letters = tokenize("ab", &alphabet);
/// assert_eq!(letters, vec![Letter::new("a"), Letter::new("b")]);
/// ```
#[must_use]
pub fn tokenize<'a>(raw: &'a str, alphabet: &Alphabet) -> Vec<Letter<'a>> {
    let bytes = raw.as_bytes();
    letter_spans(bytes, alphabet)
        .into_iter()
        .map(|(start, end)| Letter::from_bytes(&bytes[start..end]))
        .collect()
}

/// Lowercase `text` letter by letter under `alphabet`
///
/// Letters outside the alphabet are copied unchanged.
#[must_use]
pub fn lowercase(text: &str, alphabet: &Alphabet) -> String {
    join_mapped(tokenize(text, alphabet).into_iter(), alphabet, Alphabet::tolower)
}

/// Uppercase `text` letter by letter under `alphabet`
#[must_use]
pub fn uppercase(text: &str, alphabet: &Alphabet) -> String {
    join_mapped(tokenize(text, alphabet).into_iter(), alphabet, Alphabet::toupper)
}

type LetterMap = for<'a> fn(&'a Alphabet, Letter<'a>) -> Letter<'a>;

fn join_mapped<'a>(
    letters: impl Iterator<Item = Letter<'a>>,
    alphabet: &'a Alphabet,
    map: LetterMap,
) -> String {
    let mut bytes = Vec::new();
    for letter in letters {
        bytes.extend_from_slice(map(alphabet, letter).as_bytes());
    }
    // Unmapped bytes are copied through in their original order and mapped
    // letters are whole strings, so the result is valid UTF-8.
    String::from_utf8(bytes)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}

/// Byte ranges `(start, end)` of each letter in `bytes`
fn letter_spans(bytes: &[u8], alphabet: &Alphabet) -> Vec<(usize, usize)> {
    let max_letter_len = alphabet.max_letter_len(LetterCase::All);
    let mut spans = Vec::with_capacity(bytes.len());
    let mut offset = 0;

    while offset < bytes.len() {
        let remaining = bytes.len() - offset;
        let len = (1..=max_letter_len.min(remaining))
            .find(|&len| alphabet.contains(&bytes[offset..offset + len]))
            .unwrap_or(1);
        spans.push((offset, offset + len));
        offset += len;
    }

    spans
}

/// A string segmented into letters under one locale
///
/// The segmentation is computed once at construction.
#[derive(Debug, Clone)]
pub struct Word {
    text: String,
    locale: String,
    alphabet: Arc<Alphabet>,
    spans: Vec<(usize, usize)>,
}

impl Word {
    /// Tokenize `text` under the alphabet registered for `locale`
    ///
    /// # Errors
    /// Returns [`Error::NotFound`](crate::Error::NotFound) if `locale` is
    /// not registered.
    ///
    /// # Examples
    /// ```
    /// use letterbag::core::{Alphabet, LocaleRegistry, Word};
    ///
    /// let mut registry = LocaleRegistry::new();
    /// registry
    ///     .register("tr", Alphabet::new(&["ş", "i"], &["Ş", "İ"]).unwrap())
    ///     .unwrap();
    ///
    /// let word = Word::new("Şİş", "tr", &registry).unwrap();
    /// assert_eq!(word.len(), 3);
    /// assert_eq!(word.tolower().text(), "şiş");
    ///
    /// assert!(Word::new("text", "xx", &registry).is_err());
    /// ```
    pub fn new(text: impl Into<String>, locale: &str, registry: &LocaleRegistry) -> Result<Self> {
        let alphabet = registry.resolve_shared(locale)?;
        Ok(Self::with_alphabet(text, locale, alphabet))
    }

    /// Tokenize `text` under an already resolved alphabet
    pub fn with_alphabet(
        text: impl Into<String>,
        locale: impl Into<String>,
        alphabet: Arc<Alphabet>,
    ) -> Self {
        let text = text.into();
        let spans = letter_spans(text.as_bytes(), &alphabet);
        Self {
            text,
            locale: locale.into(),
            alphabet,
            spans,
        }
    }

    /// Get the raw text
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Name of the locale the word was tokenized under
    #[inline]
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    #[inline]
    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Number of letters (not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Get the letter at `index`, or `None` if out of bounds
    #[must_use]
    pub fn letter(&self, index: usize) -> Option<Letter<'_>> {
        self.spans
            .get(index)
            .map(|&(start, end)| Letter::from_bytes(&self.text.as_bytes()[start..end]))
    }

    /// Iterate over the letters in order
    pub fn iter(&self) -> impl Iterator<Item = Letter<'_>> + '_ {
        let bytes = self.text.as_bytes();
        self.spans
            .iter()
            .map(move |&(start, end)| Letter::from_bytes(&bytes[start..end]))
    }

    /// All letters in order
    #[must_use]
    pub fn letters(&self) -> Vec<Letter<'_>> {
        self.iter().collect()
    }

    /// Convert every letter to lowercase
    ///
    /// The result is re-tokenized under the same locale as `self`.
    #[must_use]
    pub fn tolower(&self) -> Self {
        self.convert(Alphabet::tolower)
    }

    /// Convert every letter to uppercase
    ///
    /// The result is re-tokenized under the same locale as `self`.
    #[must_use]
    pub fn toupper(&self) -> Self {
        self.convert(Alphabet::toupper)
    }

    fn convert(&self, map: LetterMap) -> Self {
        let text = join_mapped(self.iter(), &self.alphabet, map);
        Self::with_alphabet(text, self.locale.clone(), Arc::clone(&self.alphabet))
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text && self.locale == other.locale
    }
}

impl Eq for Word {}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DEFAULT_LOCALE;

    fn texts(letters: &[Letter<'_>]) -> Vec<String> {
        letters.iter().map(|l| l.to_text().into_owned()).collect()
    }

    fn registry_with(name: &str, lower: &[&str], upper: &[&str]) -> LocaleRegistry {
        let mut registry = LocaleRegistry::new();
        registry
            .register(name, Alphabet::new(lower, upper).unwrap())
            .unwrap();
        registry
    }

    #[test]
    fn tokenize_ascii() {
        let letters = tokenize("Cat", &Alphabet::ascii());
        assert_eq!(texts(&letters), vec!["C", "a", "t"]);
    }

    #[test]
    fn tokenize_multibyte_letters() {
        let alphabet = Alphabet::new(&["ç", "a", "y"], &["Ç", "A", "Y"]).unwrap();
        let letters = tokenize("çay", &alphabet);
        assert_eq!(texts(&letters), vec!["ç", "a", "y"]);
    }

    #[test]
    fn tokenize_round_trips_alphabet_letters() {
        let alphabet = Alphabet::new(&["a", "ch", "ş", "dž"], &["A", "CH", "Ş", "DŽ"]).unwrap();
        let sequence = ["ş", "CH", "a", "dž", "Ş", "ch", "ch", "A"];
        let raw: String = sequence.concat();

        let letters = tokenize(&raw, &alphabet);
        assert_eq!(texts(&letters), sequence);
    }

    #[test]
    fn tokenize_prefers_shortest_letter() {
        // "ab" is registered but "a" always wins first
        let alphabet = Alphabet::new(&["a", "ab"], &["A", "AB"]).unwrap();
        let letters = tokenize("ab", &alphabet);
        assert_eq!(texts(&letters), vec!["a", "b"]);

        let alphabet = Alphabet::new(&["a", "b", "ab"], &["A", "B", "AB"]).unwrap();
        let letters = tokenize("abab", &alphabet);
        assert_eq!(texts(&letters), vec!["a", "b", "a", "b"]);
    }

    #[test]
    fn tokenize_unrecognized_bytes_are_single_letters() {
        let alphabet = Alphabet::new(&["a"], &["A"]).unwrap();
        let letters = tokenize("a-ş", &alphabet);

        // "ş" is two bytes and not in the alphabet
        assert_eq!(letters.len(), 4);
        assert_eq!(letters[0], Letter::new("a"));
        assert_eq!(letters[1], Letter::new("-"));
        assert_eq!(letters[2].as_bytes(), &"ş".as_bytes()[..1]);
        assert_eq!(letters[3].as_bytes(), &"ş".as_bytes()[1..]);
    }

    #[test]
    fn tokenize_multibyte_letter_cut_off_at_end() {
        let alphabet = Alphabet::new(&["abc"], &["ABC"]).unwrap();
        let letters = tokenize("xab", &alphabet);
        assert_eq!(texts(&letters), vec!["x", "a", "b"]);
    }

    #[test]
    fn tokenize_empty_alphabet_and_input() {
        let empty = Alphabet::new::<&str>(&[], &[]).unwrap();
        assert_eq!(tokenize("ab", &empty).len(), 2);
        assert!(tokenize("", &Alphabet::ascii()).is_empty());
    }

    #[test]
    fn lowercase_and_uppercase_text() {
        let alphabet = Alphabet::new(&["ı", "i", "ş"], &["I", "İ", "Ş"]).unwrap();
        assert_eq!(lowercase("ŞIİ-x", &alphabet), "şıi-x");
        assert_eq!(uppercase("şıi-x", &alphabet), "ŞIİ-x");
    }

    #[test]
    fn word_new_unknown_locale_fails() {
        let registry = LocaleRegistry::new();
        assert!(matches!(
            Word::new("cat", "tr", &registry),
            Err(crate::Error::NotFound(_))
        ));
    }

    #[test]
    fn word_letter_access() {
        let registry = registry_with("hr", &["a", "dž", "lj"], &["A", "DŽ", "LJ"]);
        let word = Word::new("ljadž", "hr", &registry).unwrap();

        assert_eq!(word.len(), 3);
        assert_eq!(word.letter(0), Some(Letter::new("lj")));
        assert_eq!(word.letter(2), Some(Letter::new("dž")));
        assert_eq!(word.letter(3), None);
        assert_eq!(texts(&word.letters()), vec!["lj", "a", "dž"]);
    }

    #[test]
    fn word_tolower_and_toupper() {
        let registry = LocaleRegistry::new();
        let word = Word::new("Hello, World", DEFAULT_LOCALE, &registry).unwrap();

        assert_eq!(word.tolower().text(), "hello, world");
        assert_eq!(word.toupper().text(), "HELLO, WORLD");
        assert_eq!(word.tolower().len(), word.len());
    }

    #[test]
    fn word_case_conversion_keeps_locale() {
        let registry = registry_with("tr", &["ı", "i"], &["I", "İ"]);
        let word = Word::new("Iİ", "tr", &registry).unwrap();

        let lower = word.tolower();
        assert_eq!(lower.text(), "ıi");
        assert_eq!(lower.locale(), "tr");
        // Re-tokenized under the Turkish alphabet, not ASCII
        assert_eq!(lower.len(), 2);
        assert_eq!(lower.toupper().text(), "Iİ");
    }

    #[test]
    fn word_case_conversion_passes_foreign_bytes() {
        let registry = LocaleRegistry::new();
        let word = Word::new("Çay", DEFAULT_LOCALE, &registry).unwrap();

        // Ç is not an ASCII letter: it stays as two unrecognized bytes
        assert_eq!(word.len(), 4);
        assert_eq!(word.tolower().text(), "Çay");
        assert_eq!(word.toupper().text(), "ÇAY");
    }

    #[test]
    fn word_equality_and_display() {
        let registry = LocaleRegistry::new();
        let a = Word::new("cat", DEFAULT_LOCALE, &registry).unwrap();
        let b = Word::new("CAT", DEFAULT_LOCALE, &registry).unwrap();

        assert_ne!(a, b);
        assert_eq!(a, b.tolower());
        assert_eq!(format!("{a}"), "cat");
    }
}
