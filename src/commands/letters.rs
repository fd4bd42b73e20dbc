//! Alphabet inspection command

use crate::core::{LetterCase, LocaleRegistry};
use crate::error::Result;

/// Description of a registered alphabet
pub struct AlphabetSummary {
    pub locale: String,
    /// Case pairs in construction order
    pub pairs: Vec<(String, String)>,
    pub lower_pattern: String,
    pub upper_pattern: String,
    /// Longest letter in bytes
    pub max_letter_len: usize,
}

/// Describe the alphabet registered for `locale`
///
/// # Errors
/// Returns [`Error::NotFound`](crate::Error::NotFound) if `locale` is not
/// registered.
pub fn describe_alphabet(locale: &str, registry: &LocaleRegistry) -> Result<AlphabetSummary> {
    let alphabet = registry.resolve(locale)?;

    Ok(AlphabetSummary {
        locale: locale.to_string(),
        pairs: alphabet
            .pairs()
            .into_iter()
            .map(|(lower, upper)| (lower.to_text().into_owned(), upper.to_text().into_owned()))
            .collect(),
        lower_pattern: alphabet.pattern_fragment(LetterCase::Lower),
        upper_pattern: alphabet.pattern_fragment(LetterCase::Upper),
        max_letter_len: alphabet.max_letter_len(LetterCase::All),
    })
}
