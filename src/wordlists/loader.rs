//! Word list and alphabet file loading
//!
//! Dictionaries are plain text with one entry per line. Alphabet files hold
//! one `lower<TAB>upper` pair per line.

use crate::core::Alphabet;
use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Parse alphabet file content
///
/// Blank lines are skipped and a trailing `\r` is ignored. Every other line
/// must contain exactly one tab.
///
/// # Errors
/// Returns [`Error::Format`] naming the first malformed line, or any error
/// from [`Alphabet::new`].
///
/// # Examples
/// ```
/// use letterbag::wordlists::parse_alphabet;
///
/// let alphabet = parse_alphabet("a\tA\nb\tB\n").unwrap();
/// assert_eq!(alphabet.len(), 2);
/// assert!(parse_alphabet("a\tA\nb B\n").is_err());
/// ```
pub fn parse_alphabet(content: &str) -> Result<Alphabet> {
    let mut lower = Vec::new();
    let mut upper = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split('\t');
        match (fields.next(), fields.next(), fields.next()) {
            (Some(l), Some(u), None) => {
                lower.push(l);
                upper.push(u);
            }
            (_, None, _) => return Err(Error::format(index + 1, "missing tab")),
            _ => return Err(Error::format(index + 1, "more than one tab")),
        }
    }

    Alphabet::new(&lower, &upper)
}

/// Load an alphabet file
///
/// # Errors
/// Returns [`Error::Io`] if the file cannot be read, or any error from
/// [`parse_alphabet`].
pub fn alphabet_from_file<P: AsRef<Path>>(path: P) -> Result<Alphabet> {
    let path = path.as_ref();
    let alphabet = parse_alphabet(&fs::read_to_string(path)?)?;
    debug!(
        "Loaded alphabet with {} case pairs from {}",
        alphabet.len(),
        path.display()
    );
    Ok(alphabet)
}

/// Load a dictionary, one entry per line
///
/// Entries are trimmed and blank lines are skipped. Inner spaces are kept.
///
/// # Errors
/// Returns [`Error::Io`] if the file cannot be read or is not UTF-8.
///
/// # Examples
/// ```no_run
/// use letterbag::wordlists::load_word_list;
///
/// let words = load_word_list("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_word_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let words: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    debug!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Convert an embedded string slice to owned entries
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}
