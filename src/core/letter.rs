//! Letter representation
//!
//! A Letter is one segmentation unit of text. It may span several bytes
//! (e.g. `ç` is two UTF-8 bytes) and is always borrowed from its owner: the
//! tokenized input string or an alphabet table entry.

use rustc_hash::FxHasher;
use std::borrow::Cow;
use std::fmt;
use std::hash::Hasher;

/// A borrowed view over the bytes of one letter
///
/// Identity is the exact byte content and ordering is lexicographic byte
/// order. The view is over bytes rather than `str` because the tokenizer
/// emits unrecognized input one byte at a time, which may split a
/// multi-byte character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter<'a>(&'a [u8]);

impl<'a> Letter<'a> {
    /// Create a letter from a string slice
    #[inline]
    #[must_use]
    pub const fn new(text: &'a str) -> Self {
        Self(text.as_bytes())
    }

    /// Create a letter from raw bytes
    #[inline]
    #[must_use]
    pub const fn from_bytes(bytes: &'a [u8]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    #[inline]
    #[must_use]
    pub const fn as_bytes(self) -> &'a [u8] {
        self.0
    }

    /// Number of bytes in the letter
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0.is_empty()
    }

    /// Get the letter as text, if its bytes are valid UTF-8
    ///
    /// Alphabet letters always are; a lone byte split off a multi-byte
    /// character is not.
    #[must_use]
    pub fn as_str(self) -> Option<&'a str> {
        std::str::from_utf8(self.0).ok()
    }

    /// Get the letter as text, replacing invalid UTF-8 with U+FFFD
    #[must_use]
    pub fn to_text(self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.0)
    }

    /// 64-bit content hash used as the letter's identity key
    ///
    /// Every hash-keyed table in the crate goes through this function so the
    /// alphabet, the tokenizer and the matching engine always agree.
    #[must_use]
    pub fn content_hash(self) -> u64 {
        let mut hasher = FxHasher::default();
        hasher.write(self.0);
        // Length terminator keeps "ab" and "a"+"b" streams distinct.
        hasher.write_usize(self.0.len());
        hasher.finish()
    }
}

impl<'a> From<&'a str> for Letter<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for Letter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}
