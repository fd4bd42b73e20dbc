//! Multiset of letter hashes
//!
//! Counts each letter's [`content_hash`](crate::core::Letter::content_hash)
//! with multiplicity. Iteration is in hash order, which is the order joker
//! letters are reported in.

use crate::core::Letter;
use std::collections::BTreeMap;

/// A bag (multiset) of letter content hashes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterBag {
    counts: BTreeMap<u64, usize>,
    total: usize,
}

impl LetterBag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one occurrence of `letter`
    pub fn insert(&mut self, letter: Letter<'_>) {
        self.insert_hash(letter.content_hash());
    }

    /// Add one occurrence of a letter hash
    pub fn insert_hash(&mut self, hash: u64) {
        *self.counts.entry(hash).or_insert(0) += 1;
        self.total += 1;
    }

    /// Total multiplicity
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.total
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Multiplicity of `hash`
    #[must_use]
    pub fn count(&self, hash: u64) -> usize {
        self.counts.get(&hash).copied().unwrap_or(0)
    }

    /// Total multiplicity of the intersection with `other`
    ///
    /// Each hash contributes the smaller of its two counts.
    #[must_use]
    pub fn intersection_len(&self, other: &Self) -> usize {
        // Walk the smaller bag
        let (small, large) = if self.counts.len() <= other.counts.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .counts
            .iter()
            .map(|(&hash, &count)| count.min(large.count(hash)))
            .sum()
    }

    /// `self` minus `other`, respecting multiplicity
    ///
    /// Equivalent to removing the intersection of the two bags from `self`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        let mut result = Self::new();
        for (&hash, &count) in &self.counts {
            let remaining = count.saturating_sub(other.count(hash));
            if remaining > 0 {
                result.counts.insert(hash, remaining);
                result.total += remaining;
            }
        }
        result
    }

    /// Every hash repeated by its multiplicity, in hash order
    pub fn hashes(&self) -> impl Iterator<Item = u64> + '_ {
        self.counts
            .iter()
            .flat_map(|(&hash, &count)| std::iter::repeat_n(hash, count))
    }
}

impl<'a> FromIterator<Letter<'a>> for LetterBag {
    fn from_iter<I: IntoIterator<Item = Letter<'a>>>(iter: I) -> Self {
        let mut bag = Self::new();
        for letter in iter {
            bag.insert(letter);
        }
        bag
    }
}
