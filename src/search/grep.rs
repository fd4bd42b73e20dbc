//! Whole-token regex search over free text

use crate::error::Result;
use log::debug;
use regex::Regex;

/// Finds every whitespace-delimited token that contains a pattern match
#[derive(Debug, Clone)]
pub struct RegexSearch {
    regex: Regex,
}

impl RegexSearch {
    /// Compile `pattern`, extended on both sides to the surrounding token
    ///
    /// # Errors
    /// Returns [`Error::Pattern`](crate::Error::Pattern) if `pattern` is not
    /// a valid regular expression.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(&format!(r"\S*(?:{pattern})\S*"))?;
        debug!("Compiled grep pattern: {}", regex.as_str());
        Ok(Self { regex })
    }

    /// Every token of `text` containing a match, in order of appearance
    ///
    /// # Examples
    /// ```
    /// use letterbag::search::RegexSearch;
    ///
    /// let search = RegexSearch::new("at").unwrap();
    /// assert_eq!(search.find_all("the cat sat\non a mat-tress"), vec!["cat", "sat", "mat-tress"]);
    /// ```
    #[must_use]
    pub fn find_all<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.regex.find_iter(text).map(|m| m.as_str()).collect()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}
