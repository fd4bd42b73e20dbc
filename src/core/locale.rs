//! Locale registry
//!
//! Maps locale names to alphabets. The registry is an explicit value rather
//! than process-wide state, so independent registries can coexist (one per
//! test, one per host). It is append-only: names are registered at most once
//! and never removed.

use super::Alphabet;
use crate::error::{Error, Result};
use log::debug;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Name of the built-in English locale
pub const DEFAULT_LOCALE: &str = "en";

/// Append-only table of named alphabets
///
/// Registration needs `&mut self`, so a host that shares the registry
/// across threads must finish registering first or wrap it in a lock.
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    locales: FxHashMap<String, Arc<Alphabet>>,
}

impl LocaleRegistry {
    /// Create a registry holding only the [`DEFAULT_LOCALE`] ASCII alphabet
    #[must_use]
    pub fn new() -> Self {
        let mut locales = FxHashMap::default();
        locales.insert(DEFAULT_LOCALE.to_string(), Arc::new(Alphabet::ascii()));
        Self { locales }
    }

    /// Register `alphabet` under `name`
    ///
    /// # Errors
    /// Returns [`Error::AlreadyExists`] if `name` is taken; the existing
    /// entry is kept.
    ///
    /// # Examples
    /// ```
    /// use letterbag::core::{Alphabet, LocaleRegistry};
    ///
    /// let mut registry = LocaleRegistry::new();
    /// let alphabet = Alphabet::new(&["ç"], &["Ç"]).unwrap();
    /// registry.register("tr", alphabet.clone()).unwrap();
    ///
    /// assert!(registry.register("tr", alphabet).is_err());
    /// assert!(registry.resolve("tr").is_ok());
    /// ```
    pub fn register(&mut self, name: impl Into<String>, alphabet: Alphabet) -> Result<()> {
        let name = name.into();
        if self.locales.contains_key(&name) {
            return Err(Error::already_exists(format!(
                "Locale already exists: {name}"
            )));
        }
        debug!("Registering locale '{name}' ({} case pairs)", alphabet.len());
        self.locales.insert(name, Arc::new(alphabet));
        Ok(())
    }

    /// Look up the alphabet of a locale
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] for an unregistered name. There is no
    /// fallback to the default locale.
    pub fn resolve(&self, name: &str) -> Result<&Alphabet> {
        self.locales
            .get(name)
            .map(|alphabet| &**alphabet)
            .ok_or_else(|| Self::missing(name))
    }

    /// Like [`resolve`](Self::resolve) but returns a shared handle that can
    /// outlive the borrow of the registry
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] for an unregistered name.
    pub fn resolve_shared(&self, name: &str) -> Result<Arc<Alphabet>> {
        self.locales
            .get(name)
            .cloned()
            .ok_or_else(|| Self::missing(name))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.locales.contains_key(name)
    }

    /// Registered locale names, sorted
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.locales.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    fn missing(name: &str) -> Error {
        Error::not_found(format!("Locale does not exist: {name}"))
    }
}

impl Default for LocaleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
