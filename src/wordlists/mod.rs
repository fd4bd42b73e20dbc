//! Word lists and alphabet tables
//!
//! Loads dictionaries and alphabet files from disk, and provides the
//! alphabets compiled into the binary.

mod embedded;
pub mod loader;

use crate::core::{Alphabet, DEFAULT_LOCALE, LocaleRegistry};
use crate::error::{Error, Result};
use log::debug;
use std::path::Path;

pub use embedded::BUILTIN_ALPHABETS;
pub use loader::{alphabet_from_file, load_word_list, parse_alphabet, words_from_slice};

/// Names of the built-in alphabets, sorted
#[must_use]
pub fn builtin_names() -> Vec<&'static str> {
    BUILTIN_ALPHABETS.iter().map(|&(name, _)| name).collect()
}

/// Build a built-in alphabet by name
///
/// # Errors
/// Returns [`Error::NotFound`] for an unknown name.
///
/// # Examples
/// ```
/// use letterbag::core::Letter;
/// use letterbag::wordlists::builtin_alphabet;
///
/// let turkish = builtin_alphabet("tr").unwrap();
/// assert_eq!(turkish.toupper(Letter::new("i")), Letter::new("İ"));
/// ```
pub fn builtin_alphabet(name: &str) -> Result<Alphabet> {
    let (_, pairs) = BUILTIN_ALPHABETS
        .iter()
        .find(|&&(builtin, _)| builtin == name)
        .ok_or_else(|| Error::not_found(format!("No built-in alphabet named '{name}'")))?;

    let (lower, upper): (Vec<&str>, Vec<&str>) = pairs.iter().copied().unzip();
    Alphabet::new(&lower, &upper)
}

/// Build a registry holding every built-in alphabet and pick the active
/// locale
///
/// `alphabet` is a built-in name or the path of an alphabet file. A built-in
/// is selected under its own name, and is registered again under `locale`
/// when that differs. A file alphabet is registered under `locale`, or its
/// file stem. Without `alphabet` the locale defaults to [`DEFAULT_LOCALE`].
///
/// # Errors
/// Returns [`Error::AlreadyExists`] if the alphabet would be registered
/// under a taken name, or any error from loading the alphabet file.
///
/// # Examples
/// ```
/// use letterbag::wordlists::build_registry;
///
/// let (registry, locale) = build_registry(Some("tr"), None).unwrap();
/// assert_eq!(locale, "tr");
/// assert!(registry.resolve(&locale).unwrap().contains("ş".as_bytes()));
///
/// assert!(build_registry(Some("tr"), Some("en".to_string())).is_err());
/// ```
pub fn build_registry(
    alphabet: Option<&str>,
    locale: Option<String>,
) -> Result<(LocaleRegistry, String)> {
    let mut registry = LocaleRegistry::new();
    for name in builtin_names() {
        registry.register(name, builtin_alphabet(name)?)?;
    }

    let Some(source) = alphabet else {
        let locale = locale.unwrap_or_else(|| DEFAULT_LOCALE.to_string());
        return Ok((registry, locale));
    };

    if builtin_names().iter().any(|&name| name == source) {
        let locale = locale.unwrap_or_else(|| source.to_string());
        if locale != source {
            registry.register(locale.as_str(), builtin_alphabet(source)?)?;
        }
        return Ok((registry, locale));
    }

    let path = Path::new(source);
    let file_alphabet = alphabet_from_file(path)?;
    let locale = match locale {
        Some(locale) => locale,
        None => path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .ok_or_else(|| {
                Error::invalid_argument(format!("Alphabet path has no file name: {source}"))
            })?,
    };
    registry.register(locale.as_str(), file_alphabet)?;
    debug!("Alphabet file {} registered as '{locale}'", path.display());
    Ok((registry, locale))
}
