//! Language suffix recognition for bundle directory names
//!
//! Localized bundle directories carry a language suffix (`xpack1_fr`). Which
//! suffixes count as languages is answered by a [`LanguageProvider`]; the
//! bundled [`LanguageRegistry`] is an explicit value created by the caller and
//! passed down, never shared implicitly.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{
    Result,
    language::{already_registered, invalid_code},
};

/// Languages shipped by the supported engines
const DEFAULT_LANGUAGES: &[(&str, &str)] = &[
    ("ch", "Chinese"),
    ("cz", "Czech"),
    ("de", "German"),
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("pl", "Polish"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
];

/// A known language
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Language {
    /// Lowercase suffix code, e.g. `fr`
    pub code: String,

    /// Display name
    pub name: String,
}

/// Answers whether a directory-name suffix denotes a language
pub trait LanguageProvider {
    fn try_get_language_from_suffix(&self, suffix: &str) -> Option<&Language>;
}

/// Registry of language codes
#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    languages: BTreeMap<String, Language>,
}

impl LanguageRegistry {
    /// Empty registry; no suffix is recognized
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the languages shipped by the supported engines
    pub fn with_defaults() -> Self {
        let languages = DEFAULT_LANGUAGES
            .iter()
            .map(|(code, name)| {
                (
                    (*code).to_string(),
                    Language {
                        code: (*code).to_string(),
                        name: (*name).to_string(),
                    },
                )
            })
            .collect();
        Self { languages }
    }

    /// Register a language code
    ///
    /// Codes are ASCII alphanumeric and compared case-insensitively.
    pub fn register(&mut self, code: &str, name: impl Into<String>) -> Result<&Language> {
        if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(invalid_code(code));
        }

        let code = code.to_ascii_lowercase();
        if self.languages.contains_key(&code) {
            return Err(already_registered(code));
        }

        let language = Language {
            code: code.clone(),
            name: name.into(),
        };
        Ok(&*self.languages.entry(code).or_insert(language))
    }

    pub fn get(&self, code: &str) -> Option<&Language> {
        self.languages.get(&code.to_ascii_lowercase())
    }

    /// Registered languages ordered by code
    pub fn iter(&self) -> impl Iterator<Item = &Language> {
        self.languages.values()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

impl LanguageProvider for LanguageRegistry {
    fn try_get_language_from_suffix(&self, suffix: &str) -> Option<&Language> {
        self.get(suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PatchError;

    #[test]
    fn test_defaults() {
        let registry = LanguageRegistry::with_defaults();
        assert_eq!(registry.len(), DEFAULT_LANGUAGES.len());
        assert_eq!(registry.try_get_language_from_suffix("fr").unwrap().name, "French");
        assert!(registry.try_get_language_from_suffix("FR").is_some());
        assert!(registry.try_get_language_from_suffix("xx").is_none());
    }

    #[test]
    fn test_empty_registry_recognizes_nothing() {
        let registry = LanguageRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.try_get_language_from_suffix("en").is_none());
    }

    #[test]
    fn test_register() {
        let mut registry = LanguageRegistry::new();
        let language = registry.register("UK", "Ukrainian").unwrap();
        assert_eq!(language.code, "uk");
        assert!(registry.try_get_language_from_suffix("uk").is_some());
    }

    #[test]
    fn test_register_duplicate_fails() {
        let mut registry = LanguageRegistry::with_defaults();
        let err = registry.register("fr", "French again").unwrap_err();
        assert!(matches!(err, PatchError::LanguageAlreadyRegistered { .. }));
        assert_eq!(registry.get("fr").unwrap().name, "French");
    }

    #[test]
    fn test_register_invalid_code() {
        let mut registry = LanguageRegistry::new();
        assert!(matches!(
            registry.register("", "Nothing").unwrap_err(),
            PatchError::InvalidLanguageCode { .. }
        ));
        assert!(matches!(
            registry.register("f_r", "Bad").unwrap_err(),
            PatchError::InvalidLanguageCode { .. }
        ));
    }

    #[test]
    fn test_iter_sorted() {
        let registry = LanguageRegistry::with_defaults();
        let codes: Vec<&str> = registry
            .iter()
            .map(|l| l.code.as_str())
            .collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        assert_eq!(codes, sorted);
    }
}
