//! Bundle directory naming convention
//!
//! A bundle directory is named `<base>[_<suffix>]`. The suffix only counts when the
//! language provider recognizes it; `my_mod` stays a single base name.
//!
//! Priorities follow the expansion layering of the engines: content of expansion
//! `N` overrides the base game, and localized content overrides its unlocalized
//! sibling.

use crate::domain::ResourceType;
use crate::language::LanguageProvider;
use crate::resource::MATCH_ALL;

/// Priority step per expansion index
pub const EXPANSION_STEP: i32 = 100;

/// Priority bonus for localized bundles
pub const LOCALIZED_BONUS: i32 = 10;

/// Bundle base name -> default search pattern
const DEFAULT_PATTERNS: &[(&str, &str)] = &[
    ("templates", "**/*.tpl"),
    ("database", "**/*.dbr"),
    ("text", "**/*.txt"),
];

/// A bundle directory name split into its parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleName {
    pub base: String,
    pub language: Option<String>,
}

impl BundleName {
    /// Split `dir_name` at its last `_` if the suffix is a known language
    pub fn parse(dir_name: &str, languages: &dyn LanguageProvider) -> Self {
        let language = dir_name
            .rsplit_once('_')
            .filter(|(base, _)| !base.is_empty())
            .and_then(|(base, suffix)| {
                languages
                    .try_get_language_from_suffix(suffix)
                    .map(|language| (base, language.code.clone()))
            });

        if let Some((base, code)) = language {
            return Self {
                base: base.to_string(),
                language: Some(code),
            };
        }

        Self {
            base: dir_name.to_string(),
            language: None,
        }
    }

    pub fn is_localized(&self) -> bool {
        self.language.is_some()
    }

    /// Trailing digit run of the base name; `xpack2` is 2, `resources` is 0
    pub fn expansion(&self) -> i32 {
        let digits: String = self
            .base
            .chars()
            .rev()
            .take_while(char::is_ascii_digit)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        digits.parse().unwrap_or(0)
    }

    /// `expansion * 100 + (localized ? 10 : 0)`, saturating
    pub fn inferred_priority(&self) -> i32 {
        let bonus = if self.is_localized() { LOCALIZED_BONUS } else { 0 };
        self.expansion()
            .saturating_mul(EXPANSION_STEP)
            .saturating_add(bonus)
    }

    /// Default search pattern for this base name
    pub fn default_pattern(&self) -> &'static str {
        default_pattern(&self.base)
    }
}

/// Default search pattern for a bundle base name, ignoring case
pub fn default_pattern(base: &str) -> &'static str {
    DEFAULT_PATTERNS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(base))
        .map_or(MATCH_ALL, |(_, pattern)| *pattern)
}

/// Resource type a bundle holds, judged by its search pattern
pub fn infer_resource_type(pattern: &str) -> Option<ResourceType> {
    ResourceType::from_pattern(pattern)
}
