//! Resource path normalization
//!
//! Every resource identifier that crosses a boundary (bundle scanning, lookups,
//! fingerprint probes, diagnostics) goes through [`normalize`], which turns a raw
//! string into a [`ResourcePath`] according to a [`PathForm`].
//!
//! Normalization is idempotent and deterministic for any fixed form:
//! `normalize(normalize(x, f).as_str(), f) == normalize(x, f)`.

use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::error::{Result, path::invalid as invalid_path};

bitflags! {
    /// Independent normalization steps applied to a raw resource path
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PathForm: u8 {
        /// Strip leading separators and drive prefixes so the path is bundle-relative
        const RELATIVE = 0b0001;
        /// Reject empty paths and `..` segments
        const STRICT = 0b0010;
        /// Use `/` only, collapse repeated separators, drop `.` segments and trailing separators
        const SEPARATORS = 0b0100;
        /// Lower-case every character (locale independent)
        const CASE_FOLD = 0b1000;

        /// The form used for resource identifiers in bundles and resolvers
        const RESOURCE = Self::RELATIVE.bits()
            | Self::STRICT.bits()
            | Self::SEPARATORS.bits()
            | Self::CASE_FOLD.bits();
    }
}

impl Default for PathForm {
    fn default() -> Self {
        PathForm::RESOURCE
    }
}

/// A normalized resource identifier
///
/// Two paths are equal iff their normalized text is byte-equal. Ordering is
/// lexicographic on that text, which is the enumeration order of resolvers.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourcePath(String);

impl ResourcePath {
    /// Normalize `raw` with [`PathForm::RESOURCE`]
    pub fn new(raw: &str) -> Result<Self> {
        normalize(raw, PathForm::RESOURCE)
    }

    /// The normalized text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last segment of the path
    pub fn file_name(&self) -> &str {
        self.0.rsplit(['/', '\\']).next().unwrap_or(&self.0)
    }

    /// Extension of the last segment, without the dot
    pub fn extension(&self) -> Option<&str> {
        let name = self.file_name();
        match name.rfind('.') {
            Some(0) | None => None,
            Some(idx) => Some(&name[idx + 1..]),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ResourcePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ResourcePath {
    type Error = crate::error::PatchError;

    fn try_from(raw: String) -> std::result::Result<Self, Self::Error> {
        ResourcePath::new(&raw)
    }
}

impl From<ResourcePath> for String {
    fn from(path: ResourcePath) -> Self {
        path.0
    }
}

/// Normalize a raw resource path according to `form`
///
/// Steps run in a fixed order: case folding, separator canonicalization,
/// relative stripping, strict validation. Each step is idempotent on its own
/// output and later steps never reintroduce what earlier ones removed, so the
/// whole pipeline is idempotent too.
///
/// # Errors
///
/// Returns [`crate::error::PatchError::InvalidPath`] when `form` contains
/// [`PathForm::STRICT`] and the normalized path is empty or has a `..` segment.
pub fn normalize(raw: &str, form: PathForm) -> Result<ResourcePath> {
    let canonical = form.contains(PathForm::SEPARATORS);

    let mut text = if form.contains(PathForm::CASE_FOLD) {
        fold_case(raw)
    } else {
        raw.to_string()
    };

    if canonical {
        text = canonicalize_separators(&text);
    }

    if form.contains(PathForm::RELATIVE) {
        // Stripping a drive can expose a `.` segment and vice versa.
        loop {
            let stripped = strip_root(&text);
            let next = if canonical {
                canonicalize_separators(stripped)
            } else {
                stripped.to_string()
            };
            if next == text {
                break;
            }
            text = next;
        }
    }

    if form.contains(PathForm::STRICT) {
        if text.is_empty() {
            return Err(invalid_path(raw, "path is empty"));
        }
        if text.split(['/', '\\']).any(|segment| segment == "..") {
            return Err(invalid_path(raw, "parent traversal segments are not allowed"));
        }
    }

    Ok(ResourcePath(text))
}

/// Lower-case `raw` one character at a time
///
/// Unlike [`str::to_lowercase`] no context-sensitive mapping (final sigma) is
/// applied, so a character folds the same wherever it appears.
pub fn fold_case(raw: &str) -> String {
    raw.chars().flat_map(char::to_lowercase).collect()
}

/// `/` separators only, no empty or `.` segments, no trailing separator
fn canonicalize_separators(raw: &str) -> String {
    let rooted = raw.starts_with(['/', '\\']);
    let segments: Vec<&str> = raw
        .split(['/', '\\'])
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect();

    let joined = segments.join("/");
    if rooted { format!("/{joined}") } else { joined }
}

/// Strip leading separators and `X:` drive prefixes until none remain
fn strip_root(text: &str) -> &str {
    let mut rest = text;
    loop {
        let trimmed = rest.trim_start_matches(['/', '\\']);
        let trimmed = match trimmed.as_bytes() {
            [drive, b':', ..] if drive.is_ascii_alphabetic() => &trimmed[2..],
            _ => trimmed,
        };
        if trimmed.len() == rest.len() {
            return rest;
        }
        rest = trimmed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn all_forms() -> Vec<PathForm> {
        (0..=PathForm::all().bits())
            .map(PathForm::from_bits_truncate)
            .collect()
    }

    #[test]
    fn test_resource_form_canonicalizes() {
        let path = ResourcePath::new("\\Database\\Templates\\\\ItemArtifact.TPL").unwrap();
        assert_eq!(path.as_str(), "database/templates/itemartifact.tpl");
    }

    #[test]
    fn test_dot_segments_and_trailing_separator() {
        let path = ResourcePath::new("./records/./items/").unwrap();
        assert_eq!(path.as_str(), "records/items");
    }

    #[test]
    fn test_drive_prefix_stripped() {
        let path = ResourcePath::new("C:\\Mods\\a.tpl").unwrap();
        assert_eq!(path.as_str(), "mods/a.tpl");
    }

    #[test]
    fn test_strict_rejects_traversal() {
        let err = ResourcePath::new("records/../secret.dbr").unwrap_err();
        assert!(matches!(err, crate::error::PatchError::InvalidPath { .. }));
    }

    #[test]
    fn test_strict_rejects_traversal_without_separator_step() {
        let result = normalize("a\\..\\b", PathForm::STRICT);
        assert!(result.is_err());
    }

    #[test]
    fn test_strict_rejects_empty() {
        assert!(ResourcePath::new("").is_err());
        assert!(ResourcePath::new("/").is_err());
        assert!(ResourcePath::new("./").is_err());
    }

    #[test]
    fn test_non_strict_allows_traversal_and_empty() {
        let form = PathForm::SEPARATORS | PathForm::CASE_FOLD;
        assert_eq!(normalize("A/../B", form).unwrap().as_str(), "a/../b");
        assert_eq!(normalize("", form).unwrap().as_str(), "");
    }

    #[test]
    fn test_case_fold_is_not_ascii_only() {
        let path = normalize("ÄRTIFACT", PathForm::CASE_FOLD).unwrap();
        assert_eq!(path.as_str(), "ärtifact");
    }

    #[test]
    fn test_case_fold_is_character_wise() {
        let upper = ResourcePath::new("records/ODYSSEUΣ/a.tpl").unwrap();
        let lower = ResourcePath::new("records/odysseuσ/a.tpl").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(fold_case("ΣΑΣ"), "σασ");
    }

    #[test]
    fn test_empty_form_is_identity() {
        let raw = "\\Some//Odd/./Path/";
        assert_eq!(normalize(raw, PathForm::empty()).unwrap().as_str(), raw);
    }

    #[test]
    fn test_drive_then_dot_segment() {
        let path = ResourcePath::new("C:./C:/x.tpl").unwrap();
        assert_eq!(path.as_str(), "x.tpl");
    }

    #[test]
    fn test_relative_strip_repeats_until_stable() {
        let form = PathForm::RELATIVE;
        let once = normalize("C:C:/a", form).unwrap();
        assert_eq!(once.as_str(), "a");
    }

    #[test]
    fn test_file_name_and_extension() {
        let path = ResourcePath::new("database/templates/itemartifact.tpl").unwrap();
        assert_eq!(path.file_name(), "itemartifact.tpl");
        assert_eq!(path.extension(), Some("tpl"));

        let dotfile = ResourcePath::new(".hidden").unwrap();
        assert_eq!(dotfile.extension(), None);
    }

    #[test]
    fn test_serde_round_trip_normalizes() {
        let path: ResourcePath = serde_json::from_str("\"Text\\\\Tags.TXT\"").unwrap();
        assert_eq!(path.as_str(), "text/tags.txt");
        assert!(serde_json::from_str::<ResourcePath>("\"../x\"").is_err());
    }

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent(raw in "[a-zA-Z0-9_ .:/\\\\ÄÖÜßΣσς-]{0,40}") {
            for form in all_forms() {
                if let Ok(first) = normalize(&raw, form) {
                    let second = normalize(first.as_str(), form).unwrap();
                    prop_assert_eq!(&first, &second, "form {:?}", form);
                }
            }
        }

        #[test]
        fn prop_normalize_is_deterministic(raw in "[a-zA-Z0-9_ ./\\\\-]{0,40}") {
            for form in all_forms() {
                let a = normalize(&raw, form).map(|p| p.0).ok();
                let b = normalize(&raw, form).map(|p| p.0).ok();
                prop_assert_eq!(a, b);
            }
        }
    }
}
