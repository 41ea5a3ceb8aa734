//! Tagged discovery results
//!
//! Discovery can find nothing, exactly one candidate, or several mutually
//! exclusive candidates. Keeping the third case as its own variant means a caller
//! cannot read an ambiguous result as a plain hit by accident.

use serde::Serialize;

/// Outcome of looking for a single thing that may be missing or ambiguous
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Discovered<T> {
    /// Nothing matched
    NotFound,
    /// Exactly one candidate matched
    Found(T),
    /// More than one candidate matched; none is chosen
    Ambiguous(Vec<T>),
}

impl<T> Discovered<T> {
    /// Build from deduplicated candidates in discovery order
    pub fn from_candidates(mut candidates: Vec<T>) -> Self {
        match candidates.len() {
            0 => Discovered::NotFound,
            1 => candidates.pop().map_or(Discovered::NotFound, Discovered::Found),
            _ => Discovered::Ambiguous(candidates),
        }
    }

    /// The single match, if there is exactly one
    pub fn found(&self) -> Option<&T> {
        match self {
            Discovered::Found(value) => Some(value),
            Discovered::NotFound | Discovered::Ambiguous(_) => None,
        }
    }

    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Discovered::Ambiguous(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Discovered::NotFound)
    }

    /// Every candidate that matched, in discovery order
    pub fn candidates(&self) -> &[T] {
        match self {
            Discovered::NotFound => &[],
            Discovered::Found(value) => std::slice::from_ref(value),
            Discovered::Ambiguous(values) => values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_candidates() {
        assert_eq!(Discovered::<u8>::from_candidates(vec![]), Discovered::NotFound);
        assert_eq!(Discovered::from_candidates(vec![7]), Discovered::Found(7));
        assert_eq!(
            Discovered::from_candidates(vec![1, 2]),
            Discovered::Ambiguous(vec![1, 2])
        );
    }

    #[test]
    fn test_found_ignores_ambiguous() {
        let ambiguous = Discovered::Ambiguous(vec!["a", "b"]);
        assert_eq!(ambiguous.found(), None);
        assert!(ambiguous.is_ambiguous());
        assert_eq!(ambiguous.candidates(), &["a", "b"]);
    }

    #[test]
    fn test_serialize_tagged() {
        let json = serde_json::to_string(&Discovered::Found("x")).unwrap();
        assert_eq!(json, r#"{"status":"found","value":"x"}"#);
        let json = serde_json::to_string(&Discovered::<&str>::NotFound).unwrap();
        assert_eq!(json, r#"{"status":"not_found"}"#);
    }
}
