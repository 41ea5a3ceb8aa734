//! Engine variant identification
//!
//! This module handles:
//! - Engine class definitions ([`EngineClass`])
//! - The fingerprint table mapping well-known resource paths to engine classes
//! - Probing a directory or merged namespace for fingerprints (via [`detection`])
//!
//! The table is plain data: supporting a new engine variant means adding rows,
//! not touching the classification algorithm.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::Discovered;
use crate::error::{PatchError, Result, config::invalid as config_invalid};
use crate::path::ResourcePath;

pub mod detection;

pub use detection::{EngineDiscoverer, discover_engine};

/// Game engine variants whose databases are mutually incompatible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineClass {
    /// Titan Quest
    Tq,
    /// Titan Quest: Immortal Throne
    Tqit,
    /// Titan Quest Anniversary Edition
    Tqae,
    /// Grim Dawn
    Gd,
}

impl EngineClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            EngineClass::Tq => "TQ",
            EngineClass::Tqit => "TQIT",
            EngineClass::Tqae => "TQAE",
            EngineClass::Gd => "GD",
        }
    }
}

impl fmt::Display for EngineClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EngineClass {
    type Err = PatchError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tq" => Ok(EngineClass::Tq),
            "tqit" => Ok(EngineClass::Tqit),
            "tqae" => Ok(EngineClass::Tqae),
            "gd" => Ok(EngineClass::Gd),
            _ => Err(config_invalid(format!("unknown engine class '{s}'"))),
        }
    }
}

/// Default fingerprint table, probed in order
///
/// Each path only exists in the toolset templates of the listed engine.
pub const DEFAULT_FINGERPRINTS: &[(&str, EngineClass)] = &[
    ("database/templates/itemartifact.tpl", EngineClass::Tqit),
    ("database/templates/itemartifactformula.tpl", EngineClass::Tqit),
    ("database/templates/devotionskilltree.tpl", EngineClass::Gd),
];

/// A resource path whose presence identifies an engine class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprint {
    pub path: ResourcePath,
    pub engine: EngineClass,
}

impl Fingerprint {
    /// Create a fingerprint, normalizing its path
    pub fn new(path: &str, engine: EngineClass) -> Result<Self> {
        Ok(Self {
            path: ResourcePath::new(path)?,
            engine,
        })
    }
}

/// A fingerprint probe that succeeded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineArtifact {
    /// The fingerprint path that was probed
    pub path: ResourcePath,

    /// The engine class the fingerprint identifies
    pub engine: EngineClass,

    /// The file that answered the probe
    pub physical_location: PathBuf,
}

/// Evidence gathered about which engine a directory targets
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineInfo {
    pub physical_path: PathBuf,

    /// Probe hits, in fingerprint table order
    pub artifacts: Vec<EngineArtifact>,

    /// `NotFound` when nothing matched, `Ambiguous` when several engines matched
    pub classification: Discovered<EngineClass>,
}

impl EngineInfo {
    /// Engine info fixed by configuration instead of probing
    pub fn forced(physical_path: impl Into<PathBuf>, engine: EngineClass) -> Self {
        Self {
            physical_path: physical_path.into(),
            artifacts: Vec::new(),
            classification: Discovered::Found(engine),
        }
    }

    /// The identified engine; `None` when unknown or ambiguous
    pub fn engine_class(&self) -> Option<EngineClass> {
        self.classification.found().copied()
    }

    /// Whether fingerprints of more than one engine matched
    pub fn is_ambiguous(&self) -> bool {
        self.classification.is_ambiguous()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fingerprints_are_valid() {
        for (path, engine) in DEFAULT_FINGERPRINTS {
            let fingerprint = Fingerprint::new(path, *engine).unwrap();
            assert_eq!(fingerprint.path.as_str(), *path);
        }
    }

    #[test]
    fn test_engine_class_parse_and_display() {
        assert_eq!("tqit".parse::<EngineClass>().unwrap(), EngineClass::Tqit);
        assert_eq!("GD".parse::<EngineClass>().unwrap(), EngineClass::Gd);
        assert_eq!(EngineClass::Tqae.to_string(), "TQAE");
        assert!("quake".parse::<EngineClass>().is_err());
    }

    #[test]
    fn test_engine_class_serde_lowercase() {
        let engine: EngineClass = serde_yaml::from_str("tqae").unwrap();
        assert_eq!(engine, EngineClass::Tqae);
        assert_eq!(serde_json::to_string(&EngineClass::Gd).unwrap(), "\"gd\"");
    }

    #[test]
    fn test_forced_info() {
        let info = EngineInfo::forced("/mods/x", EngineClass::Tq);
        assert_eq!(info.engine_class(), Some(EngineClass::Tq));
        assert!(!info.is_ambiguous());
        assert!(info.artifacts.is_empty());
    }
}
