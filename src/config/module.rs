//! Module configuration (arzpatch.yaml) data structures
//!
//! Every field is optional. A module without the file behaves exactly like one
//! with an empty file.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use wax::Glob;

use crate::engine::EngineClass;
use crate::error::{
    Result,
    config::{invalid, parse_failed, read_failed},
};
use crate::path::fold_case;

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "arzpatch.yaml";

/// Module configuration (arzpatch.yaml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleConfig {
    /// Force the engine class instead of fingerprinting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<EngineClass>,

    /// Bundle directory names that are never discovered
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,

    /// Bundle base name -> search pattern
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub patterns: BTreeMap<String, String>,

    /// Bundle directory name -> explicit priority
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub priorities: BTreeMap<String, i32>,
}

impl ModuleConfig {
    /// Parse and validate module configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty mapping
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize module configuration to a YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Load `file_name` from `root`; `None` when the file does not exist
    pub fn load(root: &Path, file_name: &str) -> Result<Option<Self>> {
        let path = root.join(file_name);
        if !path.is_file() {
            return Ok(None);
        }

        let shown = path.display().to_string();
        let yaml =
            std::fs::read_to_string(&path).map_err(|e| read_failed(&shown, e.to_string()))?;
        let config = Self::from_yaml(&yaml).map_err(|e| match e {
            crate::error::PatchError::ConfigParseFailed { reason, .. } => {
                parse_failed(&shown, reason)
            }
            other => other,
        })?;

        tracing::debug!(path = %shown, "loaded module configuration");
        Ok(Some(config))
    }

    /// Validate the module configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = self.exclude.iter().find(|n| n.trim().is_empty()) {
            return Err(invalid(format!("exclude entry '{name}' is empty")));
        }
        for (name, pattern) in &self.patterns {
            if name.trim().is_empty() {
                return Err(invalid("pattern bundle name is empty"));
            }
            Glob::new(&fold_case(pattern))
                .map_err(|e| invalid(format!("pattern for '{name}' does not compile: {e}")))?;
        }
        if self.priorities.keys().any(|name| name.trim().is_empty()) {
            return Err(invalid("priority bundle name is empty"));
        }
        Ok(())
    }

    /// Whether a bundle directory name is excluded, ignoring case
    pub fn is_excluded(&self, dir_name: &str) -> bool {
        self.exclude.iter().any(|n| n.eq_ignore_ascii_case(dir_name))
    }

    /// Declared search pattern for a bundle base name, ignoring case
    pub fn pattern_for(&self, base: &str) -> Option<&str> {
        self.patterns
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(base))
            .map(|(_, pattern)| pattern.as_str())
    }

    /// Explicit priority for a bundle directory name, ignoring case
    pub fn priority_for(&self, dir_name: &str) -> Option<i32> {
        self.priorities
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(dir_name))
            .map(|(_, priority)| *priority)
    }
}
