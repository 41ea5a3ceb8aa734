//! Resource domain types
//!
//! A **Resource** is a single artifact resolved from exactly one winning bundle.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PatchError, config::invalid as config_invalid};
use crate::path::ResourcePath;

/// Resource type classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    /// Record template (`*.tpl`)
    Template,
    /// Database record source (`*.dbr`)
    Record,
    /// Localization text (`*.txt`)
    Text,
    /// Packed resource archive (`*.arc`)
    Archive,
    /// Master database (`*.arz`)
    Database,
    /// Anything else
    Other,
}

impl ResourceType {
    /// Classify by file extension (case-insensitive)
    pub fn from_extension(extension: &str) -> Self {
        match extension.to_ascii_lowercase().as_str() {
            "tpl" => ResourceType::Template,
            "dbr" => ResourceType::Record,
            "txt" => ResourceType::Text,
            "arc" => ResourceType::Archive,
            "arz" => ResourceType::Database,
            _ => ResourceType::Other,
        }
    }

    /// Classify a resource path by its extension
    pub fn from_path(path: &ResourcePath) -> Self {
        path.extension()
            .map_or(ResourceType::Other, ResourceType::from_extension)
    }

    /// Infer the type a search pattern selects
    ///
    /// Only the last pattern segment is inspected: `**/*.tpl` selects templates,
    /// while `**/*` or `**/*.{tpl,dbr}` select no single type and yield `None`.
    pub fn from_pattern(pattern: &str) -> Option<Self> {
        let last = pattern.rsplit(['/', '\\']).next().unwrap_or(pattern);
        let (_, extension) = last.rsplit_once('.')?;
        if extension.is_empty()
            || extension
                .chars()
                .any(|c| matches!(c, '*' | '?' | '{' | '}' | '[' | ']' | ','))
        {
            return None;
        }
        Some(ResourceType::from_extension(extension))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Template => "template",
            ResourceType::Record => "record",
            ResourceType::Text => "text",
            ResourceType::Archive => "archive",
            ResourceType::Database => "database",
            ResourceType::Other => "other",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = PatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "template" => Ok(ResourceType::Template),
            "record" => Ok(ResourceType::Record),
            "text" => Ok(ResourceType::Text),
            "archive" => Ok(ResourceType::Archive),
            "database" => Ok(ResourceType::Database),
            "other" => Ok(ResourceType::Other),
            _ => Err(config_invalid(format!("unknown resource type '{s}'"))),
        }
    }
}

/// A resolved resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resource {
    /// Normalized path within the merged namespace
    pub path: ResourcePath,

    /// Type classified from the path's extension
    #[serde(rename = "type")]
    pub resource_type: ResourceType,

    /// File backing this resource
    pub physical_location: PathBuf,

    /// Name of the bundle that provides this resource
    pub bundle: String,

    /// Priority of the providing bundle
    pub priority: i32,
}

impl Resource {
    /// Create a new resource, classifying its type from the path
    pub fn new(
        path: ResourcePath,
        physical_location: impl Into<PathBuf>,
        bundle: impl Into<String>,
        priority: i32,
    ) -> Self {
        Self {
            resource_type: ResourceType::from_path(&path),
            path,
            physical_location: physical_location.into(),
            bundle: bundle.into(),
            priority,
        }
    }
}
