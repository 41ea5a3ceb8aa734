//! Configuration handling for arzpatch
//!
//! This module contains data structures for:
//! - `arzpatch.yaml` - Optional per-module configuration at the module root
//! - [`DiscoveryOptions`] - In-code options for module discovery

pub mod module;
pub mod options;

pub use module::{CONFIG_FILE_NAME, ModuleConfig};
pub use options::DiscoveryOptions;
