//! Discovery options

use crate::path::PathForm;

use super::CONFIG_FILE_NAME;

/// Options controlling module discovery and resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryOptions {
    /// Normalization form applied to every resource path
    pub path_form: PathForm,

    /// File name of the per-module configuration, looked up at the module root
    pub config_file_name: String,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            path_form: PathForm::RESOURCE,
            config_file_name: CONFIG_FILE_NAME.to_string(),
        }
    }
}

impl DiscoveryOptions {
    pub fn with_path_form(mut self, path_form: PathForm) -> Self {
        self.path_form = path_form;
        self
    }

    pub fn with_config_file_name(mut self, name: impl Into<String>) -> Self {
        self.config_file_name = name.into();
        self
    }
}
