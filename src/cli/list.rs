use clap::Parser;
use std::path::PathBuf;

use crate::domain::ResourceType;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List every merged resource:\n    arzpatch list ./mymod\n\n\
                  List templates only:\n    arzpatch list ./mymod --type template")]
pub struct ListArgs {
    /// Module root directory
    pub module: PathBuf,

    /// Only list resources of this type
    #[arg(long = "type", value_name = "TYPE")]
    pub resource_type: Option<ResourceType>,

    /// Bundle directory names to leave out
    #[arg(long, value_name = "BUNDLE")]
    pub exclude: Vec<String>,

    /// Print resources as JSON
    #[arg(long)]
    pub json: bool,
}
