use clap::Parser;
use std::path::PathBuf;

/// Arguments for the resolve command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show which bundle provides a template:\n    arzpatch resolve ./mymod database/templates/itemartifact.tpl\n\n\
                  Resolve without an expansion bundle:\n    arzpatch resolve ./mymod ui/a.tpl --exclude xpack1")]
pub struct ResolveArgs {
    /// Module root directory
    pub module: PathBuf,

    /// Resource path, relative to a bundle root
    pub path: String,

    /// Bundle directory names to leave out
    #[arg(long, value_name = "BUNDLE")]
    pub exclude: Vec<String>,

    /// Print the resource as JSON
    #[arg(long)]
    pub json: bool,
}
