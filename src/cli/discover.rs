use clap::Parser;
use std::path::PathBuf;

/// Arguments for the discover command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Describe a module:\n    arzpatch discover ./mymod\n\n\
                  Machine-readable output:\n    arzpatch discover ./mymod --json")]
pub struct DiscoverArgs {
    /// Module root directory
    pub module: PathBuf,

    /// Print the module descriptor as JSON
    #[arg(long)]
    pub json: bool,
}
