//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - discover: Discover command arguments
//! - resolve: Resolve command arguments
//! - list: List command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod discover;
pub mod list;
pub mod resolve;

pub use discover::DiscoverArgs;
pub use list::ListArgs;
pub use resolve::ResolveArgs;

/// arzpatch - resource overlay resolver for ARZ game modules
///
/// Discover a module directory, merge its prioritized bundles and look up resources.
#[derive(Parser, Debug)]
#[command(
    name = "arzpatch",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Resource overlay resolver and engine discovery for ARZ game modules",
    long_about = "arzpatch describes a Titan Quest or Grim Dawn module directory (database, \
                  bundles, engine variant) and merges its prioritized resource bundles into \
                  one namespace, reporting same-priority override conflicts.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  arzpatch discover ./mymod                 \x1b[90m# Describe a module\x1b[0m\n   \
                  arzpatch discover ./mymod --json          \x1b[90m# Describe as JSON\x1b[0m\n   \
                  arzpatch resolve ./mymod ui/a.tpl         \x1b[90m# Show which bundle wins\x1b[0m\n   \
                  arzpatch list ./mymod --type template     \x1b[90m# List merged templates\x1b[0m\n\n\
                  \x1b[1m\x1b[32mLogging:\x1b[0m\n   \
                  ARZPATCH_LOG=debug arzpatch list ./mymod\n"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Describe a module directory
    Discover(DiscoverArgs),

    /// Show the resource that wins for a path
    Resolve(ResolveArgs),

    /// List the merged resource namespace
    List(ListArgs),
}
