//! arzpatch - resource overlay resolver for ARZ game modules
//!
//! Exit status: 0 on success, 1 when the command failed, 2 when it completed but
//! reported an error-severity diagnostic.

use clap::Parser;
use miette::Diagnostic as _;
use tracing_subscriber::EnvFilter;

use arzpatch::cli::{Cli, Commands};
use arzpatch::commands::{self, helpers::print_diagnostics};
use arzpatch::diagnostics::DiagnosticBag;
use arzpatch::error::PatchError;

/// Environment variable holding the log filter
const LOG_ENV: &str = "ARZPATCH_LOG";

fn init_logging(verbose: bool) {
    // `--verbose` wins over the environment
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn report_error(err: &PatchError) {
    eprintln!("Error: {err}");
    if let Some(help) = err.help() {
        eprintln!("  help: {help}");
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut diagnostics = DiagnosticBag::new();
    let result = match cli.command {
        Commands::Discover(args) => commands::discover::run(args, &mut diagnostics),
        Commands::Resolve(args) => commands::resolve::run(args, &mut diagnostics),
        Commands::List(args) => commands::list::run(args, &mut diagnostics),
    };

    print_diagnostics(&diagnostics);

    if let Err(e) = result {
        report_error(&e);
        std::process::exit(1);
    }
    if diagnostics.has_errors() {
        std::process::exit(2);
    }
}
