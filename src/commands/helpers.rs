//! Command helper utilities

use std::path::Path;

use console::Style;

use crate::diagnostics::{Diagnostic, DiagnosticBag, Severity};
use crate::error::Result;
use crate::module::{Module, discover_module};

/// Discover the module at `root` and leave out the `exclude`d bundles
pub fn open_module(root: &Path, exclude: &[String], diagnostics: &mut DiagnosticBag) -> Result<Module> {
    let info = discover_module(root, diagnostics)?;
    let mut module = Module::new(info);
    for name in exclude {
        module.exclude_bundle(name)?;
    }
    Ok(module)
}

/// Style for a diagnostic line, by severity
fn severity_style(severity: Severity) -> Style {
    match severity {
        Severity::Error => Style::new().red().bold(),
        Severity::Warning => Style::new().yellow(),
        Severity::Info => Style::new().dim(),
    }
}

/// Print diagnostics to stderr, one per line
pub fn print_diagnostics<'a>(diagnostics: impl IntoIterator<Item = &'a Diagnostic>) {
    for diagnostic in diagnostics {
        eprintln!(
            "{}",
            severity_style(diagnostic.severity()).apply_to(diagnostic)
        );
    }
}

/// Print a value as pretty JSON to stdout
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
