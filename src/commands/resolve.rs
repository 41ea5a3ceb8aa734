//! Resolve command implementation
//!
//! Prints the resource that wins for one path in the merged namespace.

use console::Style;

use crate::cli::ResolveArgs;
use crate::diagnostics::DiagnosticBag;
use crate::error::Result;

use super::helpers::{open_module, print_json};

/// Run resolve command
pub fn run(args: ResolveArgs, diagnostics: &mut DiagnosticBag) -> Result<()> {
    let module = open_module(&args.module, &args.exclude, diagnostics)?;
    let resolver = module.resolver(diagnostics)?;

    let path = resolver.path(&args.path)?;
    let resource = resolver.resolve(&path)?;

    if args.json {
        return print_json(resource);
    }

    println!("{}", Style::new().bold().apply_to(&resource.path));
    println!(
        "  {} {} (priority {})",
        Style::new().bold().apply_to("Bundle:"),
        resource.bundle,
        resource.priority
    );
    println!(
        "  {} {}",
        Style::new().bold().apply_to("Type:"),
        resource.resource_type
    );
    println!(
        "  {} {}",
        Style::new().bold().apply_to("File:"),
        resource.physical_location.display()
    );
    Ok(())
}
