//! List command implementation
//!
//! Lists the merged namespace of a module, one winning resource per line.

use console::Style;

use crate::cli::ListArgs;
use crate::diagnostics::DiagnosticBag;
use crate::domain::Resource;
use crate::error::Result;

use super::helpers::{open_module, print_json};

/// Run list command
pub fn run(args: ListArgs, diagnostics: &mut DiagnosticBag) -> Result<()> {
    let module = open_module(&args.module, &args.exclude, diagnostics)?;
    let resolver = module.resolver(diagnostics)?;

    let resources: Vec<&Resource> = match args.resource_type {
        Some(resource_type) => resolver.resources_of_type(resource_type).collect(),
        None => resolver.resources().collect(),
    };

    if args.json {
        return print_json(&resources);
    }

    if resources.is_empty() {
        println!("No resources found.");
        return Ok(());
    }

    for resource in &resources {
        println!(
            "{}  {}",
            resource.path,
            Style::new().dim().apply_to(&resource.bundle)
        );
    }
    Ok(())
}
