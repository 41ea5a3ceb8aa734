//! Discover command implementation
//!
//! Prints the module descriptor: database, engine classification and bundles.

use console::Style;

use crate::cli::DiscoverArgs;
use crate::diagnostics::DiagnosticBag;
use crate::domain::Discovered;
use crate::error::Result;
use crate::module::{ModuleInfo, discover_module};

use super::helpers::print_json;

/// Run discover command
pub fn run(args: DiscoverArgs, diagnostics: &mut DiagnosticBag) -> Result<()> {
    let info = discover_module(&args.module, diagnostics)?;
    if args.json {
        return print_json(&info);
    }
    display_module(&info);
    Ok(())
}

fn engine_label(info: &ModuleInfo) -> String {
    match &info.engine.classification {
        Discovered::Found(engine) => engine.to_string(),
        Discovered::NotFound => "unknown".to_string(),
        Discovered::Ambiguous(engines) => {
            let names: Vec<String> = engines.iter().map(ToString::to_string).collect();
            format!("ambiguous ({})", names.join(", "))
        }
    }
}

fn database_label(info: &ModuleInfo) -> String {
    match &info.database {
        Discovered::Found(path) => path.display().to_string(),
        Discovered::NotFound => "none".to_string(),
        Discovered::Ambiguous(paths) => format!("ambiguous ({} candidates)", paths.len()),
    }
}

fn display_module(info: &ModuleInfo) {
    let bold = Style::new().bold();

    println!(
        "{} {}",
        Style::new().bold().yellow().apply_to(&info.name),
        Style::new().dim().apply_to(info.physical_path.display())
    );
    println!("  {} {}", bold.apply_to("Engine:"), engine_label(info));
    for artifact in &info.engine.artifacts {
        println!("    {} -> {}", artifact.path, artifact.engine);
    }
    println!("  {} {}", bold.apply_to("Database:"), database_label(info));

    if info.bundles.is_empty() {
        println!("  {} none", bold.apply_to("Bundles:"));
        return;
    }
    println!("  {} ({})", bold.apply_to("Bundles:"), info.bundles.len());
    for bundle in &info.bundles {
        let language = bundle
            .language
            .as_deref()
            .map(|l| format!(" [{l}]"))
            .unwrap_or_default();
        println!(
            "    {}{} {} {}",
            Style::new().cyan().apply_to(&bundle.name),
            language,
            Style::new().green().apply_to(format!("priority {}", bundle.priority)),
            Style::new().dim().apply_to(&bundle.pattern)
        );
    }
}
