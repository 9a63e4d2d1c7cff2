use std::path::Path;

use colored::Colorize;
use pb_core::document_warnings;

pub fn run(path: &Path) -> Result<(), String> {
    let document = super::load_document(path)?;
    let warnings = document_warnings(&document);

    if warnings.is_empty() {
        println!("  No warnings.");
        return Ok(());
    }

    let mut current = None;
    for (phase, warning) in &warnings {
        if current != Some(&phase.id) {
            println!("  {}", phase.name.bold());
            current = Some(&phase.id);
        }
        println!("    {} {warning}", "warning:".yellow());
    }
    println!();
    println!("  {}", super::plural(warnings.len(), "warning"));

    Ok(())
}
