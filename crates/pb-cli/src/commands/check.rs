use std::path::Path;

use colored::Colorize;
use pb_core::document_warnings;

use super::plural;

pub fn run(path: &Path) -> Result<(), String> {
    let document = super::load_document(path)?;

    println!("  All checks passed for '{}'.", path.display());
    println!(
        "  {}, {}, {}",
        plural(document.phase_count(), "phase"),
        plural(document.object_count(), "object"),
        plural(document.action_count(), "action"),
    );

    let warnings = document_warnings(&document).len();
    if warnings > 0 {
        println!(
            "  {}",
            format!("{} (run `pb warnings` for details)", plural(warnings, "warning")).yellow()
        );
    }

    Ok(())
}
