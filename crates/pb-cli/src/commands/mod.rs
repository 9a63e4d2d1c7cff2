pub mod check;
pub mod frame;
pub mod template;
pub mod timeline;
pub mod warnings;

use std::path::Path;

use pb_core::BasketballPlayDocument;
use tracing::debug;

/// Read and validate a play document.
fn load_document(path: &Path) -> Result<BasketballPlayDocument, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let document =
        pb_core::parse_document(&text).map_err(|e| format!("{}: {e}", path.display()))?;
    debug!(
        path = %path.display(),
        phases = document.phase_count(),
        "loaded play document"
    );
    Ok(document)
}

/// "1 phase" / "3 phases".
fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
