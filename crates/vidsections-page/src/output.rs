use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read the existing page whose header and footer are to be preserved.
pub fn read_page(path: &Path) -> Result<String> {
    let html = fs::read_to_string(path)
        .with_context(|| format!("Failed to read page {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = html.len(), "Read existing page");
    Ok(html)
}

/// Write the full assembled document to a side file for manual review.
pub fn write_review_file(path: &Path, document: &str) -> Result<()> {
    fs::write(path, document)
        .with_context(|| format!("Failed to write review file {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = document.len(), "Wrote review copy");
    Ok(())
}

/// Overwrite the page in place with the assembled document (commit mode).
pub fn write_page(path: &Path, document: &str) -> Result<()> {
    fs::write(path, document)
        .with_context(|| format!("Failed to write page {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = document.len(), "Rewrote page in place");
    Ok(())
}
