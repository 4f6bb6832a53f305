use std::path::Path;

use super::atomic_write::write_atomic;
use crate::errors::ScrapeResult;

/// Save the rendered Markdown document
///
/// # Errors
///
/// Returns [`ScrapeError::Io`](crate::ScrapeError::Io) when the output
/// directory cannot be created or the file cannot be written.
pub async fn save_markdown(path: &Path, markdown: &str) -> ScrapeResult<()> {
    write_atomic(path, markdown.as_bytes()).await?;
    log::debug!("Saved {} bytes of markdown to {}", markdown.len(), path.display());
    Ok(())
}
