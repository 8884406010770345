//! Environment/runtime helpers
//!
//! Sanity checks to ensure data file locations are usable before writing.

use std::path::Path;
use tracing::debug;

/// Ensure the parent directory of `file_path` exists, creating it if needed.
pub async fn ensure_parent_dir(file_path: &Path) -> anyhow::Result<()> {
    let Some(parent) = file_path.parent() else { return Ok(()) };
    if parent.as_os_str().is_empty() || tokio::fs::metadata(parent).await.is_ok() {
        return Ok(());
    }
    debug!(dir = %parent.display(), "creating data directory");
    tokio::fs::create_dir_all(parent)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
    Ok(())
}
