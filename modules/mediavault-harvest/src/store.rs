use std::path::{Path, PathBuf};

use mediavault_common::{HarvestError, Result};
use serde::Serialize;
use tracing::info;

/// Write the normalized post list as pretty-printed JSON to
/// `{platform_tag}_{username}_posts.json` under `dir`, overwriting any
/// existing file. Single shot; failure here aborts the run before any media
/// download starts.
pub async fn persist_posts<T: Serialize>(
    dir: &Path,
    platform_tag: &str,
    username: &str,
    posts: &[T],
) -> Result<PathBuf> {
    let path = dir.join(format!("{platform_tag}_{username}_posts.json"));

    let json = serde_json::to_string_pretty(posts)
        .map_err(|e| HarvestError::Persist(format!("serialize posts: {e}")))?;

    tokio::fs::write(&path, json)
        .await
        .map_err(|e| HarvestError::Persist(format!("write {}: {e}", path.display())))?;

    info!(path = %path.display(), count = posts.len(), "Persisted post metadata");
    Ok(path)
}
