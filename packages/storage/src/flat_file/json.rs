// ABOUTME: Whole-file JSON array persistence
// ABOUTME: Every read parses the full file and every write rewrites it

use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use tokio::fs;
use tracing::{debug, warn};

use crate::StorageResult;

/// Read a JSON array file. A missing file, or one holding something other
/// than an array, reads as empty.
pub async fn read_json_array<T: DeserializeOwned>(path: &Path) -> StorageResult<Vec<T>> {
    if fs::metadata(path).await.is_err() {
        debug!("{:?} does not exist yet, returning empty collection", path);
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path).await?;
    let value: serde_json::Value = serde_json::from_str(&content)?;

    if !value.is_array() {
        warn!("{:?} does not hold a JSON array, treating as empty", path);
        return Ok(Vec::new());
    }

    let items: Vec<T> = serde_json::from_value(value)?;
    debug!("Loaded {} items from {:?}", items.len(), path);
    Ok(items)
}

/// Overwrite `path` with a pretty-printed JSON array, creating parent directories as needed
pub async fn write_json_array<T: Serialize>(path: &Path, items: &[T]) -> StorageResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let content = serde_json::to_string_pretty(items)?;
    fs::write(path, content).await?;

    debug!("Wrote {} items to {:?}", items.len(), path);
    Ok(())
}
