use std::io::ErrorKind;
use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::error::StorageError;

/// Load a JSON state file from disk and deserialize it.
pub async fn load_state<T: DeserializeOwned>(path: &Path) -> Result<T, StorageError> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            StorageError::NotFound {
                path: path.display().to_string(),
            }
        } else {
            StorageError::Io(e)
        }
    })?;
    let value: T = serde_json::from_slice(&bytes)?;
    Ok(value)
}

/// Serialize a value and save it as a JSON state file, creating the
/// parent directory if needed. Overwrites unconditionally.
pub async fn save_state<T: Serialize>(path: &Path, value: &T) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    let body = serde_json::to_vec_pretty(value)?;
    tokio::fs::write(path, body).await?;
    Ok(())
}
