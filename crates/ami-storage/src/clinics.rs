use std::path::Path;

use tracing::warn;

use ami_core::models::clinic::Clinic;
use ami_core::store_keys;

use crate::error::StorageError;
use crate::files;

/// Load the full clinic directory, newest first.
///
/// A missing store file means an empty directory. An unreadable store
/// file is also treated as empty — the directory is a convenience cache,
/// not a system of record.
pub async fn get_clinics(data_dir: &Path) -> Result<Vec<Clinic>, StorageError> {
    let path = store_keys::clinics_file(data_dir);
    match files::load_state(&path).await {
        Ok(clinics) => Ok(clinics),
        Err(StorageError::NotFound { .. }) => Ok(Vec::new()),
        Err(StorageError::Serialization(e)) => {
            warn!(path = %path.display(), error = %e, "clinic store unreadable, treating as empty");
            Ok(Vec::new())
        }
        Err(e) => Err(e),
    }
}

/// Replace the whole clinic directory.
pub async fn save_clinics(data_dir: &Path, clinics: &[Clinic]) -> Result<(), StorageError> {
    files::save_state(&store_keys::clinics_file(data_dir), &clinics).await
}

/// Upsert a single clinic: replace in place when the id already exists,
/// otherwise prepend so the newest record comes first.
pub async fn save_clinic(data_dir: &Path, clinic: &Clinic) -> Result<(), StorageError> {
    let mut clinics = get_clinics(data_dir).await?;
    match clinics.iter().position(|c| c.id == clinic.id) {
        Some(i) => clinics[i] = clinic.clone(),
        None => clinics.insert(0, clinic.clone()),
    }
    save_clinics(data_dir, &clinics).await
}

/// Delete a clinic by id. Deleting an unknown id is a no-op.
pub async fn delete_clinic(data_dir: &Path, id: &str) -> Result<(), StorageError> {
    let mut clinics = get_clinics(data_dir).await?;
    clinics.retain(|c| c.id != id);
    save_clinics(data_dir, &clinics).await
}

/// Case-insensitive substring search over name, address, specialties,
/// and description.
pub async fn search_clinics(data_dir: &Path, query: &str) -> Result<Vec<Clinic>, StorageError> {
    let clinics = get_clinics(data_dir).await?;
    let query = query.to_lowercase();
    Ok(clinics
        .into_iter()
        .filter(|clinic| {
            clinic.name.to_lowercase().contains(&query)
                || clinic
                    .address
                    .as_ref()
                    .is_some_and(|a| a.to_lowercase().contains(&query))
                || clinic
                    .specialties
                    .as_ref()
                    .is_some_and(|tags| tags.iter().any(|t| t.to_lowercase().contains(&query)))
                || clinic
                    .description
                    .as_ref()
                    .is_some_and(|d| d.to_lowercase().contains(&query))
        })
        .collect())
}
