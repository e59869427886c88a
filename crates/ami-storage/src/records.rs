use std::path::Path;

use tracing::warn;

use ami_core::models::patient_record::PatientRecord;
use ami_core::store_keys;

use crate::error::StorageError;
use crate::files;

/// Load all patient records, newest first.
pub async fn get_records(data_dir: &Path) -> Result<Vec<PatientRecord>, StorageError> {
    let path = store_keys::patient_records_file(data_dir);
    match files::load_state(&path).await {
        Ok(records) => Ok(records),
        Err(StorageError::NotFound { .. }) => Ok(Vec::new()),
        Err(StorageError::Serialization(e)) => {
            warn!(path = %path.display(), error = %e, "record store unreadable, treating as empty");
            Ok(Vec::new())
        }
        Err(e) => Err(e),
    }
}

/// Prepend a new patient record. Records are append-only from the
/// caller's point of view; there is no upsert.
pub async fn save_record(data_dir: &Path, record: &PatientRecord) -> Result<(), StorageError> {
    let mut records = get_records(data_dir).await?;
    records.insert(0, record.clone());
    files::save_state(&store_keys::patient_records_file(data_dir), &records).await
}

/// Delete a patient record by id. Deleting an unknown id is a no-op.
pub async fn delete_record(data_dir: &Path, id: &str) -> Result<(), StorageError> {
    let mut records = get_records(data_dir).await?;
    records.retain(|r| r.id != id);
    files::save_state(&store_keys::patient_records_file(data_dir), &records).await
}
