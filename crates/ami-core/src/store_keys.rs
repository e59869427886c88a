//! Storage file conventions.
//!
//! Pure path functions — these define the canonical layout of the AMI
//! data directory.

use std::path::{Path, PathBuf};

pub const CLINICS: &str = "ami-clinics.json";

pub const PATIENT_RECORDS: &str = "ami-patient-records.json";

pub fn clinics_file(data_dir: &Path) -> PathBuf {
    data_dir.join(CLINICS)
}

pub fn patient_records_file(data_dir: &Path) -> PathBuf {
    data_dir.join(PATIENT_RECORDS)
}
