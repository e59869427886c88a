//! ami-storage
//!
//! Local JSON-file persistence for the clinic directory and patient
//! records. Last write wins — no locking, no versioning, no migration.

pub mod clinics;
pub mod error;
pub mod files;
pub mod records;
