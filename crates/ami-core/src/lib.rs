//! ami-core
//!
//! Pure domain types and storage file conventions.
//! No I/O — this is the shared vocabulary of the AMI system.

pub mod models;
pub mod store_keys;
