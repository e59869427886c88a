pub mod clinic;
pub mod patient_record;
