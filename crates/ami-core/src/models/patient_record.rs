use serde::{Deserialize, Serialize};

/// A patient-reported statement, recorded verbatim.
///
/// Newest records sit at the front of the persisted store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientRecord {
    pub id: String,
    /// What the patient said, in their own words.
    pub patient_words: String,
    /// Who took the record down (staff name, or `"AI Chatbot"` for
    /// intake-session transcripts).
    pub recorded_by: String,
    pub recorded_at: jiff::Timestamp,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub patient_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub patient_name: Option<String>,
}
