use serde::{Deserialize, Serialize};

/// A clinic in the persisted directory.
///
/// Created by remote lookup (synthesized or scraped) or by user import.
/// There is no partial-field update API — a clinic is mutated only by
/// replacing the whole record under its id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clinic {
    /// Opaque identifier. Minted by whoever created the record; imported
    /// records keep their foreign ids.
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub website: Option<String>,
    /// `None` means the record carries no specialty list at all. Such a
    /// record is never matched while a specialty filter is in effect,
    /// but passes through when no specialties are requested.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub specialties: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub opening_hours: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub services: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub doctors: Option<Vec<String>>,
    /// Source attribution: when this record was acquired.
    pub scraped_at: jiff::Timestamp,
    /// Source attribution: where this record was acquired from.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub source_url: Option<String>,
}

impl Clinic {
    /// A minimal record with every optional field unset and the
    /// acquisition timestamp set to now.
    pub fn named(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: None,
            phone: None,
            email: None,
            website: None,
            specialties: None,
            description: None,
            opening_hours: None,
            services: None,
            doctors: None,
            scraped_at: jiff::Timestamp::now(),
            source_url: None,
        }
    }
}
