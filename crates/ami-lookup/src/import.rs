//! Bulk clinic import from JSON or CSV exports.
//!
//! Accepts the field aliases the source spreadsheets use — English,
//! Japanese, and camelCase — and is deliberately forgiving: a row with
//! no recognizable name imports as "Unknown" rather than failing the
//! batch.

use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use ami_core::models::clinic::Clinic;

use crate::error::ScrapeError;

/// Import clinics from a JSON array of heterogeneous objects.
pub fn import_json(text: &str) -> Result<Vec<Clinic>, ScrapeError> {
    let data: Vec<Value> = serde_json::from_str(text)?;
    Ok(import_clinics(&data))
}

/// Import clinics from naive comma-split CSV (first line is the header;
/// no quoting support).
pub fn import_csv(text: &str) -> Vec<Clinic> {
    import_clinics(&parse_csv(text))
}

/// Map loosely-shaped records onto [`Clinic`], minting ids and
/// timestamps where the input has none.
pub fn import_clinics(data: &[Value]) -> Vec<Clinic> {
    let clinics: Vec<Clinic> = data.iter().map(import_clinic).collect();
    info!(count = clinics.len(), "imported clinic records");
    clinics
}

fn import_clinic(item: &Value) -> Clinic {
    let id = text_field(item, &["id"])
        .unwrap_or_else(|| format!("imported-{}", Uuid::new_v4()));
    let name = text_field(item, &["name", "クリニック名", "Clinic Name"])
        .unwrap_or_else(|| "Unknown".to_string());

    let mut clinic = Clinic::named(id, name);
    clinic.address = text_field(item, &["address", "住所", "Address"]);
    clinic.phone = text_field(item, &["phone", "電話", "Phone"]);
    clinic.email = text_field(item, &["email", "メール", "Email"]);
    clinic.website = text_field(item, &["website", "ウェブサイト", "Website"]);
    clinic.specialties = list_field(item, &["specialties", "診療科目", "Specialties"]);
    clinic.description = text_field(item, &["description", "説明", "Description"]);
    clinic.opening_hours = text_field(item, &["openingHours", "診療時間", "Opening Hours"]);
    clinic.services = list_field(item, &["services", "サービス", "Services"]);
    clinic.doctors = list_field(item, &["doctors", "医師", "Doctors"]);
    clinic.source_url = text_field(item, &["sourceUrl", "URL"]);
    if let Some(ts) = text_field(item, &["scrapedAt"]).and_then(|s| s.parse().ok()) {
        clinic.scraped_at = ts;
    }
    clinic
}

/// First alias present with a non-empty string value wins.
fn text_field(item: &Value, aliases: &[&str]) -> Option<String> {
    aliases.iter().find_map(|key| {
        item.get(*key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
}

/// Like [`text_field`] but for list-valued fields. A plain string counts
/// as a single-item list (the CSV path never produces arrays).
fn list_field(item: &Value, aliases: &[&str]) -> Option<Vec<String>> {
    aliases.iter().find_map(|key| match item.get(*key) {
        Some(Value::Array(items)) => Some(
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
        ),
        Some(Value::String(s)) if !s.trim().is_empty() => Some(vec![s.trim().to_string()]),
        _ => None,
    })
}

fn parse_csv(text: &str) -> Vec<Value> {
    let mut lines = text.lines();
    let Some(header) = lines.next() else {
        return Vec::new();
    };
    let headers: Vec<&str> = header.split(',').map(str::trim).collect();

    lines
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let values: Vec<&str> = line.split(',').map(str::trim).collect();
            let mut obj = serde_json::Map::new();
            for (i, key) in headers.iter().enumerate() {
                obj.insert(
                    (*key).to_string(),
                    Value::String(values.get(i).copied().unwrap_or("").to_string()),
                );
            }
            Value::Object(obj)
        })
        .collect()
}
