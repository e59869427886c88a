//! Single-page clinic acquisition through a public CORS proxy.
//!
//! One fetch, selector-driven text extraction, no retry, no rate
//! limiting. The proxy wraps the target page in a JSON envelope so the
//! request works from CORS-restricted environments too.

use std::time::Duration;

use scraper::{Html, Selector};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use ami_core::models::clinic::Clinic;

use crate::error::ScrapeError;

const PROXY_URL: &str = "https://api.allorigins.win/get";

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Where to find each clinic field on the target page. Unset selectors
/// leave the field empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScrapeSelectors {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub description: Option<String>,
    pub specialties: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScrapeConfig {
    pub url: String,
    pub selectors: ScrapeSelectors,
}

#[derive(Deserialize)]
struct ProxyEnvelope {
    contents: String,
}

/// Fetch one clinic page through the proxy and extract a record.
pub async fn scrape_clinic(config: &ScrapeConfig) -> Result<Clinic, ScrapeError> {
    let client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;
    let proxy_url = reqwest::Url::parse_with_params(PROXY_URL, &[("url", config.url.as_str())])
        .map_err(|e| ScrapeError::Proxy(e.to_string()))?;

    let envelope: ProxyEnvelope = client
        .get(proxy_url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    let clinic = clinic_from_html(&envelope.contents, config)?;
    info!(url = %config.url, name = %clinic.name, "scraped clinic page");
    Ok(clinic)
}

/// Selector-driven extraction, separate from the fetch so it runs on any
/// HTML text.
pub fn clinic_from_html(html: &str, config: &ScrapeConfig) -> Result<Clinic, ScrapeError> {
    let doc = Html::parse_document(html);

    let name = extract_text(&doc, config.selectors.name.as_deref())?
        .unwrap_or_else(|| "Unknown Clinic".to_string());

    let mut clinic = Clinic::named(Uuid::new_v4().to_string(), name);
    clinic.address = extract_text(&doc, config.selectors.address.as_deref())?;
    clinic.phone = extract_text(&doc, config.selectors.phone.as_deref())?;
    clinic.description = extract_text(&doc, config.selectors.description.as_deref())?;
    clinic.specialties = extract_all(&doc, config.selectors.specialties.as_deref())?;
    clinic.source_url = Some(config.url.clone());
    Ok(clinic)
}

fn extract_text(doc: &Html, selector: Option<&str>) -> Result<Option<String>, ScrapeError> {
    let Some(selector) = selector else {
        return Ok(None);
    };
    let selector =
        Selector::parse(selector).map_err(|e| ScrapeError::Selector(e.to_string()))?;
    Ok(doc
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty()))
}

fn extract_all(doc: &Html, selector: Option<&str>) -> Result<Option<Vec<String>>, ScrapeError> {
    let Some(selector) = selector else {
        return Ok(None);
    };
    let selector =
        Selector::parse(selector).map_err(|e| ScrapeError::Selector(e.to_string()))?;
    let values: Vec<String> = doc
        .select(&selector)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
        .collect();
    Ok(Some(values))
}
