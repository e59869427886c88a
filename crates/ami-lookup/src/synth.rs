//! The synthetic demo candidate source.
//!
//! Stands in for a real clinic-search integration: per specialty it
//! fabricates two plausible entries with full source attribution, biased
//! by the caller's location hint. Latency is simulated so callers cross
//! the same suspend point a real network source would impose.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use uuid::Uuid;

use ami_core::models::clinic::Clinic;
use ami_match::error::SourceError;
use ami_match::source::CandidateSource;

/// Address text used when the caller gives no location hint.
pub const DEFAULT_LOCATIONS: [&str; 2] = ["東京都渋谷区", "東京都新宿区"];

const SOURCE_URL: &str = "https://example.com/search";

const SIMULATED_LATENCY: Duration = Duration::from_millis(1500);

pub struct SynthSource {
    delay: Duration,
}

impl SynthSource {
    /// A source with the demo integration's simulated remote latency.
    pub fn new() -> Self {
        Self {
            delay: SIMULATED_LATENCY,
        }
    }

    /// A source that resolves immediately.
    pub fn instant() -> Self {
        Self {
            delay: Duration::ZERO,
        }
    }
}

impl Default for SynthSource {
    fn default() -> Self {
        Self::new()
    }
}

impl CandidateSource for SynthSource {
    fn fetch_candidates(
        &self,
        specialty: &str,
        location: Option<&str>,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Clinic>, SourceError>> + Send + '_>> {
        let specialty = specialty.to_string();
        let location = location.map(str::to_string);
        Box::pin(async move {
            tokio::time::sleep(self.delay).await;

            // One lookup, one attribution timestamp for both entries.
            let fetched_at = jiff::Timestamp::now();

            let mut specialist = Clinic::named(
                format!("clinic-{}", Uuid::new_v4()),
                format!("{specialty}専門クリニック"),
            );
            specialist.address = Some(
                location
                    .clone()
                    .unwrap_or_else(|| DEFAULT_LOCATIONS[0].to_string()),
            );
            specialist.phone = Some("03-1234-5678".to_string());
            specialist.website = Some("https://example.com/clinic1".to_string());
            specialist.specialties = Some(vec![specialty.clone()]);
            specialist.description = Some(format!("{specialty}の専門治療を行っています。"));
            specialist.scraped_at = fetched_at;
            specialist.source_url = Some(SOURCE_URL.to_string());

            let mut general = Clinic::named(
                format!("clinic-{}", Uuid::new_v4()),
                format!("総合{specialty}クリニック"),
            );
            general.address =
                Some(location.unwrap_or_else(|| DEFAULT_LOCATIONS[1].to_string()));
            general.phone = Some("03-2345-6789".to_string());
            general.website = Some("https://example.com/clinic2".to_string());
            general.specialties = Some(vec![specialty.clone(), "内科".to_string()]);
            general.description =
                Some(format!("経験豊富な医師による{specialty}治療を提供しています。"));
            general.scraped_at = fetched_at;
            general.source_url = Some(SOURCE_URL.to_string());

            Ok(vec![specialist, general])
        })
    }
}
