//! The match aggregator: classify, filter locally, fall back to remote
//! candidates when the directory comes up short, bound the result.

use tracing::{info, warn};

use ami_core::models::clinic::Clinic;

use crate::classify::classify;
use crate::filter::filter_by_specialty;
use crate::source::CandidateSource;

/// Fewer local matches than this triggers the remote fallback.
const MIN_LOCAL_MATCHES: usize = 3;

/// Remote fan-out is capped at the first two classified specialties.
const MAX_LOOKUPS: usize = 2;

/// A match run never returns more than this many clinics.
const MAX_RESULTS: usize = 5;

/// One match run: symptom text in, at most five clinics out.
///
/// The local filter result is fully known before any lookups are issued;
/// when the fallback fires, the (at most two) lookups run concurrently
/// and the run waits for both to settle. Local matches always precede
/// remote ones in the result, and no dedup is performed between them.
///
/// This future always resolves. Lookup failures are absorbed per branch
/// and the directory slice is never mutated.
pub async fn find_best_clinics(
    symptom: &str,
    directory: &[Clinic],
    location: Option<&str>,
    source: &dyn CandidateSource,
) -> Vec<Clinic> {
    let specialties = classify(symptom);
    let mut matched = filter_by_specialty(directory, &specialties);

    if matched.len() >= MIN_LOCAL_MATCHES {
        matched.truncate(MAX_RESULTS);
        return matched;
    }

    info!(
        local = matched.len(),
        specialties = ?specialties,
        "too few local matches, falling back to remote lookup"
    );

    let mut wanted = specialties.iter().take(MAX_LOOKUPS);
    let first = wanted.next();
    let second = wanted.next();
    let (a, b) = tokio::join!(
        settle_lookup(source, first, location),
        settle_lookup(source, second, location),
    );

    matched.extend(a);
    matched.extend(b);
    matched.truncate(MAX_RESULTS);
    matched
}

/// Run one lookup branch to completion, absorbing failure into an empty
/// list so a bad branch can neither reject the run nor starve its
/// sibling.
async fn settle_lookup(
    source: &dyn CandidateSource,
    specialty: Option<&String>,
    location: Option<&str>,
) -> Vec<Clinic> {
    let Some(specialty) = specialty else {
        return Vec::new();
    };
    match source.fetch_candidates(specialty, location).await {
        Ok(clinics) => clinics,
        Err(e) => {
            warn!(specialty = %specialty, error = %e, "remote lookup failed, continuing without it");
            Vec::new()
        }
    }
}
