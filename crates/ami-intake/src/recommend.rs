use tracing::info;

use ami_core::models::clinic::Clinic;
use ami_match::aggregate::find_best_clinics;
use ami_match::source::CandidateSource;

use crate::session::IntakeSession;

/// Run the matching pipeline over everything the patient has said so
/// far. The directory snapshot belongs to the caller, and so does the
/// decision to persist any of the returned clinics.
pub async fn recommend(
    session: &IntakeSession,
    directory: &[Clinic],
    location: Option<&str>,
    source: &dyn CandidateSource,
) -> Vec<Clinic> {
    let symptom = session.patient_words();
    let clinics = find_best_clinics(&symptom, directory, location, source).await;
    info!(count = clinics.len(), "assembled clinic recommendations");
    clinics
}
