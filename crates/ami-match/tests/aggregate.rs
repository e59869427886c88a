//! Aggregator properties: the 0..=5 result bound, the local-only fast
//! path, bounded concurrent fan-out, local-first ordering, and per-branch
//! failure absorption.

use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use ami_core::models::clinic::Clinic;
use ami_match::aggregate::find_best_clinics;
use ami_match::error::SourceError;
use ami_match::source::CandidateSource;

fn local_clinic(id: &str, specialties: &[&str]) -> Clinic {
    let mut clinic = Clinic::named(id, format!("{id} clinic"));
    clinic.specialties = Some(specialties.iter().map(|s| (*s).to_string()).collect());
    clinic
}

/// Canned candidate source: counts lookups, records queried specialties,
/// returns `per_lookup` clinics labelled with the specialty, and fails
/// for specialties on its deny list.
struct StubSource {
    calls: AtomicUsize,
    queried: Mutex<Vec<String>>,
    per_lookup: usize,
    fail_for: Vec<String>,
}

impl StubSource {
    fn returning(per_lookup: usize) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            queried: Mutex::new(Vec::new()),
            per_lookup,
            fail_for: Vec::new(),
        }
    }

    fn failing_for(per_lookup: usize, fail_for: &[&str]) -> Self {
        Self {
            fail_for: fail_for.iter().map(|s| (*s).to_string()).collect(),
            ..Self::returning(per_lookup)
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CandidateSource for StubSource {
    fn fetch_candidates(
        &self,
        specialty: &str,
        _location: Option<&str>,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Clinic>, SourceError>> + Send + '_>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queried
            .lock()
            .expect("queried lock")
            .push(specialty.to_string());
        let specialty = specialty.to_string();
        let fail = self.fail_for.contains(&specialty);
        let per_lookup = self.per_lookup;
        Box::pin(async move {
            if fail {
                return Err(SourceError::Fetch(format!("no results for {specialty}")));
            }
            Ok((0..per_lookup)
                .map(|i| {
                    let mut clinic =
                        Clinic::named(format!("remote-{specialty}-{i}"), format!("{specialty} {i}"));
                    clinic.specialties = Some(vec![specialty.clone()]);
                    clinic
                })
                .collect())
        })
    }
}

#[tokio::test]
async fn rich_directory_skips_remote_lookup_entirely() {
    let directory: Vec<Clinic> = (0..4)
        .map(|i| local_clinic(&format!("local-{i}"), &["内科"]))
        .collect();
    let source = StubSource::returning(2);

    let result = find_best_clinics("熱があります", &directory, None, &source).await;

    assert_eq!(result.len(), 4);
    let ids: Vec<&str> = result.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["local-0", "local-1", "local-2", "local-3"]);
    assert_eq!(source.call_count(), 0);
}

#[tokio::test]
async fn local_only_path_truncates_to_five() {
    let directory: Vec<Clinic> = (0..7)
        .map(|i| local_clinic(&format!("local-{i}"), &["内科"]))
        .collect();
    let source = StubSource::returning(2);

    let result = find_best_clinics("熱があります", &directory, None, &source).await;

    assert_eq!(result.len(), 5);
    assert_eq!(result[0].id, "local-0");
    assert_eq!(result[4].id, "local-4");
    assert_eq!(source.call_count(), 0);
}

#[tokio::test]
async fn empty_directory_fans_out_to_first_two_specialties() {
    let source = StubSource::returning(2);

    let result = find_best_clinics("頭痛がひどいです", &[], None, &source).await;

    // Classification yields three specialties; lookups are capped at two.
    assert_eq!(source.call_count(), 2);
    assert_eq!(
        *source.queried.lock().expect("queried lock"),
        ["神経内科", "脳神経外科"]
    );
    assert_eq!(result.len(), 4);
    for clinic in &result {
        let specialties = clinic.specialties.as_ref().expect("remote specialties");
        assert!(specialties[0] == "神経内科" || specialties[0] == "脳神経外科");
    }
}

#[tokio::test]
async fn local_matches_come_before_remote_ones() {
    let directory = vec![local_clinic("local-0", &["神経内科"])];
    let source = StubSource::returning(2);

    let result = find_best_clinics("頭痛がひどいです", &directory, None, &source).await;

    assert_eq!(result.len(), 5);
    assert_eq!(result[0].id, "local-0");
    assert!(result[1..].iter().all(|c| c.id.starts_with("remote-")));
}

#[tokio::test]
async fn combined_result_never_exceeds_five() {
    let source = StubSource::returning(4);

    let result = find_best_clinics("頭痛がひどいです", &[], None, &source).await;

    assert_eq!(result.len(), 5);
}

#[tokio::test]
async fn failing_branch_does_not_poison_its_sibling() {
    let source = StubSource::failing_for(2, &["神経内科"]);

    let result = find_best_clinics("頭痛がひどいです", &[], None, &source).await;

    assert_eq!(source.call_count(), 2);
    assert_eq!(result.len(), 2);
    for clinic in &result {
        assert_eq!(
            clinic.specialties.as_ref().expect("remote specialties")[0],
            "脳神経外科"
        );
    }
}

#[tokio::test]
async fn all_branches_failing_still_resolves() {
    let source = StubSource::failing_for(2, &["神経内科", "脳神経外科"]);

    let result = find_best_clinics("頭痛がひどいです", &[], None, &source).await;

    assert!(result.is_empty());
}

#[tokio::test]
async fn directory_slice_is_left_untouched() {
    let directory = vec![local_clinic("local-0", &["内科"])];
    let before: Vec<String> = directory.iter().map(|c| c.id.clone()).collect();
    let source = StubSource::returning(1);

    let _ = find_best_clinics("熱があります", &directory, None, &source).await;

    let after: Vec<String> = directory.iter().map(|c| c.id.clone()).collect();
    assert_eq!(before, after);
}
