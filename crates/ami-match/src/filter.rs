use ami_core::models::clinic::Clinic;

/// Filter a directory against a specialty set, preserving input order.
///
/// An empty specialty set passes the directory through unchanged. A
/// record matches when any of its own specialties and any requested
/// specialty contain each other case-insensitively — free-text specialty
/// naming means a request for "内科" should be satisfied by a record
/// tagged "消化器内科" and vice versa. Records with no specialty list
/// never match a non-empty request.
pub fn filter_by_specialty(directory: &[Clinic], specialties: &[String]) -> Vec<Clinic> {
    if specialties.is_empty() {
        return directory.to_vec();
    }

    directory
        .iter()
        .filter(|clinic| {
            let Some(own) = clinic.specialties.as_ref() else {
                return false;
            };
            specialties.iter().any(|wanted| {
                let wanted = wanted.to_lowercase();
                own.iter().any(|tagged| {
                    let tagged = tagged.to_lowercase();
                    tagged.contains(&wanted) || wanted.contains(&tagged)
                })
            })
        })
        .cloned()
        .collect()
}
