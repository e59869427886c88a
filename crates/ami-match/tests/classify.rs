//! Classifier properties: non-empty output for every input, bilingual
//! triggers, deterministic group ordering, first-seen dedup.

use ami_match::classify::{DEFAULT_SPECIALTIES, classify};

#[test]
fn empty_input_yields_default_specialties() {
    let specialties = classify("");
    assert_eq!(specialties, DEFAULT_SPECIALTIES);
    assert!(!specialties.is_empty());
}

#[test]
fn whitespace_only_yields_default_specialties() {
    assert_eq!(classify("   \n\t  "), DEFAULT_SPECIALTIES);
}

#[test]
fn unrecognized_symptom_yields_default_specialties() {
    assert_eq!(classify("somewhat under the weather"), DEFAULT_SPECIALTIES);
}

#[test]
fn headache_triggers_in_group_order() {
    let expected = ["神経内科", "脳神経外科", "内科"];
    assert_eq!(classify("頭痛がひどいです"), expected);
    assert_eq!(classify("I have a bad headache"), expected);
}

#[test]
fn matching_is_case_insensitive() {
    assert_eq!(
        classify("HEADACHE"),
        ["神経内科", "脳神経外科", "内科"]
    );
}

#[test]
fn fever_includes_internal_medicine() {
    let specialties = classify("熱があります");
    assert!(specialties.iter().any(|s| s == "内科"));
    assert_eq!(specialties, ["内科", "小児科", "感染症内科"]);
}

#[test]
fn overlapping_groups_dedupe_to_first_occurrence() {
    // Headache group contributes 内科 at position 3; the fever group's
    // leading 内科 must collapse into it instead of repeating.
    let specialties = classify("頭痛と熱があります");
    assert_eq!(
        specialties,
        ["神経内科", "脳神経外科", "内科", "小児科", "感染症内科"]
    );
}

#[test]
fn every_result_is_unique() {
    let specialties = classify("頭痛、腹痛、熱、咳、胸痛");
    let mut seen = specialties.clone();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), specialties.len());
}
