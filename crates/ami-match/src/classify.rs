//! Symptom keyword classification.
//!
//! A fixed, ordered table of (trigger substrings → specialty names)
//! pairs. No weighting, no language detection — each group carries its
//! Japanese and English trigger variants side by side, and table order
//! is the only precedence signal.

/// Appended when no keyword group matches. The classifier never returns
/// an empty set.
pub const DEFAULT_SPECIALTIES: &[&str] = &["内科", "総合診療科"];

/// Ordered keyword table. Triggers must be lowercase; input is
/// lowercased before matching. Specialties from earlier groups land
/// earlier in the result; duplicates across groups collapse to their
/// first occurrence.
const KEYWORD_GROUPS: &[(&[&str], &[&str])] = &[
    // Pain
    (&["頭痛", "headache"], &["神経内科", "脳神経外科", "内科"]),
    (
        &["腹痛", "stomach", "abdominal"],
        &["消化器内科", "内科", "胃腸科"],
    ),
    (
        &["腰痛", "back pain", "腰"],
        &["整形外科", "リハビリテーション科", "ペインクリニック"],
    ),
    (
        &["関節痛", "joint pain"],
        &["整形外科", "リウマチ科", "リハビリテーション科"],
    ),
    // Fever and colds
    (&["熱", "fever", "発熱"], &["内科", "小児科", "感染症内科"]),
    (
        &["咳", "cough", "くしゃみ"],
        &["呼吸器内科", "内科", "アレルギー科"],
    ),
    (
        &["鼻水", "鼻づまり", "runny nose"],
        &["耳鼻咽喉科", "アレルギー科", "内科"],
    ),
    // Skin
    (&["かゆみ", "発疹", "rash", "itch"], &["皮膚科", "アレルギー科"]),
    // Eyes
    (&["目", "眼", "eye", "視力"], &["眼科"]),
    // Teeth
    (&["歯", "tooth", "歯茎"], &["歯科", "口腔外科"]),
    // Heart and circulation
    (
        &["胸痛", "動悸", "chest pain", "heart"],
        &["循環器内科", "心臓血管外科", "内科"],
    ),
    // Mental health
    (
        &["うつ", "不安", "depression", "anxiety", "ストレス"],
        &["精神科", "心療内科", "メンタルクリニック"],
    ),
    // Gynecology
    (
        &["生理", "月経", "menstrual", "婦人科"],
        &["婦人科", "産婦人科"],
    ),
    // Pediatrics
    (
        &["子供", "小児", "child", "baby"],
        &["小児科", "小児外科"],
    ),
];

/// Map a free-text symptom description to an ordered, deduplicated set
/// of specialty names. Accepts any string, never panics, never returns
/// an empty set — an unrecognized symptom yields [`DEFAULT_SPECIALTIES`].
pub fn classify(symptom: &str) -> Vec<String> {
    let symptom = symptom.to_lowercase();
    let mut specialties: Vec<String> = Vec::new();

    for (triggers, group) in KEYWORD_GROUPS {
        if triggers.iter().any(|t| symptom.contains(t)) {
            for specialty in *group {
                if !specialties.iter().any(|s| s == specialty) {
                    specialties.push((*specialty).to_string());
                }
            }
        }
    }

    if specialties.is_empty() {
        specialties.extend(DEFAULT_SPECIALTIES.iter().map(|s| (*s).to_string()));
    }

    specialties
}
