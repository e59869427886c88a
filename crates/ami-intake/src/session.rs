//! The scripted intake session.
//!
//! Not natural-language understanding: assistant replies are
//! keyword-matched follow-up prompts in the session language, enough to
//! keep the patient talking while their words are captured verbatim.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ami_core::models::patient_record::PatientRecord;

/// Name under which intake transcripts are filed.
pub const RECORDED_BY: &str = "AI Chatbot";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    Ja,
    En,
}

/// Role of an intake message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    Patient,
    Assistant,
}

/// A single message in an intake session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeMessage {
    pub id: Uuid,
    pub speaker: Speaker,
    pub text: String,
    pub timestamp: jiff::Timestamp,
}

/// One conversation between a patient and the scripted assistant.
///
/// Opens with a language-appropriate greeting. The optional patient
/// id/name attach to the transcript when the session is filed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeSession {
    pub language: Language,
    pub messages: Vec<IntakeMessage>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub patient_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub patient_name: Option<String>,
}

impl IntakeSession {
    pub fn new(language: Language) -> Self {
        let mut session = Self {
            language,
            messages: Vec::new(),
            patient_id: None,
            patient_name: None,
        };
        session.push(Speaker::Assistant, greeting(language).to_string());
        session
    }

    /// Record what the patient said and append the scripted follow-up.
    /// Returns the assistant's reply text.
    pub fn say(&mut self, text: &str) -> &str {
        let reply = follow_up(self.language, text).to_string();
        self.push(Speaker::Patient, text.to_string());
        self.push(Speaker::Assistant, reply);
        &self.messages[self.messages.len() - 1].text
    }

    /// Patient-side text in order, joined with blank lines. This is what
    /// classification and transcript assembly run on.
    pub fn patient_words(&self) -> String {
        self.messages
            .iter()
            .filter(|m| m.speaker == Speaker::Patient)
            .map(|m| m.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Fold the patient side of the conversation into one record.
    /// `None` when the patient has said nothing worth filing.
    pub fn transcript_record(&self) -> Option<PatientRecord> {
        let patient_words = self.patient_words();
        if patient_words.trim().is_empty() {
            return None;
        }
        Some(PatientRecord {
            id: Uuid::new_v4().to_string(),
            patient_words,
            recorded_by: RECORDED_BY.to_string(),
            recorded_at: jiff::Timestamp::now(),
            patient_id: self.patient_id.clone(),
            patient_name: self.patient_name.clone(),
        })
    }

    fn push(&mut self, speaker: Speaker, text: String) {
        self.messages.push(IntakeMessage {
            id: Uuid::new_v4(),
            speaker,
            text,
            timestamp: jiff::Timestamp::now(),
        });
    }
}

fn greeting(language: Language) -> &'static str {
    match language {
        Language::Ja => "こんにちは。どのような症状でお困りですか？お気軽にお話しください。",
        Language::En => "Hello. What symptoms are you experiencing? Please feel free to tell me.",
    }
}

/// Keyword-matched follow-up prompt. The checks mirror the topics the
/// classifier cares most about; anything else gets the generic prompt.
fn follow_up(language: Language, text: &str) -> &'static str {
    let text = text.to_lowercase();

    // Headache before the generic pain check: "頭痛" contains "痛".
    if text.contains("頭痛") || text.contains("headache") {
        return match language {
            Language::Ja => "頭痛について詳しく教えてください。どの部分が痛みますか？いつからですか？",
            Language::En => "Please tell me more about the headache. Which part hurts? When did it start?",
        };
    }
    if text.contains('痛') || text.contains("hurt") || text.contains("pain") {
        return match language {
            Language::Ja => "痛みについて詳しく教えてください。いつから痛みますか？どのような痛みですか？",
            Language::En => "Please tell me more about the pain. When did it start? What kind of pain is it?",
        };
    }
    if text.contains('熱') || text.contains("発熱") || text.contains("fever") || text.contains("temperature") {
        return match language {
            Language::Ja => "発熱についてお聞きします。体温は何度ですか？いつから熱がありますか？",
            Language::En => "About the fever. What is your temperature? When did the fever start?",
        };
    }
    if text.contains('咳') || text.contains("cough") {
        return match language {
            Language::Ja => "咳について詳しく教えてください。どのような咳ですか？痰は出ますか？",
            Language::En => "Please tell me more about the cough. What kind of cough is it? Do you have phlegm?",
        };
    }
    match language {
        Language::Ja => "ありがとうございます。その症状について詳しく教えていただけますか？",
        Language::En => "Thank you. Could you tell me more about that symptom?",
    }
}
