use crate::locale::Locale;
use serde::Deserialize;

/// One multiple-choice KNM question. Dutch (`nl`) is the quizzed language and
/// is always present, English is the guaranteed fallback for the translation
/// overlay, Chinese is optional per field.
#[derive(Debug, Clone, Deserialize)]
pub struct FlashcardRecord {
    pub id: u32,
    pub category: String,
    pub question_nl: String,
    pub question_en: String,
    #[serde(default)]
    pub question_zh: Option<String>,
    pub options_nl: Vec<String>,
    pub options_en: Vec<String>,
    #[serde(default)]
    pub options_zh: Option<Vec<String>>,
    pub answer_nl: String,
    pub answer_en: String,
    #[serde(default)]
    pub answer_zh: Option<String>,
}

impl FlashcardRecord {
    /// Question text for the translation overlay, falling back to English
    /// when the locale-specific field is absent.
    pub fn translated_question(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.question_en,
            Locale::Zh => self.question_zh.as_deref().unwrap_or(&self.question_en),
        }
    }

    pub fn translated_options(&self, locale: Locale) -> &[String] {
        match locale {
            Locale::En => &self.options_en,
            Locale::Zh => self.options_zh.as_deref().unwrap_or(&self.options_en),
        }
    }

    pub fn translated_answer(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.answer_en,
            Locale::Zh => self.answer_zh.as_deref().unwrap_or(&self.answer_en),
        }
    }
}

/// Per-option styling once the answer is revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionOutcome {
    Correct,
    Incorrect,
    Neutral,
}

/// One quiz round: a single card drawn at construction plus the interaction
/// flags the user can change. The card never changes for the lifetime of the
/// session; drawing again means constructing a new session.
#[derive(Debug)]
pub struct QuizSession {
    pub card: FlashcardRecord,
    pub selected: Option<usize>,
    pub revealed: bool,
    pub show_translation: bool,
}

#[derive(Debug, PartialEq)]
pub enum AppState {
    Menu,
    Quiz,
    QuitConfirm,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_without_zh() -> FlashcardRecord {
        FlashcardRecord {
            id: 8,
            category: "Wonen".to_string(),
            question_nl: "Waar meldt u zich aan?".to_string(),
            question_en: "Where do you register?".to_string(),
            question_zh: None,
            options_nl: vec!["Gemeente".to_string(), "Politie".to_string()],
            options_en: vec!["Municipality".to_string(), "Police".to_string()],
            options_zh: None,
            answer_nl: "Gemeente".to_string(),
            answer_en: "Municipality".to_string(),
            answer_zh: None,
        }
    }

    fn record_with_zh() -> FlashcardRecord {
        FlashcardRecord {
            id: 1,
            category: "Staatsinrichting".to_string(),
            question_nl: "Wie is het staatshoofd?".to_string(),
            question_en: "Who is the head of state?".to_string(),
            question_zh: Some("谁是国家元首？".to_string()),
            options_nl: vec!["De koning".to_string(), "De premier".to_string()],
            options_en: vec!["The king".to_string(), "The prime minister".to_string()],
            options_zh: Some(vec!["国王".to_string(), "首相".to_string()]),
            answer_nl: "De koning".to_string(),
            answer_en: "The king".to_string(),
            answer_zh: Some("国王".to_string()),
        }
    }

    #[test]
    fn test_resolution_prefers_requested_locale() {
        let record = record_with_zh();
        assert_eq!(record.translated_question(Locale::Zh), "谁是国家元首？");
        assert_eq!(record.translated_options(Locale::Zh)[0], "国王");
        assert_eq!(record.translated_answer(Locale::Zh), "国王");
    }

    #[test]
    fn test_resolution_english_is_direct() {
        let record = record_with_zh();
        assert_eq!(
            record.translated_question(Locale::En),
            "Who is the head of state?"
        );
        assert_eq!(record.translated_answer(Locale::En), "The king");
    }

    #[test]
    fn test_missing_zh_fields_fall_back_to_english() {
        let record = record_without_zh();
        assert_eq!(
            record.translated_question(Locale::Zh),
            "Where do you register?"
        );
        assert_eq!(record.translated_options(Locale::Zh)[1], "Police");
        assert_eq!(record.translated_answer(Locale::Zh), "Municipality");
    }

    #[test]
    fn test_record_deserializes_without_optional_fields() {
        let json = r#"{
            "id": 3,
            "category": "Gezondheid",
            "question_nl": "Q?",
            "question_en": "Q?",
            "options_nl": ["a", "b"],
            "options_en": ["a", "b"],
            "answer_nl": "a",
            "answer_en": "a"
        }"#;
        let record: FlashcardRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 3);
        assert!(record.question_zh.is_none());
        assert!(record.options_zh.is_none());
        assert!(record.answer_zh.is_none());
    }
}
