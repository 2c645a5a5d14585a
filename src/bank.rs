use crate::models::FlashcardRecord;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default question bank, embedded at build time so the binary is
/// self-contained.
const EMBEDDED_BANK: &str = include_str!("../data/knm_flashcards.json");

#[derive(Debug, Error)]
pub enum BankError {
    #[error("cannot read question bank: {0}")]
    Io(#[from] std::io::Error),
    #[error("question bank is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("question bank is empty")]
    Empty,
    #[error("duplicate record id {0}")]
    DuplicateId(u32),
    #[error("record {id}: answer_{locale} is not one of options_{locale}")]
    AnswerNotInOptions { id: u32, locale: &'static str },
    #[error("record {id}: options_{locale} has {got} entries, expected {expected}")]
    OptionCountMismatch {
        id: u32,
        locale: &'static str,
        expected: usize,
        got: usize,
    },
}

/// Loads and validates the embedded bank.
pub fn load_embedded() -> Result<Vec<FlashcardRecord>, BankError> {
    parse_and_validate(EMBEDDED_BANK)
}

/// Loads and validates a bank from a JSON file with the same schema as the
/// embedded asset.
pub fn load_from_file(path: &Path) -> Result<Vec<FlashcardRecord>, BankError> {
    let content = fs::read_to_string(path)?;
    parse_and_validate(&content)
}

fn parse_and_validate(json: &str) -> Result<Vec<FlashcardRecord>, BankError> {
    let records: Vec<FlashcardRecord> = serde_json::from_str(json)?;
    validate(&records)?;
    Ok(records)
}

/// Integrity checks for every record: ids unique, each localized answer is a
/// member of its option list, option lists of all present locales have the
/// same length as the Dutch one.
pub fn validate(records: &[FlashcardRecord]) -> Result<(), BankError> {
    if records.is_empty() {
        return Err(BankError::Empty);
    }

    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert(record.id) {
            return Err(BankError::DuplicateId(record.id));
        }

        check_membership(record.id, "nl", &record.answer_nl, &record.options_nl)?;
        check_membership(record.id, "en", &record.answer_en, &record.options_en)?;

        let expected = record.options_nl.len();
        check_count(record.id, "en", expected, record.options_en.len())?;

        if let Some(options_zh) = &record.options_zh {
            check_count(record.id, "zh", expected, options_zh.len())?;
            if let Some(answer_zh) = &record.answer_zh {
                check_membership(record.id, "zh", answer_zh, options_zh)?;
            }
        }
    }

    Ok(())
}

fn check_membership(
    id: u32,
    locale: &'static str,
    answer: &str,
    options: &[String],
) -> Result<(), BankError> {
    if options.iter().any(|opt| opt == answer) {
        Ok(())
    } else {
        Err(BankError::AnswerNotInOptions { id, locale })
    }
}

fn check_count(
    id: u32,
    locale: &'static str,
    expected: usize,
    got: usize,
) -> Result<(), BankError> {
    if got == expected {
        Ok(())
    } else {
        Err(BankError::OptionCountMismatch {
            id,
            locale,
            expected,
            got,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn minimal_bank(answer_nl: &str) -> String {
        format!(
            r#"[{{
                "id": 1,
                "category": "Test",
                "question_nl": "Q?",
                "question_en": "Q?",
                "options_nl": ["A", "B", "C"],
                "options_en": ["A", "B", "C"],
                "answer_nl": "{answer_nl}",
                "answer_en": "A"
            }}]"#
        )
    }

    #[test]
    fn test_embedded_bank_loads_and_validates() {
        let records = load_embedded().unwrap();
        assert!(!records.is_empty());
    }

    #[test]
    fn test_embedded_bank_answers_are_members_of_options() {
        for record in load_embedded().unwrap() {
            assert!(
                record.options_nl.contains(&record.answer_nl),
                "record {} answer_nl not in options_nl",
                record.id
            );
            assert!(
                record.options_en.contains(&record.answer_en),
                "record {} answer_en not in options_en",
                record.id
            );
        }
    }

    #[test]
    fn test_embedded_bank_option_lists_have_equal_length() {
        for record in load_embedded().unwrap() {
            assert_eq!(record.options_nl.len(), record.options_en.len());
            if let Some(options_zh) = &record.options_zh {
                assert_eq!(record.options_nl.len(), options_zh.len());
            }
        }
    }

    #[test]
    fn test_answer_outside_options_is_rejected() {
        let err = parse_and_validate(&minimal_bank("D")).unwrap_err();
        assert!(matches!(
            err,
            BankError::AnswerNotInOptions { id: 1, locale: "nl" }
        ));
    }

    #[test]
    fn test_empty_bank_is_rejected() {
        let err = parse_and_validate("[]").unwrap_err();
        assert!(matches!(err, BankError::Empty));
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let json = r#"[
            {
                "id": 1, "category": "T",
                "question_nl": "Q?", "question_en": "Q?",
                "options_nl": ["A"], "options_en": ["A"],
                "answer_nl": "A", "answer_en": "A"
            },
            {
                "id": 1, "category": "T",
                "question_nl": "Q?", "question_en": "Q?",
                "options_nl": ["A"], "options_en": ["A"],
                "answer_nl": "A", "answer_en": "A"
            }
        ]"#;
        let err = parse_and_validate(json).unwrap_err();
        assert!(matches!(err, BankError::DuplicateId(1)));
    }

    #[test]
    fn test_mismatched_option_counts_are_rejected() {
        let json = r#"[{
            "id": 1, "category": "T",
            "question_nl": "Q?", "question_en": "Q?",
            "options_nl": ["A", "B"], "options_en": ["A"],
            "answer_nl": "A", "answer_en": "A"
        }]"#;
        let err = parse_and_validate(json).unwrap_err();
        assert!(matches!(
            err,
            BankError::OptionCountMismatch {
                id: 1,
                locale: "en",
                expected: 2,
                got: 1
            }
        ));
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        assert!(matches!(
            parse_and_validate("not json").unwrap_err(),
            BankError::Parse(_)
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(minimal_bank("B").as_bytes()).unwrap();
        let records = load_from_file(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].answer_nl, "B");
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = load_from_file(Path::new("/nonexistent/bank.json")).unwrap_err();
        assert!(matches!(err, BankError::Io(_)));
    }
}
