//! Locating the questionnaire and answer files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};
use questionnaire::{
    AnswerSheet, QUESTIONNAIRE_RESOURCE, Questionnaire, QuestionnaireError,
    decode_exported_survey, decode_matched_questions, load_questionnaire_file, locate_resource,
};

/// Where the bundled questionnaire is looked for when no file is given.
const SEARCH_DIRS: [&str; 3] = [".", "assets", "questionnaire-cli/assets"];

pub fn search_dirs() -> Vec<PathBuf> {
    SEARCH_DIRS.iter().map(PathBuf::from).collect()
}

pub fn resolve_questionnaire_path(file: Option<&Path>) -> Result<PathBuf, QuestionnaireError> {
    match file {
        Some(path) => Ok(path.to_path_buf()),
        None => locate_resource(QUESTIONNAIRE_RESOURCE, &search_dirs()),
    }
}

pub fn load_questionnaire(file: Option<&Path>) -> Result<Questionnaire, QuestionnaireError> {
    let path = resolve_questionnaire_path(file)?;
    info!("Loading questionnaire from {}", path.display());
    load_questionnaire_file(&path)
}

/// Read extracted answers from an exported survey, or failing that a
/// matching-service response.
pub fn load_answers(path: &Path) -> Result<AnswerSheet> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read answers from {}", path.display()))?;

    match decode_exported_survey(&json) {
        Ok(export) => Ok(AnswerSheet::from_export(&export)),
        Err(export_err) => {
            warn!(
                "{} is not an exported survey ({}), trying matched questions",
                path.display(),
                export_err
            );
            let matched = decode_matched_questions(&json)
                .with_context(|| format!("Failed to decode answers in {}", path.display()))?;
            Ok(AnswerSheet::from_matched(&matched))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundled() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/questionnaire.json")
    }

    #[test]
    fn explicit_file_wins() {
        let path = resolve_questionnaire_path(Some(Path::new("custom.json"))).unwrap();
        assert_eq!(path, PathBuf::from("custom.json"));
    }

    #[test]
    fn bundled_questionnaire_loads() {
        let questionnaire = load_questionnaire(Some(&bundled())).unwrap();
        assert_eq!(questionnaire.len(), 5);
    }

    #[test]
    fn missing_file_reported_as_not_found() {
        let err = load_questionnaire(Some(Path::new("/no/such/questionnaire.json"))).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn answers_from_export_fixture() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../questionnaire/tests/fixtures/exported_survey.json");
        let answers = load_answers(&path).unwrap();
        assert_eq!(answers.get(3), Some("Three"));
    }

    #[test]
    fn answers_from_matching_service_response() {
        let path = std::env::temp_dir().join(format!(
            "questionnaire-cli-matched-{}.json",
            std::process::id()
        ));
        fs::write(
            &path,
            r#"[{ "matched_question_id": 2, "matched_question": "q", "extracted_answer": "Well",
                 "confidence": "medium", "clarification_needed": false }]"#,
        )
        .unwrap();

        let answers = load_answers(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(answers.get(2), Some("Well"));
    }

    #[test]
    fn unreadable_answers_fail() {
        assert!(load_answers(Path::new("/no/such/answers.json")).is_err());
    }
}
