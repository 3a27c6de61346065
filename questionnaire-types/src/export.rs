//! Records produced by external answer matching and export.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Result of exporting a recorded survey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedSurvey {
    pub matched_questions: Vec<ExportedMatchedQuestion>,

    #[serde(default)]
    pub respondent_info: Option<ExportedRespondentInfo>,
}

impl ExportedSurvey {
    /// Extracted answer for `question_id`, skipping unset and blank answers.
    pub fn answer_for(&self, question_id: i64) -> Option<&str> {
        self.matched_questions
            .iter()
            .filter(|m| m.matched_question_id == question_id)
            .find_map(|m| non_blank(m.extracted_answer.as_deref()))
    }
}

/// A questionnaire question paired with whatever answer could be extracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedMatchedQuestion {
    pub matched_question_id: i64,
    pub matched_question: String,
    #[serde(default)]
    pub extracted_answer: Option<String>,
}

/// Respondent info as reported by the export; every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedRespondentInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Response shape of the matching service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedQuestion {
    pub matched_question_id: i64,
    pub matched_question: String,
    pub extracted_answer: String,
    /// Confidence label, e.g. "high" / "medium" / "low".
    pub confidence: String,
    pub clarification_needed: bool,
}

/// Read-only map from question id to extracted answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSheet {
    answers: HashMap<i64, String>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the non-blank answers of an export. The first answer per id wins.
    pub fn from_export(survey: &ExportedSurvey) -> Self {
        let mut sheet = Self::new();
        for matched in &survey.matched_questions {
            if let Some(answer) = non_blank(matched.extracted_answer.as_deref()) {
                sheet.insert_first(matched.matched_question_id, answer);
            }
        }
        sheet
    }

    pub fn from_matched(matched: &[MatchedQuestion]) -> Self {
        let mut sheet = Self::new();
        for m in matched {
            if let Some(answer) = non_blank(Some(m.extracted_answer.as_str())) {
                sheet.insert_first(m.matched_question_id, answer);
            }
        }
        sheet
    }

    fn insert_first(&mut self, id: i64, answer: &str) {
        self.answers
            .entry(id)
            .or_insert_with(|| answer.to_string());
    }

    pub fn get(&self, question_id: i64) -> Option<&str> {
        self.answers.get(&question_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

fn non_blank(answer: Option<&str>) -> Option<&str> {
    answer.map(str::trim).filter(|a| !a.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPORT: &str = r#"{
        "matched_questions": [
            { "matched_question_id": 1, "matched_question": "Do you smoke?", "extracted_answer": "No" },
            { "matched_question_id": 2, "matched_question": "How often?", "extracted_answer": null },
            { "matched_question_id": 3, "matched_question": "Since when?" },
            { "matched_question_id": 4, "matched_question": "Why?", "extracted_answer": "  " }
        ],
        "respondent_info": { "name": "Ana", "age": null }
    }"#;

    #[test]
    fn partial_extraction_decodes() {
        let survey: ExportedSurvey = serde_json::from_str(EXPORT).unwrap();

        assert_eq!(survey.matched_questions.len(), 4);
        assert_eq!(survey.matched_questions[1].extracted_answer, None);
        assert_eq!(survey.matched_questions[2].extracted_answer, None);

        let info = survey.respondent_info.as_ref().unwrap();
        assert_eq!(info.name.as_deref(), Some("Ana"));
        assert_eq!(info.age, None);
        assert_eq!(info.location, None);
    }

    #[test]
    fn respondent_info_may_be_absent() {
        let survey: ExportedSurvey = serde_json::from_str(r#"{ "matched_questions": [] }"#).unwrap();
        assert!(survey.respondent_info.is_none());
    }

    #[test]
    fn answer_sheet_skips_missing_answers() {
        let survey: ExportedSurvey = serde_json::from_str(EXPORT).unwrap();
        let sheet = AnswerSheet::from_export(&survey);

        assert_eq!(sheet.len(), 1);
        assert_eq!(sheet.get(1), Some("No"));
        assert_eq!(sheet.get(2), None);
        assert_eq!(survey.answer_for(1), Some("No"));
        assert_eq!(survey.answer_for(4), None);
    }

    #[test]
    fn matched_question_requires_every_field() {
        let ok = r#"{
            "matched_question_id": 7,
            "matched_question": "Any allergies?",
            "extracted_answer": "Penicillin",
            "confidence": "high",
            "clarification_needed": false
        }"#;
        let matched: MatchedQuestion = serde_json::from_str(ok).unwrap();
        assert_eq!(matched.confidence, "high");
        assert_eq!(AnswerSheet::from_matched(&[matched]).get(7), Some("Penicillin"));

        let missing_flag = r#"{
            "matched_question_id": 7,
            "matched_question": "Any allergies?",
            "extracted_answer": "Penicillin",
            "confidence": "high"
        }"#;
        assert!(serde_json::from_str::<MatchedQuestion>(missing_flag).is_err());
    }
}
