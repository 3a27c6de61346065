use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{Question, QuestionnaireError};

/// Root wrapper of the bundled questionnaire resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionnaireData {
    pub questionnaire: Questionnaire,
}

/// The top-level survey definition: metadata plus an ordered list of questions.
///
/// It's presentation-agnostic; frontends decide how to present it (the
/// shipped viewer pages through it two questions at a time).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Questionnaire {
    pub title: String,

    pub description: String,

    /// All questions, in display order.
    pub questions: Vec<Question>,
}

impl Questionnaire {
    /// Create a new questionnaire with the given questions.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        questions: Vec<Question>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            questions,
        }
    }

    /// Get the questions.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Look up a question by id.
    pub fn question(&self, id: i64) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    /// Check if the questionnaire has any questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Fail on the first id that appears twice.
    pub fn ensure_unique_ids(&self) -> Result<(), QuestionnaireError> {
        let mut seen = HashSet::with_capacity(self.questions.len());
        for question in &self.questions {
            if !seen.insert(question.id()) {
                return Err(QuestionnaireError::DuplicateQuestionId(question.id()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Questionnaire {
        Questionnaire::new(
            "Health",
            "Clinic intake",
            vec![
                Question::new(10, "Do you smoke?", "yes_no"),
                Question::new(20, "How often?", "frequency"),
            ],
        )
    }

    #[test]
    fn lookup_by_id() {
        let q = sample();
        assert_eq!(q.question(20).map(Question::text), Some("How often?"));
        assert!(q.question(30).is_none());
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn duplicate_ids_rejected() {
        let mut q = sample();
        assert!(q.ensure_unique_ids().is_ok());

        q.questions.push(Question::new(10, "Again?", "yes_no"));
        assert!(matches!(
            q.ensure_unique_ids(),
            Err(QuestionnaireError::DuplicateQuestionId(10))
        ));
    }
}
