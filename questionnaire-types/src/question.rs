use serde::{Deserialize, Serialize};

/// A single question in a questionnaire.
///
/// Questions are immutable once loaded; the builder-style `with_*` methods
/// exist for constructing definitions in code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Identifier, unique within its questionnaire.
    id: i64,

    /// The prompt text shown to the respondent.
    question: String,

    /// Free-form type tag from the definition (e.g. "open", "scale").
    #[serde(rename = "type")]
    kind: String,

    /// Optional follow-up prompt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    follow_up: Option<String>,

    /// Keywords used by answer matching.
    keywords: Vec<String>,
}

impl Question {
    /// Create a new question without follow-up or keywords.
    pub fn new(id: i64, question: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id,
            question: question.into(),
            kind: kind.into(),
            follow_up: None,
            keywords: Vec::new(),
        }
    }

    /// Set the follow-up prompt.
    pub fn with_follow_up(mut self, follow_up: impl Into<String>) -> Self {
        self.follow_up = Some(follow_up.into());
        self
    }

    /// Set the keywords.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    /// Get the prompt text.
    pub fn text(&self) -> &str {
        &self.question
    }

    /// Get the type tag.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn follow_up(&self) -> Option<&str> {
        self.follow_up.as_deref()
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_tag_uses_json_name() {
        let q = Question::new(1, "How are you?", "open").with_keywords(["mood"]);
        let json = serde_json::to_value(&q).unwrap();

        assert_eq!(json["type"], "open");
        assert_eq!(json["keywords"][0], "mood");
        assert!(json.get("follow_up").is_none());
    }
}
