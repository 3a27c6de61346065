use std::path::PathBuf;

/// Error type for loading and decoding questionnaire data.
#[derive(Debug, thiserror::Error)]
pub enum QuestionnaireError {
    /// The bundled resource could not be found in any searched location.
    #[error("Resource '{name}' not found (searched: {searched:?})")]
    ResourceNotFound { name: String, searched: Vec<PathBuf> },

    /// The resource exists but could not be read.
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON, or a required field missing or mistyped.
    #[error("Failed to decode JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// Two questions in one questionnaire share an id.
    #[error("Duplicate question id {0}")]
    DuplicateQuestionId(i64),
}

impl QuestionnaireError {
    /// Check if this error means the resource was missing (as opposed to broken).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ResourceNotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_problem() {
        let err = QuestionnaireError::DuplicateQuestionId(3);
        assert_eq!(err.to_string(), "Duplicate question id 3");

        let err = QuestionnaireError::ResourceNotFound {
            name: "questionnaire.json".to_string(),
            searched: vec![PathBuf::from("assets")],
        };
        assert!(err.is_not_found());
        assert!(err.to_string().contains("questionnaire.json"));
    }
}
