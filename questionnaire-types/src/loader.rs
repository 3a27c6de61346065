//! Locating and decoding questionnaire resources and matching-service responses.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::{ExportedSurvey, MatchedQuestion, Questionnaire, QuestionnaireData, QuestionnaireError};

/// File name of the bundled questionnaire resource.
pub const QUESTIONNAIRE_RESOURCE: &str = "questionnaire.json";

/// Decode a questionnaire document (`{ "questionnaire": { ... } }`).
pub fn decode_questionnaire(json: &str) -> Result<Questionnaire, QuestionnaireError> {
    let data: QuestionnaireData = serde_json::from_str(json)?;
    accept(data)
}

pub fn load_questionnaire_reader<R: Read>(reader: R) -> Result<Questionnaire, QuestionnaireError> {
    let data: QuestionnaireData = serde_json::from_reader(reader)?;
    accept(data)
}

fn accept(data: QuestionnaireData) -> Result<Questionnaire, QuestionnaireError> {
    let questionnaire = data.questionnaire;
    questionnaire.ensure_unique_ids()?;
    info!(
        "Loaded questionnaire '{}' with {} questions",
        questionnaire.title,
        questionnaire.len()
    );
    Ok(questionnaire)
}

/// Load a questionnaire from a file on disk.
pub fn load_questionnaire_file(path: impl AsRef<Path>) -> Result<Questionnaire, QuestionnaireError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(QuestionnaireError::ResourceNotFound {
            name: path.display().to_string(),
            searched: vec![path.to_path_buf()],
        });
    }
    let file = File::open(path).map_err(|source| QuestionnaireError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Reading questionnaire from {}", path.display());
    load_questionnaire_reader(BufReader::new(file))
}

/// Find `name` in the first search directory that contains it.
pub fn locate_resource(
    name: &str,
    search_dirs: &[PathBuf],
) -> Result<PathBuf, QuestionnaireError> {
    let mut searched = Vec::with_capacity(search_dirs.len());
    for dir in search_dirs {
        let candidate = dir.join(name);
        if candidate.is_file() {
            debug!("Found {} at {}", name, candidate.display());
            return Ok(candidate);
        }
        searched.push(candidate);
    }
    Err(QuestionnaireError::ResourceNotFound {
        name: name.to_string(),
        searched,
    })
}

pub fn decode_exported_survey(json: &str) -> Result<ExportedSurvey, QuestionnaireError> {
    let survey: ExportedSurvey = serde_json::from_str(json)?;
    debug!(
        "Decoded exported survey with {} matched questions",
        survey.matched_questions.len()
    );
    Ok(survey)
}

/// Decode a matching-service response, which is a single object or an array of them.
pub fn decode_matched_questions(json: &str) -> Result<Vec<MatchedQuestion>, QuestionnaireError> {
    // The first token picks the shape so decode errors name the real problem.
    if json.trim_start().starts_with('[') {
        Ok(serde_json::from_str::<Vec<MatchedQuestion>>(json)?)
    } else {
        Ok(vec![serde_json::from_str::<MatchedQuestion>(json)?])
    }
}
