//! Core types for the questionnaire viewer.
//!
//! This crate provides the foundational, presentation-agnostic pieces:
//! - `Questionnaire` and `Question` - The survey definition decoded from JSON
//! - `Page` and `Pager` - Questions grouped two per page, with bounded navigation
//! - `RespondentForm` and `RespondentInfo` - Raw intake input and its validated record
//! - `ExportedSurvey`, `MatchedQuestion` and `AnswerSheet` - Results of external answer matching
//! - `IntakeBackend` and `QuestionnaireViewer` traits - For implementing frontends

mod question;
pub use question::Question;

mod questionnaire;
pub use questionnaire::{Questionnaire, QuestionnaireData};

mod pagination;
pub use pagination::{Page, Pager, QUESTIONS_PER_PAGE, paginate};

mod respondent;
pub use respondent::{
    FocusState, FormField, Gender, IntakeOutcome, RespondentForm, RespondentInfo, ValidationError,
};

mod export;
pub use export::{
    AnswerSheet, ExportedMatchedQuestion, ExportedRespondentInfo, ExportedSurvey, MatchedQuestion,
};

mod loader;
pub use loader::{
    QUESTIONNAIRE_RESOURCE, decode_exported_survey, decode_matched_questions,
    decode_questionnaire, load_questionnaire_file, load_questionnaire_reader, locate_resource,
};

mod error;
pub use error::QuestionnaireError;

mod traits;
pub use traits::{IntakeBackend, QuestionnaireViewer};
