//! # questionnaire
//!
//! Page through a questionnaire two questions at a time and collect
//! information about the respondent. Frontend-agnostic.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use questionnaire::{RespondentForm, TestBackend, FormField};
//!
//! let questionnaire = questionnaire::load_questionnaire_file("questionnaire.json")?;
//!
//! let backend = TestBackend::new()
//!     .with_input(FormField::Name, "Ana")
//!     .with_input(FormField::Age, "29")
//!     .with_input(FormField::Phone, "555-1212")
//!     .with_input(FormField::Location, "Clinic A");
//!
//! let outcome = questionnaire::collect_respondent(&backend, RespondentForm::new())?;
//! let pager = questionnaire::view_questionnaire(&backend, &questionnaire, None)?;
//! ```
//!
//! ## Frontends
//!
//! Frontends are separate crates that implement `IntakeBackend` and
//! `QuestionnaireViewer`:
//! - `questionnaire-ratatui` - terminal intake form and pager

use log::info;

// Re-export all types from questionnaire-types
pub use questionnaire_types::*;

// Test backend for driving screens without user interaction
mod test_backend;
pub use test_backend::{Navigation, TestBackend, TestBackendError};

/// Run the intake screen of `backend`, starting from `form`.
pub fn collect_respondent<B: IntakeBackend>(
    backend: &B,
    form: RespondentForm,
) -> anyhow::Result<IntakeOutcome> {
    let outcome = backend.collect(form).map_err(Into::into)?;
    match &outcome {
        IntakeOutcome::Submitted(info) => info!("Respondent info submitted for '{}'", info.name),
        IntakeOutcome::Cancelled => info!("Respondent intake cancelled"),
    }
    Ok(outcome)
}

/// Paginate `questionnaire` and present it with `viewer`.
///
/// Returns the pager positioned where the viewer was closed.
pub fn view_questionnaire<V: QuestionnaireViewer>(
    viewer: &V,
    questionnaire: &Questionnaire,
    answers: Option<&AnswerSheet>,
) -> anyhow::Result<Pager> {
    let mut pager = Pager::new(questionnaire.questions());
    viewer
        .present(questionnaire, &mut pager, answers)
        .map_err(Into::into)?;
    info!("Questionnaire viewer closed on {}", pager.title());
    Ok(pager)
}
