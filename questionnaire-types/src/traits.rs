use crate::{AnswerSheet, IntakeOutcome, Pager, Questionnaire, RespondentForm};

/// Trait for frontends that collect respondent information.
///
/// Backends receive a (possibly pre-filled) `RespondentForm` and return a
/// single `IntakeOutcome`. They decide how to present the form and handle
/// validation failures internally, so this only returns once the input is
/// valid or the respondent cancelled.
pub trait IntakeBackend {
    /// The error type for this backend.
    type Error: Into<anyhow::Error>;

    /// Run the intake screen to completion.
    ///
    /// # Returns
    /// * `Ok(IntakeOutcome::Submitted(info))` when valid input was submitted
    /// * `Ok(IntakeOutcome::Cancelled)` when the respondent cancelled
    /// * `Err` on backend failure (I/O, terminal, ...)
    fn collect(&self, form: RespondentForm) -> Result<IntakeOutcome, Self::Error>;
}

/// Trait for frontends that page through a questionnaire.
pub trait QuestionnaireViewer {
    type Error: Into<anyhow::Error>;

    /// Present `pager` until the viewer is closed.
    ///
    /// The pager is left on whichever page was showing at close. When
    /// `answers` is given, extracted answers are shown beside their questions.
    fn present(
        &self,
        questionnaire: &Questionnaire,
        pager: &mut Pager,
        answers: Option<&AnswerSheet>,
    ) -> Result<(), Self::Error>;
}
