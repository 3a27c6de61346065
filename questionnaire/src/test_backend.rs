//! Test backend for driving questionnaire screens without user interaction.
//!
//! `TestBackend` plays back pre-defined form input and page navigation.
//! This is useful for testing code built on the frontend traits.
//!
//! # Example
//!
//! ```rust,ignore
//! use questionnaire::{FormField, Navigation, RespondentForm, TestBackend};
//!
//! let backend = TestBackend::new()
//!     .with_input(FormField::Name, "Ana")
//!     .with_input(FormField::Age, "29")
//!     .with_input(FormField::Phone, "555-1212")
//!     .with_input(FormField::Location, "Clinic A")
//!     .with_gender_index(1)
//!     .with_navigation([Navigation::Forward, Navigation::Forward]);
//!
//! let outcome = questionnaire::collect_respondent(&backend, RespondentForm::new()).unwrap();
//! ```

use std::collections::HashMap;

use crate::{
    AnswerSheet, FormField, IntakeBackend, IntakeOutcome, Pager, Questionnaire,
    QuestionnaireViewer, RespondentForm, ValidationError,
};

/// One scripted navigation step in the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Forward,
    Backward,
    Jump(usize),
}

/// A test backend that plays back pre-configured input.
///
/// Scripted input gets no second chance: a validation failure is returned
/// as an error instead of re-prompting.
#[derive(Debug, Clone, Default)]
pub struct TestBackend {
    inputs: HashMap<FormField, String>,
    gender_index: Option<usize>,
    cancel: bool,
    navigation: Vec<Navigation>,
}

/// Error type for TestBackend.
#[derive(Debug, thiserror::Error)]
pub enum TestBackendError {
    #[error("Gender index {0} is out of range")]
    InvalidGender(usize),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Navigation to page {index} failed, {page_count} pages")]
    InvalidPage { index: usize, page_count: usize },
}

impl TestBackend {
    /// Create a new empty test backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Type `value` into `field`, replacing any pre-filled text.
    pub fn with_input(mut self, field: FormField, value: impl Into<String>) -> Self {
        self.inputs.insert(field, value.into());
        self
    }

    /// Pick a gender option by index.
    pub fn with_gender_index(mut self, index: usize) -> Self {
        self.gender_index = Some(index);
        self
    }

    /// Press cancel instead of submitting.
    pub fn cancelling(mut self) -> Self {
        self.cancel = true;
        self
    }

    /// Navigation steps applied, in order, when the viewer is presented.
    pub fn with_navigation(mut self, steps: impl IntoIterator<Item = Navigation>) -> Self {
        self.navigation.extend(steps);
        self
    }
}

impl IntakeBackend for TestBackend {
    type Error = TestBackendError;

    fn collect(&self, mut form: RespondentForm) -> Result<IntakeOutcome, Self::Error> {
        if self.cancel {
            return Ok(IntakeOutcome::Cancelled);
        }

        for (field, value) in &self.inputs {
            form.set(*field, value.clone());
        }
        if let Some(index) = self.gender_index {
            if !form.select_gender_index(index) {
                return Err(TestBackendError::InvalidGender(index));
            }
        }

        let info = form.validate()?;
        Ok(IntakeOutcome::Submitted(info))
    }
}

impl QuestionnaireViewer for TestBackend {
    type Error = TestBackendError;

    fn present(
        &self,
        _questionnaire: &Questionnaire,
        pager: &mut Pager,
        _answers: Option<&AnswerSheet>,
    ) -> Result<(), Self::Error> {
        for step in &self.navigation {
            match *step {
                // Bounded moves at either end are no-ops, like a swipe past the last page.
                Navigation::Forward => {
                    pager.go_forward();
                }
                Navigation::Backward => {
                    pager.go_backward();
                }
                Navigation::Jump(index) => {
                    if index >= pager.page_count() {
                        return Err(TestBackendError::InvalidPage {
                            index,
                            page_count: pager.page_count(),
                        });
                    }
                    pager.go_to(index);
                }
            }
        }
        Ok(())
    }
}
