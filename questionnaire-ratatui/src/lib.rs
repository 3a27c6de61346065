//! # questionnaire-ratatui
//!
//! Ratatui frontend for questionnaire.
//!
//! Two screens are provided:
//! - [`RatatuiIntakeBackend`] - the respondent information form. All fields are
//!   visible at once; Tab/Shift+Tab or the arrow keys move between them and
//!   Return chains from one text field to the next.
//! - [`RatatuiViewer`] - pages through the questionnaire two questions at a time
//!   with Left/Right.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use questionnaire::RespondentForm;
//! use questionnaire_ratatui::{RatatuiIntakeBackend, RatatuiViewer};
//!
//! fn main() -> anyhow::Result<()> {
//!     let questionnaire = questionnaire::load_questionnaire_file("questionnaire.json")?;
//!     let outcome = questionnaire::collect_respondent(&RatatuiIntakeBackend::new(), RespondentForm::new())?;
//!     if let Some(info) = outcome.into_info() {
//!         questionnaire::view_questionnaire(&RatatuiViewer::new(), &questionnaire, None)?;
//!         println!("{info:#?}");
//!     }
//!     Ok(())
//! }
//! ```

mod form;
mod terminal;
mod theme;
mod viewer;

pub use form::RatatuiIntakeBackend;
pub use terminal::RatatuiError;
pub use theme::Theme;
pub use viewer::RatatuiViewer;
