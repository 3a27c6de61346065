//! The `intake` command: respondent form first, questionnaire second.

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use log::error;
use questionnaire::{IntakeBackend, IntakeOutcome, QuestionnaireViewer, RespondentForm};

use crate::config;

/// Collect respondent info with `backend`, write it to `out` as JSON, then
/// page through the questionnaire with `viewer`.
///
/// The form does not depend on the questionnaire, so the questionnaire is
/// only loaded after a submit. Load failures are reported on `diagnostics`.
pub fn run_intake<B, V, O, D>(
    backend: &B,
    viewer: &V,
    file: Option<&Path>,
    mut out: O,
    mut diagnostics: D,
) -> Result<IntakeOutcome>
where
    B: IntakeBackend,
    V: QuestionnaireViewer,
    O: Write,
    D: Write,
{
    let outcome = questionnaire::collect_respondent(backend, RespondentForm::new())?;
    let IntakeOutcome::Submitted(info) = &outcome else {
        writeln!(diagnostics, "Intake cancelled")?;
        return Ok(outcome);
    };

    // Written before the viewer opens so a viewer failure cannot lose it.
    writeln!(out, "{}", serde_json::to_string_pretty(info)?)?;
    out.flush()?;

    match config::load_questionnaire(file) {
        Ok(loaded) => {
            questionnaire::view_questionnaire(viewer, &loaded, None)?;
        }
        Err(err) => {
            error!("Error loading questionnaire: {err}");
            writeln!(diagnostics, "Error loading questionnaire: {err}")?;
        }
    }
    Ok(outcome)
}
