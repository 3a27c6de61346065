use std::fs::OpenOptions;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use questionnaire::Questionnaire;
use questionnaire_ratatui::{RatatuiIntakeBackend, RatatuiViewer};

mod cli;
mod config;
mod intake;
mod outline;

use cli::{Cli, Command};

fn init_logging(path: &Path) -> Result<()> {
    // Truncate on each run
    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();
    Ok(())
}

/// Load failures are reported and end the run without an error status.
fn load_or_report(file: Option<&Path>) -> Option<Questionnaire> {
    match config::load_questionnaire(file) {
        Ok(questionnaire) => Some(questionnaire),
        Err(err) => {
            error!("Error loading questionnaire: {err}");
            eprintln!("Error loading questionnaire: {err}");
            None
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_file)?;
    info!("Starting questionnaire-cli");

    match cli.command {
        Command::Pages => {
            let Some(questionnaire) = load_or_report(cli.file.as_deref()) else {
                return Ok(());
            };
            outline::write_outline(io::stdout().lock(), &questionnaire)?;
        }
        Command::View { answers } => {
            let Some(questionnaire) = load_or_report(cli.file.as_deref()) else {
                return Ok(());
            };
            let answers = match answers.as_deref().map(config::load_answers).transpose() {
                Ok(answers) => answers,
                Err(err) => {
                    error!("Error loading answers: {err:#}");
                    eprintln!("Error loading answers: {err:#}");
                    return Ok(());
                }
            };
            questionnaire::view_questionnaire(&RatatuiViewer::new(), &questionnaire, answers.as_ref())?;
        }
        Command::Intake => {
            intake::run_intake(
                &RatatuiIntakeBackend::new(),
                &RatatuiViewer::new(),
                cli.file.as_deref(),
                io::stdout(),
                io::stderr(),
            )?;
        }
    }

    info!("questionnaire-cli finished");
    Ok(())
}
