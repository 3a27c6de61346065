use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "questionnaire-cli",
    version,
    about = "Page through a questionnaire and collect respondent information"
)]
pub struct Cli {
    /// Questionnaire definition to load (defaults to a bundled questionnaire.json)
    #[arg(long, short, global = true, env = "QUESTIONNAIRE_FILE")]
    pub file: Option<PathBuf>,

    /// Log destination; the terminal UI owns stdout
    #[arg(long, global = true, default_value = "questionnaire-cli.log")]
    pub log_file: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Page through the questionnaire
    View {
        /// Exported survey or matching-service response to show answers from
        #[arg(long)]
        answers: Option<PathBuf>,
    },
    /// Collect respondent information, then page through the questionnaire
    Intake,
    /// Print the page layout without opening the terminal UI
    Pages,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_view_with_answers() {
        let cli = Cli::try_parse_from([
            "questionnaire-cli",
            "view",
            "--answers",
            "export.json",
            "--file",
            "survey.json",
        ])
        .unwrap();

        assert_eq!(cli.file, Some(PathBuf::from("survey.json")));
        assert_eq!(cli.log_file, PathBuf::from("questionnaire-cli.log"));
        match cli.command {
            Command::View { answers } => assert_eq!(answers, Some(PathBuf::from("export.json"))),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn subcommand_required() {
        assert!(Cli::try_parse_from(["questionnaire-cli"]).is_err());
    }
}
