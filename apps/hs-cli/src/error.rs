//! Error type for the command-line front end.

use std::path::PathBuf;

/// Unifies the library errors surfaced by CLI commands.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Scenario error: {0}")]
    Project(#[from] hs_project::ProjectError),

    #[error("Simulation error: {0}")]
    Simulation(#[from] hs_model::SimError),

    #[error("Results error: {0}")]
    Results(#[from] hs_results::ResultsError),

    #[error("Failed to write output file: {path}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type CliResult<T> = Result<T, CliError>;
