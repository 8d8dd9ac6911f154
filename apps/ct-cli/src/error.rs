use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("Project error: {0}")]
    Project(#[from] ct_project::ProjectError),

    #[error("Property table error: {0}")]
    Table(#[from] ct_fluids::FluidError),

    #[error("Sizing failed: {0}")]
    Solver(#[from] ct_solver::SolverError),

    #[error("Results error: {0}")]
    Results(#[from] ct_results::ResultsError),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid argument: {0}")]
    InvalidArg(String),
}

pub type CliResult<T> = Result<T, CliError>;
