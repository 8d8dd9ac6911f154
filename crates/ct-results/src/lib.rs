//! ct-results: run cache and per-step series storage.

pub mod hash;
pub mod series;
pub mod store;
pub mod types;

pub use hash::compute_run_id;
pub use series::{SeriesAxis, SeriesVariable, extract_series, series_csv};
pub use store::RunStore;
pub use types::*;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Run not found: {run_id}")]
    RunNotFound { run_id: String },

    #[error("Corrupt run {run_id}: {message}")]
    Corrupt { run_id: String, message: String },

    #[error("Invalid path: {message}")]
    InvalidPath { message: String },

    #[error("Unknown series: {name}")]
    UnknownVariable { name: String },

    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),
}
