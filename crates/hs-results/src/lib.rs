//! hs-results: output frames and export.

pub mod export;
pub mod frame;

pub use export::{write_csv, write_json};
pub use frame::{Column, FrameSummary, HEAT_CONTENT, HEAT_LOSS, ResultFrame, T_ROOM};

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Ragged frame: column {column} has {len} rows, expected {expected}")]
    Shape {
        column: String,
        len: usize,
        expected: usize,
    },
}
