use thiserror::Error;

/// Errors raised while loading or persisting the review file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("review file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("review file is not valid CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: satisfaction {value:?} is not a whole number")]
    InvalidSatisfaction { row: usize, value: String },
}
