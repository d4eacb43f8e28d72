use crate::validation::ValidationReport;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StaffError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Api Error: {0}")]
    Api(String),

    #[error("Invalid employee: {0}")]
    Validation(ValidationReport),
}

pub type Result<T> = std::result::Result<T, StaffError>;
