#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read input: {0}")]
    InputError(String),

    #[error("Row {row} is missing column {column}")]
    RowError { row: usize, column: usize },

    #[error("Request to completeness service failed: {0}")]
    RequestError(String),

    #[error("Response body is not JSON: {0}")]
    ResponseError(String),

    #[error("Failed to write output: {0}")]
    OutputError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::RequestError(err.to_string())
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::InputError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::ResponseError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
