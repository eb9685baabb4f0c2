use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WeatherError>;

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid year '{token}'")]
    InvalidYear { token: String },

    #[error("Invalid YEAR/MONTH '{token}': {reason}")]
    InvalidYearMonth { token: String, reason: String },

    #[error("No header row in {0}")]
    MissingHeader(String),

    #[error("Weather data directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),
}
