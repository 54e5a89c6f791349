use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Fetch error ({status}): {body}")]
    Fetch { status: u16, body: String },

    #[error("Generation error ({status}): {body}")]
    Generation { status: u16, body: String },

    #[error("Data error in field `{field}`: {message}")]
    Data { field: String, message: String },

    #[error("Write error for {}: {message}", .path.display())]
    Write { path: PathBuf, message: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl AppError {
    pub fn data(field: &str, message: impl Into<String>) -> Self {
        AppError::Data {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn write(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        AppError::Write {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
