//! Error handling

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading the classifier artifact. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("cannot read model artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("model artifact {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("model artifact is not valid JSON: {0}")]
    Json(#[source] serde_json::Error),

    #[error("model artifact declares no features")]
    NoFeatures,

    #[error("feature `{0}` is declared more than once")]
    DuplicateFeature(String),

    #[error("model has {coefs} coefficients for {features} features")]
    ShapeMismatch { features: usize, coefs: usize },

    #[error("binary classifier needs exactly 2 classes, artifact has {0}")]
    Classes(usize),
}

/// A value outside one of the form's closed domains.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("`{value}` is not a valid {field}")]
    UnknownOption { field: &'static str, value: String },
}

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("classifier returned no label")]
    EmptyPrediction,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::EmptyPrediction => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        tracing::error!("prediction failed: {}", self);
        let status = self.status_code();
        HttpResponse::build(status).json(json!({
            "error": self.to_string(),
            "status": status.as_u16()
        }))
    }
}
