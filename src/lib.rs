//! Student Performance Predictor
//!
//! A single-page form that collects a student's demographic and engagement
//! attributes, encodes them into the indicator layout a pre-trained pass/fail
//! classifier expects, and reports the prediction.
//!
//! ```text
//! form ──► StudentProfile ──► encode ──► reindex(feature_names_in_) ──► Classifier ──► "Pass"/"Fail"
//! ```

pub mod config;
pub mod encoder;
pub mod engagement;
pub mod error;
pub mod handlers;
pub mod model;
pub mod page;
pub mod predictor;
pub mod profile;

pub use error::{AppError, AppResult, InputError, ModelError};
pub use handlers::{routes, AppState};
