use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::encoder::EncodingMode;
use crate::error::AppResult;
use crate::model::Classifier;
use crate::page;
use crate::predictor;
use crate::profile::StudentProfile;

/// Shared, read-only state. The classifier is loaded once and never mutated.
pub struct AppState {
    pub classifier: Box<dyn Classifier>,
    pub encoding_mode: EncodingMode,
}

#[derive(Serialize)]
struct ModelInfo<'a> {
    feature_count: usize,
    feature_names: &'a [String],
    encoding_mode: EncodingMode,
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(serve_homepage))
        .route("/api/preview", web::post().to(preview))
        .route("/api/predict", web::post().to(predict))
        .route("/model/info", web::get().to(get_model_info))
        .route("/health", web::get().to(health_check));
}

// Homepage endpoint
async fn serve_homepage() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page::render())
}

// Engagement level and advisory, refreshed on every input change
async fn preview(profile: web::Json<StudentProfile>) -> HttpResponse {
    HttpResponse::Ok().json(predictor::preview(&profile))
}

// Prediction endpoint
async fn predict(
    profile: web::Json<StudentProfile>,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    let prediction = predictor::predict(&profile, state.classifier.as_ref(), state.encoding_mode)?;
    Ok(HttpResponse::Ok().json(prediction))
}

// Model info endpoint
async fn get_model_info(state: web::Data<AppState>) -> HttpResponse {
    let names = state.classifier.feature_names();
    HttpResponse::Ok().json(ModelInfo {
        feature_count: names.len(),
        feature_names: names,
        encoding_mode: state.encoding_mode,
    })
}

// Health check endpoint
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().body("Student Performance Predictor is running!")
}
