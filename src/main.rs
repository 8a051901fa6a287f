use actix_web::{middleware::Logger, web, App, HttpServer};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use student_outcome_predictor::config::Config;
use student_outcome_predictor::model::{Classifier, LogisticModel};
use student_outcome_predictor::{routes, AppState};

async fn start_api(state: AppState, config: &Config) -> std::io::Result<()> {
    let state = web::Data::new(state);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

#[actix_web::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "student_outcome_predictor=info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    tracing::info!("Loading classifier from {}", config.model_path.display());
    let model = match LogisticModel::load(&config.model_path) {
        Ok(model) => model,
        Err(err) => {
            tracing::error!("Cannot start without a classifier: {}", err);
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        columns = model.feature_names().len(),
        encoding = %config.encoding_mode,
        "Classifier ready"
    );

    let state = AppState {
        classifier: Box::new(model),
        encoding_mode: config.encoding_mode,
    };

    tracing::info!("🚀 Student Performance Predictor on http://{}:{}", config.host, config.port);
    if let Err(err) = start_api(state, &config).await {
        tracing::error!("Server error: {}", err);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
