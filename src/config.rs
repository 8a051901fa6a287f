//! Configuration module

use std::env;
use std::path::PathBuf;

use crate::encoder::EncodingMode;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Interface to bind
    pub host: String,

    /// Server port
    pub port: u16,

    /// Path of the classifier artifact, loaded once at startup
    pub model_path: PathBuf,

    /// Indicator comparison mode
    pub encoding_mode: EncodingMode,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),

            port: match env::var("PORT") {
                Ok(raw) => raw.parse().unwrap_or_else(|err| {
                    tracing::warn!("invalid PORT `{}` ({}), using 8080", raw, err);
                    8080
                }),
                Err(_) => 8080,
            },

            model_path: env::var("MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("models/student_prediction_model.json")),

            encoding_mode: match env::var("ENCODING_MODE") {
                Ok(raw) => raw.parse().unwrap_or_else(|err| {
                    tracing::warn!("{}, using corrected encoding", err);
                    EncodingMode::Corrected
                }),
                Err(_) => EncodingMode::Corrected,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 4] = ["HOST", "PORT", "MODEL_PATH", "ENCODING_MODE"];

    // Env vars are process-wide, so all mutation lives in this one test.
    #[test]
    fn test_from_env_defaults_and_fallbacks() {
        for var in VARS {
            env::remove_var(var);
        }
        let config = Config::from_env();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.model_path, PathBuf::from("models/student_prediction_model.json"));
        assert_eq!(config.encoding_mode, EncodingMode::Corrected);

        env::set_var("ENCODING_MODE", "fixed");
        env::set_var("PORT", "notaport");
        let config = Config::from_env();
        assert_eq!(config.encoding_mode, EncodingMode::Corrected);
        assert_eq!(config.port, 8080);

        env::set_var("ENCODING_MODE", "LEGACY");
        env::set_var("PORT", "9090");
        env::set_var("HOST", "0.0.0.0");
        env::set_var("MODEL_PATH", "/srv/models/model.json");
        let config = Config::from_env();
        assert_eq!(config.encoding_mode, EncodingMode::Legacy);
        assert_eq!(config.port, 9090);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.model_path, PathBuf::from("/srv/models/model.json"));

        for var in VARS {
            env::remove_var(var);
        }
    }
}
