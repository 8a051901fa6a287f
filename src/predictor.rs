use serde::Serialize;

use crate::encoder::{encode, EncodingMode, FeatureTable};
use crate::engagement::EngagementLevel;
use crate::error::{AppError, AppResult};
use crate::model::Classifier;
use crate::profile::StudentProfile;

/// Live summary shown on every input change, before any prediction.
#[derive(Debug, Clone, Serialize)]
pub struct Preview {
    pub engagement_level: EngagementLevel,
    pub engagement_emoji: &'static str,
    pub advisory: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    pub engagement_level: EngagementLevel,
    pub engagement_emoji: &'static str,
    pub label: i64,
    pub outcome: String,
    pub message: String,
    pub advisory: Option<&'static str>,
}

pub fn preview(profile: &StudentProfile) -> Preview {
    let level = EngagementLevel::from_clicks(profile.sum_click.get());
    Preview {
        engagement_level: level,
        engagement_emoji: level.emoji(),
        advisory: profile.imd_advisory(),
    }
}

/// Maps a classifier label to display text. Unknown labels are shown verbatim.
pub fn outcome_text(label: i64) -> String {
    match label {
        0 => "❌ Fail".to_string(),
        1 => "✅ Pass".to_string(),
        other => other.to_string(),
    }
}

/// Encodes the profile and aligns it to the classifier's declared columns.
pub fn build_features(profile: &StudentProfile, classifier: &dyn Classifier, mode: EncodingMode) -> FeatureTable {
    encode(profile, mode).reindex(classifier.feature_names())
}

pub fn predict(profile: &StudentProfile, classifier: &dyn Classifier, mode: EncodingMode) -> AppResult<Prediction> {
    let features = build_features(profile, classifier, mode);
    let label = classifier
        .predict_labels(&features.to_array())
        .first()
        .copied()
        .ok_or(AppError::EmptyPrediction)?;

    let outcome = outcome_text(label);
    let level = EngagementLevel::from_clicks(profile.sum_click.get());
    tracing::info!(%profile, label, outcome = %outcome, "prediction served");

    Ok(Prediction {
        engagement_level: level,
        engagement_emoji: level.emoji(),
        label,
        message: format!("🧠 Predicted Final Result: {}", outcome),
        outcome,
        advisory: profile.imd_advisory(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_text_is_total() {
        assert!(outcome_text(0).contains("Fail"));
        assert!(outcome_text(1).contains("Pass"));
        assert_eq!(outcome_text(2), "2");
        assert_eq!(outcome_text(-1), "-1");
    }
}
