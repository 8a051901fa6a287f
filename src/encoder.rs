//! Feature encoding: turns a `StudentProfile` into the single-row indicator
//! table the classifier was trained on, and aligns it to the classifier's
//! declared columns.

use ndarray::{Array1, Array2, Axis};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::engagement::EngagementLevel;
use crate::error::InputError;
use crate::profile::{AgeBand, Disability, Gender, HighestEducation, Region, StudentProfile};

/// How categorical selections are compared when building indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EncodingMode {
    /// Indicators compare against the exact option strings the form offers.
    #[default]
    Corrected,
    /// Reproduces the historical encoder's drifted literals
    /// ("No Formal quals", "HE Qualification", "55<="), which never match a
    /// form option, so those three indicators are always 0.
    Legacy,
}

impl FromStr for EncodingMode {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "corrected" => Ok(EncodingMode::Corrected),
            "legacy" => Ok(EncodingMode::Legacy),
            other => Err(InputError::UnknownOption {
                field: "encoding mode",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for EncodingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodingMode::Corrected => f.write_str("corrected"),
            EncodingMode::Legacy => f.write_str("legacy"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Indicator(bool),
    Number(f64),
}

impl FeatureValue {
    pub fn as_f64(self) -> f64 {
        match self {
            FeatureValue::Indicator(true) => 1.0,
            FeatureValue::Indicator(false) => 0.0,
            FeatureValue::Number(n) => n,
        }
    }
}

/// An ordered single-row table of named features.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureTable {
    columns: Vec<(String, FeatureValue)>,
}

impl FeatureTable {
    pub fn new() -> Self {
        Self { columns: Vec::new() }
    }

    pub fn push(&mut self, name: impl Into<String>, value: FeatureValue) {
        self.columns.push((name.into(), value));
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<FeatureValue> {
        self.columns
            .iter()
            .find(|(column, _)| column == name)
            .map(|(_, value)| *value)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, FeatureValue)> {
        self.columns.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Aligns the table to `feature_names`: same columns, same order.
    /// Columns missing here are filled with 0, extra columns are dropped.
    pub fn reindex<S: AsRef<str>>(&self, feature_names: &[S]) -> FeatureTable {
        let mut aligned = FeatureTable::new();
        let mut filled = 0usize;

        for name in feature_names {
            let name = name.as_ref();
            let value = self.get(name).unwrap_or_else(|| {
                filled += 1;
                tracing::debug!(column = name, "column not produced by encoder, filling with 0");
                FeatureValue::Number(0.0)
            });
            aligned.push(name, value);
        }

        let dropped: Vec<&str> = self
            .column_names()
            .filter(|column| !feature_names.iter().any(|name| name.as_ref() == *column))
            .collect();
        if !dropped.is_empty() {
            tracing::debug!(?dropped, "dropping columns unknown to the classifier");
        }
        tracing::debug!(columns = aligned.len(), filled, dropped = dropped.len(), "reindexed feature table");

        aligned
    }

    /// The table as a `1 x n` matrix in column order.
    pub fn to_array(&self) -> Array2<f64> {
        let values: Vec<f64> = self.columns.iter().map(|(_, value)| value.as_f64()).collect();
        Array1::from(values).insert_axis(Axis(0))
    }
}

impl Default for FeatureTable {
    fn default() -> Self {
        Self::new()
    }
}

const REGION_COLUMNS: [(&str, Region); 6] = [
    ("region_East Midlands Region", Region::EastMidlands),
    ("region_Ireland", Region::Ireland),
    ("region_London Region", Region::London),
    ("region_North Region", Region::North),
    ("region_Scotland", Region::Scotland),
    ("region_South East Region", Region::SouthEast),
];

const EDUCATION_COLUMNS: [(&str, HighestEducation); 4] = [
    ("highest_education_No Formal Qualifications", HighestEducation::NoFormal),
    ("highest_education_Lower Than A Level", HighestEducation::LowerThanALevel),
    ("highest_education_Higher Education Qualification", HighestEducation::HigherEducation),
    ("highest_education_Post Graduate Qualification", HighestEducation::PostGraduate),
];

const AGE_COLUMNS: [(&str, AgeBand); 2] = [
    ("age_band_35-55", AgeBand::From35To55),
    ("age_band_>55", AgeBand::Over55),
];

const ENGAGEMENT_COLUMNS: [(&str, EngagementLevel); 3] = [
    ("engagement_level_Moderate", EngagementLevel::Moderate),
    ("engagement_level_High", EngagementLevel::High),
    ("engagement_level_Very High", EngagementLevel::VeryHigh),
];

/// Every column the encoder emits, in emission order.
pub fn encoded_columns() -> Vec<&'static str> {
    let mut names = vec!["imd_band", "num_of_prev_attempts", "studied_credits", "sum_click", "gender_M", "disability_Y"];
    names.extend(ENGAGEMENT_COLUMNS.iter().map(|(name, _)| *name));
    names.extend(REGION_COLUMNS.iter().map(|(name, _)| *name));
    names.extend(EDUCATION_COLUMNS.iter().map(|(name, _)| *name));
    names.extend(AGE_COLUMNS.iter().map(|(name, _)| *name));
    names
}

fn education_matches(selected: HighestEducation, column: HighestEducation, mode: EncodingMode) -> bool {
    match mode {
        EncodingMode::Corrected => selected == column,
        EncodingMode::Legacy => selected.label() == column.legacy_label(),
    }
}

fn age_matches(selected: AgeBand, column: AgeBand, mode: EncodingMode) -> bool {
    match mode {
        EncodingMode::Corrected => selected == column,
        EncodingMode::Legacy => selected.label() == column.legacy_label(),
    }
}

/// Expands the profile into the training-time indicator schema.
/// The result still has to be reindexed against the classifier's columns.
pub fn encode(profile: &StudentProfile, mode: EncodingMode) -> FeatureTable {
    let engagement = EngagementLevel::from_clicks(profile.sum_click.get());
    let mut table = FeatureTable::new();

    table.push("imd_band", FeatureValue::Number(f64::from(profile.imd_band.get())));
    table.push(
        "num_of_prev_attempts",
        FeatureValue::Number(f64::from(profile.num_of_prev_attempts.get())),
    );
    table.push("studied_credits", FeatureValue::Number(f64::from(profile.studied_credits.value())));
    table.push("sum_click", FeatureValue::Number(f64::from(profile.sum_click.get())));

    table.push("gender_M", FeatureValue::Indicator(profile.gender == Gender::Male));
    table.push("disability_Y", FeatureValue::Indicator(profile.disability == Disability::Yes));

    // Low engagement is the baseline and has no column
    for (name, level) in ENGAGEMENT_COLUMNS {
        table.push(name, FeatureValue::Indicator(engagement == level));
    }
    for (name, region) in REGION_COLUMNS {
        table.push(name, FeatureValue::Indicator(profile.region == region));
    }
    for (name, level) in EDUCATION_COLUMNS {
        table.push(
            name,
            FeatureValue::Indicator(education_matches(profile.highest_education, level, mode)),
        );
    }
    for (name, band) in AGE_COLUMNS {
        table.push(name, FeatureValue::Indicator(age_matches(profile.age_band, band, mode)));
    }

    table
}
