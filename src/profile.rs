//! The student profile collected by the form.
//!
//! Every field has a closed domain. Enum values serialize as the literal option
//! strings shown in the form, and the bounded integers reject anything outside
//! their range while deserializing, so a `StudentProfile` is always legal.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::InputError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AgeBand {
    #[default]
    #[serde(rename = "0-35")]
    Under35,
    #[serde(rename = "35-55")]
    From35To55,
    #[serde(rename = ">55")]
    Over55,
}

impl AgeBand {
    pub const ALL: [AgeBand; 3] = [AgeBand::Under35, AgeBand::From35To55, AgeBand::Over55];

    pub fn label(self) -> &'static str {
        match self {
            AgeBand::Under35 => "0-35",
            AgeBand::From35To55 => "35-55",
            AgeBand::Over55 => ">55",
        }
    }

    /// The literal the historical encoder compared this band against.
    pub fn legacy_label(self) -> &'static str {
        match self {
            AgeBand::Over55 => "55<=",
            other => other.label(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Disability {
    #[default]
    No,
    Yes,
}

impl Disability {
    pub const ALL: [Disability; 2] = [Disability::No, Disability::Yes];

    pub fn label(self) -> &'static str {
        match self {
            Disability::No => "No",
            Disability::Yes => "Yes",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Region {
    #[default]
    #[serde(rename = "East Midlands")]
    EastMidlands,
    Ireland,
    London,
    North,
    #[serde(rename = "South East")]
    SouthEast,
    Scotland,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::EastMidlands,
        Region::Ireland,
        Region::London,
        Region::North,
        Region::SouthEast,
        Region::Scotland,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Region::EastMidlands => "East Midlands",
            Region::Ireland => "Ireland",
            Region::London => "London",
            Region::North => "North",
            Region::SouthEast => "South East",
            Region::Scotland => "Scotland",
        }
    }

    /// IMD bands are an England-only ranking.
    pub fn outside_england(self) -> bool {
        matches!(self, Region::Ireland | Region::Scotland)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HighestEducation {
    #[default]
    #[serde(rename = "No Formal qualifications")]
    NoFormal,
    #[serde(rename = "Lower Than A Level")]
    LowerThanALevel,
    #[serde(rename = "Higher Education Qualification")]
    HigherEducation,
    #[serde(rename = "Post Graduate Qualification")]
    PostGraduate,
}

impl HighestEducation {
    pub const ALL: [HighestEducation; 4] = [
        HighestEducation::NoFormal,
        HighestEducation::LowerThanALevel,
        HighestEducation::HigherEducation,
        HighestEducation::PostGraduate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            HighestEducation::NoFormal => "No Formal qualifications",
            HighestEducation::LowerThanALevel => "Lower Than A Level",
            HighestEducation::HigherEducation => "Higher Education Qualification",
            HighestEducation::PostGraduate => "Post Graduate Qualification",
        }
    }

    /// The literal the historical encoder compared this level against.
    pub fn legacy_label(self) -> &'static str {
        match self {
            HighestEducation::NoFormal => "No Formal quals",
            HighestEducation::HigherEducation => "HE Qualification",
            other => other.label(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub enum StudiedCredits {
    #[default]
    Thirty,
    Sixty,
    OneTwenty,
    TwoForty,
}

impl StudiedCredits {
    pub const ALL: [StudiedCredits; 4] = [
        StudiedCredits::Thirty,
        StudiedCredits::Sixty,
        StudiedCredits::OneTwenty,
        StudiedCredits::TwoForty,
    ];

    pub fn value(self) -> u32 {
        match self {
            StudiedCredits::Thirty => 30,
            StudiedCredits::Sixty => 60,
            StudiedCredits::OneTwenty => 120,
            StudiedCredits::TwoForty => 240,
        }
    }
}

impl TryFrom<i64> for StudiedCredits {
    type Error = InputError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        StudiedCredits::ALL
            .into_iter()
            .find(|credits| i64::from(credits.value()) == value)
            .ok_or(InputError::UnknownOption {
                field: "studied_credits",
                value: value.to_string(),
            })
    }
}

impl From<StudiedCredits> for u32 {
    fn from(credits: StudiedCredits) -> Self {
        credits.value()
    }
}

fn check_range(field: &'static str, value: i64, min: u32, max: u32) -> Result<u32, InputError> {
    if value < i64::from(min) || value > i64::from(max) {
        return Err(InputError::OutOfRange {
            field,
            value,
            min: i64::from(min),
            max: i64::from(max),
        });
    }
    Ok(value as u32)
}

/// Number of previous attempts at the module, 0..=10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct PrevAttempts(u32);

impl PrevAttempts {
    pub const MAX: u32 = 10;

    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for PrevAttempts {
    type Error = InputError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        check_range("num_of_prev_attempts", value, 0, Self::MAX).map(PrevAttempts)
    }
}

impl From<PrevAttempts> for u32 {
    fn from(attempts: PrevAttempts) -> Self {
        attempts.0
    }
}

/// Total clicks on the learning platform, 0..=20000.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct ClickCount(u32);

impl ClickCount {
    pub const MAX: u32 = 20_000;

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for ClickCount {
    fn default() -> Self {
        ClickCount(1000)
    }
}

impl TryFrom<i64> for ClickCount {
    type Error = InputError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        check_range("sum_click", value, 0, Self::MAX).map(ClickCount)
    }
}

impl From<ClickCount> for u32 {
    fn from(clicks: ClickCount) -> Self {
        clicks.0
    }
}

/// Index of Multiple Deprivation band, 1 (most deprived) ..= 10 (least).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct ImdBand(u32);

impl ImdBand {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 10;

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for ImdBand {
    fn default() -> Self {
        ImdBand(Self::MIN)
    }
}

impl TryFrom<i64> for ImdBand {
    type Error = InputError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        check_range("imd_band", value, Self::MIN, Self::MAX).map(ImdBand)
    }
}

impl From<ImdBand> for u32 {
    fn from(band: ImdBand) -> Self {
        band.0
    }
}

pub const IMD_ADVISORY: &str =
    "IMD Band applies mainly to regions in England. Select based on your judgment.";

/// One prediction request. Missing fields take the form's defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentProfile {
    pub gender: Gender,
    pub age_band: AgeBand,
    pub disability: Disability,
    pub region: Region,
    pub highest_education: HighestEducation,
    pub studied_credits: StudiedCredits,
    pub num_of_prev_attempts: PrevAttempts,
    pub sum_click: ClickCount,
    pub imd_band: ImdBand,
}

impl StudentProfile {
    /// Shown next to the IMD control when the region is outside England.
    /// Informational only, it never changes the encoding.
    pub fn imd_advisory(&self) -> Option<&'static str> {
        self.region.outside_england().then_some(IMD_ADVISORY)
    }
}

impl fmt::Display for StudentProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}/{} credits={} attempts={} clicks={} imd={}",
            self.gender.label(),
            self.age_band.label(),
            self.disability.label(),
            self.region.label(),
            self.highest_education.label(),
            self.studied_credits.value(),
            self.num_of_prev_attempts.get(),
            self.sum_click.get(),
            self.imd_band.get()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_form() {
        let profile = StudentProfile::default();
        assert_eq!(profile.gender, Gender::Male);
        assert_eq!(profile.age_band, AgeBand::Under35);
        assert_eq!(profile.disability, Disability::No);
        assert_eq!(profile.studied_credits.value(), 30);
        assert_eq!(profile.num_of_prev_attempts.get(), 0);
        assert_eq!(profile.sum_click.get(), 1000);
        assert_eq!(profile.imd_band.get(), 1);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let profile: StudentProfile =
            serde_json::from_str(r#"{"region": "South East", "age_band": ">55"}"#).unwrap();
        assert_eq!(profile.region, Region::SouthEast);
        assert_eq!(profile.age_band, AgeBand::Over55);
        assert_eq!(profile.sum_click.get(), 1000);
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(serde_json::from_str::<StudentProfile>(r#"{"imd_band": 0}"#).is_err());
        assert!(serde_json::from_str::<StudentProfile>(r#"{"imd_band": 11}"#).is_err());
        assert!(serde_json::from_str::<StudentProfile>(r#"{"sum_click": 20001}"#).is_err());
        assert!(serde_json::from_str::<StudentProfile>(r#"{"num_of_prev_attempts": -1}"#).is_err());
        assert!(serde_json::from_str::<StudentProfile>(r#"{"studied_credits": 45}"#).is_err());
        assert!(serde_json::from_str::<StudentProfile>(r#"{"region": "Wales"}"#).is_err());
    }

    #[test]
    fn test_range_error_message() {
        let err = ImdBand::try_from(12).unwrap_err();
        assert_eq!(err.to_string(), "imd_band must be between 1 and 10, got 12");
    }

    #[test]
    fn test_labels_match_serde_names() {
        for region in Region::ALL {
            let json = serde_json::to_string(&region).unwrap();
            assert_eq!(json, format!("\"{}\"", region.label()));
        }
        for level in HighestEducation::ALL {
            let json = serde_json::to_string(&level).unwrap();
            assert_eq!(json, format!("\"{}\"", level.label()));
        }
        for band in AgeBand::ALL {
            let json = serde_json::to_string(&band).unwrap();
            assert_eq!(json, format!("\"{}\"", band.label()));
        }
        assert_eq!(serde_json::to_string(&StudiedCredits::OneTwenty).unwrap(), "120");
    }

    #[test]
    fn test_advisory_only_outside_england() {
        for region in Region::ALL {
            let profile = StudentProfile { region, ..Default::default() };
            let expected = matches!(region, Region::Ireland | Region::Scotland);
            assert_eq!(profile.imd_advisory().is_some(), expected, "{}", region.label());
        }
    }
}
