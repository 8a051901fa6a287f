use serde::{Deserialize, Serialize};

/// Engagement bucket derived from the total platform click count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngagementLevel {
    Low,
    Moderate,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl EngagementLevel {
    pub const ALL: [EngagementLevel; 4] = [
        EngagementLevel::Low,
        EngagementLevel::Moderate,
        EngagementLevel::High,
        EngagementLevel::VeryHigh,
    ];

    /// Upper bounds are inclusive: 100 is Low, 1000 Moderate, 10000 High.
    pub fn from_clicks(clicks: u32) -> Self {
        match clicks {
            0..=100 => EngagementLevel::Low,
            101..=1000 => EngagementLevel::Moderate,
            1001..=10_000 => EngagementLevel::High,
            _ => EngagementLevel::VeryHigh,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EngagementLevel::Low => "Low",
            EngagementLevel::Moderate => "Moderate",
            EngagementLevel::High => "High",
            EngagementLevel::VeryHigh => "Very High",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            EngagementLevel::Low => "😴",
            EngagementLevel::Moderate => "🙂",
            EngagementLevel::High => "💪",
            EngagementLevel::VeryHigh => "🚀",
        }
    }
}
