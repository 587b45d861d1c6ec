use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::color::HexColor;
use crate::ConfigError;

/// An analysis source whose findings make up one brand report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: String,
    pub name: String,
    pub display_color: HexColor,
    /// Logo image URL shown on the model switcher.
    #[serde(default)]
    pub logo_url: Option<String>,
}

impl Model {
    /// Build a model, parsing its display color.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidColor`] if `color` is not a 6-digit hex color.
    pub fn new(id: &str, name: &str, color: &str) -> Result<Self, ConfigError> {
        let display_color = HexColor::parse(color).map_err(|source| ConfigError::InvalidColor {
            model: id.to_string(),
            source,
        })?;
        Ok(Self {
            id: id.to_string(),
            name: name.to_string(),
            display_color,
            logo_url: None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandReport {
    pub brand_name: String,
    pub industry: String,
    pub summary: String,
    pub logo_url: String,
    pub last_updated: NaiveDate,
    /// Overall brand score in `0..=100`.
    pub overall_score: u8,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub sentiment: SentimentBreakdown,
    pub target_audience: TargetAudience,
    pub market_position: MarketPosition,
    pub score_categories: Vec<ScoreCategory>,
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Neutral,
    Negative,
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Polarity::Positive => write!(f, "positive"),
            Polarity::Neutral => write!(f, "neutral"),
            Polarity::Negative => write!(f, "negative"),
        }
    }
}

/// Share of positive, neutral and negative mentions.
///
/// The three values are expected to add up to 100 but nothing enforces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentBreakdown {
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
    #[serde(default)]
    pub sources: Vec<SentimentSource>,
}

impl SentimentBreakdown {
    #[must_use]
    pub fn total(&self) -> u32 {
        self.positive
            .saturating_add(self.neutral)
            .saturating_add(self.negative)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentSource {
    pub name: String,
    pub polarity: Polarity,
    /// Source score in `0..=100`.
    pub score: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetAudience {
    pub description: String,
    pub segments: Vec<AudienceSegment>,
}

impl TargetAudience {
    #[must_use]
    pub fn total_percentage(&self) -> u32 {
        self.segments.iter().map(|s| u32::from(s.percentage)).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudienceSegment {
    pub label: String,
    pub percentage: u8,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketPosition {
    pub position_label: String,
    pub description: String,
    pub growth_rate_percent: f64,
    pub market_share_percent: f64,
    pub competitors: Vec<Competitor>,
}

/// A competitor as scored by the model. Scores may exceed 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competitor {
    pub name: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreCategory {
    pub name: String,
    pub score: u8,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Display order, most urgent first.
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

/// One model paired with the report it produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelReport {
    pub model: Model,
    pub report: BrandReport,
}

impl ModelReport {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.model.id
    }
}
