//! Chart-ready series derived from a brand report.
//!
//! Every function here is pure: the same report and color always produce the
//! same output, and stored report values are never modified.

mod anomaly;
mod dashboard;

use serde::Serialize;

use crate::color::{generate_colors, HexColor};
use crate::report::{
    MarketPosition, Polarity, Priority, Recommendation, ScoreCategory, SentimentBreakdown,
    TargetAudience,
};

pub use anomaly::{detect_anomalies, Anomaly};
pub use dashboard::{model_badges, CategoryScore, DashboardView, ModelBadge};

pub const POSITIVE_COLOR: HexColor = HexColor::new(0x10, 0xb9, 0x81);
pub const NEUTRAL_COLOR: HexColor = HexColor::new(0xf5, 0x9e, 0x0b);
pub const NEGATIVE_COLOR: HexColor = HexColor::new(0xef, 0x44, 0x44);
/// Fill for the unfilled part of a score gauge.
pub const GAUGE_REMAINDER_COLOR: HexColor = HexColor::new(0xe5, 0xe7, 0xeb);

/// Label of the subject brand in the market comparison.
pub const SUBJECT_LABEL: &str = "Your Brand";
/// Display cap applied to competitor scores.
pub const COMPETITOR_SCORE_CAP: f64 = 100.0;

/// One labeled value of a chart series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
    pub color: HexColor,
}

impl SeriesPoint {
    fn new(label: impl Into<String>, value: f64, color: HexColor) -> Self {
        Self {
            label: label.into(),
            value,
            color,
        }
    }
}

/// A sentiment source with the color of its polarity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceBar {
    pub name: String,
    pub polarity: Polarity,
    pub score: u8,
    pub color: HexColor,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriorityGroup {
    pub priority: Priority,
    pub recommendations: Vec<Recommendation>,
}

#[must_use]
pub fn polarity_color(polarity: Polarity) -> HexColor {
    match polarity {
        Polarity::Positive => POSITIVE_COLOR,
        Polarity::Neutral => NEUTRAL_COLOR,
        Polarity::Negative => NEGATIVE_COLOR,
    }
}

/// Positive, neutral and negative slices with fixed semantic colors.
///
/// Values pass through as stored even when they do not add up to 100.
#[must_use]
pub fn sentiment_series(sentiment: &SentimentBreakdown) -> Vec<SeriesPoint> {
    vec![
        SeriesPoint::new("Positive", f64::from(sentiment.positive), POSITIVE_COLOR),
        SeriesPoint::new("Neutral", f64::from(sentiment.neutral), NEUTRAL_COLOR),
        SeriesPoint::new("Negative", f64::from(sentiment.negative), NEGATIVE_COLOR),
    ]
}

#[must_use]
pub fn sentiment_sources(sentiment: &SentimentBreakdown) -> Vec<SourceBar> {
    sentiment
        .sources
        .iter()
        .map(|s| SourceBar {
            name: s.name.clone(),
            polarity: s.polarity,
            score: s.score,
            color: polarity_color(s.polarity),
        })
        .collect()
}

/// Each point's fraction of the series' actual total.
///
/// A series summing to zero yields all zeros.
#[must_use]
pub fn series_shares(series: &[SeriesPoint]) -> Vec<f64> {
    let total: f64 = series.iter().map(|p| p.value).sum();
    series
        .iter()
        .map(|p| if total > 0.0 { p.value / total } else { 0.0 })
        .collect()
}

/// Audience segments colored with progressively lighter shades of `base`.
#[must_use]
pub fn audience_series(audience: &TargetAudience, base: HexColor) -> Vec<SeriesPoint> {
    let colors = generate_colors(audience.segments.len(), base);
    audience
        .segments
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            SeriesPoint::new(
                segment.label.clone(),
                f64::from(segment.percentage),
                colors[i % colors.len()],
            )
        })
        .collect()
}

/// The subject's market share followed by each competitor, scores capped at 100.
#[must_use]
pub fn market_comparison(position: &MarketPosition, accent: HexColor) -> Vec<SeriesPoint> {
    std::iter::once(SeriesPoint::new(
        SUBJECT_LABEL,
        position.market_share_percent,
        accent,
    ))
    .chain(position.competitors.iter().map(|c| {
        SeriesPoint::new(c.name.clone(), c.score.min(COMPETITOR_SCORE_CAP), accent)
    }))
    .collect()
}

/// Score categories in stored order.
#[must_use]
pub fn score_categories(categories: &[ScoreCategory]) -> &[ScoreCategory] {
    categories
}

/// Traffic-light color for a 0-100 score.
#[must_use]
pub fn score_color(score: u8) -> HexColor {
    if score >= 80 {
        POSITIVE_COLOR
    } else if score >= 60 {
        NEUTRAL_COLOR
    } else {
        NEGATIVE_COLOR
    }
}

/// Two-slice gauge: the score and what remains up to 100.
///
/// The filled slice uses `accent` when given, otherwise [`score_color`].
#[must_use]
pub fn score_gauge(score: u8, accent: Option<HexColor>) -> Vec<SeriesPoint> {
    let score = score.min(100);
    vec![
        SeriesPoint::new(
            "Score",
            f64::from(score),
            accent.unwrap_or_else(|| score_color(score)),
        ),
        SeriesPoint::new("Remaining", f64::from(100 - score), GAUGE_REMAINDER_COLOR),
    ]
}

/// Recommendations grouped high, medium, low; stored order kept within a group.
///
/// Priorities with no recommendations are omitted.
#[must_use]
pub fn recommendations_by_priority(recommendations: &[Recommendation]) -> Vec<PriorityGroup> {
    Priority::ALL
        .iter()
        .map(|&priority| PriorityGroup {
            priority,
            recommendations: recommendations
                .iter()
                .filter(|r| r.priority == priority)
                .cloned()
                .collect(),
        })
        .filter(|g| !g.recommendations.is_empty())
        .collect()
}

#[cfg(test)]
#[path = "views_test.rs"]
mod tests;
