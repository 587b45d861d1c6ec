use chrono::NaiveDate;
use serde::Serialize;

use super::{
    audience_series, detect_anomalies, market_comparison, recommendations_by_priority,
    score_categories, score_gauge, sentiment_series, sentiment_sources, Anomaly, PriorityGroup,
    SeriesPoint, SourceBar,
};
use crate::color::HexColor;
use crate::registry::ReportRegistry;
use crate::report::ModelReport;

/// A score category with its gauge series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryScore {
    pub name: String,
    pub description: String,
    pub score: u8,
    pub gauge: Vec<SeriesPoint>,
}

/// Entry on the model switcher.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelBadge {
    pub id: String,
    pub name: String,
    pub color: HexColor,
    pub overall_score: u8,
    pub selected: bool,
}

/// Every derived view of one model report, plus the text shown beside the charts.
///
/// Owns all of its data, so it stays valid after the selection moves on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub model_id: String,
    pub model_name: String,
    pub accent: HexColor,

    pub brand_name: String,
    pub industry: String,
    pub summary: String,
    pub logo_url: String,
    pub last_updated: NaiveDate,
    pub overall_score: u8,
    pub overall_gauge: Vec<SeriesPoint>,
    pub categories: Vec<CategoryScore>,

    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,

    pub sentiment: Vec<SeriesPoint>,
    pub sentiment_sources: Vec<SourceBar>,

    pub audience_description: String,
    pub audience: Vec<SeriesPoint>,

    pub position_label: String,
    pub position_description: String,
    pub growth_rate_percent: f64,
    pub market_share_percent: f64,
    pub market_comparison: Vec<SeriesPoint>,

    pub recommendations: Vec<PriorityGroup>,
    pub anomalies: Vec<Anomaly>,
}

impl DashboardView {
    #[must_use]
    pub fn build(entry: &ModelReport) -> Self {
        let accent = entry.model.display_color;
        let report = &entry.report;

        let categories = score_categories(&report.score_categories)
            .iter()
            .map(|c| CategoryScore {
                name: c.name.clone(),
                description: c.description.clone(),
                score: c.score,
                gauge: score_gauge(c.score, Some(accent)),
            })
            .collect();

        Self {
            model_id: entry.model.id.clone(),
            model_name: entry.model.name.clone(),
            accent,
            brand_name: report.brand_name.clone(),
            industry: report.industry.clone(),
            summary: report.summary.clone(),
            logo_url: report.logo_url.clone(),
            last_updated: report.last_updated,
            overall_score: report.overall_score,
            overall_gauge: score_gauge(report.overall_score, Some(accent)),
            categories,
            strengths: report.strengths.clone(),
            weaknesses: report.weaknesses.clone(),
            sentiment: sentiment_series(&report.sentiment),
            sentiment_sources: sentiment_sources(&report.sentiment),
            audience_description: report.target_audience.description.clone(),
            audience: audience_series(&report.target_audience, accent),
            position_label: report.market_position.position_label.clone(),
            position_description: report.market_position.description.clone(),
            growth_rate_percent: report.market_position.growth_rate_percent,
            market_share_percent: report.market_position.market_share_percent,
            market_comparison: market_comparison(&report.market_position, accent),
            recommendations: recommendations_by_priority(&report.recommendations),
            anomalies: detect_anomalies(report),
        }
    }
}

/// One badge per catalog entry, in catalog order.
#[must_use]
pub fn model_badges(registry: &ReportRegistry, current_id: &str) -> Vec<ModelBadge> {
    registry
        .all()
        .iter()
        .map(|entry| ModelBadge {
            id: entry.model.id.clone(),
            name: entry.model.name.clone(),
            color: entry.model.display_color,
            overall_score: entry.report.overall_score,
            selected: entry.model.id == current_id,
        })
        .collect()
}
