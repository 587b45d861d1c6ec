//! Soft-invariant checks on report percentages.

use serde::Serialize;

use crate::report::BrandReport;

/// A report value that breaks an expected-but-unenforced property.
///
/// Anomalies never stop a view from being computed; they exist so callers can
/// flag them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Anomaly {
    /// Positive, neutral and negative do not add up to 100.
    SentimentTotal { total: u32 },
    /// Audience segment percentages do not add up to 100.
    AudienceTotal { total: u32 },
}

impl std::fmt::Display for Anomaly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Anomaly::SentimentTotal { total } => {
                write!(f, "sentiment percentages sum to {total}, expected 100")
            }
            Anomaly::AudienceTotal { total } => {
                write!(f, "audience segment percentages sum to {total}, expected 100")
            }
        }
    }
}

/// Check the percentage soft invariants of `report`.
///
/// Pure: callers decide whether to log or display what it returns.
#[must_use]
pub fn detect_anomalies(report: &BrandReport) -> Vec<Anomaly> {
    let mut anomalies = Vec::new();

    let sentiment_total = report.sentiment.total();
    if sentiment_total != 100 {
        anomalies.push(Anomaly::SentimentTotal {
            total: sentiment_total,
        });
    }

    // A report without segments has nothing to chart, so an empty total is fine.
    let audience = &report.target_audience;
    let audience_total = audience.total_percentage();
    if !audience.segments.is_empty() && audience_total != 100 {
        anomalies.push(Anomaly::AudienceTotal {
            total: audience_total,
        });
    }

    anomalies
}
