//! Report fixtures shared by unit tests.

use chrono::NaiveDate;

use crate::report::{
    AudienceSegment, BrandReport, Competitor, MarketPosition, Model, ModelReport, Polarity,
    Priority, Recommendation, ScoreCategory, SentimentBreakdown, SentimentSource, TargetAudience,
};

pub(crate) fn model_report(id: &str, color: &str, overall_score: u8) -> ModelReport {
    let mut name = id.to_string();
    if let Some(first) = name.get_mut(0..1) {
        first.make_ascii_uppercase();
    }

    ModelReport {
        model: Model::new(id, &name, color).unwrap(),
        report: brand_report(overall_score),
    }
}

pub(crate) fn brand_report(overall_score: u8) -> BrandReport {
    BrandReport {
        brand_name: "Acme Technologies".to_string(),
        industry: "Software & Technology".to_string(),
        summary: "Strong presence with room to grow on social.".to_string(),
        logo_url: "https://placehold.co/400x400/10a37f/FFFFFF/png?text=A".to_string(),
        last_updated: NaiveDate::from_ymd_opt(2023, 11, 15).unwrap(),
        overall_score,
        strengths: vec!["Technical blog".to_string(), "Documentation".to_string()],
        weaknesses: vec!["Social engagement".to_string()],
        sentiment: SentimentBreakdown {
            positive: 68,
            neutral: 22,
            negative: 10,
            sources: vec![
                SentimentSource {
                    name: "Twitter".to_string(),
                    polarity: Polarity::Positive,
                    score: 72,
                },
                SentimentSource {
                    name: "Customer Reviews".to_string(),
                    polarity: Polarity::Neutral,
                    score: 55,
                },
            ],
        },
        target_audience: TargetAudience {
            description: "Tech-savvy professionals".to_string(),
            segments: vec![
                segment("IT Professionals", 45),
                segment("Startup Founders", 30),
                segment("Enterprise Managers", 15),
                segment("Other", 10),
            ],
        },
        market_position: MarketPosition {
            position_label: "Industry Leader".to_string(),
            description: "Premium solution".to_string(),
            growth_rate_percent: 18.0,
            market_share_percent: 24.0,
            competitors: vec![
                Competitor {
                    name: "TechGiant".to_string(),
                    score: 86.0,
                },
                Competitor {
                    name: "InnovateCorp".to_string(),
                    score: 79.0,
                },
            ],
        },
        score_categories: vec![
            ScoreCategory {
                name: "Brand Recognition".to_string(),
                score: 85,
                description: "Strong recognition".to_string(),
            },
            ScoreCategory {
                name: "Social Media".to_string(),
                score: 55,
                description: "Room for improvement".to_string(),
            },
        ],
        recommendations: vec![
            recommendation("Expand content", Priority::Medium),
            recommendation("Fix mobile pages", Priority::High),
            recommendation("Partner up", Priority::Low),
            recommendation("Engage on social", Priority::High),
        ],
    }
}

fn segment(label: &str, percentage: u8) -> AudienceSegment {
    AudienceSegment {
        label: label.to_string(),
        percentage,
        description: format!("{label} segment"),
    }
}

fn recommendation(title: &str, priority: Priority) -> Recommendation {
    Recommendation {
        title: title.to_string(),
        description: format!("{title} description"),
        priority,
    }
}
