//! Brand-analysis report model for brandlens.
//!
//! Holds the fixed catalog of analysis models and their brand reports, and the
//! pure transforms that turn a report into chart-ready series. Nothing here
//! performs I/O after the catalog has been loaded.

pub mod app_config;
pub mod catalog;
pub mod color;
pub mod config;
pub mod export;
pub mod registry;
pub mod report;
pub mod selection;
pub mod views;

#[cfg(test)]
mod test_support;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use catalog::{default_catalog, load_catalog, parse_catalog, CatalogFile};
pub use color::{generate_colors, ColorError, HexColor};
pub use config::{load_app_config, load_app_config_from_env};
pub use export::{prepare_export_payload, ExportPayload};
pub use registry::ReportRegistry;
pub use report::{
    AudienceSegment, BrandReport, Competitor, MarketPosition, Model, ModelReport, Polarity,
    Priority, Recommendation, ScoreCategory, SentimentBreakdown, SentimentSource, TargetAudience,
};
pub use selection::{switch_notice, SelectionController, SelectionError};
pub use views::{model_badges, Anomaly, DashboardView, ModelBadge, SeriesPoint};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read catalog file {path}: {source}")]
    CatalogFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file: {0}")]
    CatalogFileParse(#[from] serde_yaml::Error),

    #[error("invalid display color for model '{model}': {source}")]
    InvalidColor {
        model: String,
        #[source]
        source: ColorError,
    },

    #[error("default model '{0}' is not in the catalog")]
    UnknownDefaultModel(String),

    #[error("catalog validation error: {0}")]
    Validation(String),
}
