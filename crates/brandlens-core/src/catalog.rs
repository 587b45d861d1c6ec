//! YAML catalog of model reports: loading, parsing and validation.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::report::ModelReport;
use crate::ConfigError;

/// The catalog shipped with the crate, used when no catalog path is configured.
const EMBEDDED_CATALOG: &str = include_str!("../../../config/catalog.yaml");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub reports: Vec<ModelReport>,
}

/// Load and validate a catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_catalog(path: &Path) -> Result<CatalogFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CatalogFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let catalog = parse_catalog(&content)?;
    tracing::debug!(
        path = %path.display(),
        reports = catalog.reports.len(),
        "loaded catalog"
    );
    Ok(catalog)
}

/// Parse and validate a catalog from YAML text.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML is malformed or the catalog fails validation.
pub fn parse_catalog(content: &str) -> Result<CatalogFile, ConfigError> {
    let catalog: CatalogFile = serde_yaml::from_str(content)?;
    validate_reports(&catalog.reports)?;
    Ok(catalog)
}

/// The reference catalog embedded at build time.
///
/// # Errors
///
/// Returns `ConfigError` only if the embedded file itself is invalid.
pub fn default_catalog() -> Result<CatalogFile, ConfigError> {
    parse_catalog(EMBEDDED_CATALOG)
}

pub(crate) fn validate_reports(reports: &[ModelReport]) -> Result<(), ConfigError> {
    if reports.is_empty() {
        return Err(ConfigError::Validation(
            "catalog must contain at least one model report".to_string(),
        ));
    }

    let mut seen_ids = HashSet::new();

    for entry in reports {
        let id = &entry.model.id;
        if id.trim().is_empty() {
            return Err(ConfigError::Validation(
                "model id must be non-empty".to_string(),
            ));
        }

        if entry.model.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "model '{id}' must have a non-empty name"
            )));
        }

        if !seen_ids.insert(id.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate model id: '{id}'"
            )));
        }

        validate_report(entry)?;
    }

    Ok(())
}

fn validate_report(entry: &ModelReport) -> Result<(), ConfigError> {
    let id = &entry.model.id;
    let report = &entry.report;

    check_score(id, "overallScore", report.overall_score)?;

    for category in &report.score_categories {
        check_score(id, &format!("score category '{}'", category.name), category.score)?;
    }

    let sentiment = &report.sentiment;
    check_score(id, "sentiment positive", sentiment.positive)?;
    check_score(id, "sentiment neutral", sentiment.neutral)?;
    check_score(id, "sentiment negative", sentiment.negative)?;

    for source in &report.sentiment.sources {
        check_score(id, &format!("sentiment source '{}'", source.name), source.score)?;
    }

    for segment in &report.target_audience.segments {
        check_score(
            id,
            &format!("audience segment '{}'", segment.label),
            segment.percentage,
        )?;
    }

    let share = report.market_position.market_share_percent;
    if !share.is_finite() || !(0.0..=100.0).contains(&share) {
        return Err(ConfigError::Validation(format!(
            "model '{id}' has invalid market share {share}; must be within 0-100"
        )));
    }

    if !report.market_position.growth_rate_percent.is_finite() {
        return Err(ConfigError::Validation(format!(
            "model '{id}' has a non-finite growth rate"
        )));
    }

    for competitor in &report.market_position.competitors {
        if !competitor.score.is_finite() || competitor.score < 0.0 {
            return Err(ConfigError::Validation(format!(
                "model '{id}' competitor '{}' has invalid score {}",
                competitor.name, competitor.score
            )));
        }
    }

    Ok(())
}

fn check_score(id: &str, field: &str, value: impl Into<u32>) -> Result<(), ConfigError> {
    let value = value.into();
    if value > 100 {
        return Err(ConfigError::Validation(format!(
            "model '{id}' {field} is {value}; must be within 0-100"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
