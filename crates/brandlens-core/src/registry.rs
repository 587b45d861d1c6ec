//! Read-only catalog of model reports.

use crate::catalog::{validate_reports, CatalogFile};
use crate::report::ModelReport;
use crate::views::detect_anomalies;
use crate::ConfigError;

/// The fixed set of model reports, built once and only ever borrowed.
#[derive(Debug, Clone)]
pub struct ReportRegistry {
    reports: Vec<ModelReport>,
}

impl ReportRegistry {
    /// Build a registry, validating every entry.
    ///
    /// Percentage anomalies are not errors; each one is logged once here.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the catalog is empty, has duplicate ids, or any
    /// report holds out-of-range values.
    pub fn new(reports: Vec<ModelReport>) -> Result<Self, ConfigError> {
        validate_reports(&reports)?;
        for entry in &reports {
            for anomaly in detect_anomalies(&entry.report) {
                tracing::warn!(
                    model = entry.id(),
                    brand = %entry.report.brand_name,
                    "{anomaly}"
                );
            }
        }
        tracing::debug!(models = reports.len(), "report registry built");
        Ok(Self { reports })
    }

    /// # Errors
    ///
    /// See [`ReportRegistry::new`].
    pub fn from_catalog(catalog: CatalogFile) -> Result<Self, ConfigError> {
        Self::new(catalog.reports)
    }

    /// All model reports in catalog order.
    #[must_use]
    pub fn all(&self) -> &[ModelReport] {
        &self.reports
    }

    /// Exact-match lookup by model id.
    #[must_use]
    pub fn get(&self, model_id: &str) -> Option<&ModelReport> {
        self.reports.iter().find(|r| r.model.id == model_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    /// Always `false` for a constructed registry; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}
