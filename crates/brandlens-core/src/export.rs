//! Payload handed to the document exporter.

use serde::{Deserialize, Serialize};

use crate::report::{BrandReport, ModelReport};

/// Everything an exporter needs to render one report.
///
/// Owns a copy of the report, so it can be moved to another task while the
/// selection keeps changing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPayload {
    pub model_id: String,
    pub model_name: String,
    pub report: BrandReport,
}

impl ExportPayload {
    /// File stem for the exported document, e.g. `"acme-technologies-openai-report"`.
    #[must_use]
    pub fn file_stem(&self) -> String {
        format!(
            "{}-{}-report",
            slugify(&self.report.brand_name),
            slugify(&self.model_id)
        )
    }
}

/// Project a model report into a self-contained export payload.
#[must_use]
pub fn prepare_export_payload(entry: &ModelReport) -> ExportPayload {
    ExportPayload {
        model_id: entry.model.id.clone(),
        model_name: entry.model.name.clone(),
        report: entry.report.clone(),
    }
}

/// Lowercase, ASCII-only, dash-separated form of `name`.
fn slugify(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' {
                c
            } else if c == ' ' {
                '-'
            } else {
                '\0'
            }
        })
        .filter(|&c| c != '\0')
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
