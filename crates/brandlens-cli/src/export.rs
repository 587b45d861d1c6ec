//! Export command: hands the selected report to a background writer task.

use std::path::{Path, PathBuf};

use anyhow::Context;
use brandlens_core::{
    prepare_export_payload, AppConfig, ExportPayload, ReportRegistry, SelectionController,
};

/// Export `model` (or the default model) as pretty JSON under `out`.
///
/// # Errors
///
/// Returns an error if `model` is unknown or the file cannot be written.
pub(crate) async fn run_export(
    registry: &ReportRegistry,
    config: &AppConfig,
    model: Option<&str>,
    out: Option<PathBuf>,
) -> anyhow::Result<()> {
    let mut controller = SelectionController::new(registry, &config.default_model)?;
    if let Some(id) = model {
        controller.select(id)?;
    }

    let payload = prepare_export_payload(controller.current());
    let dir = out.unwrap_or_else(|| config.export_dir.clone());

    let handle = tokio::spawn(async move { write_payload(&dir, &payload).await });
    let path = handle.await.context("export task panicked")??;

    println!("exported {}", path.display());
    Ok(())
}

/// Write `payload` to `<dir>/<file stem>.json`, creating `dir` if needed.
pub(crate) async fn write_payload(dir: &Path, payload: &ExportPayload) -> anyhow::Result<PathBuf> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("failed to create export dir {}", dir.display()))?;

    let path = dir.join(format!("{}.json", payload.file_stem()));
    let bytes = serde_json::to_vec_pretty(payload)?;
    tokio::fs::write(&path, bytes)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;

    tracing::info!(
        model = %payload.model_id,
        brand = %payload.report.brand_name,
        path = %path.display(),
        "report exported"
    );
    Ok(path)
}
