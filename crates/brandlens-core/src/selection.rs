//! Tracks which model's report is current.

use thiserror::Error;

use crate::registry::ReportRegistry;
use crate::report::ModelReport;
use crate::views::DashboardView;
use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("no such model: '{0}'")]
    NoSuchModel(String),
}

/// Holds a single "current" model id over a borrowed registry.
///
/// A failed [`select`](SelectionController::select) leaves the current id as it was.
#[derive(Debug, Clone)]
pub struct SelectionController<'a> {
    registry: &'a ReportRegistry,
    current: &'a ModelReport,
}

impl<'a> SelectionController<'a> {
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownDefaultModel`] if `default_id` is not in `registry`.
    pub fn new(registry: &'a ReportRegistry, default_id: &str) -> Result<Self, ConfigError> {
        let current = registry
            .get(default_id)
            .ok_or_else(|| ConfigError::UnknownDefaultModel(default_id.to_string()))?;
        Ok(Self { registry, current })
    }

    #[must_use]
    pub fn current_id(&self) -> &'a str {
        &self.current.model.id
    }

    #[must_use]
    pub fn current(&self) -> &'a ModelReport {
        self.current
    }

    /// Make `model_id` current.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::NoSuchModel`] if the registry has no such id;
    /// the current selection is unchanged.
    pub fn select(&mut self, model_id: &str) -> Result<&'a ModelReport, SelectionError> {
        let Some(entry) = self.registry.get(model_id) else {
            tracing::warn!(
                model = model_id,
                current = self.current_id(),
                "unknown model, keeping selection"
            );
            return Err(SelectionError::NoSuchModel(model_id.to_string()));
        };

        if self.current_id() != model_id {
            self.current = entry;
            tracing::info!(model = model_id, "{}", switch_notice(model_id));
        }

        Ok(entry)
    }

    /// Select `model_id` and compute its dashboard.
    ///
    /// The views are computed only after the lookup succeeds, from the entry it
    /// resolved.
    ///
    /// # Errors
    ///
    /// See [`SelectionController::select`].
    pub fn switch(&mut self, model_id: &str) -> Result<DashboardView, SelectionError> {
        let entry = self.select(model_id)?;
        Ok(DashboardView::build(entry))
    }

    /// Dashboard for the current selection.
    #[must_use]
    pub fn current_view(&self) -> DashboardView {
        DashboardView::build(self.current())
    }
}

/// Notice shown after switching models, e.g. `"Now viewing Openai analysis"`.
#[must_use]
pub fn switch_notice(model_id: &str) -> String {
    let mut chars = model_id.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
    };
    format!("Now viewing {capitalized} analysis")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::model_report;

    fn registry() -> ReportRegistry {
        ReportRegistry::new(vec![
            model_report("openai", "#10a37f", 82),
            model_report("gemini", "#4285f4", 79),
        ])
        .unwrap()
    }

    #[test]
    fn default_must_exist() {
        let registry = registry();
        let err = SelectionController::new(&registry, "claude").unwrap_err();
        assert!(
            matches!(err, ConfigError::UnknownDefaultModel(ref id) if id == "claude"),
            "expected UnknownDefaultModel(claude), got: {err:?}"
        );
    }

    #[test]
    fn starts_on_default() {
        let registry = registry();
        let controller = SelectionController::new(&registry, "gemini").unwrap();
        assert_eq!(controller.current_id(), "gemini");
        assert_eq!(controller.current().report.overall_score, 79);
    }

    #[test]
    fn select_switches_current() {
        let registry = registry();
        let mut controller = SelectionController::new(&registry, "openai").unwrap();
        let entry = controller.select("gemini").unwrap();
        assert_eq!(entry.id(), "gemini");
        assert_eq!(controller.current_id(), "gemini");
    }

    #[test]
    fn select_current_is_idempotent() {
        let registry = registry();
        let mut controller = SelectionController::new(&registry, "openai").unwrap();
        let before = controller.current().clone();
        let entry = controller.select("openai").unwrap();
        assert_eq!(entry, &before);
        assert_eq!(controller.current_id(), "openai");
    }

    #[test]
    fn select_unknown_leaves_selection_unchanged() {
        let registry = registry();
        let mut controller = SelectionController::new(&registry, "openai").unwrap();
        controller.select("gemini").unwrap();

        let err = controller.select("nonexistent").unwrap_err();
        assert_eq!(err, SelectionError::NoSuchModel("nonexistent".to_string()));
        assert_eq!(controller.current_id(), "gemini");
    }

    #[test]
    fn switch_returns_views_for_new_selection() {
        let registry = registry();
        let mut controller = SelectionController::new(&registry, "openai").unwrap();
        let view = controller.switch("gemini").unwrap();
        assert_eq!(view.model_id, "gemini");
        assert_eq!(view.accent.to_string(), "#4285f4");
        assert_eq!(controller.current_view(), view);
    }

    #[test]
    fn failed_switch_keeps_current_view() {
        let registry = registry();
        let mut controller = SelectionController::new(&registry, "openai").unwrap();
        let before = controller.current_view();
        assert!(controller.switch("nope").is_err());
        assert_eq!(controller.current_view(), before);
    }

    #[test]
    fn switch_notice_capitalizes_id() {
        assert_eq!(switch_notice("perplexity"), "Now viewing Perplexity analysis");
        assert_eq!(switch_notice(""), "Now viewing  analysis");
    }
}
