//! Read-only command handlers: model list, dashboard, catalog check.

use std::fmt::Write as _;

use brandlens_core::views::{series_shares, SeriesPoint};
use brandlens_core::{model_badges, AppConfig, DashboardView, ReportRegistry, SelectionController};

pub(crate) fn run_models(registry: &ReportRegistry, config: &AppConfig) {
    for badge in model_badges(registry, &config.default_model) {
        let marker = if badge.selected { "*" } else { " " };
        println!(
            "{marker} {:<12} {:<12} {} score {}",
            badge.id, badge.name, badge.color, badge.overall_score
        );
    }
}

/// Print the dashboard for `model`, or for the default model when `None`.
///
/// An unknown `model` is logged and the default model's dashboard is shown
/// instead.
pub(crate) fn run_show(
    registry: &ReportRegistry,
    config: &AppConfig,
    model: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let mut controller = SelectionController::new(registry, &config.default_model)?;

    let view = match model {
        Some(id) => controller.switch(id).unwrap_or_else(|e| {
            tracing::warn!(error = %e, kept = controller.current_id(), "selection unchanged");
            controller.current_view()
        }),
        None => controller.current_view(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render_text(&view));
    }
    Ok(())
}

pub(crate) fn run_check(registry: &ReportRegistry, config: &AppConfig) -> anyhow::Result<()> {
    SelectionController::new(registry, &config.default_model)?;

    let mut flagged = 0usize;
    for entry in registry.all() {
        let view = DashboardView::build(entry);
        for anomaly in &view.anomalies {
            println!("{}: {anomaly}", entry.id());
            flagged += 1;
        }
    }

    println!(
        "catalog ok: {} models, default '{}', {flagged} anomalies",
        registry.len(),
        config.default_model
    );
    Ok(())
}

pub(crate) fn render_text(view: &DashboardView) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} ({}) - analysis by {}",
        view.brand_name, view.industry, view.model_name
    );
    let _ = writeln!(
        out,
        "Overall score: {}/100  (updated {})",
        view.overall_score, view.last_updated
    );
    let _ = writeln!(out, "{}", view.summary);

    section(&mut out, "Score categories");
    for c in &view.categories {
        let _ = writeln!(out, "  {:<22} {:>3}  {}", c.name, c.score, c.description);
    }

    section(&mut out, "Sentiment");
    write_series(&mut out, &view.sentiment, "%");
    for s in &view.sentiment_sources {
        let _ = writeln!(out, "  {:<22} {:>3}  {}", s.name, s.score, s.polarity);
    }

    section(&mut out, "Strengths");
    for s in &view.strengths {
        let _ = writeln!(out, "  + {s}");
    }
    section(&mut out, "Weaknesses");
    for w in &view.weaknesses {
        let _ = writeln!(out, "  - {w}");
    }

    section(&mut out, "Target audience");
    let _ = writeln!(out, "  {}", view.audience_description);
    write_series(&mut out, &view.audience, "%");

    section(&mut out, "Market position");
    let _ = writeln!(
        out,
        "  {}: {} (share {}%, growth {}%)",
        view.position_label,
        view.position_description,
        view.market_share_percent,
        view.growth_rate_percent
    );
    write_series(&mut out, &view.market_comparison, "");

    section(&mut out, "Recommendations");
    for group in &view.recommendations {
        for r in &group.recommendations {
            let _ = writeln!(out, "  [{}] {}: {}", group.priority, r.title, r.description);
        }
    }

    if !view.anomalies.is_empty() {
        section(&mut out, "Data warnings");
        for a in &view.anomalies {
            let _ = writeln!(out, "  ! {a}");
        }
    }

    out
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{title}");
}

fn write_series(out: &mut String, series: &[SeriesPoint], unit: &str) {
    for (point, share) in series.iter().zip(series_shares(series)) {
        let _ = writeln!(
            out,
            "  {:<22} {:>6}{unit}  {}  ({:.1}% of total)",
            point.label,
            point.value,
            point.color,
            share * 100.0
        );
    }
}
