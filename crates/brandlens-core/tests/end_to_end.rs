use brandlens_core::{
    default_catalog, parse_catalog, prepare_export_payload, ConfigError, ReportRegistry,
    SelectionController, SelectionError,
};

const SINGLE_MODEL_CATALOG: &str = r##"
reports:
  - model:
      id: openai
      name: OpenAI
      displayColor: "#10a37f"
    report:
      brandName: Acme Technologies
      industry: Software & Technology
      overallScore: 82
      summary: Strong brand presence.
      logoUrl: https://placehold.co/400x400/10a37f/FFFFFF/png?text=A
      lastUpdated: 2023-11-15
      strengths: [Documentation]
      weaknesses: [Social engagement]
      sentiment:
        positive: 50
        neutral: 30
        negative: 30
        sources:
          - { name: Twitter, polarity: positive, score: 72 }
      targetAudience:
        description: Tech professionals
        segments:
          - { label: IT Professionals, percentage: 60, description: Implementers }
          - { label: Founders, percentage: 40, description: Builders }
      marketPosition:
        positionLabel: Industry Leader
        description: Premium
        growthRatePercent: 18
        marketSharePercent: 24
        competitors:
          - { name: TechGiant, score: 120 }
          - { name: CodeMasters, score: 68 }
      scoreCategories:
        - { name: Technical SEO, score: 88, description: Excellent }
      recommendations:
        - { title: Post more, description: Be consistent., priority: low }
        - { title: Fix mobile, description: Product pages., priority: high }
"##;

fn registry() -> ReportRegistry {
    ReportRegistry::from_catalog(parse_catalog(SINGLE_MODEL_CATALOG).unwrap()).unwrap()
}

#[test]
fn single_model_selection_scenario() {
    let registry = registry();
    let all = registry.all();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id(), "openai");

    let mut controller = SelectionController::new(&registry, "openai").unwrap();

    let entry = controller.select("openai").unwrap();
    assert_eq!(entry.report.overall_score, 82);

    let err = controller.select("nonexistent").unwrap_err();
    assert_eq!(err, SelectionError::NoSuchModel("nonexistent".to_string()));
    assert_eq!(controller.current_id(), "openai");
}

#[test]
fn dashboard_honours_display_policies() {
    let registry = registry();
    let controller = SelectionController::new(&registry, "openai").unwrap();
    let view = controller.current_view();

    let sentiment: Vec<f64> = view.sentiment.iter().map(|p| p.value).collect();
    assert_eq!(sentiment, [50.0, 30.0, 30.0]);
    assert_eq!(view.anomalies.len(), 1);

    let comparison: Vec<(&str, f64)> = view
        .market_comparison
        .iter()
        .map(|p| (p.label.as_str(), p.value))
        .collect();
    assert_eq!(
        comparison,
        [("Your Brand", 24.0), ("TechGiant", 100.0), ("CodeMasters", 68.0)]
    );
    let stored = &registry.get("openai").unwrap().report.market_position;
    assert!((stored.competitors[0].score - 120.0).abs() < f64::EPSILON);

    assert_eq!(view.audience[0].color.to_string(), "#0b7258");
    assert_eq!(view.recommendations[0].recommendations[0].title, "Fix mobile");
}

#[test]
fn export_payload_outlives_selection_changes() {
    let catalog = default_catalog().unwrap();
    let registry = ReportRegistry::from_catalog(catalog).unwrap();
    let mut controller = SelectionController::new(&registry, "openai").unwrap();

    let payload = prepare_export_payload(controller.current());
    controller.select("perplexity").unwrap();

    assert_eq!(payload.model_name, "OpenAI");
    assert_eq!(payload.report.overall_score, 82);
    assert_eq!(payload.file_stem(), "acme-technologies-openai-report");
}

#[test]
fn oversized_sentiment_value_is_rejected_at_load() {
    let yaml = SINGLE_MODEL_CATALOG.replace("positive: 50", "positive: 4294967295");
    let err = parse_catalog(&yaml).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)), "{err}");
}

#[test]
fn unknown_default_model_is_a_startup_error() {
    let registry = registry();
    let err = SelectionController::new(&registry, "gemini").unwrap_err();
    assert!(matches!(err, ConfigError::UnknownDefaultModel(_)));
}

#[test]
fn reference_catalog_models_and_colors() {
    let registry = ReportRegistry::from_catalog(default_catalog().unwrap()).unwrap();
    let models: Vec<(&str, String, u8)> = registry
        .all()
        .iter()
        .map(|e| {
            (
                e.id(),
                e.model.display_color.to_string(),
                e.report.overall_score,
            )
        })
        .collect();
    assert_eq!(
        models,
        [
            ("openai", "#10a37f".to_string(), 82),
            ("gemini", "#4285f4".to_string(), 79),
            ("perplexity", "#6c54d8".to_string(), 85),
        ]
    );
}
