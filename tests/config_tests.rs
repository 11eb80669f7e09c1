use std::fs;

use finsight_core::{
    config::{ConfigError, ConfigManager, InsightConfig},
    domain::{Language, RecommendationKind},
    InsightSession, ProfileDraft,
};
use tempfile::tempdir;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("absent").join("config.json"));
    let config = manager.load().expect("defaults");
    assert_eq!(config, InsightConfig::default());
    assert_eq!(config.default_savings_goal, 50_000.0);
    assert_eq!(config.thresholds.target_savings_rate, 20.0);
}

#[test]
fn partial_file_overrides_only_given_fields() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r#"{ "language": "te", "quiz_pass_mark": 60, "thresholds": { "target_savings_rate": 95 } }"#,
    )
    .unwrap();

    let config = ConfigManager::new(path.clone()).load().unwrap();
    assert_eq!(config.language, Language::Te);
    assert_eq!(config.quiz_pass_mark, 60);
    assert_eq!(config.thresholds.target_savings_rate, 95.0);
    assert_eq!(config.thresholds.emergency_fund_months, 3.0);
    assert_eq!(ConfigManager::new(path.clone()).config_path(), path.as_path());
}

#[test]
fn loaded_thresholds_drive_recommendations() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "thresholds": { "target_savings_rate": 95 } }"#).unwrap();
    let config = ConfigManager::new(path).load().unwrap();

    let mut session = InsightSession::with_sample_expenses(config);
    session
        .complete_onboarding(&ProfileDraft {
            income_range: "20000-40000".into(),
            monthly_expenses: "25000".into(),
            savings_goal: "50000".into(),
            priorities: Vec::new(),
        })
        .unwrap();
    let kinds: Vec<_> = session
        .recommendations()
        .unwrap()
        .into_iter()
        .map(|rec| rec.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![RecommendationKind::LowSavingsRate, RecommendationKind::EmergencyFund]
    );
}

#[test]
fn malformed_json_is_a_serde_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    fs::write(&path, "{ language: ").unwrap();
    assert!(matches!(
        ConfigManager::new(path).load(),
        Err(ConfigError::Serde(_))
    ));
}

#[test]
fn out_of_range_values_are_rejected() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "quiz_pass_mark": 150 }"#).unwrap();
    match ConfigManager::new(path).load() {
        Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, "quiz_pass_mark"),
        other => panic!("expected invalid config, got {other:?}"),
    }
}
