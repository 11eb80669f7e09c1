mod common;

use common::{expense, sample_expenses, sample_profile};
use finsight_core::{
    compute_metrics,
    domain::{ExpenseCategory, IncomeRange, Language, Percentage, RecommendationKind, Severity, UserProfile},
    generate_recommendations, init,
};

#[test]
fn sample_profile_dashboard_and_advice() {
    init();

    let profile = sample_profile();
    let expenses = sample_expenses();
    let metrics = compute_metrics(&profile, &expenses);

    assert_eq!(metrics.income, 75_000.0);
    assert_eq!(metrics.total_expenses, 4_800.0);
    assert_eq!(metrics.current_savings, 70_200.0);
    let rate = metrics.savings_rate.value().expect("income is positive");
    assert!((rate - 93.6).abs() < 1e-9);
    assert_eq!(metrics.savings_progress, Percentage::Defined(100.0));

    let recs = generate_recommendations(&profile, &expenses, &metrics);
    let summary: Vec<_> = recs.iter().map(|rec| (rec.kind, rec.severity)).collect();
    assert_eq!(
        summary,
        vec![
            (RecommendationKind::HealthySavingsRate, Severity::Success),
            (RecommendationKind::EmergencyFund, Severity::Warning),
        ]
    );
    assert_eq!(recs[1].title_in(Language::En), "Build an Emergency Fund");
    assert_eq!(recs[1].title_in(Language::Te), "అత్యవసర నిధిని నిర్మించండి");
}

#[test]
fn zero_income_never_panics_and_warns_once() {
    let profile = UserProfile::new(IncomeRange::UpTo20k, 0.0);
    let expenses = vec![expense(ExpenseCategory::Bills, 600.0)];
    let metrics = compute_metrics(&profile, &expenses);

    assert_eq!(metrics.income, 0.0);
    assert_eq!(metrics.savings_rate, Percentage::Undefined);

    let recs = generate_recommendations(&profile, &expenses, &metrics);
    let rate_advice: Vec<_> = recs
        .iter()
        .filter(|rec| {
            matches!(
                rec.kind,
                RecommendationKind::LowSavingsRate | RecommendationKind::HealthySavingsRate
            )
        })
        .collect();
    assert_eq!(rate_advice.len(), 1);
    assert_eq!(rate_advice[0].severity, Severity::Warning);
    assert!(recs
        .iter()
        .all(|rec| !rec.description_in(Language::En).contains("NaN")));
}

#[test]
fn recommendations_are_reproducible_in_both_languages() {
    let profile = UserProfile::new(IncomeRange::UpTo20k, 8_000.0).with_savings_goal(2_000.0);
    let expenses = vec![
        expense(ExpenseCategory::Food, 1_000.0),
        expense(ExpenseCategory::Bills, 3_500.0),
    ];
    let metrics = compute_metrics(&profile, &expenses);

    let first = generate_recommendations(&profile, &expenses, &metrics);
    let second = generate_recommendations(&profile, &expenses, &metrics);
    assert_eq!(first, second);
    for rec in &first {
        assert!(!rec.title_in(Language::Te).is_empty());
        assert_ne!(rec.title_in(Language::En), rec.title_in(Language::Te));
    }
}
