#![doc(test(attr(deny(warnings))))]

//! Financial insight engine: turns a coarse budgeting profile and a list of
//! discretionary expenses into dashboard metrics and ordered advice, and runs
//! the educational quizzes that go with them.
//!
//! ```
//! use finsight_core::{compute_metrics, generate_recommendations};
//! use finsight_core::domain::{IncomeRange, UserProfile};
//! use finsight_core::ledger::ExpenseLedger;
//!
//! let profile = UserProfile::new(IncomeRange::From20kTo40k, 25_000.0).with_savings_goal(50_000.0);
//! let ledger = ExpenseLedger::sample();
//! let metrics = compute_metrics(&profile, ledger.records());
//! assert_eq!(metrics.total_expenses, 4_800.0);
//! assert_eq!(generate_recommendations(&profile, ledger.records(), &metrics).len(), 2);
//! ```

pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod utils;

use std::sync::Once;

pub use crate::core::catalog::{builtin_catalog, LessonCatalog};
pub use crate::core::quiz::{QuizError, QuizScore, QuizSession, QuizStatus};
pub use crate::core::services::{GoalStatus, MetricsService, RecommendationService};
pub use crate::core::session::InsightSession;
pub use crate::core::validation::{ExpenseDraft, ProfileDraft};
pub use crate::errors::{InsightError, Result};

use crate::domain::{DerivedMetrics, ExpenseRecord, Recommendation, UserProfile};

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finsight core tracing initialized.");
    });
}

/// Dashboard figures for `profile` over the `expenses` snapshot.
pub fn compute_metrics(profile: &UserProfile, expenses: &[ExpenseRecord]) -> DerivedMetrics {
    MetricsService::compute(profile, expenses)
}

/// Ordered advice for already computed `metrics`, using the default thresholds.
pub fn generate_recommendations(
    profile: &UserProfile,
    expenses: &[ExpenseRecord],
    metrics: &DerivedMetrics,
) -> Vec<Recommendation> {
    RecommendationService::generate(profile, expenses, metrics)
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
