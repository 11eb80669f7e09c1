//! Turns a profile and an expense snapshot into dashboard figures.

use crate::config::DEFAULT_SAVINGS_GOAL;
use crate::domain::{Amounted, CategoryTotals, DerivedMetrics, ExpenseRecord, Percentage, UserProfile};

const PROGRESS_CAP: f64 = 100.0;

/// Stateless aggregation over immutable snapshots. Cheap enough to run on every read.
pub struct MetricsService;

impl MetricsService {
    /// Computes metrics using [`DEFAULT_SAVINGS_GOAL`] for an unset goal.
    pub fn compute(profile: &UserProfile, expenses: &[ExpenseRecord]) -> DerivedMetrics {
        Self::compute_with_default_goal(profile, expenses, DEFAULT_SAVINGS_GOAL)
    }

    /// Computes metrics, substituting `default_goal` when the profile has no goal.
    ///
    /// Income is the estimated monthly expenses plus the savings goal amount
    /// (an unset goal contributes nothing to income).
    pub fn compute_with_default_goal(
        profile: &UserProfile,
        expenses: &[ExpenseRecord],
        default_goal: f64,
    ) -> DerivedMetrics {
        let income =
            profile.monthly_expense_estimate + profile.savings_goal_amount.unwrap_or(0.0);
        let savings_goal = profile.savings_goal_amount.unwrap_or(default_goal);
        let total_expenses: f64 = expenses.iter().map(Amounted::amount).sum();
        let current_savings = income - total_expenses;

        let mut category_totals = CategoryTotals::new();
        for record in expenses {
            category_totals.add(&record.category, record.amount);
        }

        let metrics = DerivedMetrics {
            income,
            total_expenses,
            savings_goal,
            current_savings,
            savings_rate: Percentage::of(current_savings, income),
            savings_progress: Percentage::of(current_savings, savings_goal).capped(PROGRESS_CAP),
            category_totals,
        };
        tracing::debug!(
            expenses = expenses.len(),
            income = metrics.income,
            total_expenses = metrics.total_expenses,
            savings_rate = ?metrics.savings_rate,
            "computed metrics"
        );
        metrics
    }
}
