//! Derived figures computed from a profile and an expense snapshot.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::expense::ExpenseCategory;

/// A percentage that may be undefined because its denominator was not positive.
///
/// Never holds NaN or infinity. Threshold checks treat `Undefined` as failing:
/// it is below every threshold and at least none.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub enum Percentage {
    Defined(f64),
    Undefined,
}

impl Percentage {
    /// `numerator / denominator * 100`, or `Undefined` when the denominator is not positive.
    pub fn of(numerator: f64, denominator: f64) -> Self {
        if denominator > 0.0 && denominator.is_finite() && numerator.is_finite() {
            Percentage::Defined(numerator / denominator * 100.0)
        } else {
            Percentage::Undefined
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            Percentage::Defined(value) => Some(value),
            Percentage::Undefined => None,
        }
    }

    pub fn is_defined(self) -> bool {
        matches!(self, Percentage::Defined(_))
    }

    pub fn is_below(self, threshold: f64) -> bool {
        match self {
            Percentage::Defined(value) => value < threshold,
            Percentage::Undefined => true,
        }
    }

    pub fn is_at_least(self, threshold: f64) -> bool {
        match self {
            Percentage::Defined(value) => value >= threshold,
            Percentage::Undefined => false,
        }
    }

    pub fn capped(self, max: f64) -> Self {
        match self {
            Percentage::Defined(value) => Percentage::Defined(value.min(max)),
            Percentage::Undefined => Percentage::Undefined,
        }
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Percentage::Defined(value) => write!(f, "{value:.1}%"),
            Percentage::Undefined => f.write_str("n/a"),
        }
    }
}

/// Per-category sums, kept in the order each category first appears in the snapshot.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct CategoryTotals {
    entries: Vec<(ExpenseCategory, f64)>,
}

impl CategoryTotals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, category: &ExpenseCategory, amount: f64) {
        match self.entries.iter_mut().find(|(key, _)| key == category) {
            Some((_, total)) => *total += amount,
            None => self.entries.push((category.clone(), amount)),
        }
    }

    pub fn get(&self, category: &ExpenseCategory) -> Option<f64> {
        self.entries
            .iter()
            .find(|(key, _)| key == category)
            .map(|(_, total)| *total)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ExpenseCategory, f64)> {
        self.entries.iter().map(|(category, total)| (category, *total))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The category with the largest strictly positive total.
    ///
    /// Ties resolve to the first category reaching the maximum in first-appearance order.
    pub fn highest(&self) -> Option<(&ExpenseCategory, f64)> {
        self.iter().fold(None, |best, (category, total)| match best {
            Some((_, best_total)) if total <= best_total => best,
            _ if total > 0.0 => Some((category, total)),
            _ => best,
        })
    }
}

/// Figures shown on the dashboard and fed into the recommendation rules.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DerivedMetrics {
    pub income: f64,
    pub total_expenses: f64,
    pub savings_goal: f64,
    pub current_savings: f64,
    pub savings_rate: Percentage,
    pub savings_progress: Percentage,
    pub category_totals: CategoryTotals,
}

impl DerivedMetrics {
    /// Share of income consumed by `amount`.
    pub fn share_of_income(&self, amount: f64) -> Percentage {
        Percentage::of(amount, self.income)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_is_undefined_for_non_positive_denominators() {
        assert_eq!(Percentage::of(10.0, 0.0), Percentage::Undefined);
        assert_eq!(Percentage::of(10.0, -5.0), Percentage::Undefined);
        assert_eq!(Percentage::of(1.0, 4.0), Percentage::Defined(25.0));
    }

    #[test]
    fn undefined_fails_every_threshold() {
        assert!(Percentage::Undefined.is_below(0.0));
        assert!(!Percentage::Undefined.is_at_least(0.0));
        assert!(Percentage::Defined(20.0).is_at_least(20.0));
        assert!(!Percentage::Defined(20.0).is_below(20.0));
    }

    #[test]
    fn highest_prefers_first_category_on_ties() {
        let mut totals = CategoryTotals::new();
        totals.add(&ExpenseCategory::Transport, 300.0);
        totals.add(&ExpenseCategory::Food, 500.0);
        totals.add(&ExpenseCategory::Bills, 500.0);
        let (category, total) = totals.highest().unwrap();
        assert_eq!(category, &ExpenseCategory::Food);
        assert_eq!(total, 500.0);
    }

    #[test]
    fn highest_ignores_zero_totals() {
        let mut totals = CategoryTotals::new();
        totals.add(&ExpenseCategory::Food, 0.0);
        assert!(totals.highest().is_none());
    }

    #[test]
    fn percentage_display_uses_one_decimal() {
        assert_eq!(Percentage::Defined(93.6).to_string(), "93.6%");
        assert_eq!(Percentage::Undefined.to_string(), "n/a");
    }
}
