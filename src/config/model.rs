use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::domain::Language;

/// Savings goal assumed when the profile leaves it unset.
pub const DEFAULT_SAVINGS_GOAL: f64 = 50_000.0;
pub const DEFAULT_QUIZ_PASS_MARK: u8 = 70;

/// Tunable engine settings. Every field falls back to its default when absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InsightConfig {
    #[serde(default)]
    pub language: Language,
    #[serde(default = "InsightConfig::default_savings_goal_value")]
    pub default_savings_goal: f64,
    #[serde(default)]
    pub thresholds: RuleThresholds,
    #[serde(default = "InsightConfig::default_quiz_pass_mark_value")]
    pub quiz_pass_mark: u8,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            default_savings_goal: Self::default_savings_goal_value(),
            thresholds: RuleThresholds::default(),
            quiz_pass_mark: Self::default_quiz_pass_mark_value(),
        }
    }
}

impl InsightConfig {
    pub fn default_savings_goal_value() -> f64 {
        DEFAULT_SAVINGS_GOAL
    }

    pub fn default_quiz_pass_mark_value() -> u8 {
        DEFAULT_QUIZ_PASS_MARK
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.default_savings_goal.is_finite() && self.default_savings_goal >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "default_savings_goal",
                reason: "must be a non-negative number".into(),
            });
        }
        if self.quiz_pass_mark > 100 {
            return Err(ConfigError::Invalid {
                field: "quiz_pass_mark",
                reason: "must be between 0 and 100".into(),
            });
        }
        self.thresholds.validate()
    }
}

/// Cut-off values used by the fixed recommendation rules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RuleThresholds {
    /// Savings rate (percent) below which automated savings are suggested.
    pub target_savings_rate: f64,
    /// Savings rate (percent) from which an emergency fund is suggested.
    pub emergency_fund_min_rate: f64,
    /// Emergency fund size expressed in months of income.
    pub emergency_fund_months: f64,
    /// Fraction of income a single category may take before a warning.
    pub category_share_limit: f64,
    /// Fraction of the savings goal from which the user counts as near it.
    pub near_goal_fraction: f64,
}

impl Default for RuleThresholds {
    fn default() -> Self {
        Self {
            target_savings_rate: 20.0,
            emergency_fund_min_rate: 15.0,
            emergency_fund_months: 3.0,
            category_share_limit: 0.3,
            near_goal_fraction: 0.8,
        }
    }
}

impl RuleThresholds {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let percents = [
            ("thresholds.target_savings_rate", self.target_savings_rate),
            ("thresholds.emergency_fund_min_rate", self.emergency_fund_min_rate),
        ];
        for (field, value) in percents {
            if !(0.0..=100.0).contains(&value) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be a percentage between 0 and 100".into(),
                });
            }
        }
        let fractions = [
            ("thresholds.category_share_limit", self.category_share_limit),
            ("thresholds.near_goal_fraction", self.near_goal_fraction),
        ];
        for (field, value) in fractions {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be a fraction between 0 and 1".into(),
                });
            }
        }
        if !(self.emergency_fund_months.is_finite() && self.emergency_fund_months >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "thresholds.emergency_fund_months",
                reason: "must be a non-negative number".into(),
            });
        }
        Ok(())
    }
}
