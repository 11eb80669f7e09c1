//! Turns raw form input into validated domain values.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{ExpenseCategory, ExpenseRecord, IncomeRange, PaymentMode, UserProfile};
use crate::errors::{InsightError, Result};

/// Onboarding form as typed by the user.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileDraft {
    pub income_range: String,
    pub monthly_expenses: String,
    /// Blank leaves the goal unset.
    pub savings_goal: String,
    pub priorities: Vec<String>,
}

impl ProfileDraft {
    pub fn validate(&self) -> Result<UserProfile> {
        let income_range = IncomeRange::from_label(&self.income_range).ok_or_else(|| {
            profile_error(format!("unknown income range '{}'", self.income_range.trim()))
        })?;
        let monthly_expenses = parse_amount(&self.monthly_expenses)
            .map_err(|reason| profile_error(format!("monthly expenses {reason}")))?
            .ok_or_else(|| profile_error("monthly expenses are required".to_string()))?;
        let savings_goal = parse_amount(&self.savings_goal)
            .map_err(|reason| profile_error(format!("savings goal {reason}")))?;

        let mut profile = UserProfile::new(income_range, monthly_expenses);
        profile.savings_goal_amount = savings_goal;
        for priority in &self.priorities {
            let priority = priority.trim();
            if !priority.is_empty() {
                profile = profile.with_priority(priority);
            }
        }
        Ok(profile)
    }
}

/// Add-expense form as typed by the user.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub category: String,
    pub amount: String,
    pub payment_mode: String,
    pub note: String,
    /// ISO `YYYY-MM-DD`; blank means today.
    pub date: String,
}

impl ExpenseDraft {
    pub fn validate(&self, today: NaiveDate) -> Result<ExpenseRecord> {
        let category = ExpenseCategory::parse(&self.category)
            .ok_or_else(|| expense_error("category is required".to_string()))?;
        let amount = parse_amount(&self.amount)
            .map_err(|reason| expense_error(format!("amount {reason}")))?
            .ok_or_else(|| expense_error("amount is required".to_string()))?;
        let payment_mode = PaymentMode::parse(&self.payment_mode).ok_or_else(|| {
            expense_error(format!("unknown payment mode '{}'", self.payment_mode.trim()))
        })?;
        let date = match self.date.trim() {
            "" => today,
            raw => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|err| expense_error(format!("date '{raw}' is invalid: {err}")))?,
        };

        let record = ExpenseRecord::new(category, amount, payment_mode, date);
        Ok(match self.note.trim() {
            "" => record,
            note => record.with_note(note),
        })
    }
}

/// `Ok(None)` for blank input. Accepts digit grouping commas.
fn parse_amount(raw: &str) -> std::result::Result<Option<f64>, String> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return Ok(None);
    }
    let value: f64 = cleaned
        .parse()
        .map_err(|_| format!("'{}' is not a number", raw.trim()))?;
    if !value.is_finite() {
        return Err(format!("'{}' is not a finite number", raw.trim()));
    }
    if value < 0.0 {
        return Err(format!("must not be negative, got {value}"));
    }
    Ok(Some(value))
}

fn profile_error(reason: String) -> InsightError {
    tracing::warn!(%reason, "rejected profile input");
    InsightError::InvalidProfileData(reason)
}

fn expense_error(reason: String) -> InsightError {
    tracing::warn!(%reason, "rejected expense input");
    InsightError::InvalidExpenseData(reason)
}
