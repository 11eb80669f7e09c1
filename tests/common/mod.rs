#![allow(dead_code)]

use chrono::NaiveDate;
use finsight_core::domain::{ExpenseCategory, ExpenseRecord, IncomeRange, PaymentMode, UserProfile};

pub fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, day).expect("valid November date")
}

pub fn expense(category: ExpenseCategory, amount: f64) -> ExpenseRecord {
    ExpenseRecord::new(category, amount, PaymentMode::Upi, date(8))
}

/// Monthly expenses 25000 with a 50000 goal, as seeded by the demo.
pub fn sample_profile() -> UserProfile {
    UserProfile::new(IncomeRange::From20kTo40k, 25_000.0).with_savings_goal(50_000.0)
}

pub fn sample_expenses() -> Vec<ExpenseRecord> {
    vec![
        expense(ExpenseCategory::Food, 2_500.0),
        expense(ExpenseCategory::Transport, 800.0),
        expense(ExpenseCategory::Shopping, 1_500.0),
    ]
}
