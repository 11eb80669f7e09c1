//! Domain types representing discretionary expenses.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Amounted, Displayable, Identifiable, Language};

/// Spending bucket an expense is filed under.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ExpenseCategory {
    Food,
    Transport,
    Shopping,
    Bills,
    Other(String),
}

impl ExpenseCategory {
    pub const KNOWN: [ExpenseCategory; 4] = [
        ExpenseCategory::Food,
        ExpenseCategory::Transport,
        ExpenseCategory::Shopping,
        ExpenseCategory::Bills,
    ];

    /// Parses a category name; unknown non-blank names become `Other`.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        let category = match value.to_ascii_lowercase().as_str() {
            "food" => ExpenseCategory::Food,
            "transport" => ExpenseCategory::Transport,
            "shopping" => ExpenseCategory::Shopping,
            "bills" => ExpenseCategory::Bills,
            _ => ExpenseCategory::Other(value.to_string()),
        };
        Some(category)
    }

    pub fn name(&self) -> &str {
        match self {
            ExpenseCategory::Food => "Food",
            ExpenseCategory::Transport => "Transport",
            ExpenseCategory::Shopping => "Shopping",
            ExpenseCategory::Bills => "Bills",
            ExpenseCategory::Other(name) => name,
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Displayable for ExpenseCategory {
    fn display_label(&self, language: Language) -> String {
        match language {
            Language::En => self.name().to_string(),
            Language::Te => match self {
                ExpenseCategory::Food => "ఆహారం".into(),
                ExpenseCategory::Transport => "రవాణా".into(),
                ExpenseCategory::Shopping => "షాపింగ్".into(),
                ExpenseCategory::Bills => "బిల్లులు".into(),
                ExpenseCategory::Other(name) => name.clone(),
            },
        }
    }
}

/// How an expense was paid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PaymentMode {
    Cash,
    #[serde(rename = "UPI")]
    Upi,
    Card,
    #[serde(rename = "Net Banking")]
    NetBanking,
}

impl PaymentMode {
    pub const ALL: [PaymentMode; 4] = [
        PaymentMode::Cash,
        PaymentMode::Upi,
        PaymentMode::Card,
        PaymentMode::NetBanking,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PaymentMode::Cash => "Cash",
            PaymentMode::Upi => "UPI",
            PaymentMode::Card => "Card",
            PaymentMode::NetBanking => "Net Banking",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|mode| mode.label().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single recorded expense. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseRecord {
    pub id: Uuid,
    pub category: ExpenseCategory,
    pub amount: f64,
    pub payment_mode: PaymentMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub date: NaiveDate,
}

impl ExpenseRecord {
    pub fn new(
        category: ExpenseCategory,
        amount: f64,
        payment_mode: PaymentMode,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            category,
            amount,
            payment_mode,
            note: None,
            date,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

impl Identifiable for ExpenseRecord {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for ExpenseRecord {
    fn amount(&self) -> f64 {
        self.amount
    }
}
