//! Domain types describing the user's coarse financial profile.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::common::{Displayable, Language, LocalizedText};

/// Priorities offered during onboarding. Users may pick any subset.
pub const SUGGESTED_PRIORITIES: [&str; 5] = [
    "Save for emergencies",
    "Pay off debts",
    "Build wealth",
    "Track spending",
    "Learn about finance",
];

/// Monthly income bracket chosen at onboarding.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum IncomeRange {
    #[serde(rename = "0-20000")]
    UpTo20k,
    #[serde(rename = "20000-40000")]
    From20kTo40k,
    #[serde(rename = "40000-60000")]
    From40kTo60k,
    #[serde(rename = "60000-100000")]
    From60kTo100k,
    #[serde(rename = "100000+")]
    Above100k,
}

impl IncomeRange {
    pub const ALL: [IncomeRange; 5] = [
        IncomeRange::UpTo20k,
        IncomeRange::From20kTo40k,
        IncomeRange::From40kTo60k,
        IncomeRange::From60kTo100k,
        IncomeRange::Above100k,
    ];

    /// Canonical label stored in the profile.
    pub fn label(self) -> &'static str {
        match self {
            IncomeRange::UpTo20k => "0-20000",
            IncomeRange::From20kTo40k => "20000-40000",
            IncomeRange::From40kTo60k => "40000-60000",
            IncomeRange::From60kTo100k => "60000-100000",
            IncomeRange::Above100k => "100000+",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL.into_iter().find(|range| range.label() == value)
    }
}

impl fmt::Display for IncomeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Displayable for IncomeRange {
    fn display_label(&self, _language: Language) -> String {
        match self {
            IncomeRange::UpTo20k => "₹0 - ₹20,000".into(),
            IncomeRange::From20kTo40k => "₹20,000 - ₹40,000".into(),
            IncomeRange::From40kTo60k => "₹40,000 - ₹60,000".into(),
            IncomeRange::From60kTo100k => "₹60,000 - ₹1,00,000".into(),
            IncomeRange::Above100k => "₹1,00,000+".into(),
        }
    }
}

/// Profile captured at onboarding completion.
///
/// Amounts are already validated: non-negative and finite. Use
/// [`ProfileDraft`](crate::core::validation::ProfileDraft) to build one from raw
/// form input.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub income_range: IncomeRange,
    pub monthly_expense_estimate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub savings_goal_amount: Option<f64>,
    #[serde(default)]
    pub priorities: BTreeSet<String>,
}

impl UserProfile {
    pub fn new(income_range: IncomeRange, monthly_expense_estimate: f64) -> Self {
        Self {
            income_range,
            monthly_expense_estimate,
            savings_goal_amount: None,
            priorities: BTreeSet::new(),
        }
    }

    pub fn with_savings_goal(mut self, amount: f64) -> Self {
        self.savings_goal_amount = Some(amount);
        self
    }

    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priorities.insert(priority.into());
        self
    }

    pub fn has_priority(&self, priority: &str) -> bool {
        self.priorities.contains(priority)
    }
}

/// Bilingual label for one of the [`SUGGESTED_PRIORITIES`].
pub fn priority_label(priority: &str) -> LocalizedText {
    let te = match priority {
        "Save for emergencies" => "అత్యవసర పొదుపు",
        "Pay off debts" => "అప్పులు తీర్చడం",
        "Build wealth" => "సంపద నిర్మాణం",
        "Track spending" => "ఖర్చు ట్రాకింగ్",
        "Learn about finance" => "ఆర్థిక విద్య",
        other => other,
    };
    LocalizedText::new(priority, te)
}
