//! Advice produced by the recommendation rules.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::common::{Language, LocalizedText};
use crate::domain::expense::ExpenseCategory;

/// How urgently a recommendation should be presented.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Alert,
    Warning,
    Success,
}

impl Severity {
    /// Badge text shown next to the recommendation title.
    pub fn badge(self, language: Language) -> &'static str {
        match (self, language) {
            (Severity::Alert, Language::En) => "Action Required",
            (Severity::Alert, Language::Te) => "చర్య అవసరం",
            (Severity::Warning, Language::En) => "Warning",
            (Severity::Warning, Language::Te) => "హెచ్చరిక",
            (Severity::Success, Language::En) => "Good Habit",
            (Severity::Success, Language::Te) => "మంచి అలవాటు",
        }
    }

    /// Alerts and warnings invite the user to act; successes do not.
    pub fn is_actionable(self) -> bool {
        !matches!(self, Severity::Success)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Alert => "alert",
            Severity::Warning => "warning",
            Severity::Success => "success",
        };
        f.write_str(label)
    }
}

/// The rule that produced a recommendation.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    Overspend,
    LowSavingsRate,
    HealthySavingsRate,
    CategoryConcentration,
    NearGoal,
    EmergencyFund,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub severity: Severity,
    pub title: LocalizedText,
    pub description: LocalizedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_category: Option<ExpenseCategory>,
}

impl Recommendation {
    pub fn new(
        kind: RecommendationKind,
        severity: Severity,
        title: LocalizedText,
        description: LocalizedText,
    ) -> Self {
        Self {
            kind,
            severity,
            title,
            description,
            subject_category: None,
        }
    }

    pub fn about(mut self, category: ExpenseCategory) -> Self {
        self.subject_category = Some(category);
        self
    }

    pub fn title_in(&self, language: Language) -> &str {
        self.title.get(language)
    }

    pub fn description_in(&self, language: Language) -> &str {
        self.description.get(language)
    }
}
