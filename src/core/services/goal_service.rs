use serde::{Deserialize, Serialize};

use crate::domain::{DerivedMetrics, Language, LocalizedText, Percentage};

const ALMOST_THERE_FROM: f64 = 90.0;
const KEEP_GOING_FROM: f64 = 50.0;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GoalTier {
    SmallSteps,
    KeepGoing,
    AlmostThere,
}

impl GoalTier {
    pub fn message(self) -> LocalizedText {
        match self {
            GoalTier::SmallSteps => LocalizedText::new(
                "Small steps create big savings!",
                "చిన్న అడుగులు పెద్ద పొదుపును సృష్టిస్తాయి!",
            ),
            GoalTier::KeepGoing => LocalizedText::new(
                "Keep going! You're doing great.",
                "ముందుకు సాగండి! మీరు బాగా చేస్తున్నారు.",
            ),
            GoalTier::AlmostThere => LocalizedText::new(
                "Almost there! Stay focused.",
                "దాదాపు వచ్చేశారు! దృష్టి కేంద్రీకరించండి.",
            ),
        }
    }
}

/// Progress toward the savings goal as shown by the goal tracker.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GoalStatus {
    pub savings_goal: f64,
    pub current_savings: f64,
    /// Rounded progress percentage; `None` when the goal is zero.
    pub progress: Option<i64>,
    pub tier: GoalTier,
}

impl GoalStatus {
    pub fn from_metrics(metrics: &DerivedMetrics) -> Self {
        let (progress, tier) = match metrics.savings_progress {
            Percentage::Defined(value) => {
                let tier = if value >= ALMOST_THERE_FROM {
                    GoalTier::AlmostThere
                } else if value >= KEEP_GOING_FROM {
                    GoalTier::KeepGoing
                } else {
                    GoalTier::SmallSteps
                };
                (Some(value.round() as i64), tier)
            }
            Percentage::Undefined => (None, GoalTier::SmallSteps),
        };
        Self {
            savings_goal: metrics.savings_goal,
            current_savings: metrics.current_savings,
            progress,
            tier,
        }
    }

    pub fn message(&self, language: Language) -> String {
        self.tier.message().get(language).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CategoryTotals;

    fn metrics_with_progress(progress: Percentage) -> DerivedMetrics {
        DerivedMetrics {
            income: 1000.0,
            total_expenses: 0.0,
            savings_goal: 1000.0,
            current_savings: 1000.0,
            savings_rate: Percentage::Defined(100.0),
            savings_progress: progress,
            category_totals: CategoryTotals::new(),
        }
    }

    #[test]
    fn tiers_follow_progress() {
        let cases = [
            (Percentage::Defined(100.0), GoalTier::AlmostThere),
            (Percentage::Defined(90.0), GoalTier::AlmostThere),
            (Percentage::Defined(89.9), GoalTier::KeepGoing),
            (Percentage::Defined(50.0), GoalTier::KeepGoing),
            (Percentage::Defined(-20.0), GoalTier::SmallSteps),
            (Percentage::Undefined, GoalTier::SmallSteps),
        ];
        for (progress, expected) in cases {
            let status = GoalStatus::from_metrics(&metrics_with_progress(progress));
            assert_eq!(status.tier, expected, "progress {progress:?}");
        }
    }

    #[test]
    fn progress_is_rounded() {
        let status = GoalStatus::from_metrics(&metrics_with_progress(Percentage::Defined(66.6)));
        assert_eq!(status.progress, Some(67));
        assert_eq!(status.message(Language::En), "Keep going! You're doing great.");
    }
}
