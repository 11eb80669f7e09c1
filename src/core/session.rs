//! Per-user state behind the screens: configuration, profile and ledger.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::config::InsightConfig;
use crate::core::services::{GoalStatus, MetricsService, RecommendationService};
use crate::core::validation::{ExpenseDraft, ProfileDraft};
use crate::domain::{DerivedMetrics, ExpenseRecord, Recommendation, UserProfile};
use crate::errors::{InsightError, Result};
use crate::ledger::{ExpenseLedger, ProfileStore};

/// Every mutation swaps in a new snapshot, so values handed out earlier stay valid.
#[derive(Debug, Clone)]
pub struct InsightSession {
    config: InsightConfig,
    profile: Option<ProfileStore>,
    ledger: ExpenseLedger,
}

impl InsightSession {
    pub fn new(config: InsightConfig) -> Self {
        Self::with_ledger(config, ExpenseLedger::new())
    }

    /// Starts with the demonstration expenses already recorded.
    pub fn with_sample_expenses(config: InsightConfig) -> Self {
        Self::with_ledger(config, ExpenseLedger::sample())
    }

    pub fn with_ledger(config: InsightConfig, ledger: ExpenseLedger) -> Self {
        Self {
            config,
            profile: None,
            ledger,
        }
    }

    pub fn config(&self) -> &InsightConfig {
        &self.config
    }

    pub fn is_onboarded(&self) -> bool {
        self.profile.is_some()
    }

    pub fn complete_onboarding(&mut self, draft: &ProfileDraft) -> Result<&UserProfile> {
        let profile = draft.validate()?;
        tracing::info!(income_range = %profile.income_range, "onboarding completed");
        let store = self.profile.insert(ProfileStore::new(profile));
        Ok(store.profile())
    }

    /// Replaces the savings goal from raw input. Blank or invalid input is rejected.
    pub fn update_goal(&mut self, raw: &str) -> Result<&UserProfile> {
        let store = self.profile.as_ref().ok_or(InsightError::ProfileMissing)?;
        let trimmed = raw.trim();
        let amount: f64 = trimmed.replace(',', "").parse().map_err(|_| {
            tracing::warn!(input = trimmed, "rejected savings goal");
            InsightError::InvalidProfileData(format!("savings goal '{trimmed}' is not a number"))
        })?;
        let updated = store.update_goal(amount)?;
        tracing::debug!(goal = amount, "savings goal updated");
        let store = self.profile.insert(updated);
        Ok(store.profile())
    }

    pub fn add_expense(&mut self, draft: &ExpenseDraft, today: NaiveDate) -> Result<Uuid> {
        let record = draft.validate(today)?;
        let id = record.id;
        tracing::debug!(%id, category = %record.category, amount = record.amount, "expense added");
        self.ledger = self.ledger.add(record);
        Ok(id)
    }

    pub fn remove_expense(&mut self, id: Uuid) -> Result<()> {
        self.ledger = self.ledger.remove(id)?;
        tracing::debug!(%id, "expense removed");
        Ok(())
    }

    pub fn profile(&self) -> Result<&UserProfile> {
        self.profile_store().map(ProfileStore::profile)
    }

    /// Newest first.
    pub fn expenses(&self) -> &[ExpenseRecord] {
        self.ledger.records()
    }

    /// The current ledger snapshot; later mutations do not affect it.
    pub fn ledger(&self) -> &ExpenseLedger {
        &self.ledger
    }

    pub fn metrics(&self) -> Result<DerivedMetrics> {
        let profile = self.profile()?;
        Ok(MetricsService::compute_with_default_goal(
            profile,
            self.ledger.records(),
            self.config.default_savings_goal,
        ))
    }

    pub fn recommendations(&self) -> Result<Vec<Recommendation>> {
        let profile = self.profile()?;
        let metrics = self.metrics()?;
        Ok(RecommendationService::generate_with(
            profile,
            self.ledger.records(),
            &metrics,
            &self.config.thresholds,
        ))
    }

    pub fn goal_status(&self) -> Result<GoalStatus> {
        self.metrics().map(|metrics| GoalStatus::from_metrics(&metrics))
    }

    fn profile_store(&self) -> Result<&ProfileStore> {
        self.profile.as_ref().ok_or(InsightError::ProfileMissing)
    }
}
