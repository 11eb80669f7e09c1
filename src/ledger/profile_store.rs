use std::sync::Arc;

use crate::domain::UserProfile;
use crate::errors::{InsightError, Result};

/// Holds the onboarding profile for one session.
///
/// Like [`ExpenseLedger`](super::ExpenseLedger), updates produce a new store.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileStore {
    profile: Arc<UserProfile>,
}

impl ProfileStore {
    pub fn new(profile: UserProfile) -> Self {
        Self {
            profile: Arc::new(profile),
        }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// The only post-onboarding mutation: replaces the savings goal.
    pub fn update_goal(&self, amount: f64) -> Result<Self> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(InsightError::InvalidProfileData(format!(
                "savings goal must be a non-negative amount, got {amount}"
            )));
        }
        let mut profile = UserProfile::clone(&self.profile);
        profile.savings_goal_amount = Some(amount);
        Ok(Self::new(profile))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::IncomeRange;

    #[test]
    fn update_goal_leaves_other_fields() {
        let store = ProfileStore::new(
            UserProfile::new(IncomeRange::From20kTo40k, 25_000.0).with_priority("Build wealth"),
        );
        let updated = store.update_goal(60_000.0).expect("valid goal");

        assert_eq!(updated.profile().savings_goal_amount, Some(60_000.0));
        assert_eq!(updated.profile().monthly_expense_estimate, 25_000.0);
        assert!(updated.profile().has_priority("Build wealth"));
        assert_eq!(store.profile().savings_goal_amount, None);
    }

    #[test]
    fn update_goal_rejects_negative_amounts() {
        let store = ProfileStore::new(UserProfile::new(IncomeRange::UpTo20k, 1.0));
        assert!(matches!(
            store.update_goal(-1.0),
            Err(InsightError::InvalidProfileData(_))
        ));
        assert!(store.update_goal(f64::NAN).is_err());
    }
}
