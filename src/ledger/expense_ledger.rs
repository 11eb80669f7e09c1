use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{ExpenseCategory, ExpenseRecord, Identifiable, PaymentMode};
use crate::errors::{InsightError, Result};

/// Ordered, newest-first collection of expenses.
///
/// Snapshots are immutable: `add` and `remove` return a new ledger and leave the
/// receiver untouched, so a computation holding a snapshot never observes a
/// mutation mid-read. Cloning is cheap.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseLedger {
    records: Arc<Vec<ExpenseRecord>>,
}

impl ExpenseLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a ledger from records already ordered newest first.
    pub fn from_records(records: Vec<ExpenseRecord>) -> Self {
        Self {
            records: Arc::new(records),
        }
    }

    /// The three starter expenses shown before the user records their own.
    pub fn sample() -> Self {
        let entries = [
            (ExpenseCategory::Food, 2500.0, PaymentMode::Upi, "Groceries", 8),
            (ExpenseCategory::Transport, 800.0, PaymentMode::Cash, "Auto fare", 7),
            (ExpenseCategory::Shopping, 1500.0, PaymentMode::Card, "Clothing", 6),
        ];
        let records = entries
            .into_iter()
            .filter_map(|(category, amount, mode, note, day)| {
                let date = NaiveDate::from_ymd_opt(2025, 11, day)?;
                Some(ExpenseRecord::new(category, amount, mode, date).with_note(note))
            })
            .collect();
        Self::from_records(records)
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&ExpenseRecord> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Returns a new snapshot with `record` placed first.
    pub fn add(&self, record: ExpenseRecord) -> Self {
        let mut records = Vec::with_capacity(self.records.len() + 1);
        records.push(record);
        records.extend(self.records.iter().cloned());
        Self::from_records(records)
    }

    /// Returns a new snapshot without the record identified by `id`.
    pub fn remove(&self, id: Uuid) -> Result<Self> {
        if self.get(id).is_none() {
            return Err(InsightError::ExpenseNotFound(id));
        }
        let records = self
            .records
            .iter()
            .filter(|record| record.id() != id)
            .cloned()
            .collect();
        Ok(Self::from_records(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: ExpenseCategory, amount: f64) -> ExpenseRecord {
        let date = NaiveDate::from_ymd_opt(2025, 11, 1).unwrap();
        ExpenseRecord::new(category, amount, PaymentMode::Cash, date)
    }

    #[test]
    fn add_prepends_and_keeps_previous_snapshot() {
        let before = ExpenseLedger::new().add(record(ExpenseCategory::Food, 100.0));
        let after = before.add(record(ExpenseCategory::Bills, 40.0));

        assert_eq!(before.len(), 1);
        assert_eq!(after.len(), 2);
        assert_eq!(after.records()[0].category, ExpenseCategory::Bills);
        assert_eq!(after.records()[1].category, ExpenseCategory::Food);
    }

    #[test]
    fn remove_by_id() {
        let food = record(ExpenseCategory::Food, 100.0);
        let food_id = food.id;
        let ledger = ExpenseLedger::new()
            .add(food)
            .add(record(ExpenseCategory::Transport, 20.0));

        let trimmed = ledger.remove(food_id).expect("remove food");
        assert_eq!(trimmed.len(), 1);
        assert!(trimmed.get(food_id).is_none());
        assert!(ledger.get(food_id).is_some());
    }

    #[test]
    fn remove_unknown_id_fails() {
        let ledger = ExpenseLedger::sample();
        let missing = Uuid::new_v4();
        let err = ledger.remove(missing).expect_err("unknown id");
        assert!(matches!(err, InsightError::ExpenseNotFound(id) if id == missing));
    }

    #[test]
    fn sample_is_newest_first() {
        let ledger = ExpenseLedger::sample();
        assert_eq!(ledger.len(), 3);
        let dates: Vec<_> = ledger.records().iter().map(|r| r.date).collect();
        assert!(dates.windows(2).all(|pair| pair[0] >= pair[1]));
    }
}
