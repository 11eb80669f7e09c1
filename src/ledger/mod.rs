//! Session-scoped stores: the expense ledger and the profile store.

pub mod expense_ledger;
pub mod profile_store;

pub use expense_ledger::ExpenseLedger;
pub use profile_store::ProfileStore;
