//! Engine configuration: display language, default savings goal, rule
//! thresholds and quiz pass mark. Read-only; nothing is written back to disk.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::{ConfigManager, CONFIG_ENV_VAR};
pub use model::{InsightConfig, RuleThresholds, DEFAULT_SAVINGS_GOAL};
