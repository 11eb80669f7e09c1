pub mod common;
pub mod expense;
pub mod lesson;
pub mod metrics;
pub mod profile;
pub mod recommendation;

pub use common::{Amounted, Displayable, Identifiable, Language, LocalizedText};
pub use expense::{ExpenseCategory, ExpenseRecord, PaymentMode};
pub use lesson::{Lesson, QuizQuestion};
pub use metrics::{CategoryTotals, DerivedMetrics, Percentage};
pub use profile::{IncomeRange, UserProfile};
pub use recommendation::{Recommendation, RecommendationKind, Severity};
