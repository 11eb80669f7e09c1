pub mod goal_service;
pub mod metrics_service;
pub mod recommendation_service;


pub use goal_service::{GoalStatus, GoalTier};
pub use metrics_service::MetricsService;
pub use recommendation_service::{RecommendationService, RuleContext, RULES};
