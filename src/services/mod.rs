pub mod achievement_service;
pub mod match_lifecycle_service;
pub mod scheduler;
pub mod scoring_service;

pub use achievement_service::AchievementService;
pub use match_lifecycle_service::MatchLifecycleService;
pub use scheduler::SchedulerService;
pub use scoring_service::ScoringService;
