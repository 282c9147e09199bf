pub mod achievement_handler;
pub mod auth_handler;
pub mod catalog_handler;
pub mod match_handler;
pub mod prediction_handler;
pub mod social_handler;
pub mod standings_handler;
pub mod user_handler;
