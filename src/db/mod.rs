pub mod achievements;
pub mod catalog;
pub mod matches;
pub mod predictions;
pub mod social;
pub mod standings;
pub mod users;
