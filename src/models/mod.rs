pub mod achievement;
pub mod common;
pub mod league;
pub mod matches;
pub mod prediction;
pub mod social;
pub mod standings;
pub mod user;
