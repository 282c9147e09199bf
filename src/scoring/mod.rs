pub mod achievements;
pub mod points;
