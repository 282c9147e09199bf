pub mod admin;
pub mod auth;

pub use admin::AdminMiddleware;
pub use auth::AuthMiddleware;
