pub mod jwt;

pub use jwt::{issue_token_pair, verify_refresh_token, Claims, TokenType};
