pub mod auth;
pub mod properties;
pub mod user;
