pub mod auth;
pub mod messages;
