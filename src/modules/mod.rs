pub mod auth;
pub mod comments;
pub mod common;
pub mod posts;
pub mod users;
