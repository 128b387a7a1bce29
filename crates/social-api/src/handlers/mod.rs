//! HTTP request handlers organized by resource

pub mod comments;
pub mod health;
pub mod posts;
pub mod reactions;
pub mod reports;
pub mod users;
