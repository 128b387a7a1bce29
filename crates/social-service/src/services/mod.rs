//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod comment;
pub mod context;
pub mod error;
pub mod post;
pub mod reaction;
pub mod report;
pub mod user;

// Re-export all services for convenience
pub use comment::CommentService;
pub use context::{CommentPolicy, ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use post::PostService;
pub use reaction::ReactionService;
pub use report::ReportService;
pub use user::UserService;
