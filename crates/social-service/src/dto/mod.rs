//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateCommentRequest, PostContentRequest, ReactRequest, ReportPostRequest,
    UpdateCommentRequest,
};

pub use responses::{
    ApiResponse, CommentDto, HealthResponse, PostCounts, PostView, ReactionDetail,
    ReactionStateResponse, ReportView, UserShort,
};

/// Threaded comment as rendered to clients
pub use social_core::thread::CommentNode as CommentView;
