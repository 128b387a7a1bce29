//! # social-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use dto::{
    ApiResponse, CommentDto, CommentView, CreateCommentRequest, HealthResponse, PostContentRequest,
    PostCounts, PostView, ReactRequest, ReactionDetail, ReactionStateResponse, ReportPostRequest,
    ReportView, UpdateCommentRequest, UserShort,
};
pub use services::{
    CommentPolicy, CommentService, PostService, ReactionService, ReportService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, UserService,
};
