//! Service context - dependency container for services
//!
//! Holds the repositories, the event publisher, and the settings services need.
//! Everything is held behind a trait object, so the same services run against
//! PostgreSQL and Redis in production and against in-memory fakes in tests.

use std::sync::Arc;

use social_common::auth::JwtService;
use social_common::CommentConfig;
use social_core::traits::{
    CommentRepository, EventPublisher, PostLikeRepository, PostRepository, ReactionRepository,
    ReportRepository, UserRepository,
};

use super::error::{ServiceError, ServiceResult};

/// How comment creation treats a parent id it cannot resolve
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommentPolicy {
    /// Fail with NotFound instead of posting the reply as a root comment
    pub strict_parent_lookup: bool,
}

impl From<&CommentConfig> for CommentPolicy {
    fn from(config: &CommentConfig) -> Self {
        Self {
            strict_parent_lookup: config.strict_parent_lookup,
        }
    }
}

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    post_repo: Arc<dyn PostRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,
    post_like_repo: Arc<dyn PostLikeRepository>,
    report_repo: Arc<dyn ReportRepository>,

    // Real-time notifier
    publisher: Arc<dyn EventPublisher>,

    jwt_service: Arc<JwtService>,
    comment_policy: CommentPolicy,
}

impl ServiceContext {
    /// Start building a context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Repositories ===

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    pub fn post_like_repo(&self) -> &dyn PostLikeRepository {
        self.post_like_repo.as_ref()
    }

    pub fn report_repo(&self) -> &dyn ReportRepository {
        self.report_repo.as_ref()
    }

    // === Pub/Sub ===

    /// Get the real-time event publisher
    pub fn publisher(&self) -> &dyn EventPublisher {
        self.publisher.as_ref()
    }

    // === Settings ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    pub fn comment_policy(&self) -> CommentPolicy {
        self.comment_policy
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("publisher", &"dyn EventPublisher")
            .field("comment_policy", &self.comment_policy)
            .finish_non_exhaustive()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    post_repo: Option<Arc<dyn PostRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    post_like_repo: Option<Arc<dyn PostLikeRepository>>,
    report_repo: Option<Arc<dyn ReportRepository>>,
    publisher: Option<Arc<dyn EventPublisher>>,
    jwt_service: Option<Arc<JwtService>>,
    comment_policy: CommentPolicy,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    pub fn post_like_repo(mut self, repo: Arc<dyn PostLikeRepository>) -> Self {
        self.post_like_repo = Some(repo);
        self
    }

    pub fn report_repo(mut self, repo: Arc<dyn ReportRepository>) -> Self {
        self.report_repo = Some(repo);
        self
    }

    pub fn publisher(mut self, publisher: Arc<dyn EventPublisher>) -> Self {
        self.publisher = Some(publisher);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn comment_policy(mut self, policy: CommentPolicy) -> Self {
        self.comment_policy = policy;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext {
            user_repo: self
                .user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            post_repo: self
                .post_repo
                .ok_or_else(|| ServiceError::validation("post_repo is required"))?,
            comment_repo: self
                .comment_repo
                .ok_or_else(|| ServiceError::validation("comment_repo is required"))?,
            reaction_repo: self
                .reaction_repo
                .ok_or_else(|| ServiceError::validation("reaction_repo is required"))?,
            post_like_repo: self
                .post_like_repo
                .ok_or_else(|| ServiceError::validation("post_like_repo is required"))?,
            report_repo: self
                .report_repo
                .ok_or_else(|| ServiceError::validation("report_repo is required"))?,
            publisher: self
                .publisher
                .ok_or_else(|| ServiceError::validation("publisher is required"))?,
            jwt_service: self
                .jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            comment_policy: self.comment_policy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_reports_missing_dependency() {
        let err = ServiceContextBuilder::new().build().unwrap_err();
        assert!(err.to_string().contains("user_repo is required"));
    }

    #[test]
    fn test_policy_from_config() {
        let config = CommentConfig {
            strict_parent_lookup: true,
        };
        assert!(CommentPolicy::from(&config).strict_parent_lookup);
        assert!(!CommentPolicy::default().strict_parent_lookup);
    }
}
