//! In-memory doubles for the repository and publisher ports
//!
//! Compiled for unit tests and behind the `testing` feature, so the
//! integration suite can run the whole HTTP stack without PostgreSQL or Redis.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;

use social_common::auth::JwtService;
use social_core::entities::{
    Comment, NewComment, NewPost, NewReaction, Post, PostLike, PostReport, PostWithStats,
    ReactionLog, User,
};
use social_core::error::DomainError;
use social_core::events::DomainEvent;
use social_core::traits::{
    CommentRepository, EventPublisher, PostLikeRepository, PostRepository, ReactionRepository,
    RepoResult, ReportRepository, UserRepository,
};
use social_core::value_objects::{ReactTarget, ReactionType};

use crate::services::{CommentPolicy, ServiceContext};

/// Secret the in-memory context signs tokens with
pub const TEST_JWT_SECRET: &str = "in-memory-test-secret";

#[derive(Default)]
struct Tables {
    next_id: i64,
    users: Vec<User>,
    posts: Vec<Post>,
    comments: Vec<Comment>,
    reactions: Vec<ReactionLog>,
    likes: Vec<PostLike>,
    reports: Vec<PostReport>,
    fail_writes: bool,
    fail_thread_reads: bool,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn check_writable(&self) -> RepoResult<()> {
        if self.fail_writes {
            return Err(DomainError::DatabaseError("storage unavailable".to_string()));
        }
        Ok(())
    }

    fn with_stats(&self, post: &Post) -> PostWithStats {
        let reaction_count = self
            .reactions
            .iter()
            .filter(|r| r.target == ReactTarget::Post && r.target_id == post.id)
            .count();
        let comment_count = self.comments.iter().filter(|c| c.post_id == post.id).count();
        PostWithStats {
            post: post.clone(),
            reaction_count: reaction_count as i64,
            comment_count: comment_count as i64,
        }
    }

    fn newest_first(&self, mut posts: Vec<PostWithStats>) -> Vec<PostWithStats> {
        posts.sort_by(|a, b| {
            b.post
                .created_at
                .cmp(&a.post.created_at)
                .then(b.post.id.cmp(&a.post.id))
        });
        posts
    }
}

/// Shared in-memory storage implementing every repository port
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provision a user the way the account service would
    pub fn add_user(&self, username: &str, known_as: Option<&str>) -> i64 {
        let mut tables = self.tables.lock();
        let id = tables.next_id();
        let mut user = User::new(id, username.to_string());
        user.known_as = known_as.map(str::to_string);
        tables.users.push(user);
        id
    }

    /// Make every write fail as if the database were down
    pub fn fail_writes(&self, fail: bool) {
        self.tables.lock().fail_writes = fail;
    }

    /// Make loading a post's comments fail while everything else works
    pub fn fail_thread_reads(&self, fail: bool) {
        self.tables.lock().fail_thread_reads = fail;
    }

    pub fn comments(&self) -> Vec<Comment> {
        self.tables.lock().comments.clone()
    }

    pub fn reactions(&self) -> Vec<ReactionLog> {
        self.tables.lock().reactions.clone()
    }

    pub fn reports(&self) -> Vec<PostReport> {
        self.tables.lock().reports.clone()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>> {
        Ok(self.tables.lock().users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        Ok(self
            .tables
            .lock()
            .users
            .iter()
            .find(|u| u.username.eq_ignore_ascii_case(username))
            .cloned())
    }

    async fn find_many(&self, ids: &[i64]) -> RepoResult<Vec<User>> {
        let wanted: HashSet<i64> = ids.iter().copied().collect();
        Ok(self
            .tables
            .lock()
            .users
            .iter()
            .filter(|u| wanted.contains(&u.id))
            .cloned()
            .collect())
    }

    async fn list(&self) -> RepoResult<Vec<User>> {
        Ok(self.tables.lock().users.clone())
    }
}

#[async_trait]
impl PostRepository for InMemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Post>> {
        Ok(self.tables.lock().posts.iter().find(|p| p.id == id).cloned())
    }

    async fn find_with_stats(&self, id: i64) -> RepoResult<Option<PostWithStats>> {
        let tables = self.tables.lock();
        Ok(tables
            .posts
            .iter()
            .find(|p| p.id == id)
            .map(|p| tables.with_stats(p)))
    }

    async fn list_with_stats(&self) -> RepoResult<Vec<PostWithStats>> {
        let tables = self.tables.lock();
        let posts = tables.posts.iter().map(|p| tables.with_stats(p)).collect();
        Ok(tables.newest_first(posts))
    }

    async fn list_with_stats_by_user(&self, user_id: i64) -> RepoResult<Vec<PostWithStats>> {
        let tables = self.tables.lock();
        let posts = tables
            .posts
            .iter()
            .filter(|p| p.user_id == user_id)
            .map(|p| tables.with_stats(p))
            .collect();
        Ok(tables.newest_first(posts))
    }

    async fn create(&self, post: &NewPost) -> RepoResult<Post> {
        let mut tables = self.tables.lock();
        tables.check_writable()?;
        let now = Utc::now();
        let created = Post {
            id: tables.next_id(),
            user_id: post.user_id,
            content: post.content.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.posts.push(created.clone());
        Ok(created)
    }

    async fn update(&self, post: &Post) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        tables.check_writable()?;
        let stored = tables
            .posts
            .iter_mut()
            .find(|p| p.id == post.id)
            .ok_or(DomainError::PostNotFound(post.id))?;
        *stored = post.clone();
        Ok(())
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        tables.check_writable()?;
        if !tables.posts.iter().any(|p| p.id == id) {
            return Err(DomainError::PostNotFound(id));
        }
        let comment_ids: HashSet<i64> = tables
            .comments
            .iter()
            .filter(|c| c.post_id == id)
            .map(|c| c.id)
            .collect();
        tables.reactions.retain(|r| match r.target {
            ReactTarget::Post => r.target_id != id,
            ReactTarget::Comment => !comment_ids.contains(&r.target_id),
        });
        tables.comments.retain(|c| c.post_id != id);
        tables.likes.retain(|l| l.post_id != id);
        tables.reports.retain(|r| r.post_id != id);
        tables.posts.retain(|p| p.id != id);
        Ok(())
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Comment>> {
        Ok(self.tables.lock().comments.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_post(&self, post_id: i64) -> RepoResult<Vec<Comment>> {
        let tables = self.tables.lock();
        if tables.fail_thread_reads {
            return Err(DomainError::DatabaseError("comment read failed".to_string()));
        }
        let mut comments: Vec<Comment> = tables
            .comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect();
        comments.sort_by_key(|c| c.id);
        for comment in &mut comments {
            comment.reaction_logs = tables
                .reactions
                .iter()
                .filter(|r| r.target == ReactTarget::Comment && r.target_id == comment.id)
                .cloned()
                .collect();
        }
        Ok(comments)
    }

    async fn count_by_post(&self, post_id: i64) -> RepoResult<i64> {
        let tables = self.tables.lock();
        Ok(tables.comments.iter().filter(|c| c.post_id == post_id).count() as i64)
    }

    async fn create(&self, comment: &NewComment) -> RepoResult<i64> {
        let mut tables = self.tables.lock();
        tables.check_writable()?;
        if !tables.posts.iter().any(|p| p.id == comment.post_id) {
            return Err(DomainError::PostNotFound(comment.post_id));
        }
        let now = Utc::now();
        let id = tables.next_id();
        tables.comments.push(Comment {
            id,
            post_id: comment.post_id,
            parent_id: comment.parent_id,
            level: comment.level,
            user_id: comment.user_id,
            content: comment.content.clone(),
            created_at: now,
            updated_at: now,
            reaction_logs: Vec::new(),
        });
        Ok(id)
    }

    async fn update(&self, comment: &Comment) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        tables.check_writable()?;
        let stored = tables
            .comments
            .iter_mut()
            .find(|c| c.id == comment.id)
            .ok_or(DomainError::CommentNotFound(comment.id))?;
        stored.content = comment.content.clone();
        stored.updated_at = comment.updated_at;
        Ok(())
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        tables.check_writable()?;
        let root = tables
            .comments
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(DomainError::CommentNotFound(id))?;

        let mut doomed = HashSet::from([root.id]);
        loop {
            let before = doomed.len();
            for comment in &tables.comments {
                if comment.post_id == root.post_id && doomed.contains(&comment.parent_id) {
                    doomed.insert(comment.id);
                }
            }
            if doomed.len() == before {
                break;
            }
        }

        tables
            .reactions
            .retain(|r| !(r.target == ReactTarget::Comment && doomed.contains(&r.target_id)));
        tables.comments.retain(|c| !doomed.contains(&c.id));
        Ok(())
    }
}

#[async_trait]
impl ReactionRepository for InMemoryStore {
    async fn find(
        &self,
        user_id: i64,
        target_id: i64,
        target: ReactTarget,
    ) -> RepoResult<Option<ReactionLog>> {
        Ok(self
            .tables
            .lock()
            .reactions
            .iter()
            .find(|r| r.user_id == user_id && r.target_id == target_id && r.target == target)
            .cloned())
    }

    async fn find_by_target(
        &self,
        target: ReactTarget,
        target_id: i64,
    ) -> RepoResult<Vec<ReactionLog>> {
        Ok(self
            .tables
            .lock()
            .reactions
            .iter()
            .filter(|r| r.target == target && r.target_id == target_id)
            .cloned()
            .collect())
    }

    async fn create(&self, reaction: &NewReaction) -> RepoResult<ReactionLog> {
        let mut tables = self.tables.lock();
        tables.check_writable()?;
        let taken = tables.reactions.iter().any(|r| {
            r.user_id == reaction.user_id
                && r.target_id == reaction.target_id
                && r.target == reaction.target
        });
        if taken {
            return Err(DomainError::ReactionAlreadyExists);
        }
        let log = ReactionLog {
            id: tables.next_id(),
            user_id: reaction.user_id,
            target_id: reaction.target_id,
            target: reaction.target,
            reaction_type: reaction.reaction_type,
            created_at: Utc::now(),
        };
        tables.reactions.push(log.clone());
        Ok(log)
    }

    async fn update_type(&self, id: i64, reaction_type: ReactionType) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        tables.check_writable()?;
        if let Some(log) = tables.reactions.iter_mut().find(|r| r.id == id) {
            log.reaction_type = reaction_type;
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        tables.check_writable()?;
        tables.reactions.retain(|r| r.id != id);
        Ok(())
    }
}

#[async_trait]
impl PostLikeRepository for InMemoryStore {
    async fn find(&self, user_id: i64, post_id: i64) -> RepoResult<Option<PostLike>> {
        Ok(self
            .tables
            .lock()
            .likes
            .iter()
            .find(|l| l.user_id == user_id && l.post_id == post_id)
            .cloned())
    }

    async fn create(&self, user_id: i64, post_id: i64) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        tables.check_writable()?;
        if !tables.posts.iter().any(|p| p.id == post_id) {
            return Err(DomainError::PostNotFound(post_id));
        }
        if !tables
            .likes
            .iter()
            .any(|l| l.user_id == user_id && l.post_id == post_id)
        {
            tables.likes.push(PostLike {
                user_id,
                post_id,
                created_at: Utc::now(),
            });
        }
        Ok(())
    }

    async fn delete(&self, user_id: i64, post_id: i64) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        tables.check_writable()?;
        tables
            .likes
            .retain(|l| !(l.user_id == user_id && l.post_id == post_id));
        Ok(())
    }

    async fn count_by_post(&self, post_id: i64) -> RepoResult<i64> {
        let tables = self.tables.lock();
        Ok(tables.likes.iter().filter(|l| l.post_id == post_id).count() as i64)
    }
}

#[async_trait]
impl ReportRepository for InMemoryStore {
    async fn find(&self, user_id: i64, post_id: i64) -> RepoResult<Option<PostReport>> {
        Ok(self
            .tables
            .lock()
            .reports
            .iter()
            .find(|r| r.user_id == user_id && r.post_id == post_id)
            .cloned())
    }

    async fn create(&self, report: &PostReport) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        tables.check_writable()?;
        if !tables.posts.iter().any(|p| p.id == report.post_id) {
            return Err(DomainError::PostNotFound(report.post_id));
        }
        if tables
            .reports
            .iter()
            .any(|r| r.user_id == report.user_id && r.post_id == report.post_id)
        {
            return Err(DomainError::DuplicateEntry("post report".to_string()));
        }
        tables.reports.push(report.clone());
        Ok(())
    }

    async fn update(&self, report: &PostReport) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        tables.check_writable()?;
        let stored = tables
            .reports
            .iter_mut()
            .find(|r| r.user_id == report.user_id && r.post_id == report.post_id)
            .ok_or(DomainError::PostNotFound(report.post_id))?;
        stored.reason = report.reason;
        stored.description = report.description.clone();
        Ok(())
    }

    async fn list(&self) -> RepoResult<Vec<PostReport>> {
        let mut reports = self.tables.lock().reports.clone();
        reports.sort_by(|a, b| {
            b.report_date
                .cmp(&a.report_date)
                .then(b.post_id.cmp(&a.post_id))
        });
        Ok(reports)
    }
}

/// Publisher that keeps every event it is handed
#[derive(Clone, Default)]
pub struct RecordingPublisher {
    events: Arc<Mutex<Vec<DomainEvent>>>,
    failing: Arc<Mutex<bool>>,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every publish after recording it
    pub fn fail(&self, failing: bool) {
        *self.failing.lock() = failing;
    }

    pub fn events(&self) -> Vec<DomainEvent> {
        self.events.lock().clone()
    }
}

#[async_trait]
impl EventPublisher for RecordingPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), DomainError> {
        self.events.lock().push(event.clone());
        if *self.failing.lock() {
            return Err(DomainError::CacheError("publisher offline".to_string()));
        }
        Ok(())
    }
}

/// Service context wired to a fresh store and publisher
pub fn in_memory_context(
    policy: CommentPolicy,
) -> (ServiceContext, InMemoryStore, RecordingPublisher) {
    let store = InMemoryStore::new();
    let publisher = RecordingPublisher::new();
    let ctx = context_for(&store, &publisher, policy);
    (ctx, store, publisher)
}

/// Service context over an existing store and publisher
pub fn context_for(
    store: &InMemoryStore,
    publisher: &RecordingPublisher,
    policy: CommentPolicy,
) -> ServiceContext {
    let shared = Arc::new(store.clone());
    ServiceContext::builder()
        .user_repo(shared.clone())
        .post_repo(shared.clone())
        .comment_repo(shared.clone())
        .reaction_repo(shared.clone())
        .post_like_repo(shared.clone())
        .report_repo(shared)
        .publisher(Arc::new(publisher.clone()))
        .jwt_service(Arc::new(JwtService::new(TEST_JWT_SECRET, 3600)))
        .comment_policy(policy)
        .build()
        .expect("every dependency is supplied")
}
