//! Route definitions
//!
//! All API routes organized by resource and mounted under /api/v1.

use axum::{
    routing::{get, patch, post, put},
    Router,
};

use crate::handlers::{comments, health, posts, reactions, reports, users};
use crate::state::AppState;

/// Create the main API router (health is mounted separately so it skips rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health::health_check))
}

fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(user_routes())
        .merge(post_routes())
        .merge(comment_routes())
        .merge(report_routes())
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users))
        .route("/users/@me", get(users::get_current_user))
        .route("/users/:username", get(users::get_user))
}

fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(posts::list_posts).post(posts::create_post))
        .route("/posts/@me", get(posts::list_my_posts))
        .route(
            "/posts/:post_id",
            get(posts::get_post)
                .patch(posts::update_post)
                .delete(posts::delete_post),
        )
        .route("/posts/:post_id/counts", get(posts::get_post_counts))
        .route("/posts/:post_id/like", put(posts::toggle_like))
        .route(
            "/posts/:post_id/reactions",
            put(reactions::react_to_post).get(reactions::get_post_reactions),
        )
        .route("/posts/:post_id/reports", post(reports::report_post))
}

fn comment_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/posts/:post_id/comments",
            get(comments::get_comment_tree).post(comments::create_comment),
        )
        .route("/posts/:post_id/comments/flat", get(comments::get_flat_comments))
        .route(
            "/posts/:post_id/comments/:comment_id",
            patch(comments::update_comment).delete(comments::delete_comment),
        )
        .route(
            "/comments/:comment_id/reactions",
            put(reactions::react_to_comment).get(reactions::get_comment_reactions),
        )
}

fn report_routes() -> Router<AppState> {
    Router::new().route("/reports", get(reports::list_reports))
}
