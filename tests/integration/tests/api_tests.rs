//! API Integration Tests
//!
//! Each test serves the full router on a local port over in-memory storage.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_data, assert_json, assert_status, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use social_core::DomainEvent;
use social_service::CommentPolicy;

async fn create_post(server: &TestServer, token: &str, content: &str) -> PostBody {
    let response = server
        .post_auth("/api/v1/posts", token, &ContentBody::new(content))
        .await
        .unwrap();
    assert_data(response, StatusCode::CREATED).await.unwrap()
}

async fn comment(server: &TestServer, token: &str, post_id: i64, body: &CommentBody) -> Vec<CommentNode> {
    let response = server
        .post_auth(&format!("/api/v1/posts/{post_id}/comments"), token, body)
        .await
        .unwrap();
    assert_data(response, StatusCode::CREATED).await.unwrap()
}

async fn flat_comments(server: &TestServer, token: &str, post_id: i64) -> Vec<FlatCommentBody> {
    let response = server
        .get_auth(&format!("/api/v1/posts/{post_id}/comments/flat"), token)
        .await
        .unwrap();
    assert_data(response, StatusCode::OK).await.unwrap()
}

// ============================================================================
// Health and authentication
// ============================================================================

#[tokio::test]
async fn test_health_check_needs_no_token() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/health").await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/api/v1/posts").await.unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.error.code, "MISSING_AUTHORIZATION");
}

#[tokio::test]
async fn test_forged_token_is_unauthorized() {
    let server = TestServer::start().await.unwrap();

    let response = server.get_auth("/api/v1/posts", "not-a-jwt").await.unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.error.code, "INVALID_TOKEN");
}

#[tokio::test]
async fn test_response_carries_request_id() {
    let server = TestServer::start().await.unwrap();
    let token = server.login("linh", None).unwrap();

    let response = server.get_auth("/api/v1/users/@me", &token).await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Users
// ============================================================================

#[tokio::test]
async fn test_user_profiles() {
    let server = TestServer::start().await.unwrap();
    let token = server.login("linh", Some("Linh")).unwrap();
    server.store.add_user("bao", None);

    let response = server.get_auth("/api/v1/users/@me", &token).await.unwrap();
    let me: UserShortBody = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.full_name, "linh");
    assert_eq!(me.known_as, "Linh");

    let response = server.get_auth("/api/v1/users/bao", &token).await.unwrap();
    let bao: UserShortBody = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(bao.known_as, "");
    assert_eq!(bao.image, "");

    let response = server.get_auth("/api/v1/users", &token).await.unwrap();
    let users: Vec<UserShortBody> = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(users.len(), 2);

    let response = server.get_auth("/api/v1/users/nobody", &token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_token_for_unknown_user_is_not_found() {
    let server = TestServer::start().await.unwrap();
    let token = server.token_for("ghost").unwrap();

    let response = server
        .post_auth("/api/v1/posts", &token, &ContentBody::new("hello"))
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "NOT_FOUND");
}

// ============================================================================
// Posts
// ============================================================================

#[tokio::test]
async fn test_create_and_fetch_post() {
    let server = TestServer::start().await.unwrap();
    let token = server.login("linh", Some("Linh")).unwrap();

    let post = create_post(&server, &token, "Anyone up for a climb?").await;
    assert_eq!(post.content, "Anyone up for a climb?");
    assert_eq!(post.like_number, 0);
    assert_eq!(post.comment_number, 0);
    assert_eq!(post.user_short.full_name, "linh");

    let response = server
        .get_auth(&format!("/api/v1/posts/{}", post.id), &token)
        .await
        .unwrap();
    let fetched: PostBody = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.id, post.id);
    assert_eq!(fetched.created_at, post.created_at);
}

#[tokio::test]
async fn test_post_lists() {
    let server = TestServer::start().await.unwrap();
    let linh = server.login("linh", None).unwrap();
    let bao = server.login("bao", None).unwrap();

    let first = create_post(&server, &linh, "first").await;
    let second = create_post(&server, &bao, "second").await;

    let response = server.get_auth("/api/v1/posts", &linh).await.unwrap();
    let all: Vec<PostBody> = assert_data(response, StatusCode::OK).await.unwrap();
    let ids: Vec<i64> = all.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    let response = server.get_auth("/api/v1/posts/@me", &linh).await.unwrap();
    let mine: Vec<PostBody> = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, first.id);
}

#[tokio::test]
async fn test_only_author_edits_post() {
    let server = TestServer::start().await.unwrap();
    let linh = server.login("linh", None).unwrap();
    let bao = server.login("bao", None).unwrap();
    let post = create_post(&server, &linh, "draft").await;
    let path = format!("/api/v1/posts/{}", post.id);

    let response = server
        .patch_auth(&path, &bao, &ContentBody::new("hijacked"))
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(body.error.code, "PERMISSION_DENIED");

    let response = server
        .patch_auth(&path, &linh, &ContentBody::new("final"))
        .await
        .unwrap();
    let updated: PostBody = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.content, "final");
    assert!(updated.updated_at >= post.updated_at);

    let response = server.delete_auth(&path, &bao).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_delete_post_cascades() {
    let server = TestServer::start().await.unwrap();
    let token = server.login("linh", None).unwrap();
    let post = create_post(&server, &token, "short lived").await;
    let tree = comment(&server, &token, post.id, &CommentBody::root("first!")).await;
    server
        .put_auth(
            &format!("/api/v1/comments/{}/reactions", tree[0].id),
            &token,
            &ReactBody::new("Like"),
        )
        .await
        .unwrap();

    let path = format!("/api/v1/posts/{}", post.id);
    let response = server.delete_auth(&path, &token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get_auth(&path, &token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
    assert!(server.store.comments().is_empty());
    assert!(server.store.reactions().is_empty());

    let response = server.delete_auth(&path, &token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_post_content_is_validated() {
    let server = TestServer::start().await.unwrap();
    let token = server.login("linh", None).unwrap();

    let response = server
        .post_auth("/api/v1/posts", &token, &ContentBody::new(""))
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "VALIDATION_ERROR");
    assert!(body.error.details.is_some());

    let response = server
        .post_auth("/api/v1/posts", &token, &ContentBody::new("x".repeat(2001)))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_non_numeric_post_id_is_rejected() {
    let server = TestServer::start().await.unwrap();
    let token = server.login("linh", None).unwrap();

    let response = server.get_auth("/api/v1/posts/abc", &token).await.unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "INVALID_PATH_PARAMETER");
}

#[tokio::test]
async fn test_toggle_like_and_counts() {
    let server = TestServer::start().await.unwrap();
    let token = server.login("linh", None).unwrap();
    let post = create_post(&server, &token, "like me").await;
    let like_path = format!("/api/v1/posts/{}/like", post.id);
    let counts_path = format!("/api/v1/posts/{}/counts", post.id);

    let response = server.put_empty(&like_path, &token).await.unwrap();
    let feed: Vec<PostBody> = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(feed.len(), 1);

    let response = server.get_auth(&counts_path, &token).await.unwrap();
    let counts: CountsBody = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(counts.likes, 1);
    assert_eq!(counts.comments, 0);

    server.put_empty(&like_path, &token).await.unwrap();
    let response = server.get_auth(&counts_path, &token).await.unwrap();
    let counts: CountsBody = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(counts.likes, 0);

    let response = server.put_empty("/api/v1/posts/9999/like", &token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Comments
// ============================================================================

#[tokio::test]
async fn test_deep_reply_is_reparented_under_grandparent() {
    let server = TestServer::start().await.unwrap();
    let token = server.login("linh", None).unwrap();
    let post = create_post(&server, &token, "thread").await;

    let tree = comment(&server, &token, post.id, &CommentBody::root("C1")).await;
    let c1 = tree[0].id;
    let tree = comment(&server, &token, post.id, &CommentBody::reply("C2", c1)).await;
    let c2 = tree[0].descendants[0].id;
    let tree = comment(&server, &token, post.id, &CommentBody::reply("C3", c2)).await;
    let c3 = tree[0].descendants[0].descendants[0].id;
    let tree = comment(&server, &token, post.id, &CommentBody::reply("C4", c3)).await;

    assert_eq!(tree.len(), 1);
    let level_two = &tree[0].descendants;
    assert_eq!(level_two.len(), 1);
    let level_three: Vec<&str> = level_two[0]
        .descendants
        .iter()
        .map(|n| n.content.as_str())
        .collect();
    assert_eq!(level_three, vec!["C3", "C4"]);
    assert!(level_two[0].descendants.iter().all(|n| n.descendants.is_empty()));

    let c4 = flat_comments(&server, &token, post.id)
        .await
        .into_iter()
        .find(|c| c.content == "C4")
        .unwrap();
    assert_eq!(c4.parent_id, c2);
    assert_eq!(c4.level, 3);
    assert_eq!(c4.post_id, post.id);
}

#[tokio::test]
async fn test_tree_keeps_creation_order() {
    let server = TestServer::start().await.unwrap();
    let token = server.login("linh", None).unwrap();
    let post = create_post(&server, &token, "thread").await;

    let tree = comment(&server, &token, post.id, &CommentBody::root("a")).await;
    let a = tree[0].id;
    comment(&server, &token, post.id, &CommentBody::root("b")).await;
    comment(&server, &token, post.id, &CommentBody::reply("a.1", a)).await;
    comment(&server, &token, post.id, &CommentBody::reply("a.2", a)).await;

    let response = server
        .get_auth(&format!("/api/v1/posts/{}/comments", post.id), &token)
        .await
        .unwrap();
    let tree: Vec<CommentNode> = assert_data(response, StatusCode::OK).await.unwrap();

    let shape: Vec<usize> = flatten(&tree).into_iter().map(|(_, depth)| depth).collect();
    assert_eq!(shape, vec![1, 2, 2, 1]);
    let replies: Vec<&str> = tree[0].descendants.iter().map(|n| n.content.as_str()).collect();
    assert_eq!(replies, vec!["a.1", "a.2"]);
    assert_eq!(tree[1].content, "b");
}

#[tokio::test]
async fn test_empty_thread() {
    let server = TestServer::start().await.unwrap();
    let token = server.login("linh", None).unwrap();
    let post = create_post(&server, &token, "quiet").await;

    let response = server
        .get_auth(&format!("/api/v1/posts/{}/comments", post.id), &token)
        .await
        .unwrap();
    let tree: Vec<CommentNode> = assert_data(response, StatusCode::OK).await.unwrap();
    assert!(tree.is_empty());

    let response = server
        .get_auth("/api/v1/posts/9999/comments", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_unknown_parent_falls_back_to_root() {
    let server = TestServer::start().await.unwrap();
    let token = server.login("linh", None).unwrap();
    let post = create_post(&server, &token, "thread").await;

    let tree = comment(&server, &token, post.id, &CommentBody::reply("orphan", 4242)).await;
    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].parent_comment_id, 0);

    let stored = server.store.comments();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].level, 1);
}

#[tokio::test]
async fn test_strict_mode_rejects_unknown_parent() {
    let server = TestServer::start_with_policy(CommentPolicy {
        strict_parent_lookup: true,
    })
    .await
    .unwrap();
    let token = server.login("linh", None).unwrap();
    let post = create_post(&server, &token, "thread").await;

    let response = server
        .post_auth(
            &format!("/api/v1/posts/{}/comments", post.id),
            &token,
            &CommentBody::reply("orphan", 4242),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
    assert!(server.store.comments().is_empty());
    assert!(server.publisher.events().is_empty());
}

#[tokio::test]
async fn test_comment_on_missing_post_changes_nothing() {
    let server = TestServer::start().await.unwrap();
    let token = server.login("linh", None).unwrap();

    let response = server
        .post_auth("/api/v1/posts/9999/comments", &token, &CommentBody::root("hello?"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
    assert!(server.store.comments().is_empty());
    assert!(server.publisher.events().is_empty());
}

#[tokio::test]
async fn test_comment_changes_are_broadcast() {
    let server = TestServer::start().await.unwrap();
    let token = server.login("linh", None).unwrap();
    let post = create_post(&server, &token, "thread").await;

    let tree = comment(&server, &token, post.id, &CommentBody::root("hi")).await;

    let events = server.publisher.events();
    assert_eq!(events.len(), 1);
    let DomainEvent::ReceiveComment(event) = &events[0];
    assert_eq!(event.post_id, post.id);
    assert_eq!(event.comments, tree);
}

#[tokio::test]
async fn test_broadcast_failure_does_not_fail_request() {
    let server = TestServer::start().await.unwrap();
    let token = server.login("linh", None).unwrap();
    let post = create_post(&server, &token, "thread").await;
    server.publisher.fail(true);

    let tree = comment(&server, &token, post.id, &CommentBody::root("still saved")).await;
    assert_eq!(tree.len(), 1);
    assert_eq!(server.store.comments().len(), 1);
}

#[tokio::test]
async fn test_storage_failure_reports_fixed_message() {
    let server = TestServer::start().await.unwrap();
    let token = server.login("linh", None).unwrap();
    let post = create_post(&server, &token, "thread").await;
    server.store.fail_writes(true);

    let response = server
        .post_auth(
            &format!("/api/v1/posts/{}/comments", post.id),
            &token,
            &CommentBody::root("lost"),
        )
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
    assert_eq!(body.error.code, "PERSISTENCE_FAILURE");
    assert_eq!(body.error.message, "Failed to create comment");
}

#[tokio::test]
async fn test_update_comment() {
    let server = TestServer::start().await.unwrap();
    let token = server.login("linh", None).unwrap();
    let post = create_post(&server, &token, "thread").await;
    let other = create_post(&server, &token, "elsewhere").await;
    let tree = comment(&server, &token, post.id, &CommentBody::root("typo")).await;
    let comment_id = tree[0].id;

    let response = server
        .patch_auth(
            &format!("/api/v1/posts/{}/comments/{comment_id}", post.id),
            &token,
            &ContentBody::new("fixed"),
        )
        .await
        .unwrap();
    let tree: Vec<CommentNode> = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(tree[0].content, "fixed");
    assert_eq!(server.publisher.events().len(), 2);

    let response = server
        .patch_auth(
            &format!("/api/v1/posts/{}/comments/{comment_id}", other.id),
            &token,
            &ContentBody::new("wrong post"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .patch_auth(
            &format!("/api/v1/posts/{}/comments/9999", post.id),
            &token,
            &ContentBody::new("missing"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_delete_comment_removes_replies() {
    let server = TestServer::start().await.unwrap();
    let token = server.login("linh", None).unwrap();
    let post = create_post(&server, &token, "thread").await;

    let tree = comment(&server, &token, post.id, &CommentBody::root("parent")).await;
    let parent = tree[0].id;
    comment(&server, &token, post.id, &CommentBody::reply("child", parent)).await;
    comment(&server, &token, post.id, &CommentBody::root("survivor")).await;

    let response = server
        .delete_auth(&format!("/api/v1/posts/{}/comments/{parent}", post.id), &token)
        .await
        .unwrap();
    let tree: Vec<CommentNode> = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].content, "survivor");
    assert_eq!(server.store.comments().len(), 1);

    let response = server
        .delete_auth(&format!("/api/v1/posts/{}/comments/{parent}", post.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_delete_comment_under_wrong_post() {
    let server = TestServer::start().await.unwrap();
    let token = server.login("linh", None).unwrap();
    let post = create_post(&server, &token, "thread").await;
    let other = create_post(&server, &token, "elsewhere").await;
    let tree = comment(&server, &token, post.id, &CommentBody::root("keep me")).await;
    let comment_id = tree[0].id;

    for wrong_post in [other.id, 99999] {
        let response = server
            .delete_auth(&format!("/api/v1/posts/{wrong_post}/comments/{comment_id}"), &token)
            .await
            .unwrap();
        assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
    }

    assert_eq!(server.store.comments().len(), 1);
    assert_eq!(server.publisher.events().len(), 1);
}

#[tokio::test]
async fn test_comment_saved_but_thread_unreadable() {
    let server = TestServer::start().await.unwrap();
    let token = server.login("linh", None).unwrap();
    let post = create_post(&server, &token, "thread").await;
    server.store.fail_thread_reads(true);

    let response = server
        .post_auth(
            &format!("/api/v1/posts/{}/comments", post.id),
            &token,
            &CommentBody::root("written"),
        )
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
    assert_ne!(body.error.code, "PERSISTENCE_FAILURE");
    assert_eq!(server.store.comments().len(), 1);
    assert!(server.publisher.events().is_empty());
}

// ============================================================================
// Reactions
// ============================================================================

#[tokio::test]
async fn test_post_reaction_toggle() {
    let server = TestServer::start().await.unwrap();
    let token = server.login("linh", Some("Linh")).unwrap();
    let post = create_post(&server, &token, "react").await;
    let path = format!("/api/v1/posts/{}/reactions", post.id);

    let response = server.put_auth(&path, &token, &ReactBody::new("Like")).await.unwrap();
    let state: ReactionStateBody = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(state.reaction_type.as_deref(), Some("Like"));

    let response = server.put_auth(&path, &token, &ReactBody::new("Love")).await.unwrap();
    let state: ReactionStateBody = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(state.reaction_type.as_deref(), Some("Love"));
    assert_eq!(server.store.reactions().len(), 1);

    let response = server.get_auth(&path, &token).await.unwrap();
    let details: Vec<ReactionDetailBody> = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(details.len(), 1);
    assert_eq!(details[0].reaction_type, "Love");
    assert_eq!(details[0].display_name, "Love");
    assert_eq!(details[0].user_full_name, "Linh");

    let response = server
        .get_auth(&format!("/api/v1/posts/{}", post.id), &token)
        .await
        .unwrap();
    let view: PostBody = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(view.like_number, 1);

    let response = server.put_auth(&path, &token, &ReactBody::new("Love")).await.unwrap();
    let state: ReactionStateBody = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(state.reaction_type, None);
    assert!(server.store.reactions().is_empty());
}

#[tokio::test]
async fn test_comment_reactions_show_in_stats() {
    let server = TestServer::start().await.unwrap();
    let linh = server.login("linh", None).unwrap();
    let bao = server.login("bao", None).unwrap();
    let an = server.login("an", None).unwrap();
    let post = create_post(&server, &linh, "react").await;
    let tree = comment(&server, &linh, post.id, &CommentBody::root("rate me")).await;
    let path = format!("/api/v1/comments/{}/reactions", tree[0].id);

    for (token, kind) in [(&linh, "Like"), (&bao, "Like"), (&an, "Love")] {
        let response = server.put_auth(&path, token, &ReactBody::new(kind)).await.unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let response = server
        .get_auth(&format!("/api/v1/posts/{}/comments", post.id), &linh)
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    let stats = &body["data"][0]["stats"];
    assert_eq!(stats["Like"], 2);
    assert_eq!(stats["Love"], 1);

    let response = server.get_auth(&path, &linh).await.unwrap();
    let details: Vec<ReactionDetailBody> = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(details.len(), 3);
}

#[tokio::test]
async fn test_reaction_on_missing_target() {
    let server = TestServer::start().await.unwrap();
    let token = server.login("linh", None).unwrap();

    let response = server
        .put_auth("/api/v1/comments/9999/reactions", &token, &ReactBody::new("Wow"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .get_auth("/api/v1/posts/9999/reactions", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_unknown_reaction_type_is_rejected() {
    let server = TestServer::start().await.unwrap();
    let token = server.login("linh", None).unwrap();
    let post = create_post(&server, &token, "react").await;

    let response = server
        .put_auth(
            &format!("/api/v1/posts/{}/reactions", post.id),
            &token,
            &ReactBody::new("Shrug"),
        )
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "INVALID_BODY");
}

// ============================================================================
// Reports
// ============================================================================

#[tokio::test]
async fn test_report_twice_keeps_one_row() {
    let server = TestServer::start().await.unwrap();
    let linh = server.login("linh", Some("Linh")).unwrap();
    let post = create_post(&server, &linh, "questionable").await;
    let path = format!("/api/v1/posts/{}/reports", post.id);

    let response = server
        .post_auth(&path, &linh, &ReportBody::new("Spam", Some("ads")))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .post_auth(&path, &linh, &ReportBody::new("HateSpeech", None))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get_auth("/api/v1/reports", &linh).await.unwrap();
    let reports: Vec<ReportViewBody> = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].post_id, post.id);
    assert_eq!(reports[0].known_as, "Linh");
    assert_eq!(reports[0].report, "Hate speech");
    assert_eq!(reports[0].description, "");
    assert!(!reports[0].checked);
}

#[tokio::test]
async fn test_reports_from_different_users() {
    let server = TestServer::start().await.unwrap();
    let linh = server.login("linh", None).unwrap();
    let bao = server.login("bao", None).unwrap();
    let post = create_post(&server, &linh, "questionable").await;
    let path = format!("/api/v1/posts/{}/reports", post.id);

    for token in [&linh, &bao] {
        let response = server
            .post_auth(&path, token, &ReportBody::new("Violence", None))
            .await
            .unwrap();
        assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
    }

    assert_eq!(server.store.reports().len(), 2);
}

#[tokio::test]
async fn test_report_validation_and_missing_post() {
    let server = TestServer::start().await.unwrap();
    let token = server.login("linh", None).unwrap();
    let post = create_post(&server, &token, "questionable").await;

    let long = "x".repeat(501);
    let response = server
        .post_auth(
            &format!("/api/v1/posts/{}/reports", post.id),
            &token,
            &ReportBody::new("Other", Some(&long)),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .post_auth("/api/v1/posts/9999/reports", &token, &ReportBody::new("Spam", None))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
    assert!(server.store.reports().is_empty());
}
