//! Server setup and initialization
//!
//! Provides the application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use social_cache::{Publisher, RedisPool};
use social_common::{AppConfig, AppError, JwtService};
use social_db::{
    create_pool, run_migrations, DatabaseConfig, PgCommentRepository, PgPostLikeRepository,
    PgPostRepository, PgReactionRepository, PgReportRepository, PgUserRepository,
};
use social_service::{CommentPolicy, ServiceContext};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the application with the base middleware stack and no rate limiting
pub fn create_app(state: AppState) -> Router {
    apply_middleware(create_router())
        .merge(health_routes())
        .with_state(state)
}

/// Build the application with CORS and rate limiting taken from `config`
pub fn create_app_with_config(state: AppState, config: &AppConfig) -> Router {
    apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    )
    .merge(health_routes())
    .with_state(state)
}

/// Connect to PostgreSQL and Redis and wire every service dependency
pub async fn create_app_state(config: &AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&DatabaseConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        run_migrations(&pool, &config.database.migrations_dir)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
    }

    info!("Creating Redis pool...");
    let redis_pool =
        RedisPool::from_config(&config.redis).map_err(|e| AppError::Cache(e.to_string()))?;
    if let Err(e) = redis_pool.health_check().await {
        // Broadcasts are best effort; the API still serves without Redis
        tracing::warn!(error = %e, "Redis is not reachable, comment broadcasts will fail");
    }

    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
    ));

    let service_context = ServiceContext::builder()
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .post_repo(Arc::new(PgPostRepository::new(pool.clone())))
        .comment_repo(Arc::new(PgCommentRepository::new(pool.clone())))
        .reaction_repo(Arc::new(PgReactionRepository::new(pool.clone())))
        .post_like_repo(Arc::new(PgPostLikeRepository::new(pool.clone())))
        .report_repo(Arc::new(PgReportRepository::new(pool)))
        .publisher(Arc::new(Publisher::new(redis_pool)))
        .jwt_service(jwt_service)
        .comment_policy(CommentPolicy::from(&config.comments))
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context))
}

/// Serve `app` until the process is stopped
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid API address: {e}")))?;

    let state = create_app_state(&config).await?;
    let app = create_app_with_config(state, &config);

    run_server(app, addr).await
}
