//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, CommentConfig, ConfigError, CorsConfig, DatabaseConfig, Environment,
    JwtConfig, LogFormat, RateLimitConfig, RedisConfig, ServerConfig,
};
