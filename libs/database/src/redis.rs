use redis::aio::ConnectionManager;
use redis::Client;
use tracing::info;

use crate::retry::{retry, retry_with_backoff, RetryConfig};
use core_config::{env_required, ConfigError, FromEnv};

/// Redis connection configuration.
#[derive(Clone, Debug)]
pub struct RedisConfig {
    /// Redis connection URL (e.g. "redis://127.0.0.1:6379")
    pub url: String,
}

impl RedisConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Environment variables:
/// - `REDIS_URL` (required)
impl FromEnv for RedisConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env_required("REDIS_URL")?,
        })
    }
}

/// Connect to Redis and return a [`ConnectionManager`].
///
/// The ConnectionManager handles reconnection internally; the initial PING
/// verifies the server is actually reachable.
pub async fn connect(url: &str) -> redis::RedisResult<ConnectionManager> {
    let client = Client::open(url)?;
    let manager = ConnectionManager::new(client).await?;

    let mut conn = manager.clone();
    let _: String = redis::cmd("PING").query_async(&mut conn).await?;

    info!("Connected to Redis");
    Ok(manager)
}

/// Connect using a [`RedisConfig`].
pub async fn connect_from_config(config: RedisConfig) -> redis::RedisResult<ConnectionManager> {
    connect(&config.url).await
}

/// Connect with automatic retry on failure.
pub async fn connect_with_retry(
    config: RedisConfig,
    retry_config: Option<RetryConfig>,
) -> redis::RedisResult<ConnectionManager> {
    match retry_config {
        Some(rc) => retry_with_backoff(|| connect(&config.url), rc).await,
        None => retry(|| connect(&config.url)).await,
    }
}
