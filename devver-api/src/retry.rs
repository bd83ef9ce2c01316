//! Caller-side retry with exponential backoff.
//!
//! The request layer never retries; callers that want resilience wrap their
//! reads with these helpers. [`retry_read`] is the common case: it retries
//! only failures [`ApiError::is_retryable`] approves, so a 401 or a probe for
//! an organization that does not exist yet fails once instead of storming.

use crate::error::ApiError;
use std::time::Duration;
use tokio::time::sleep;

/// Configuration for retry behavior.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts (including the first).
    pub max_attempts: u32,

    /// Delay before the first retry.
    pub initial_delay: Duration,

    /// Cap on the delay between retries.
    pub max_delay: Duration,

    /// Base for exponential backoff (typically 2.0).
    pub exponential_base: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(10),
            exponential_base: 2.0,
        }
    }
}

impl RetryConfig {
    /// Short delays, for operations that fail fast.
    pub fn fast() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(50),
            max_delay: Duration::from_secs(1),
            exponential_base: 2.0,
        }
    }

    /// A configuration that never retries.
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            initial_delay: Duration::from_millis(0),
            max_delay: Duration::from_millis(0),
            exponential_base: 1.0,
        }
    }
}

/// Execute `f` up to `config.max_attempts` times, backing off between
/// failures. Returns the last error when all attempts fail.
pub async fn with_retry<F, Fut, T, E>(config: &RetryConfig, f: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, E>>,
    E: std::fmt::Debug,
{
    with_retry_if(config, f, |_| true).await
}

/// Execute `f` with retries gated on `is_retryable`.
///
/// An error the predicate rejects is returned immediately without further
/// attempts.
pub async fn with_retry_if<F, Fut, T, E, P>(
    config: &RetryConfig,
    mut f: F,
    mut is_retryable: P,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, E>>,
    E: std::fmt::Debug,
    P: FnMut(&E) -> bool,
{
    let mut attempt = 0;
    let mut delay = config.initial_delay;

    loop {
        attempt += 1;

        match f().await {
            Ok(result) => {
                if attempt > 1 {
                    tracing::info!(attempts = attempt, "operation succeeded after retry");
                }
                return Ok(result);
            }
            Err(e) if !is_retryable(&e) => {
                tracing::debug!(error = ?e, "error is not retryable, returning immediately");
                return Err(e);
            }
            Err(e) if attempt >= config.max_attempts => {
                tracing::warn!(attempts = attempt, error = ?e, "all retry attempts exhausted");
                return Err(e);
            }
            Err(e) => {
                tracing::debug!(
                    attempt = attempt,
                    max_attempts = config.max_attempts,
                    delay_ms = delay.as_millis() as u64,
                    error = ?e,
                    "attempt failed, retrying"
                );

                sleep(delay).await;

                delay = Duration::from_secs_f64(
                    (delay.as_secs_f64() * config.exponential_base)
                        .min(config.max_delay.as_secs_f64()),
                );
            }
        }
    }
}

/// Retry an API read, skipping failures the classifier marks non-retryable.
///
/// # Examples
///
/// ```rust,no_run
/// use devver_api::retry::{retry_read, RetryConfig};
/// use devver_api::{ApiClient, ListQuery, Paginated};
/// use devver_api::organizations::OrganizationLight;
///
/// async fn load(client: &ApiClient) -> Result<Paginated<OrganizationLight>, devver_api::ApiError> {
///     let query = ListQuery::new().page(1);
///     retry_read(&RetryConfig::default(), || {
///         client.list("/organizations/members", &query)
///     })
///     .await
/// }
/// ```
pub async fn retry_read<F, Fut, T>(config: &RetryConfig, f: F) -> Result<T, ApiError>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, ApiError>>,
{
    with_retry_if(config, f, ApiError::is_retryable).await
}
