//! Query execution with bounded retries.
//!
//! Wraps a `Connector` in a retry loop: transient failures are retried with
//! a fixed backoff, and only the final failure surfaces to the caller. The
//! delay is injected so tests run without real sleeps.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::db::{Connector, QueryResult};
use crate::error::{Result, SketchError};

/// How many characters of the underlying error message survive into a
/// `SketchError::Execution`.
const ERROR_MESSAGE_LIMIT: usize = 200;

/// Retry settings for query execution.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Total attempts, including the first one.
    pub max_attempts: u32,

    /// Fixed wait between attempts (no exponential backoff).
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff: Duration::from_secs(2),
        }
    }
}

/// Abstraction over the inter-attempt wait, so tests can skip real time.
#[async_trait]
pub trait Delay: Send + Sync {
    async fn wait(&self, duration: Duration);
}

/// Production delay backed by the tokio timer.
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn wait(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Test delay that records requested waits instead of sleeping.
#[derive(Default)]
pub struct RecordingDelay {
    waits: Mutex<Vec<Duration>>,
}

impl RecordingDelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many waits were requested.
    pub fn count(&self) -> usize {
        self.waits.lock().expect("delay lock poisoned").len()
    }

    /// Returns the recorded wait durations.
    pub fn waits(&self) -> Vec<Duration> {
        self.waits.lock().expect("delay lock poisoned").clone()
    }
}

#[async_trait]
impl Delay for RecordingDelay {
    async fn wait(&self, duration: Duration) {
        self.waits.lock().expect("delay lock poisoned").push(duration);
    }
}

/// Executes SQL against an injected connector with bounded retries.
pub struct QueryExecutor<'a> {
    connector: &'a dyn Connector,
    policy: RetryPolicy,
    delay: Arc<dyn Delay>,
}

impl<'a> QueryExecutor<'a> {
    /// Creates an executor with the default policy (3 attempts, 2 s backoff).
    pub fn new(connector: &'a dyn Connector) -> Self {
        Self {
            connector,
            policy: RetryPolicy::default(),
            delay: Arc::new(TokioDelay),
        }
    }

    /// Overrides the retry policy.
    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Overrides the delay implementation.
    pub fn with_delay(mut self, delay: Arc<dyn Delay>) -> Self {
        self.delay = delay;
        self
    }

    /// Executes a query, retrying failed attempts sequentially.
    ///
    /// Empty (or whitespace-only) SQL fails immediately with
    /// `SketchError::EmptyQuery`; the connector is never invoked. Otherwise
    /// the connector is called up to `max_attempts` times, waiting `backoff`
    /// between attempts. Each attempt is all-or-nothing: there are no
    /// partial results. After the final failure the error surfaces as
    /// `SketchError::Execution` carrying the category of the underlying
    /// error and the first 200 characters of its message.
    pub async fn execute(&self, sql: &str) -> Result<QueryResult> {
        let sql = sql.trim();
        if sql.is_empty() {
            return Err(SketchError::EmptyQuery);
        }

        let mut attempt = 1;
        loop {
            match self.connector.execute_query(sql).await {
                Ok(result) => {
                    debug!(
                        "Query succeeded on attempt {} ({} rows)",
                        attempt, result.row_count
                    );
                    return Ok(result);
                }
                Err(e) if attempt < self.policy.max_attempts => {
                    warn!(
                        "Query attempt {} of {} failed: {}. Retrying in {:?}",
                        attempt, self.policy.max_attempts, e, self.policy.backoff
                    );
                    self.delay.wait(self.policy.backoff).await;
                    attempt += 1;
                }
                Err(e) => {
                    return Err(SketchError::execution(
                        e.category(),
                        truncate_message(&e.detail(), ERROR_MESSAGE_LIMIT),
                    ));
                }
            }
        }
    }
}

/// Truncates a message to at most `limit` characters.
fn truncate_message(message: &str, limit: usize) -> String {
    message.chars().take(limit).collect()
}
