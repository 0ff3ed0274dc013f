//! Query execution.

mod executor;

pub use executor::{Delay, QueryExecutor, RecordingDelay, RetryPolicy, TokioDelay};
