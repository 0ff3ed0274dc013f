//! Error types for Sketch.
//!
//! Defines the main error enum used throughout the application.

use thiserror::Error;

/// Main error type for Sketch operations.
#[derive(Error, Debug)]
pub enum SketchError {
    /// The user submitted an empty (or whitespace-only) query.
    #[error("Query is empty")]
    EmptyQuery,

    /// Query execution failed after exhausting all retry attempts.
    ///
    /// `kind` preserves the category of the underlying error for diagnostics;
    /// `message` is truncated to 200 characters by the executor.
    #[error("{kind}: {message}")]
    Execution { kind: String, message: String },

    /// Database connection errors (host unreachable, auth failed, etc.)
    #[error("Connection error: {0}")]
    Connection(String),

    /// A single query attempt failed (syntax errors, constraint violations, etc.)
    #[error("Query error: {0}")]
    Query(String),

    /// Chart rendering errors (internal charting failures).
    #[error("Render error: {0}")]
    Render(String),

    /// Configuration errors (invalid config file, missing required fields, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal application errors (unexpected states, bugs, etc.)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SketchError {
    /// Creates a connection error with the given message.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Creates a query error with the given message.
    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }

    /// Creates an execution error with the given kind and message.
    pub fn execution(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Execution {
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Creates a render error with the given message.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates an internal error with the given message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns the underlying message without the category prefix.
    pub fn detail(&self) -> String {
        match self {
            Self::EmptyQuery => "Query is empty".to_string(),
            Self::Execution { message, .. } => message.clone(),
            Self::Connection(msg)
            | Self::Query(msg)
            | Self::Render(msg)
            | Self::Config(msg)
            | Self::Internal(msg) => msg.clone(),
        }
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::EmptyQuery => "Empty Query",
            Self::Execution { .. } => "Query Execution Error",
            Self::Connection(_) => "Connection Error",
            Self::Query(_) => "Query Error",
            Self::Render(_) => "Render Error",
            Self::Config(_) => "Configuration Error",
            Self::Internal(_) => "Internal Error",
        }
    }
}

/// Result type alias using SketchError.
pub type Result<T> = std::result::Result<T, SketchError>;
