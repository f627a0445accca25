/// API error taxonomy and GraphQL error shaping
///
/// Three kinds: validation failures (rejected before any store call),
/// missing rows, and uninterpreted store failures. Each maps to a GraphQL
/// extension code the client switches on.

use crate::graphql::validate::FieldIssue;
use async_graphql::ErrorExtensions;
use thiserror::Error;

/// Typed errors crossing the API boundary
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or out-of-range input; never reaches the store
    #[error("{0}")]
    Validation(String),
    /// Referenced or targeted row absent
    #[error("{0}")]
    NotFound(String),
    /// Store failure, propagated uninterpreted
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

impl ApiError {
    /// Extension code exposed to GraphQL clients
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "BAD_USER_INPUT",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::Store(_) => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl ErrorExtensions for ApiError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", self.code()))
    }
}

/// Shape a validation failure: the message is the first field issue
pub fn bad_input(issues: Vec<FieldIssue>) -> async_graphql::Error {
    let message = issues
        .into_iter()
        .next()
        .map(|issue| issue.message)
        .unwrap_or_else(|| "Validation failed".to_string());
    ApiError::Validation(message).extend()
}

/// Shape a NOT_FOUND error for an absent entity
pub fn not_found(message: &str) -> async_graphql::Error {
    ApiError::NotFound(message.to_string()).extend()
}

/// Log and shape an uninterpreted store failure
pub fn store_error(operation: &str, err: anyhow::Error) -> async_graphql::Error {
    tracing::error!("Failed to {operation}: {err}");
    ApiError::Store(err).extend()
}
