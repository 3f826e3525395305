// Query failure types shared by the gateway and the presenter

use thiserror::Error;

use crate::models::Category;

/// Error object handed back by a failed property query. Carries at least a
/// human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct QueryError {
    pub message: String,
}

impl QueryError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A category's query failed during a poll cycle. Rendered as a placeholder
/// on that category's targets and logged; never propagated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{category} query failed: {message}")]
pub struct QueryFailed {
    pub category: Category,
    pub message: String,
}

impl QueryFailed {
    pub fn new(category: Category, error: &QueryError) -> Self {
        Self {
            category,
            message: error.message.clone(),
        }
    }
}
