//! Common error types used across the workspace.
//!
//! The in-memory store has no IO failure modes, so there is no storage or
//! internal variant: an operation either targets a missing device or was
//! handed an invalid payload.

use crate::id::DeviceId;

/// Top-level error returned by services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum DeviceHubError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}

/// A domain invariant was violated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("brand must not be empty")]
    EmptyBrand,
}

/// No device is stored under the requested identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("device not found: {id}")]
pub struct NotFoundError {
    pub id: DeviceId,
}

impl NotFoundError {
    #[must_use]
    pub fn new(id: DeviceId) -> Self {
        Self { id }
    }
}
