//! Error types for route-table checks, redirect settling, and session writes.
//!
//! The navigation guard itself never fails; these cover the code around it.

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    #[error("no route matches {0}")]
    NotFound(String),
    #[error("redirect loop through {0}")]
    RedirectLoop(String),
    #[error("route {path} is misconfigured: {reason}")]
    InvalidRoute { path: String, reason: &'static str },
    #[error("redirect target {0} is not in the route table")]
    UnknownTarget(String),
    #[error("landing path {path} would redirect again: {reason}")]
    LoopRisk { path: String, reason: &'static str },
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("session storage unavailable")]
    Unavailable,
    #[error("session storage rejected write: {0}")]
    Rejected(String),
    #[error("session value encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}
