//! Error types for the game engine
//!
//! The engine has no runtime error taxonomy: actions that do not apply to the
//! current phase are ignored. Only configuration is validated, and it fails
//! fast at construction.

use thiserror::Error;

/// Errors that can occur while building a board or an engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Board dimensions, empty sentinel, or explicit rows are unusable
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl EngineError {
    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        EngineError::InvalidConfig {
            reason: reason.into(),
        }
    }
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
