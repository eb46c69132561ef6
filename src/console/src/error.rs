//! Error types for the editing sessions

use thiserror::Error;
use useradmin_client::ClientError;
use useradmin_core::CoreError;
use useradmin_scope::ScopeError;

/// Console session errors
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Remote call failed
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Scope tree rejected the edit
    #[error(transparent)]
    Scope(#[from] ScopeError),

    /// Invalid domain value
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Acting admin does not hold the scope being changed
    #[error("Not permitted to change scope '{0}'")]
    NotPermitted(String),

    /// Scope save attempted without loading the target's current grants
    #[error("Current grants of '{0}' are unknown; refusing to replace them")]
    GrantsUnknown(String),

    /// Save triggered while the previous one is still running
    #[error("A save is already in progress")]
    SaveInProgress,
}

/// Result type for console sessions
pub type Result<T> = std::result::Result<T, ConsoleError>;
