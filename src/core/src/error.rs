//! Error types shared by the admin console crates

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for domain value validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Invalid input/state
    #[error("Invalid: {0}")]
    Invalid(String),

    /// Platform is not in the configured list
    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),

    /// A textual value could not be parsed
    #[error("Cannot parse {kind} from '{value}'")]
    Parse {
        kind: &'static str,
        value: String,
    },
}

impl CoreError {
    /// Create an invalid error
    pub fn invalid<S: Into<String>>(msg: S) -> Self {
        CoreError::Invalid(msg.into())
    }

    /// Create a parse error
    pub fn parse<S: Into<String>>(kind: &'static str, value: S) -> Self {
        CoreError::Parse {
            kind,
            value: value.into(),
        }
    }
}
