//! Scope definition types and errors

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use useradmin_core::WILDCARD_SCOPE;

/// Result type for scope operations
pub type ScopeResult<T> = Result<T, ScopeError>;

/// Errors raised while loading or editing a scope tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScopeError {
    /// Empty scope name provided
    #[error("Scope name cannot be empty")]
    EmptyName,

    /// Two definitions share a name
    #[error("Duplicate scope name: {0}")]
    DuplicateScope(String),

    /// A definition names itself as parent
    #[error("Scope '{0}' cannot be its own parent")]
    SelfParent(String),

    /// A definition names a parent that is not defined
    #[error("Scope '{scope}' has unknown parent '{parent}'")]
    UnknownParent { scope: String, parent: String },

    /// Parent chain loops back on itself
    #[error("Circular parent chain: {0}")]
    CircularParent(String),

    /// Lookup of a name that has no definition
    #[error("Unknown scope: {0}")]
    UnknownScope(String),
}

/// One permission scope, optionally nested under a parent scope
///
/// Granting a scope implicitly grants every scope beneath it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeDefinition {
    /// Unique scope name (e.g., "users:write")
    pub name: String,

    /// Human readable description
    #[serde(default)]
    pub description: String,

    /// Parent scope name, absent for top-level scopes
    #[serde(
        default,
        deserialize_with = "deserialize_parent",
        skip_serializing_if = "Option::is_none"
    )]
    pub parent: Option<String>,
}

impl ScopeDefinition {
    /// Create a top-level scope definition
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parent: None,
        }
    }

    /// Nest the definition under a parent scope
    ///
    /// The wildcard marker `*` and blank names mean "no parent".
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = normalize_parent(Some(parent.into()));
        self
    }

    /// Whether this definition sits at the top of the forest
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

pub(crate) fn normalize_parent(parent: Option<String>) -> Option<String> {
    parent.filter(|p| !p.is_empty() && p != WILDCARD_SCOPE)
}

fn deserialize_parent<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let parent = Option::<String>::deserialize(deserializer)?;
    Ok(normalize_parent(parent))
}
