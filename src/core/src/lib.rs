//! # useradmin core
//!
//! Shared types, traits, and error handling for the user-management admin
//! console. Kept free of HTTP and scope-tree concerns so that the client,
//! scope and console crates can all depend on it.

pub mod types;
pub mod traits;
pub mod error;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use types::{
    AdminFlag, CustomData, Notice, NoticeLevel, Platform, SocialLink, Target, TargetType,
    UserRecord, WILDCARD_SCOPE,
};
pub use traits::Notifier;
