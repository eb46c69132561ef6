//! Shared types for the admin console

pub mod target;
pub mod profile;
pub mod notice;

// Re-export commonly used types
pub use target::{AdminFlag, Target, TargetType};
pub use profile::{CustomData, Platform, SocialLink, UserRecord};
pub use notice::{Notice, NoticeLevel};

/// Scope name that grants every scope, and the parent marker used by
/// top-level definitions in exported scope lists.
pub const WILDCARD_SCOPE: &str = "*";
