//! Identities edited by the console and the flags attached to them

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of the user or API client being edited
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Target(String);

impl Target {
    /// Create a target from a non-blank identifier
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(CoreError::invalid("target id cannot be empty"));
        }
        Ok(Target(trimmed.to_string()))
    }

    /// Get the raw identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Target {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of identity receiving scope grants
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    #[default]
    User,
    Client,
}

impl TargetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetType::User => "user",
            TargetType::Client => "client",
        }
    }
}

impl FromStr for TargetType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "user" => Ok(TargetType::User),
            "client" => Ok(TargetType::Client),
            _ => Err(CoreError::parse("target type", s)),
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Boolean account flags an admin can switch on or off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminFlag {
    /// Account carries the verified badge
    Verified,
    /// Account is banned
    Suspended,
    /// Account is restricted
    Restricted,
}

impl AdminFlag {
    /// All flags in display order
    pub const ALL: [AdminFlag; 3] = [AdminFlag::Verified, AdminFlag::Suspended, AdminFlag::Restricted];

    pub fn as_str(&self) -> &'static str {
        match self {
            AdminFlag::Verified => "verified",
            AdminFlag::Suspended => "suspended",
            AdminFlag::Restricted => "restricted",
        }
    }
}

impl FromStr for AdminFlag {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "verified" | "verify" => Ok(AdminFlag::Verified),
            "suspended" | "ban" | "banned" => Ok(AdminFlag::Suspended),
            "restricted" | "restrict" => Ok(AdminFlag::Restricted),
            _ => Err(CoreError::parse("admin flag", s)),
        }
    }
}

impl fmt::Display for AdminFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_trims_and_rejects_blank() {
        assert_eq!(Target::new("  abc123 ").unwrap().as_str(), "abc123");
        assert!(matches!(Target::new("   "), Err(CoreError::Invalid(_))));
    }

    #[test]
    fn test_target_type_serialization() {
        assert_eq!(serde_json::to_string(&TargetType::Client).unwrap(), "\"client\"");
        assert_eq!("USER".parse::<TargetType>().unwrap(), TargetType::User);
        assert!("robot".parse::<TargetType>().is_err());
    }

    #[test]
    fn test_admin_flag_aliases() {
        assert_eq!("ban".parse::<AdminFlag>().unwrap(), AdminFlag::Suspended);
        assert_eq!("verify".parse::<AdminFlag>().unwrap(), AdminFlag::Verified);
        assert_eq!("Restricted".parse::<AdminFlag>().unwrap(), AdminFlag::Restricted);
        assert!("frozen".parse::<AdminFlag>().is_err());
    }
}
