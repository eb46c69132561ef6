//! Request bodies sent to the admin API

use serde::{Deserialize, Serialize};
use useradmin_core::{CustomData, Target, TargetType};

/// Body of the verify / ban / restrict calls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagRequest {
    pub target: Target,
    pub state: bool,
}

/// Body of the custom-data replace call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomDataRequest {
    pub target: Target,
    pub custom_data: CustomData,
}

/// How the access endpoint applies `scope` to the targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessOperation {
    /// Replace the targets' grants with exactly `scope`
    Set,
}

/// Body of the access call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessRequest {
    pub targets: Vec<Target>,
    pub target_type: TargetType,
    pub scope: Vec<String>,
    pub operation: AccessOperation,
}

impl AccessRequest {
    /// Replace-style grant for a single target
    pub fn set(target: Target, target_type: TargetType, scope: Vec<String>) -> Self {
        Self {
            targets: vec![target],
            target_type,
            scope,
            operation: AccessOperation::Set,
        }
    }
}

/// Failure body shape; only the nested validation errors are inspected
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub additional_info: Option<AdditionalInfo>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AdditionalInfo {
    #[serde(default)]
    pub errors: Option<serde_json::Value>,
}

impl ErrorBody {
    pub(crate) fn validation_errors(self) -> Option<serde_json::Value> {
        self.additional_info
            .and_then(|info| info.errors)
            .filter(|errors| !errors.is_null())
    }
}
