//! Admin API abstraction used by the editing sessions

use async_trait::async_trait;
use useradmin_core::{AdminFlag, CustomData, Target, TargetType};

use crate::error::ClientResult;

/// Remote operations the console performs against the user-management service
///
/// Every call is a full replace of the addressed value; there are no partial
/// updates. Implementations must be safe to share across tasks.
#[async_trait]
pub trait AdminApi: Send + Sync {
    /// Switch one account flag on or off
    async fn set_flag(&self, flag: AdminFlag, target: &Target, state: bool) -> ClientResult<()>;

    /// Replace the target's custom profile data
    async fn replace_custom_data(&self, target: &Target, data: &CustomData) -> ClientResult<()>;

    /// Replace the target's scope grants with `scope`
    async fn set_access(
        &self,
        target: &Target,
        target_type: TargetType,
        scope: &[String],
    ) -> ClientResult<()>;
}
