//! Verified / suspended / restricted switches for one account

use std::sync::Arc;

use tracing::{info, warn};
use useradmin_client::AdminApi;
use useradmin_core::{AdminFlag, Notice, Notifier, Target, UserRecord};

use super::{MSG_UPDATE_COMPLETE, MSG_UPDATE_FAILED};
use crate::error::Result;

/// Account flag switches with optimistic updates
///
/// A switch flips locally before the remote call and flips back if the call
/// fails, so the shown state always matches the last confirmed value.
pub struct FlagSwitches {
    api: Arc<dyn AdminApi>,
    notifier: Arc<dyn Notifier>,
    target: Target,
    verified: bool,
    suspended: bool,
    restricted: bool,
}

impl FlagSwitches {
    /// Create switches starting from the given flag values
    pub fn new(api: Arc<dyn AdminApi>, notifier: Arc<dyn Notifier>, target: Target) -> Self {
        Self {
            api,
            notifier,
            target,
            verified: false,
            suspended: false,
            restricted: false,
        }
    }

    /// Seed the switch states from a user document
    pub fn with_record(mut self, record: &UserRecord) -> Self {
        for flag in AdminFlag::ALL {
            *self.slot(flag) = record.flag(flag);
        }
        self
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Current (possibly optimistic) value of a flag
    pub fn get(&self, flag: AdminFlag) -> bool {
        match flag {
            AdminFlag::Verified => self.verified,
            AdminFlag::Suspended => self.suspended,
            AdminFlag::Restricted => self.restricted,
        }
    }

    fn slot(&mut self, flag: AdminFlag) -> &mut bool {
        match flag {
            AdminFlag::Verified => &mut self.verified,
            AdminFlag::Suspended => &mut self.suspended,
            AdminFlag::Restricted => &mut self.restricted,
        }
    }

    /// Switch `flag` to `state`
    ///
    /// # Errors
    ///
    /// Returns the client error after restoring the previous value.
    pub async fn set(&mut self, flag: AdminFlag, state: bool) -> Result<()> {
        let previous = std::mem::replace(self.slot(flag), state);

        match self.api.set_flag(flag, &self.target, state).await {
            Ok(()) => {
                info!(target_id = %self.target, %flag, state, "Flag updated");
                self.notifier.notify(&Notice::success(MSG_UPDATE_COMPLETE));
                Ok(())
            }
            Err(e) => {
                *self.slot(flag) = previous;
                warn!(target_id = %self.target, %flag, state, error = %e, "Flag update failed, rolled back");
                self.notifier.notify(&Notice::error(MSG_UPDATE_FAILED));
                Err(e.into())
            }
        }
    }

    /// Flip `flag` and return the requested value
    pub async fn toggle(&mut self, flag: AdminFlag) -> Result<bool> {
        let state = !self.get(flag);
        self.set(flag, state).await?;
        Ok(state)
    }
}
