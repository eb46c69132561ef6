//! Buffered editor for a profile's website and social links

use std::sync::Arc;

use tracing::{debug, info, warn};
use useradmin_client::AdminApi;
use useradmin_core::{CoreError, CustomData, Notice, Notifier, Platform, Target};

use super::guard::InFlight;
use super::{MSG_INVALID_DATA, MSG_UPDATE_COMPLETE, MSG_UPDATE_FAILED};
use crate::error::Result;

/// Buffers custom-data edits and submits them as one replace
pub struct CustomDataEditor {
    api: Arc<dyn AdminApi>,
    notifier: Arc<dyn Notifier>,
    target: Target,
    platforms: Vec<Platform>,
    data: CustomData,
    in_flight: InFlight,
}

impl CustomDataEditor {
    /// Create an editor for `target` offering `platforms`
    pub fn new(
        api: Arc<dyn AdminApi>,
        notifier: Arc<dyn Notifier>,
        target: Target,
        platforms: Vec<Platform>,
    ) -> Self {
        Self {
            api,
            notifier,
            target,
            platforms,
            data: CustomData::default(),
            in_flight: InFlight::new(),
        }
    }

    /// Start from the profile's stored data
    pub fn with_data(mut self, data: CustomData) -> Self {
        self.data = data.normalize();
        self
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    /// Buffered data as it would be submitted
    pub fn data(&self) -> &CustomData {
        &self.data
    }

    pub fn website(&self) -> &str {
        &self.data.website
    }

    pub fn set_website(&mut self, url: impl Into<String>) {
        self.data.website = url.into().trim().to_string();
    }

    /// Url for a platform; empty when unset or not configured
    pub fn social_url(&self, platform: &str) -> &str {
        self.resolve_platform(platform)
            .and_then(|p| self.data.social_url(p.as_str()))
            .unwrap_or("")
    }

    /// Configured platform matching `name` case-insensitively
    fn resolve_platform(&self, name: &str) -> Option<&Platform> {
        self.platforms
            .iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(name))
    }

    /// Set or clear the link for a configured platform
    ///
    /// Platform names match case-insensitively and are stored with the
    /// configured spelling.
    pub fn set_social(&mut self, platform: &str, url: &str) -> Result<()> {
        let platform = self
            .resolve_platform(platform)
            .ok_or_else(|| CoreError::UnknownPlatform(platform.to_string()))?
            .as_str()
            .to_string();

        debug!(%platform, "Buffered social link edit");
        self.data.set_social(&platform, url);
        Ok(())
    }

    pub fn is_saving(&self) -> bool {
        self.in_flight.is_active()
    }

    /// Submit the buffer
    ///
    /// The buffer is left untouched whatever the outcome, so a failed save
    /// can be retried as is.
    pub async fn save(&self) -> Result<()> {
        let _guard = self.in_flight.try_begin()?;

        match self.api.replace_custom_data(&self.target, &self.data).await {
            Ok(()) => {
                info!(target_id = %self.target, links = self.data.social_media.len(), "Custom data saved");
                self.notifier.notify(&Notice::success(MSG_UPDATE_COMPLETE));
                Ok(())
            }
            Err(e) => {
                warn!(target_id = %self.target, error = %e, "Custom data save failed");
                let message = if e.is_validation() {
                    MSG_INVALID_DATA
                } else {
                    MSG_UPDATE_FAILED
                };
                self.notifier.notify(&Notice::error(message));
                Err(e.into())
            }
        }
    }
}
