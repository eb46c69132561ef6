//! Profile data as exchanged with the user-management service

use super::target::AdminFlag;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A social-media platform the profile editor knows about
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Platform(String);

impl Platform {
    pub fn new(name: impl Into<String>) -> Self {
        Platform(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Platforms offered when no list is configured
    pub fn defaults() -> Vec<Platform> {
        ["Instagram", "Twitter", "Facebook", "YouTube", "TikTok"]
            .into_iter()
            .map(Platform::new)
            .collect()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One profile link on a social-media platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

/// Free-form profile metadata stored under `customData`
///
/// Social links are unique per platform and kept sorted by platform name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomData {
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub social_media: Vec<SocialLink>,
}

impl CustomData {
    /// Sort links by platform and drop duplicates, keeping the last entry
    /// seen for each platform. Links with a blank url are removed.
    pub fn normalize(mut self) -> Self {
        let mut links: Vec<SocialLink> = Vec::with_capacity(self.social_media.len());
        for link in self.social_media.drain(..) {
            if link.url.trim().is_empty() {
                links.retain(|l| l.platform != link.platform);
                continue;
            }
            match links.iter_mut().find(|l| l.platform == link.platform) {
                Some(existing) => existing.url = link.url,
                None => links.push(link),
            }
        }
        links.sort_by(|a, b| a.platform.cmp(&b.platform));
        self.social_media = links;
        self
    }

    /// Url recorded for a platform, if any
    pub fn social_url(&self, platform: &str) -> Option<&str> {
        self.social_media
            .iter()
            .find(|l| l.platform == platform)
            .map(|l| l.url.as_str())
    }

    /// Insert, replace or (with a blank url) remove the link for a platform
    pub fn set_social(&mut self, platform: &str, url: &str) {
        let url = url.trim();
        if url.is_empty() {
            self.social_media.retain(|l| l.platform != platform);
            return;
        }

        match self.social_media.binary_search_by(|l| l.platform.as_str().cmp(platform)) {
            Ok(idx) => self.social_media[idx].url = url.to_string(),
            Err(idx) => self.social_media.insert(
                idx,
                SocialLink {
                    platform: platform.to_string(),
                    url: url.to_string(),
                },
            ),
        }
    }
}

/// Subset of the service's user document the console works with
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_banned: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_restricted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<CustomData>,
}

impl UserRecord {
    /// Current value of a flag; absent fields read as off
    pub fn flag(&self, flag: AdminFlag) -> bool {
        match flag {
            AdminFlag::Verified => self.verified,
            AdminFlag::Suspended => self.is_banned,
            AdminFlag::Restricted => self.is_restricted,
        }
        .unwrap_or(false)
    }

    /// Scope names granted to the user
    pub fn granted_scopes(&self) -> &[String] {
        self.scope.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(platform: &str, url: &str) -> SocialLink {
        SocialLink {
            platform: platform.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn test_set_social_keeps_platform_order() {
        let mut data = CustomData::default();
        data.set_social("YouTube", "https://youtube.com/@a");
        data.set_social("Facebook", "https://facebook.com/a");
        data.set_social("Twitter", "https://twitter.com/a");

        let platforms: Vec<&str> = data.social_media.iter().map(|l| l.platform.as_str()).collect();
        assert_eq!(platforms, vec!["Facebook", "Twitter", "YouTube"]);
    }

    #[test]
    fn test_set_social_replaces_and_removes() {
        let mut data = CustomData::default();
        data.set_social("Twitter", "https://twitter.com/a");
        data.set_social("Twitter", "https://twitter.com/b");
        assert_eq!(data.social_media.len(), 1);
        assert_eq!(data.social_url("Twitter"), Some("https://twitter.com/b"));

        data.set_social("Twitter", "  ");
        assert!(data.social_media.is_empty());
        assert_eq!(data.social_url("Twitter"), None);
    }

    #[test]
    fn test_normalize_dedups_last_wins() {
        let data = CustomData {
            website: "https://example.com".to_string(),
            social_media: vec![
                link("TikTok", "https://tiktok.com/old"),
                link("Instagram", "https://instagram.com/a"),
                link("TikTok", "https://tiktok.com/new"),
                link("Facebook", ""),
            ],
        }
        .normalize();

        assert_eq!(
            data.social_media,
            vec![
                link("Instagram", "https://instagram.com/a"),
                link("TikTok", "https://tiktok.com/new"),
            ]
        );
    }

    #[test]
    fn test_custom_data_wire_format() {
        let mut data = CustomData {
            website: "https://example.com".to_string(),
            ..Default::default()
        };
        data.set_social("Instagram", "https://instagram.com/a");

        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "website": "https://example.com",
                "socialMedia": [{"platform": "Instagram", "url": "https://instagram.com/a"}]
            })
        );

        // Services omit socialMedia for profiles that never set one
        let parsed: CustomData = serde_json::from_str(r#"{"website":"x"}"#).unwrap();
        assert!(parsed.social_media.is_empty());
    }

    #[test]
    fn test_user_record_flags() {
        let user: UserRecord = serde_json::from_value(serde_json::json!({
            "_id": "64f0c2",
            "username": "alice",
            "verified": true,
            "isBanned": false,
            "scope": ["user:read"]
        }))
        .unwrap();

        assert_eq!(user.id, "64f0c2");
        assert!(user.flag(AdminFlag::Verified));
        assert!(!user.flag(AdminFlag::Suspended));
        assert!(!user.flag(AdminFlag::Restricted));
        assert_eq!(user.granted_scopes(), &["user:read".to_string()]);
        assert!(user.custom_data.is_none());
    }
}
