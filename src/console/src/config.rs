//! Console configuration loading and validation

use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use useradmin_client::ClientConfig;
use useradmin_core::{Platform, WILDCARD_SCOPE};
use useradmin_scope::{ScopeDefinition, ScopeTree};

/// Complete console configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConsoleConfig {
    pub api: ApiSection,

    #[serde(default)]
    pub logging: LoggingSection,

    #[serde(default)]
    pub profile: ProfileSection,

    #[serde(default)]
    pub actor: ActorSection,

    /// Scope definitions offered by the permission editor
    #[serde(default)]
    pub scopes: Vec<ScopeDefinition>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSection {
    pub base_url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingSection {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProfileSection {
    #[serde(default = "Platform::defaults")]
    pub platforms: Vec<Platform>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ActorSection {
    /// Scopes held by the admin running the console
    #[serde(default = "default_actor_scopes")]
    pub scopes: Vec<String>,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self { level: default_log_level() }
    }
}

impl Default for ProfileSection {
    fn default() -> Self {
        Self { platforms: Platform::defaults() }
    }
}

impl Default for ActorSection {
    fn default() -> Self {
        Self { scopes: default_actor_scopes() }
    }
}

// Default value functions
fn default_timeout_ms() -> u64 { 10_000 }
fn default_log_level() -> String { "info".to_string() }
fn default_actor_scopes() -> Vec<String> { vec![WILDCARD_SCOPE.to_string()] }

impl ConsoleConfig {
    /// Load configuration from TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {}", path.display()))?;

        Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse configuration file {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: ConsoleConfig = toml::from_str(contents)?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let base_url = self.api.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            anyhow::bail!("api.base_url must be an http:// or https:// url");
        }

        if self.api.timeout_ms == 0 {
            anyhow::bail!("api.timeout_ms must be greater than zero");
        }

        if self.profile.platforms.is_empty() {
            anyhow::bail!("profile.platforms cannot be empty");
        }

        let mut seen = HashSet::new();
        for platform in &self.profile.platforms {
            if platform.as_str().trim().is_empty() {
                anyhow::bail!("profile.platforms contains an empty name");
            }
            if !seen.insert(platform.as_str().to_ascii_lowercase()) {
                anyhow::bail!("profile.platforms lists '{}' more than once", platform);
            }
        }

        self.scope_tree()?;
        Ok(())
    }

    /// Build the scope tree from the configured definitions
    pub fn scope_tree(&self) -> Result<ScopeTree> {
        ScopeTree::new(self.scopes.clone()).context("Invalid scope definitions")
    }

    /// Client settings for the admin API
    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new(self.api.base_url.trim())
            .with_timeout(Duration::from_millis(self.api.timeout_ms));
        if let Some(token) = &self.api.token {
            config = config.with_token(token.clone());
        }
        config
    }
}
