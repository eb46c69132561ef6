//! reqwest-backed admin API client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, Method};
use serde::Serialize;
use tracing::{debug, warn};
use useradmin_core::{AdminFlag, CustomData, Target, TargetType};

use crate::api::AdminApi;
use crate::error::{ClientError, ClientResult};
use crate::types::{AccessRequest, CustomDataRequest, ErrorBody, FlagRequest};

/// Path of the access (scope grant) endpoint
pub const ACCESS_PATH: &str = "/user/admin-api/access";
/// Path of the custom-data endpoint
pub const CUSTOM_DATA_PATH: &str = "/user/admin-api/custom-data";

/// Endpoint path that switches `flag`
pub fn flag_path(flag: AdminFlag) -> &'static str {
    match flag {
        AdminFlag::Verified => "/user/admin-api/verify",
        AdminFlag::Suspended => "/user/admin-api/ban",
        AdminFlag::Restricted => "/user/admin-api/restrict",
    }
}

/// Connection settings for [`AdminApiClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the user-management service (e.g., "https://api.example.com")
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Bearer token sent with every request, if any
    pub token: Option<String>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(10),
            token: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

/// HTTP client for the user-management admin API
pub struct AdminApiClient {
    http_client: HttpClient,
    base_url: String,
    token: Option<String>,
}

impl AdminApiClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not http(s) or the HTTP client
    /// cannot be created.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClientError::InvalidConfig(format!(
                "base url must start with http:// or https://, got '{}'",
                config.base_url
            )));
        }

        let http_client = HttpClient::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(4)
            .build()
            .map_err(|e| ClientError::InvalidConfig(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url,
            token: config.token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a JSON body and map the response to success or a typed failure
    async fn send<B>(&self, method: Method, path: &str, body: &B) -> ClientResult<()>
    where
        B: Serialize + ?Sized + Sync,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "Sending admin API request");

        let mut request = self.http_client.request(method.clone(), &url).json(body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            warn!(%method, %url, error = %e, "Admin API request failed");
            ClientError::RequestFailed(e.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            debug!(%method, %url, status = status.as_u16(), "Admin API request succeeded");
            return Ok(());
        }

        let text = response.text().await.unwrap_or_default();
        warn!(%method, %url, status = status.as_u16(), "Admin API rejected request");

        let validation = serde_json::from_str::<ErrorBody>(&text)
            .ok()
            .and_then(ErrorBody::validation_errors);

        Err(match validation {
            Some(errors) => ClientError::Validation {
                status: status.as_u16(),
                errors,
            },
            None => ClientError::UnexpectedStatus {
                status: status.as_u16(),
                body: text,
            },
        })
    }
}

#[async_trait]
impl AdminApi for AdminApiClient {
    async fn set_flag(&self, flag: AdminFlag, target: &Target, state: bool) -> ClientResult<()> {
        let body = FlagRequest {
            target: target.clone(),
            state,
        };
        self.send(Method::POST, flag_path(flag), &body).await
    }

    async fn replace_custom_data(&self, target: &Target, data: &CustomData) -> ClientResult<()> {
        let body = CustomDataRequest {
            target: target.clone(),
            custom_data: data.clone(),
        };
        self.send(Method::PUT, CUSTOM_DATA_PATH, &body).await
    }

    async fn set_access(
        &self,
        target: &Target,
        target_type: TargetType,
        scope: &[String],
    ) -> ClientResult<()> {
        let body = AccessRequest::set(target.clone(), target_type, scope.to_vec());
        self.send(Method::POST, ACCESS_PATH, &body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_paths() {
        assert_eq!(flag_path(AdminFlag::Verified), "/user/admin-api/verify");
        assert_eq!(flag_path(AdminFlag::Suspended), "/user/admin-api/ban");
        assert_eq!(flag_path(AdminFlag::Restricted), "/user/admin-api/restrict");
    }

    #[test]
    fn test_base_url_is_trimmed() {
        let client = AdminApiClient::new(ClientConfig::new("https://api.example.com/")).unwrap();
        assert_eq!(client.base_url(), "https://api.example.com");
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let result = AdminApiClient::new(ClientConfig::new("ftp://files.example.com"));
        assert!(matches!(result, Err(ClientError::InvalidConfig(_))));
    }
}
