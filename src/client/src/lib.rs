//! # useradmin client
//!
//! HTTP client for the user-management service's admin API.
//!
//! - **AdminApi**: trait the editing sessions are written against
//! - **AdminApiClient**: reqwest implementation of that trait
//!
//! ## Example
//!
//! ```ignore
//! use useradmin_client::{AdminApi, AdminApiClient, ClientConfig};
//! use useradmin_core::{AdminFlag, Target};
//!
//! let client = AdminApiClient::new(ClientConfig::new("https://api.example.com"))?;
//! client.set_flag(AdminFlag::Verified, &Target::new("64f0c2")?, true).await?;
//! ```

/// Admin API trait
pub mod api;
/// reqwest-backed client
pub mod client;
/// Error types for admin API calls
pub mod error;
/// Request bodies
pub mod types;

pub use api::AdminApi;
pub use client::{flag_path, AdminApiClient, ClientConfig, ACCESS_PATH, CUSTOM_DATA_PATH};
pub use error::{ClientError, ClientResult};
pub use types::{AccessOperation, AccessRequest, CustomDataRequest, FlagRequest};
