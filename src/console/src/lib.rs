//! # useradmin console
//!
//! Editing sessions, configuration and logging for the user-management admin
//! console. The `useradmin` binary drives these sessions from the command
//! line.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use useradmin_console::{ConsoleConfig, LogNotifier, ScopeEditor};
//! use useradmin_client::AdminApiClient;
//! use useradmin_core::{Target, TargetType};
//!
//! let config = ConsoleConfig::load("useradmin.toml")?;
//! let api = Arc::new(AdminApiClient::new(config.client_config())?);
//! let tree = Arc::new(config.scope_tree()?);
//!
//! let mut editor = ScopeEditor::new(api, Arc::new(LogNotifier), tree, Target::new("64f0c2")?, TargetType::User)
//!     .with_granted(&["users:read".to_string()]);
//! editor.toggle("users:write")?;
//! editor.save().await?;
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod notify;
pub mod session;

pub use config::ConsoleConfig;
pub use error::{ConsoleError, Result};
pub use notify::{LogNotifier, PrintNotifier};
pub use session::{CustomDataEditor, FlagSwitches, ScopeEditor};
