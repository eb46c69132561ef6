//! Editing sessions backing the console views
//!
//! Each session owns the local state of one view (flag switches, custom-data
//! form, scope checklist), talks to the service through [`AdminApi`], and
//! reports outcomes through a [`Notifier`].
//!
//! [`AdminApi`]: useradmin_client::AdminApi
//! [`Notifier`]: useradmin_core::Notifier

mod custom_data;
mod flags;
mod guard;
mod scopes;

pub use custom_data::CustomDataEditor;
pub use flags::FlagSwitches;
pub use guard::{InFlight, InFlightGuard};
pub use scopes::ScopeEditor;

pub(crate) const MSG_UPDATE_COMPLETE: &str = "Update complete";
pub(crate) const MSG_UPDATE_SUCCESSFUL: &str = "Update successful";
pub(crate) const MSG_UPDATE_FAILED: &str = "Update failed!";
pub(crate) const MSG_INVALID_DATA: &str = "Invalid data";
