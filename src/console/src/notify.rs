//! Notifier implementations

use tracing::{error, info};
use useradmin_core::{Notice, NoticeLevel, Notifier};

/// Emits notices as tracing events
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: &Notice) {
        match notice.level {
            NoticeLevel::Success => info!(message = %notice.message, "Operator notice"),
            NoticeLevel::Error => error!(message = %notice.message, "Operator notice"),
        }
    }
}

/// Writes notices to stderr for the command-line front end
#[derive(Debug, Default, Clone, Copy)]
pub struct PrintNotifier;

impl Notifier for PrintNotifier {
    fn notify(&self, notice: &Notice) {
        eprintln!("{}", notice);
    }
}
