//! Operator notification trait

use crate::types::Notice;

/// Surfaces transient success/failure messages to the operator.
///
/// Editing sessions never fail loudly on a rejected save; they report the
/// outcome here and hand the error back to the caller.
pub trait Notifier: Send + Sync {
    /// Deliver one notice
    fn notify(&self, notice: &Notice);
}

impl<N: Notifier + ?Sized> Notifier for std::sync::Arc<N> {
    fn notify(&self, notice: &Notice) {
        (**self).notify(notice)
    }
}
