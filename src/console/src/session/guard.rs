//! Single-flight guard for save actions

use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{ConsoleError, Result};

/// Tracks whether a save is running; at most one at a time
#[derive(Debug, Default)]
pub struct InFlight(AtomicBool);

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the slot, failing with `SaveInProgress` if it is taken
    pub fn try_begin(&self) -> Result<InFlightGuard<'_>> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| ConsoleError::SaveInProgress)?;
        Ok(InFlightGuard { flag: &self.0 })
    }

    pub fn is_active(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Releases the slot when dropped
#[derive(Debug)]
pub struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_claim_fails_until_released() {
        let in_flight = InFlight::new();

        let guard = in_flight.try_begin().unwrap();
        assert!(in_flight.is_active());
        assert!(matches!(in_flight.try_begin(), Err(ConsoleError::SaveInProgress)));

        drop(guard);
        assert!(!in_flight.is_active());
        assert!(in_flight.try_begin().is_ok());
    }
}
