//! Virtual barrier — position and lock of a gate, window, airlock, …
//!
//! Curtains have no lock. A locked barrier must be unlocked before it can
//! open, and an open barrier must be closed before it can lock.

use domolect_domain::command::BarrierAction;
use domolect_domain::error::ActuationError;

const UNLOCKABLE: &[&str] = &["curtains"];

/// A simulated barrier. Starts closed and unlocked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualBarrier {
    name: String,
    open: bool,
    locked: bool,
}

impl VirtualBarrier {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            open: false,
            locked: false,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    #[must_use]
    pub fn is_lockable(&self) -> bool {
        !UNLOCKABLE.contains(&self.name.as_str())
    }

    /// Apply `action`, leaving the barrier untouched on error.
    ///
    /// # Errors
    ///
    /// - [`ActuationError::Unsupported`] when locking or unlocking a barrier
    ///   without a lock.
    /// - [`ActuationError::Rejected`] when opening a locked barrier or
    ///   locking an open one.
    pub fn operate(&mut self, action: BarrierAction) -> Result<(), ActuationError> {
        let rejected = |reason| ActuationError::Rejected {
            device: self.name.clone(),
            operation: action.keyword(),
            reason,
        };

        match action {
            BarrierAction::Lock | BarrierAction::Unlock if !self.is_lockable() => {
                return Err(ActuationError::Unsupported {
                    device: self.name.clone(),
                    operation: action.keyword(),
                });
            }
            BarrierAction::Open if self.locked => return Err(rejected("barrier is locked")),
            BarrierAction::Lock if self.open => return Err(rejected("barrier is open")),
            _ => {}
        }

        match action {
            BarrierAction::Open => self.open = true,
            BarrierAction::Close => self.open = false,
            BarrierAction::Lock => self.locked = true,
            BarrierAction::Unlock => self.locked = false,
        }
        Ok(())
    }
}
