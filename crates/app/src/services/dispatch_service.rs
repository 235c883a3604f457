//! Dispatch service — hands parsed commands to a [`DeviceDriver`].
//!
//! Guards are not evaluated here. A command waiting on a `when` guard is
//! left for an external scheduler; an unguarded one is actuated at once and
//! its reversal is reported if an `until` guard will later need it.

use domolect_domain::augmented::AugmentedCommand;
use domolect_domain::command::Command;
use domolect_domain::error::{ActuationError, DomolectError};

use crate::ports::DeviceDriver;

/// Outcome of dispatching an [`AugmentedCommand`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// The command has a `when` guard and was not actuated.
    Deferred,
    /// The command was actuated.
    Executed {
        /// Command to run once the `until` guard holds, if there is one
        /// and the command can be reversed.
        reversal: Option<Command>,
    },
}

/// Application service that drives devices for parsed commands.
pub struct DispatchService<D> {
    driver: D,
}

impl<D: DeviceDriver> DispatchService<D> {
    /// Create a new service backed by the given driver.
    pub fn new(driver: D) -> Self {
        Self { driver }
    }

    /// Dispatch `augmented` according to its guards.
    ///
    /// # Errors
    ///
    /// Returns [`DomolectError::Actuation`] if the driver refuses the command.
    pub fn dispatch(&self, augmented: &AugmentedCommand) -> Result<Dispatch, DomolectError> {
        if augmented.when.is_some() {
            tracing::debug!(
                driver = self.driver.name(),
                device = augmented.command.device(),
                "command deferred until its when guard holds"
            );
            return Ok(Dispatch::Deferred);
        }

        self.actuate(&augmented.command)?;

        let reversal = augmented
            .until
            .as_ref()
            .and_then(|_| augmented.command.reversed());
        Ok(Dispatch::Executed { reversal })
    }

    /// Actuate a single command, ignoring any guards.
    ///
    /// # Errors
    ///
    /// Returns the driver's [`ActuationError`].
    pub fn actuate(&self, command: &Command) -> Result<(), ActuationError> {
        let location = command.location();
        let result = match command {
            Command::Lighting { device, state, .. } => {
                self.driver.switch_light(device, *state, location)
            }
            Command::Appliance { device, state, .. } => {
                self.driver.switch_appliance(device, *state, location)
            }
            Command::Barrier { device, action, .. } => {
                self.driver.operate_barrier(device, *action, location)
            }
            Command::ThermalDevice { device, target, .. } => {
                self.driver.set_temperature(device, *target, location)
            }
        };

        if let Err(err) = &result {
            tracing::warn!(driver = self.driver.name(), error = %err, "actuation failed");
        }
        result
    }
}
