//! Device driver port — actuation of physical or simulated devices.
//!
//! The parser never talks to a driver. A driver only ever receives commands
//! that were already validated, through
//! [`DispatchService`](crate::services::dispatch_service::DispatchService).

use domolect_domain::command::{BarrierAction, DeviceState};
use domolect_domain::error::ActuationError;
use domolect_domain::location::Location;
use domolect_domain::temperature::Kelvin;

/// Something that can make devices do what a command asks.
///
/// Implementations live in adapter crates (e.g. `adapter_virtual`).
/// Device names are the vocabulary names exactly as parsed; `location`
/// is `None` when the command applies to the whole premises.
pub trait DeviceDriver {
    /// Unique name identifying this driver (e.g. `"virtual"`).
    fn name(&self) -> &'static str;

    /// Switch a light source on or off.
    fn switch_light(
        &self,
        device: &str,
        state: DeviceState,
        location: Option<&Location>,
    ) -> Result<(), ActuationError>;

    /// Switch an appliance on or off.
    fn switch_appliance(
        &self,
        device: &str,
        state: DeviceState,
        location: Option<&Location>,
    ) -> Result<(), ActuationError>;

    /// Open, close, lock or unlock a barrier.
    fn operate_barrier(
        &self,
        device: &str,
        action: BarrierAction,
        location: Option<&Location>,
    ) -> Result<(), ActuationError>;

    /// Set a thermal device's target temperature.
    fn set_temperature(
        &self,
        device: &str,
        target: Kelvin,
        location: Option<&Location>,
    ) -> Result<(), ActuationError>;
}

impl<D: DeviceDriver + ?Sized> DeviceDriver for &D {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn switch_light(
        &self,
        device: &str,
        state: DeviceState,
        location: Option<&Location>,
    ) -> Result<(), ActuationError> {
        (**self).switch_light(device, state, location)
    }

    fn switch_appliance(
        &self,
        device: &str,
        state: DeviceState,
        location: Option<&Location>,
    ) -> Result<(), ActuationError> {
        (**self).switch_appliance(device, state, location)
    }

    fn operate_barrier(
        &self,
        device: &str,
        action: BarrierAction,
        location: Option<&Location>,
    ) -> Result<(), ActuationError> {
        (**self).operate_barrier(device, action, location)
    }

    fn set_temperature(
        &self,
        device: &str,
        target: Kelvin,
        location: Option<&Location>,
    ) -> Result<(), ActuationError> {
        (**self).set_temperature(device, target, location)
    }
}
