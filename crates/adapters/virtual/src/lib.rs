//! # domolect-adapter-virtual
//!
//! Virtual driver that actuates simulated devices held in memory, for
//! demonstration and tests.
//!
//! ## Provided devices
//!
//! | Category | Model | Behaviour |
//! |----------|-------|-----------|
//! | Light source, appliance | [`VirtualSwitch`] | on / off, starts off |
//! | Barrier | [`VirtualBarrier`] | open / close / lock / unlock, curtains have no lock |
//! | Thermal device | [`VirtualThermal`] | holds a target temperature |
//!
//! Devices are created on first use, one per `(location, name)` pair.
//!
//! ## Dependency rule
//!
//! Depends on `domolect-app` (port traits) and `domolect-domain` only.

mod devices;

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use domolect_app::ports::DeviceDriver;
use domolect_domain::command::{BarrierAction, DeviceState};
use domolect_domain::error::ActuationError;
use domolect_domain::location::Location;
use domolect_domain::temperature::Kelvin;

pub use devices::{VirtualBarrier, VirtualSwitch, VirtualThermal};

type DeviceKey = (Option<Location>, String);

fn key(device: &str, location: Option<&Location>) -> DeviceKey {
    (location.cloned(), device.to_string())
}

#[derive(Debug, Default)]
struct Devices {
    switches: HashMap<DeviceKey, VirtualSwitch>,
    barriers: HashMap<DeviceKey, VirtualBarrier>,
    thermals: HashMap<DeviceKey, VirtualThermal>,
}

/// Driver that keeps simulated device state in memory.
#[derive(Debug, Default)]
pub struct VirtualDriver {
    devices: Mutex<Devices>,
}

impl VirtualDriver {
    /// Current power state of a light source or appliance, if it was ever
    /// switched.
    #[must_use]
    pub fn switch_state(&self, device: &str, location: Option<&Location>) -> Option<DeviceState> {
        self.lock_devices()
            .switches
            .get(&key(device, location))
            .map(VirtualSwitch::state)
    }

    /// Snapshot of a barrier, if it was ever operated.
    #[must_use]
    pub fn barrier(&self, device: &str, location: Option<&Location>) -> Option<VirtualBarrier> {
        self.lock_devices()
            .barriers
            .get(&key(device, location))
            .cloned()
    }

    /// Target temperature of a thermal device, if it was ever set.
    #[must_use]
    pub fn target_temperature(&self, device: &str, location: Option<&Location>) -> Option<Kelvin> {
        self.lock_devices()
            .thermals
            .get(&key(device, location))
            .and_then(VirtualThermal::target)
    }

    fn switch(&self, device: &str, state: DeviceState, location: Option<&Location>) {
        let previous = self
            .lock_devices()
            .switches
            .entry(key(device, location))
            .or_default()
            .switch(state);
        tracing::info!(
            device,
            location = location.map(Location::name),
            %previous,
            %state,
            "virtual switch actuated"
        );
    }

    fn lock_devices(&self) -> MutexGuard<'_, Devices> {
        self.devices.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DeviceDriver for VirtualDriver {
    fn name(&self) -> &'static str {
        "virtual"
    }

    fn switch_light(
        &self,
        device: &str,
        state: DeviceState,
        location: Option<&Location>,
    ) -> Result<(), ActuationError> {
        self.switch(device, state, location);
        Ok(())
    }

    fn switch_appliance(
        &self,
        device: &str,
        state: DeviceState,
        location: Option<&Location>,
    ) -> Result<(), ActuationError> {
        self.switch(device, state, location);
        Ok(())
    }

    fn operate_barrier(
        &self,
        device: &str,
        action: BarrierAction,
        location: Option<&Location>,
    ) -> Result<(), ActuationError> {
        let mut devices = self.lock_devices();
        let barrier = devices
            .barriers
            .entry(key(device, location))
            .or_insert_with(|| VirtualBarrier::new(device));
        barrier.operate(action)?;
        tracing::info!(
            device,
            location = location.map(Location::name),
            %action,
            open = barrier.is_open(),
            locked = barrier.is_locked(),
            "virtual barrier actuated"
        );
        Ok(())
    }

    fn set_temperature(
        &self,
        device: &str,
        target: Kelvin,
        location: Option<&Location>,
    ) -> Result<(), ActuationError> {
        let previous = self
            .lock_devices()
            .thermals
            .entry(key(device, location))
            .or_default()
            .set_target(target);
        tracing::info!(
            device,
            location = location.map(Location::name),
            previous = previous.map(|k| k.get()),
            %target,
            "virtual thermal device set"
        );
        Ok(())
    }
}
