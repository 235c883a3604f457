//! Virtual thermal device — holds a target temperature.

use domolect_domain::temperature::Kelvin;

/// A simulated thermostat-like device with no setpoint until first set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VirtualThermal {
    target: Option<Kelvin>,
}

impl VirtualThermal {
    #[must_use]
    pub fn target(&self) -> Option<Kelvin> {
        self.target
    }

    /// Replace the setpoint, returning the previous one.
    pub fn set_target(&mut self, target: Kelvin) -> Option<Kelvin> {
        self.target.replace(target)
    }
}
