//! Virtual switch — the power state of a light source or appliance.

use domolect_domain::command::DeviceState;

/// A simulated on/off device. Starts switched off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VirtualSwitch {
    state: DeviceState,
}

impl Default for VirtualSwitch {
    fn default() -> Self {
        Self {
            state: DeviceState::Off,
        }
    }
}

impl VirtualSwitch {
    #[must_use]
    pub fn state(&self) -> DeviceState {
        self.state
    }

    /// Switch to `state`, returning the previous state.
    pub fn switch(&mut self, state: DeviceState) -> DeviceState {
        std::mem::replace(&mut self.state, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_off() {
        assert_eq!(VirtualSwitch::default().state(), DeviceState::Off);
    }

    #[test]
    fn should_return_previous_state_when_switched() {
        let mut switch = VirtualSwitch::default();
        assert_eq!(switch.switch(DeviceState::On), DeviceState::Off);
        assert_eq!(switch.switch(DeviceState::On), DeviceState::On);
        assert_eq!(switch.state(), DeviceState::On);
    }
}
