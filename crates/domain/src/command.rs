//! Command — the base action of a parsed line.
//!
//! A [`Command`] is a closed set of four variants, one per device family.
//! Every variant carries the device name exactly as typed and an optional
//! [`Location`].

mod barrier_action;
mod state;

pub use barrier_action::BarrierAction;
pub use state::DeviceState;

use serde::{Deserialize, Serialize};

use crate::location::Location;
use crate::temperature::Kelvin;

/// A validated home-automation command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Switch a light source on or off.
    Lighting {
        device: String,
        state: DeviceState,
        location: Option<Location>,
    },
    /// Switch an appliance on or off.
    Appliance {
        device: String,
        state: DeviceState,
        location: Option<Location>,
    },
    /// Open, close, lock or unlock a barrier.
    Barrier {
        device: String,
        action: BarrierAction,
        location: Option<Location>,
    },
    /// Set a thermal device's target temperature.
    ThermalDevice {
        device: String,
        target: Kelvin,
        location: Option<Location>,
    },
}

/// Discriminant of a [`Command`], used when reporting what was recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandKind {
    Lighting,
    Appliance,
    Barrier,
    ThermalDevice,
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lighting => f.write_str("Lighting"),
            Self::Appliance => f.write_str("Appliance"),
            Self::Barrier => f.write_str("Barrier"),
            Self::ThermalDevice => f.write_str("ThermalDevice"),
        }
    }
}

impl Command {
    #[must_use]
    pub fn kind(&self) -> CommandKind {
        match self {
            Self::Lighting { .. } => CommandKind::Lighting,
            Self::Appliance { .. } => CommandKind::Appliance,
            Self::Barrier { .. } => CommandKind::Barrier,
            Self::ThermalDevice { .. } => CommandKind::ThermalDevice,
        }
    }

    #[must_use]
    pub fn device(&self) -> &str {
        match self {
            Self::Lighting { device, .. }
            | Self::Appliance { device, .. }
            | Self::Barrier { device, .. }
            | Self::ThermalDevice { device, .. } => device,
        }
    }

    #[must_use]
    pub fn location(&self) -> Option<&Location> {
        match self {
            Self::Lighting { location, .. }
            | Self::Appliance { location, .. }
            | Self::Barrier { location, .. }
            | Self::ThermalDevice { location, .. } => location.as_ref(),
        }
    }

    /// The command that undoes this one once an `until` guard is met.
    ///
    /// Switches flip state and barrier actions swap with their inverse.
    /// A temperature setpoint has no inverse, so thermal commands return `None`.
    #[must_use]
    pub fn reversed(&self) -> Option<Self> {
        match self {
            Self::Lighting {
                device,
                state,
                location,
            } => Some(Self::Lighting {
                device: device.clone(),
                state: state.inverse(),
                location: location.clone(),
            }),
            Self::Appliance {
                device,
                state,
                location,
            } => Some(Self::Appliance {
                device: device.clone(),
                state: state.inverse(),
                location: location.clone(),
            }),
            Self::Barrier {
                device,
                action,
                location,
            } => Some(Self::Barrier {
                device: device.clone(),
                action: action.inverse(),
                location: location.clone(),
            }),
            Self::ThermalDevice { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coffee_maker_on() -> Command {
        Command::Appliance {
            device: "coffee-maker".to_string(),
            state: DeviceState::On,
            location: Some(Location::new("kitchen")),
        }
    }

    #[test]
    fn should_report_kind_for_each_variant() {
        assert_eq!(coffee_maker_on().kind(), CommandKind::Appliance);
        let gate = Command::Barrier {
            device: "gate".to_string(),
            action: BarrierAction::Open,
            location: None,
        };
        assert_eq!(gate.kind(), CommandKind::Barrier);
        assert_eq!(CommandKind::ThermalDevice.to_string(), "ThermalDevice");
    }

    #[test]
    fn should_expose_device_and_location() {
        let cmd = coffee_maker_on();
        assert_eq!(cmd.device(), "coffee-maker");
        assert_eq!(cmd.location().map(Location::name), Some("kitchen"));
    }

    #[test]
    fn should_reverse_switch_command_by_flipping_state() {
        let reversed = coffee_maker_on().reversed().unwrap();
        assert_eq!(
            reversed,
            Command::Appliance {
                device: "coffee-maker".to_string(),
                state: DeviceState::Off,
                location: Some(Location::new("kitchen")),
            }
        );
    }

    #[test]
    fn should_reverse_barrier_command_with_inverse_action() {
        let lock = Command::Barrier {
            device: "airlock".to_string(),
            action: BarrierAction::Lock,
            location: None,
        };
        assert!(matches!(
            lock.reversed(),
            Some(Command::Barrier {
                action: BarrierAction::Unlock,
                ..
            })
        ));
    }

    #[test]
    fn should_not_reverse_thermal_command() {
        let cmd = Command::ThermalDevice {
            device: "thermostat".to_string(),
            target: Kelvin::new(295).unwrap(),
            location: None,
        };
        assert!(cmd.reversed().is_none());
    }

    #[test]
    fn should_deserialize_lighting_from_tagged_json() {
        let json = serde_json::json!({
            "type": "lighting",
            "device": "lamp",
            "state": "on",
            "location": null
        });
        let cmd: Command = serde_json::from_value(json).unwrap();
        assert!(matches!(
            cmd,
            Command::Lighting { ref device, state: DeviceState::On, location: None } if device == "lamp"
        ));
    }

    #[test]
    fn should_serialize_thermal_command_with_snake_case_tag() {
        let cmd = Command::ThermalDevice {
            device: "oven".to_string(),
            target: Kelvin::new(450).unwrap(),
            location: Some(Location::new("kitchen")),
        };
        let value = serde_json::to_value(&cmd).unwrap();
        assert_eq!(value["type"], "thermal_device");
        assert_eq!(value["target"], 450);
        assert_eq!(value["location"], "kitchen");
    }
}
