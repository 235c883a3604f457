//! Execution simulator — describes what running a command would do.
//!
//! The description has one line per part, in a fixed order:
//!
//! ```text
//! Command recognized: Lighting
//! When condition: current-temperature less-than 300K
//! Until condition: 22:00
//! Simulated execution: Turning on the lamp at kitchen
//! ```
//!
//! The guard lines only appear when the guard is present.

use domolect_domain::augmented::{AugmentedCommand, GuardKind};
use domolect_domain::command::Command;

/// Render the full execution trace of `augmented`.
#[must_use]
pub fn describe(augmented: &AugmentedCommand) -> String {
    let mut lines = vec![format!("Command recognized: {}", augmented.command.kind())];

    for kind in GuardKind::ALL {
        if let Some(condition) = augmented.guard(kind) {
            let label = match kind {
                GuardKind::When => "When",
                GuardKind::Until => "Until",
            };
            lines.push(format!("{label} condition: {condition}"));
        }
    }

    lines.push(format!("Simulated execution: {}", action_sentence(&augmented.command)));
    lines.join("\n")
}

/// One sentence describing the device action, with an ` at <location>`
/// suffix when the command has a location.
#[must_use]
pub fn action_sentence(command: &Command) -> String {
    let sentence = match command {
        Command::Lighting { device, state, .. } | Command::Appliance { device, state, .. } => {
            format!("Turning {state} the {device}")
        }
        Command::Barrier { device, action, .. } => {
            format!("{} the {device}", action.progressive())
        }
        Command::ThermalDevice { device, target, .. } => {
            format!("Setting {device} to {} K", target.get())
        }
    };

    match command.location() {
        Some(location) => format!("{sentence} at {location}"),
        None => sentence,
    }
}
