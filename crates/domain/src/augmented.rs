//! Augmented command — a base command with optional `when`/`until` guards.
//!
//! With no `when` guard the command applies immediately; otherwise it waits
//! for the guard to hold. An `until` guard asks for the command to be
//! reversed (see [`Command::reversed`]) once it holds. Watching for either
//! is the job of an external scheduler.

use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::condition::Condition;

/// Keyword introducing a guard clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuardKind {
    When,
    Until,
}

impl GuardKind {
    pub const ALL: [Self; 2] = [Self::When, Self::Until];

    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Self::When => "when",
            Self::Until => "until",
        }
    }
}

impl std::fmt::Display for GuardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A command together with its guard conditions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AugmentedCommand {
    pub when: Option<Condition>,
    pub until: Option<Condition>,
    pub command: Command,
}

impl AugmentedCommand {
    /// A command with no guards.
    #[must_use]
    pub fn immediate(command: Command) -> Self {
        Self {
            when: None,
            until: None,
            command,
        }
    }

    #[must_use]
    pub fn with_guard(mut self, kind: GuardKind, condition: Condition) -> Self {
        match kind {
            GuardKind::When => self.when = Some(condition),
            GuardKind::Until => self.until = Some(condition),
        }
        self
    }

    #[must_use]
    pub fn guard(&self, kind: GuardKind) -> Option<&Condition> {
        match kind {
            GuardKind::When => self.when.as_ref(),
            GuardKind::Until => self.until.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::DeviceState;

    fn lamp_on() -> Command {
        Command::Lighting {
            device: "lamp".to_string(),
            state: DeviceState::On,
            location: None,
        }
    }

    #[test]
    fn should_build_immediate_command_without_guards() {
        let cmd = AugmentedCommand::immediate(lamp_on());
        assert!(cmd.when.is_none());
        assert!(cmd.until.is_none());
    }

    #[test]
    fn should_attach_guard_by_kind() {
        let until = Condition::parse("10:00 pm").unwrap();
        let cmd = AugmentedCommand::immediate(lamp_on()).with_guard(GuardKind::Until, until.clone());
        assert!(cmd.guard(GuardKind::When).is_none());
        assert_eq!(cmd.guard(GuardKind::Until), Some(&until));
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let cmd = AugmentedCommand::immediate(lamp_on())
            .with_guard(
                GuardKind::When,
                Condition::parse("current-temperature less-than 300K").unwrap(),
            )
            .with_guard(GuardKind::Until, Condition::parse("6:30am").unwrap());
        let json = serde_json::to_string(&cmd).unwrap();
        let parsed: AugmentedCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, cmd);
    }
}
