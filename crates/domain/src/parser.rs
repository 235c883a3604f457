//! Command parser — turns one input line into an [`AugmentedCommand`].
//!
//! The line goes through a single forward pass:
//!
//! 1. tokenize on whitespace
//! 2. peel an optional leading location
//! 3. dispatch on the verb (`turn`, `set`, `open`/`close`/`lock`/`unlock`)
//!    and validate the device against the [`Vocabulary`]
//! 4. cut `when`/`until` clauses out of the raw line and parse each one
//!
//! Any stage may abort with a [`ParseError`]; nothing partial is returned.

mod extract;
mod tokens;

use crate::augmented::AugmentedCommand;
use crate::command::{BarrierAction, Command, DeviceState};
use crate::condition::Condition;
use crate::error::ParseError;
use crate::location::Location;
use crate::temperature::Kelvin;
use crate::vocabulary::{DeviceCategory, Vocabulary};

const TO: &str = "to";

/// Parser for the domolect command language.
///
/// Holds nothing but an immutable [`Vocabulary`], so one instance can be
/// shared freely across threads.
#[derive(Debug, Clone)]
pub struct CommandParser {
    vocabulary: Vocabulary,
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new(Vocabulary::standard())
    }
}

impl CommandParser {
    #[must_use]
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Parse a full command line, guards included.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] hit by any stage: empty or short
    /// input, an unknown verb or device, a malformed state or temperature,
    /// or a malformed `when`/`until` clause.
    pub fn parse(&self, input: &str) -> Result<AugmentedCommand, ParseError> {
        let words = tokens::tokenize(input)?;
        let (location, words) = tokens::split_location(&words)?;
        let command = self.parse_command(words, location)?;

        extract::clauses(input).try_fold(
            AugmentedCommand::immediate(command),
            |augmented, (kind, text)| Ok(augmented.with_guard(kind, Condition::parse(text)?)),
        )
    }

    fn parse_command(
        &self,
        words: &[&str],
        location: Option<Location>,
    ) -> Result<Command, ParseError> {
        let Some((verb, args)) = words.split_first() else {
            return Err(ParseError::IncompleteCommand);
        };

        if verb.eq_ignore_ascii_case(tokens::TURN) {
            self.parse_turn(args, location)
        } else if verb.eq_ignore_ascii_case(tokens::SET) {
            self.parse_set(args, location)
        } else if let Some(action) = BarrierAction::from_keyword(verb) {
            self.parse_barrier(action, args, location)
        } else {
            Err(ParseError::InvalidCommandType((*verb).to_string()))
        }
    }

    /// `turn <device> <on|off>`; light sources win over appliances.
    fn parse_turn(&self, args: &[&str], location: Option<Location>) -> Result<Command, ParseError> {
        let [device, state, ..] = args else {
            return Err(ParseError::IncompleteTurnCommand);
        };

        let is_light = self.vocabulary.contains(DeviceCategory::LightSource, device);
        if !is_light && !self.vocabulary.contains(DeviceCategory::Appliance, device) {
            return Err(ParseError::InvalidDeviceType((*device).to_string()));
        }

        let device = (*device).to_string();
        let state: DeviceState = state.parse()?;
        Ok(if is_light {
            Command::Lighting {
                device,
                state,
                location,
            }
        } else {
            Command::Appliance {
                device,
                state,
                location,
            }
        })
    }

    /// `open|close|lock|unlock <barrier>`
    fn parse_barrier(
        &self,
        action: BarrierAction,
        args: &[&str],
        location: Option<Location>,
    ) -> Result<Command, ParseError> {
        let [device, ..] = args else {
            return Err(ParseError::IncompleteBarrierCommand);
        };

        if !self.vocabulary.contains(DeviceCategory::Barrier, device) {
            return Err(ParseError::InvalidBarrierType((*device).to_string()));
        }

        Ok(Command::Barrier {
            device: (*device).to_string(),
            action,
            location,
        })
    }

    /// `set <thermal_device> to <integer>[ ]K`
    fn parse_set(&self, args: &[&str], location: Option<Location>) -> Result<Command, ParseError> {
        let [device, to, number, rest @ ..] = args else {
            return Err(ParseError::IncompleteSetCommand);
        };

        if !self.vocabulary.contains(DeviceCategory::ThermalDevice, device) {
            return Err(ParseError::InvalidThermalDeviceType((*device).to_string()));
        }
        if !to.eq_ignore_ascii_case(TO) {
            return Err(ParseError::ExpectedToKeyword((*to).to_string()));
        }

        let target = match rest.first() {
            Some(unit) if unit.eq_ignore_ascii_case("k") => {
                Kelvin::parse_literal(&format!("{number} {unit}"))?
            }
            _ => Kelvin::parse_literal(number)?,
        };

        Ok(Command::ThermalDevice {
            device: (*device).to_string(),
            target,
            location,
        })
    }
}
