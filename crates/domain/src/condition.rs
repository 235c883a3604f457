//! Condition — a guard attached to a command with `when` or `until`.
//!
//! Conditions are data only. Whether one currently holds is for an
//! external scheduler watching sensors and clocks to decide.

mod clock;
mod comparison;
mod temperature;

pub use comparison::Comparison;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::temperature::Kelvin;

/// A parsed guard predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Condition {
    /// The current temperature compared against a threshold.
    Temperature {
        threshold: Kelvin,
        comparison: Comparison,
    },
    /// A time of day, already in 24-hour form.
    Time { at: NaiveTime },
}

impl Condition {
    /// Parse the raw text that follows a `when`/`until` keyword.
    ///
    /// Text starting with `current-temperature` is a temperature guard;
    /// anything else must be a 12-hour clock time.
    ///
    /// # Errors
    ///
    /// Returns the [`ParseError`] of whichever sub-grammar rejected the text.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let text = text.trim();
        let is_temperature = text
            .get(..temperature::SUBJECT.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(temperature::SUBJECT));

        if is_temperature {
            temperature::parse(text)
        } else {
            clock::parse(text).map(|at| Self::Time { at })
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Temperature {
                threshold,
                comparison,
            } => write!(f, "{} {comparison} {threshold}", temperature::SUBJECT),
            Self::Time { at } => write!(f, "{:02}:{:02}", at.hour(), at.minute()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_route_temperature_text_to_temperature_grammar() {
        let c = Condition::parse("current-temperature less-than 300K").unwrap();
        assert!(matches!(
            c,
            Condition::Temperature {
                comparison: Comparison::LessThan,
                ..
            }
        ));
    }

    #[test]
    fn should_route_other_text_to_clock_grammar() {
        let c = Condition::parse("10:00 pm").unwrap();
        match c {
            Condition::Time { at } => assert_eq!((at.hour(), at.minute()), (22, 0)),
            Condition::Temperature { .. } => panic!("expected a time condition"),
        }
    }

    #[test]
    fn should_report_time_error_for_unrecognized_text() {
        assert!(matches!(
            Condition::parse("temperature cold"),
            Err(ParseError::InvalidTimeFormat(_))
        ));
    }

    #[test]
    fn should_display_temperature_condition() {
        let c = Condition::parse("current-temperature greater-than 300 K").unwrap();
        assert_eq!(c.to_string(), "current-temperature greater-than 300K");
    }

    #[test]
    fn should_display_normalized_time() {
        assert_eq!(Condition::parse("10:00 pm").unwrap().to_string(), "22:00");
        assert_eq!(Condition::parse("12:05am").unwrap().to_string(), "00:05");
    }

    #[test]
    fn should_compare_times_by_normalized_value() {
        assert_eq!(
            Condition::parse("10:00 pm").unwrap(),
            Condition::parse("10:00PM").unwrap()
        );
    }

    #[test]
    fn should_roundtrip_conditions_through_serde_json() {
        let conditions = [
            Condition::parse("current-temperature equal-to 295K").unwrap(),
            Condition::parse("7:15am").unwrap(),
        ];
        for condition in &conditions {
            let json = serde_json::to_string(condition).unwrap();
            let parsed: Condition = serde_json::from_str(&json).unwrap();
            assert_eq!(&parsed, condition);
        }
    }
}
