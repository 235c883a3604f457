//! Kelvin temperatures and the `<integer>[ ]K` literal.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// A strictly positive whole-kelvin temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kelvin(NonZeroU32);

impl Kelvin {
    /// Wrap `value`, returning `None` for zero.
    #[must_use]
    pub fn new(value: u32) -> Option<Self> {
        NonZeroU32::new(value).map(Self)
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Parse a temperature literal such as `295K`, `295 K` or `295k`.
    ///
    /// # Errors
    ///
    /// - [`ParseError::InvalidTemperatureFormat`] when the `K` unit is missing
    ///   or the number is not an integer that fits in a `u32`.
    /// - [`ParseError::NonPositiveTemperature`] when the number is zero or negative.
    pub fn parse_literal(literal: &str) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidTemperatureFormat(literal.trim().to_string());

        let number = literal
            .trim()
            .strip_suffix(['K', 'k'])
            .ok_or_else(invalid)?
            .trim_end();

        let value: i64 = number.parse().map_err(|_| invalid())?;
        if value <= 0 {
            return Err(ParseError::NonPositiveTemperature(value));
        }

        u32::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or_else(invalid)
    }
}

impl FromStr for Kelvin {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_literal(s)
    }
}

impl fmt::Display for Kelvin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}K", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_attached_unit() {
        assert_eq!(Kelvin::parse_literal("295K").unwrap().get(), 295);
    }

    #[test]
    fn should_parse_spaced_unit_to_same_value() {
        assert_eq!(
            Kelvin::parse_literal("295 K").unwrap(),
            Kelvin::parse_literal("295K").unwrap()
        );
    }

    #[test]
    fn should_accept_lowercase_unit() {
        assert_eq!("300k".parse::<Kelvin>().unwrap().get(), 300);
    }

    #[test]
    fn should_reject_zero() {
        assert_eq!(
            Kelvin::parse_literal("0K"),
            Err(ParseError::NonPositiveTemperature(0))
        );
    }

    #[test]
    fn should_reject_negative() {
        assert_eq!(
            Kelvin::parse_literal("-5K"),
            Err(ParseError::NonPositiveTemperature(-5))
        );
    }

    #[test]
    fn should_reject_non_numeric() {
        assert_eq!(
            Kelvin::parse_literal("abcK"),
            Err(ParseError::InvalidTemperatureFormat("abcK".to_string()))
        );
    }

    #[test]
    fn should_reject_missing_unit() {
        assert!(matches!(
            Kelvin::parse_literal("30C"),
            Err(ParseError::InvalidTemperatureFormat(_))
        ));
        assert!(matches!(
            Kelvin::parse_literal("300"),
            Err(ParseError::InvalidTemperatureFormat(_))
        ));
    }

    #[test]
    fn should_reject_fractional_value() {
        assert!(matches!(
            Kelvin::parse_literal("295.5K"),
            Err(ParseError::InvalidTemperatureFormat(_))
        ));
    }

    #[test]
    fn should_reject_value_beyond_u32() {
        assert!(matches!(
            Kelvin::parse_literal("5000000000K"),
            Err(ParseError::InvalidTemperatureFormat(_))
        ));
    }

    #[test]
    fn should_refuse_to_wrap_zero() {
        assert!(Kelvin::new(0).is_none());
    }

    #[test]
    fn should_display_with_unit() {
        assert_eq!(Kelvin::new(450).unwrap().to_string(), "450K");
    }

    #[test]
    fn should_serialize_as_plain_number() {
        let json = serde_json::to_string(&Kelvin::new(295).unwrap()).unwrap();
        assert_eq!(json, "295");
        assert!(serde_json::from_str::<Kelvin>("0").is_err());
    }
}
