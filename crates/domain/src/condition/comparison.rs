//! Comparison — how a measured temperature relates to a threshold.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Relation the current temperature must hold to the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Comparison {
    LessThan,
    EqualTo,
    GreaterThan,
}

impl Comparison {
    #[must_use]
    pub fn phrase(self) -> &'static str {
        match self {
            Self::LessThan => "less-than",
            Self::EqualTo => "equal-to",
            Self::GreaterThan => "greater-than",
        }
    }
}

impl FromStr for Comparison {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::LessThan, Self::EqualTo, Self::GreaterThan]
            .into_iter()
            .find(|comparison| s.eq_ignore_ascii_case(comparison.phrase()))
            .ok_or_else(|| ParseError::InvalidComparison(s.to_string()))
    }
}

impl std::fmt::Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.phrase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_hyphenated_phrases_ignoring_case() {
        assert_eq!("less-than".parse::<Comparison>(), Ok(Comparison::LessThan));
        assert_eq!("Equal-To".parse::<Comparison>(), Ok(Comparison::EqualTo));
        assert_eq!("GREATER-THAN".parse::<Comparison>(), Ok(Comparison::GreaterThan));
    }

    #[test]
    fn should_reject_unknown_phrase() {
        assert_eq!(
            "invalid-comp".parse::<Comparison>(),
            Err(ParseError::InvalidComparison("invalid-comp".to_string()))
        );
        assert!("less than".parse::<Comparison>().is_err());
    }

    #[test]
    fn should_serialize_as_kebab_case() {
        let json = serde_json::to_string(&Comparison::GreaterThan).unwrap();
        assert_eq!(json, "\"greater-than\"");
    }
}
