//! `current-temperature <comparison> <integer>[ ]K`

use crate::error::ParseError;
use crate::temperature::Kelvin;

use super::{Comparison, Condition};

pub(super) const SUBJECT: &str = "current-temperature";

/// Parse a temperature guard.
///
/// The literal may be split across two tokens (`300 K`).
pub(super) fn parse(text: &str) -> Result<Condition, ParseError> {
    let malformed = || ParseError::InvalidTemperatureConditionFormat(text.to_string());

    let mut tokens = text.split_whitespace();
    let subject = tokens.next().ok_or_else(malformed)?;
    if !subject.eq_ignore_ascii_case(SUBJECT) {
        return Err(malformed());
    }
    let comparator = tokens.next().ok_or_else(malformed)?;

    let literal: Vec<&str> = tokens.collect();
    if literal.len() > 2 {
        return Err(malformed());
    }

    let comparison: Comparison = comparator.parse()?;
    let threshold = Kelvin::parse_literal(&literal.join(" "))?;

    Ok(Condition::Temperature {
        threshold,
        comparison,
    })
}
