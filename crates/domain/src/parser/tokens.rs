//! Tokenizer and location detection.

use crate::command::BarrierAction;
use crate::error::ParseError;
use crate::location::Location;

pub(super) const TURN: &str = "turn";
pub(super) const SET: &str = "set";

/// Split a line on whitespace runs, requiring at least two tokens.
pub(super) fn tokenize(input: &str) -> Result<Vec<&str>, ParseError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    match tokens.len() {
        0 => Err(ParseError::EmptyInput),
        1 => Err(ParseError::IncompleteCommand),
        _ => Ok(tokens),
    }
}

/// Whether `word` starts a command (`turn`, `set` or a barrier verb).
pub(super) fn is_command_keyword(word: &str) -> bool {
    word.eq_ignore_ascii_case(TURN)
        || word.eq_ignore_ascii_case(SET)
        || BarrierAction::from_keyword(word).is_some()
}

/// Peel a leading location off `tokens`.
///
/// A first token that is not a command keyword names a location; at least
/// two tokens must follow it.
pub(super) fn split_location<'a, 'b>(
    tokens: &'b [&'a str],
) -> Result<(Option<Location>, &'b [&'a str]), ParseError> {
    match tokens {
        [first, rest @ ..] if !is_command_keyword(first) => {
            if rest.len() < 2 {
                return Err(ParseError::IncompleteCommandAfterLocation);
            }
            Ok((Some(Location::new(*first)), rest))
        }
        _ => Ok((None, tokens)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reject_empty_input() {
        assert_eq!(tokenize(""), Err(ParseError::EmptyInput));
        assert_eq!(tokenize("   \t "), Err(ParseError::EmptyInput));
    }

    #[test]
    fn should_reject_single_token() {
        assert_eq!(tokenize("turn"), Err(ParseError::IncompleteCommand));
    }

    #[test]
    fn should_split_on_whitespace_runs() {
        assert_eq!(
            tokenize("  turn \t lamp   on ").unwrap(),
            vec!["turn", "lamp", "on"]
        );
    }

    #[test]
    fn should_recognize_command_keywords_ignoring_case() {
        for word in ["turn", "SET", "Open", "close", "LOCK", "unlock"] {
            assert!(is_command_keyword(word), "{word} should be a keyword");
        }
        assert!(!is_command_keyword("kitchen"));
        assert!(!is_command_keyword("turned"));
    }

    #[test]
    fn should_leave_tokens_untouched_without_location() {
        let tokens = ["open", "gate"];
        let (location, rest) = split_location(&tokens).unwrap();
        assert!(location.is_none());
        assert_eq!(rest, &["open", "gate"]);
    }

    #[test]
    fn should_peel_leading_location() {
        let tokens = ["bedroom", "turn", "lamp", "on"];
        let (location, rest) = split_location(&tokens).unwrap();
        assert_eq!(location, Some(Location::new("bedroom")));
        assert_eq!(rest, &["turn", "lamp", "on"]);
    }

    #[test]
    fn should_require_two_tokens_after_location() {
        let tokens = ["living-room", "turn"];
        assert_eq!(
            split_location(&tokens),
            Err(ParseError::IncompleteCommandAfterLocation)
        );
    }
}
