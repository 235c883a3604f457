//! Command service — parse a line and describe its simulated execution.

use domolect_domain::augmented::AugmentedCommand;
use domolect_domain::error::ParseError;
use domolect_domain::parser::CommandParser;

use crate::simulation;

/// Application service behind the interactive prompt.
#[derive(Debug, Clone, Default)]
pub struct CommandService {
    parser: CommandParser,
}

impl CommandService {
    /// Create a new service around the given parser.
    #[must_use]
    pub fn new(parser: CommandParser) -> Self {
        Self { parser }
    }

    /// Parse `line` into a structured command.
    ///
    /// # Errors
    ///
    /// Returns the [`ParseError`] diagnosing why `line` is malformed.
    pub fn parse(&self, line: &str) -> Result<AugmentedCommand, ParseError> {
        match self.parser.parse(line) {
            Ok(augmented) => {
                tracing::debug!(
                    kind = %augmented.command.kind(),
                    device = augmented.command.device(),
                    guarded = augmented.when.is_some() || augmented.until.is_some(),
                    "command parsed"
                );
                Ok(augmented)
            }
            Err(err) => {
                tracing::info!(input = line, error = %err, "command rejected");
                Err(err)
            }
        }
    }

    /// Parse `line` and return the description of its simulated execution.
    ///
    /// # Errors
    ///
    /// Returns the [`ParseError`] diagnosing why `line` is malformed.
    pub fn interpret(&self, line: &str) -> Result<String, ParseError> {
        self.parse(line).map(|augmented| simulation::describe(&augmented))
    }
}
