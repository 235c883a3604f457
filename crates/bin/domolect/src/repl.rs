//! Line-oriented read-eval-print loop.
//!
//! Generic over its input and output so it can run on stdin/stdout or on
//! in-memory buffers.

use std::io::{BufRead, Write};

use domolect_app::ports::DeviceDriver;
use domolect_app::services::command_service::CommandService;
use domolect_app::services::dispatch_service::{Dispatch, DispatchService};
use domolect_app::simulation;
use domolect_domain::augmented::AugmentedCommand;

use crate::config::{Config, OutputFormat};

const EXIT: &str = "exit";

/// Errors that stop the loop. Malformed commands never do.
#[derive(Debug, thiserror::Error)]
pub enum ReplError {
    #[error("terminal I/O failed")]
    Io(#[from] std::io::Error),
    #[error("failed to encode command as JSON")]
    Encode(#[from] serde_json::Error),
}

/// The interactive prompt.
pub struct Repl<'a> {
    prompt: String,
    banner: String,
    format: OutputFormat,
    commands: CommandService,
    dispatcher: Option<DispatchService<&'a dyn DeviceDriver>>,
}

impl<'a> Repl<'a> {
    #[must_use]
    pub fn new(config: &Config, commands: CommandService) -> Self {
        Self {
            prompt: config.repl.prompt.clone(),
            banner: config.repl.banner.clone(),
            format: config.output.format,
            commands,
            dispatcher: None,
        }
    }

    /// Also hand every recognised command to `driver`.
    #[must_use]
    pub fn with_driver(mut self, driver: &'a dyn DeviceDriver) -> Self {
        self.dispatcher = Some(DispatchService::new(driver));
        self
    }

    /// Run until `exit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns [`ReplError`] if reading, writing or encoding fails.
    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> Result<(), ReplError> {
        writeln!(output, "{}", self.banner)?;

        let mut lines = input.lines();
        loop {
            write!(output, "{}", self.prompt)?;
            output.flush()?;

            let Some(line) = lines.next().transpose()? else {
                tracing::debug!("end of input");
                break;
            };
            if line.trim().eq_ignore_ascii_case(EXIT) {
                break;
            }

            writeln!(output, "{}", self.respond(&line)?)?;
        }

        output.flush()?;
        Ok(())
    }

    /// Evaluate a single line and return what to print for it.
    ///
    /// # Errors
    ///
    /// Returns [`ReplError::Encode`] if JSON output fails to serialize.
    pub fn respond(&self, line: &str) -> Result<String, ReplError> {
        let augmented = match self.commands.parse(line) {
            Ok(augmented) => augmented,
            Err(err) => return Ok(format!("Error: {err}")),
        };

        self.dispatch(&augmented);

        match self.format {
            OutputFormat::Text => Ok(simulation::describe(&augmented)),
            OutputFormat::Json => Ok(serde_json::to_string(&augmented)?),
        }
    }

    fn dispatch(&self, augmented: &AugmentedCommand) {
        let Some(dispatcher) = &self.dispatcher else {
            return;
        };
        match dispatcher.dispatch(augmented) {
            Ok(Dispatch::Deferred) => {
                tracing::info!(device = augmented.command.device(), "dispatch deferred");
            }
            Ok(Dispatch::Executed { reversal }) => {
                tracing::info!(
                    device = augmented.command.device(),
                    reversible = reversal.is_some(),
                    "dispatch executed"
                );
            }
            Err(err) => {
                tracing::warn!(device = augmented.command.device(), error = %err, "dispatch failed");
            }
        }
    }
}
