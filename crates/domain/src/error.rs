//! Common error types used across the workspace.
//!
//! Each layer reports its own typed error and converts into
//! [`DomolectError`] via `#[from]` when it crosses a boundary.

/// Umbrella error for everything a command can fail with.
#[derive(Debug, thiserror::Error)]
pub enum DomolectError {
    /// The input line is not a well-formed command.
    #[error("parse error")]
    Parse(#[from] ParseError),

    /// A device driver refused or failed to carry out a command.
    #[error("actuation error")]
    Actuation(#[from] ActuationError),
}

/// Diagnosis of a malformed command line.
///
/// The `Display` output is the user-facing reason printed after `Error: `.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Empty command")]
    EmptyInput,

    #[error("Incomplete command")]
    IncompleteCommand,

    #[error("Incomplete command after location")]
    IncompleteCommandAfterLocation,

    #[error("Invalid command type: {0}")]
    InvalidCommandType(String),

    #[error("Incomplete turn command")]
    IncompleteTurnCommand,

    #[error("Incomplete barrier command")]
    IncompleteBarrierCommand,

    #[error("Incomplete set command")]
    IncompleteSetCommand,

    #[error("Invalid device type for 'turn' command: {0}")]
    InvalidDeviceType(String),

    #[error("Invalid state '{0}'. Use ON or OFF")]
    InvalidState(String),

    #[error("Invalid barrier type: {0}")]
    InvalidBarrierType(String),

    #[error("Invalid thermal device type: {0}")]
    InvalidThermalDeviceType(String),

    #[error("Expected 'to' after the thermal device, found '{0}'")]
    ExpectedToKeyword(String),

    #[error("Invalid temperature format '{0}', expected an integer followed by K")]
    InvalidTemperatureFormat(String),

    #[error("Temperature must be a positive value, got {0}")]
    NonPositiveTemperature(i64),

    #[error("Invalid comparison: {0}")]
    InvalidComparison(String),

    #[error("Invalid temperature condition format: {0}")]
    InvalidTemperatureConditionFormat(String),

    #[error("Invalid time condition format: {0}")]
    InvalidTimeFormat(String),

    #[error("Invalid time: {0}")]
    InvalidTimeValue(String),
}

/// Failure reported by a device driver.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActuationError {
    /// The device does not support the requested operation.
    #[error("{device} does not support {operation}")]
    Unsupported {
        device: String,
        operation: &'static str,
    },

    /// The device is in a state that forbids the operation.
    #[error("{device} rejected {operation}: {reason}")]
    Rejected {
        device: String,
        operation: &'static str,
        reason: &'static str,
    },
}
