//! # domolect-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `DeviceDriver` — actuate lights, appliances, barriers and thermal devices
//! - Define **driving/inbound** use-cases:
//!   - `CommandService` — parse a line and describe its simulated execution
//!   - `DispatchService` — hand a parsed command to a driver
//! - Produce the human-readable execution trace (`simulation`)
//!
//! ## Dependency rule
//! Depends on `domolect-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
pub mod simulation;
