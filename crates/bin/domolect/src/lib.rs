//! # domolect — Domolect REPL
//!
//! Composition root that wires the parser, application services and drivers
//! together behind an interactive prompt.
//!
//! ## Responsibilities
//! - Parse configuration (env vars, config file)
//! - Construct the command service around the standard vocabulary
//! - Construct the virtual driver when enabled and inject it into dispatch
//! - Run the read-eval-print loop on stdin/stdout
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

pub mod config;
pub mod repl;
