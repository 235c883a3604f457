//! # domolect-domain
//!
//! Pure domain model for the domolect home-automation command language.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, kelvin temperatures, locations
//! - Define the **Vocabulary** of recognized devices per category
//! - Define **Commands** (lighting, appliance, barrier, thermal device)
//! - Define **Conditions** (`when`/`until` guards on temperature or time)
//! - Parse a command line into an **Augmented command**
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! Device actuation is expressed as a port trait in the `app` crate.

pub mod error;
pub mod location;
pub mod temperature;

pub mod augmented;
pub mod command;
pub mod condition;
pub mod parser;
pub mod vocabulary;
