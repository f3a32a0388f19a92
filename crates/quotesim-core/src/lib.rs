//! Core types for the quote simulator.
//!
//! This crate provides the foundational building blocks including:
//! - The immutable scenario configuration (`Scenario`, `PricePathPreset`)
//! - Event log types (`Event`, `Actor`, `Action`, `Quote`)
//! - Run outcome types (`HumanFill`, `RunSummary`)

pub mod types;
pub mod error;

pub use error::{SimError, SimResult};
pub use types::*;
