//! Deterministic simulation engine.
//!
//! Consumes a [`Scenario`](quotesim_core::Scenario) and produces an ordered
//! event log plus a derived summary. Pure and total: no I/O, no clock, no
//! randomness, and no failure modes beyond what the type system admits.

mod engine;
mod report;

pub use engine::{simulate, SimulationEngine, SimulationRun};
