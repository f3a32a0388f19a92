//! Core data types for the quote simulator.

mod event;
mod fill;
mod scenario;
mod summary;

pub use event::{Action, Actor, Event, Quote};
pub use fill::HumanFill;
pub use scenario::{parse_ticks, PricePathPreset, Scenario};
pub use summary::RunSummary;
