//! Fill record for the resting order.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The fill of the human's resting buy. Created at most once per run, at
/// the `sell_into_human` event, and read-only afterwards. The fill price is
/// the triggering tick exactly; there is no slippage model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HumanFill {
    /// Logical time of the fill event.
    pub time: u64,
    /// Price at which the resting buy was filled.
    pub fill_price: Decimal,
    /// Contracts filled.
    pub qty: u32,
}
