//! Scenario configuration.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

/// Immutable configuration for one simulation run.
///
/// The engine accepts any well-typed scenario as-is: quote relationships are
/// not sanity-checked (`initial_bid > initial_ask` is replayed verbatim) and
/// a negative `take_profit_pct` makes the very first tick cross the
/// threshold. The only shell-side rule is that `qty` must be positive, which
/// [`Scenario::validate`] enforces before the engine is ever invoked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    /// Reference value price is measured against.
    pub fair_price: Decimal,
    /// Algo's opening bid.
    pub initial_bid: Decimal,
    /// Algo's opening ask.
    pub initial_ask: Decimal,
    /// Bid the algo returns to after completing the scenario; also the
    /// floor of the running bid during the walk.
    pub algo_bid_reset: Decimal,
    /// Ask the algo returns to after completing the scenario.
    pub algo_ask_reset: Decimal,
    /// Price of the human's resting limit buy.
    pub human_limit_price: Decimal,
    /// Ordered trade prices the algo walks through; may be empty.
    pub price_step_sequence: Vec<Decimal>,
    /// Percentage above fair price at which the algo sells into the
    /// resting order.
    pub take_profit_pct: Decimal,
    /// Contracts filled when the threshold is crossed.
    pub qty: u32,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            fair_price: dec!(40),
            initial_bid: dec!(20),
            initial_ask: dec!(80),
            algo_bid_reset: dec!(20),
            algo_ask_reset: dec!(100),
            human_limit_price: dec!(21),
            price_step_sequence: PricePathPreset::AggressiveClimb.ticks(),
            take_profit_pct: dec!(20),
            qty: 1,
        }
    }
}

impl Scenario {
    /// Price level at which the walk triggers the fill-and-reset step:
    /// `fair_price * (1 + take_profit_pct / 100)`.
    pub fn take_profit_threshold(&self) -> Decimal {
        self.fair_price * (Decimal::ONE + self.take_profit_pct / dec!(100))
    }

    /// Shell-side validation. The engine itself never re-checks.
    pub fn validate(&self) -> SimResult<()> {
        if self.qty == 0 {
            return Err(SimError::Scenario(
                "qty must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }

    /// Replace the price path, builder-style.
    pub fn with_ticks(mut self, ticks: Vec<Decimal>) -> Self {
        self.price_step_sequence = ticks;
        self
    }
}

/// Built-in price paths, mirroring the presets of the interactive app this
/// simulator was extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricePathPreset {
    AggressiveClimb,
    SlowClimb,
}

impl PricePathPreset {
    pub const ALL: [PricePathPreset; 2] =
        [PricePathPreset::AggressiveClimb, PricePathPreset::SlowClimb];

    /// Stable name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            PricePathPreset::AggressiveClimb => "aggressive-climb",
            PricePathPreset::SlowClimb => "slow-climb",
        }
    }

    /// The tick sequence this preset expands to.
    pub fn ticks(&self) -> Vec<Decimal> {
        match self {
            PricePathPreset::AggressiveClimb => vec![
                dec!(22),
                dec!(25),
                dec!(30),
                dec!(35),
                dec!(40),
                dec!(42),
                dec!(45),
                dec!(48),
            ],
            PricePathPreset::SlowClimb => {
                // 22, 24, ... 48
                (0..14).map(|i| dec!(22) + dec!(2) * Decimal::from(i)).collect()
            }
        }
    }
}

impl std::fmt::Display for PricePathPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for PricePathPreset {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().replace('_', "-").as_str() {
            "aggressive-climb" => Ok(PricePathPreset::AggressiveClimb),
            "slow-climb" => Ok(PricePathPreset::SlowClimb),
            other => Err(SimError::Scenario(format!(
                "unknown preset '{other}' (expected aggressive-climb or slow-climb)"
            ))),
        }
    }
}

/// Parse a comma-separated tick list, e.g. `"22, 25, 30"`. Blank segments
/// are skipped, so a trailing comma is harmless.
pub fn parse_ticks(text: &str) -> SimResult<Vec<Decimal>> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<Decimal>()
                .map_err(|_| SimError::ParseTick(s.to_string()))
        })
        .collect()
}
