//! Run summary.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::{HumanFill, Quote, Scenario};

/// Derived, read-only record computed once after the walk terminates.
///
/// Echoes the scenario fields the outcome is judged against, plus the fill
/// outcome. The `algo_reset_*` fields hold whichever quote was last active:
/// the configured reset pair if the fill happened, otherwise the final
/// walk-state quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub fair_price: Decimal,
    pub human_limit_price: Decimal,
    pub take_profit_pct: Decimal,
    pub take_profit_threshold: Decimal,
    pub qty: u32,
    /// Price the resting buy was filled at, if it was.
    pub human_fill_price: Option<Decimal>,
    /// `fair_price - fill_price`; positive means the human bought below
    /// fair value.
    pub human_pnl_per_contract: Option<Decimal>,
    /// `(fair_price - fill_price) / fill_price * 100`.
    pub human_pnl_percent: Option<Decimal>,
    pub algo_reset_bid: Decimal,
    pub algo_reset_ask: Decimal,
}

impl RunSummary {
    /// Derive the summary from the terminal walk state.
    pub fn derive(scenario: &Scenario, fill: Option<&HumanFill>, final_quote: Quote) -> Self {
        let human_fill_price = fill.map(|f| f.fill_price);
        let human_pnl_per_contract = human_fill_price.map(|p| scenario.fair_price - p);
        let human_pnl_percent =
            human_fill_price.map(|p| (scenario.fair_price - p) / p * dec!(100));

        Self {
            fair_price: scenario.fair_price,
            human_limit_price: scenario.human_limit_price,
            take_profit_pct: scenario.take_profit_pct,
            take_profit_threshold: scenario.take_profit_threshold(),
            qty: scenario.qty,
            human_fill_price,
            human_pnl_per_contract,
            human_pnl_percent,
            algo_reset_bid: final_quote.bid,
            algo_reset_ask: final_quote.ask,
        }
    }

    /// Whether the resting order was filled during the run.
    pub fn filled(&self) -> bool {
        self.human_fill_price.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_with_fill() {
        let scenario = Scenario::default();
        let fill = HumanFill {
            time: 10,
            fill_price: dec!(48),
            qty: 1,
        };
        let summary = RunSummary::derive(&scenario, Some(&fill), Quote::new(dec!(20), dec!(100)));

        assert!(summary.filled());
        assert_eq!(summary.human_fill_price, Some(dec!(48)));
        assert_eq!(summary.human_pnl_per_contract, Some(dec!(-8)));
        // (40 - 48) / 48 * 100
        assert_eq!(
            summary.human_pnl_percent,
            Some((dec!(40) - dec!(48)) / dec!(48) * dec!(100))
        );
        assert_eq!(summary.algo_reset_bid, dec!(20));
        assert_eq!(summary.algo_reset_ask, dec!(100));
    }

    #[test]
    fn test_derive_without_fill() {
        let scenario = Scenario::default();
        let summary = RunSummary::derive(&scenario, None, Quote::new(dec!(46), dec!(50)));

        assert!(!summary.filled());
        assert_eq!(summary.human_fill_price, None);
        assert_eq!(summary.human_pnl_per_contract, None);
        assert_eq!(summary.human_pnl_percent, None);
        // No reset happened; the summary carries the last walk quote.
        assert_eq!(summary.algo_reset_bid, dec!(46));
        assert_eq!(summary.algo_reset_ask, dec!(50));
    }

    #[test]
    fn test_summary_echoes_scenario() {
        let scenario = Scenario::default();
        let summary = RunSummary::derive(&scenario, None, Quote::new(dec!(20), dec!(80)));
        assert_eq!(summary.fair_price, scenario.fair_price);
        assert_eq!(summary.human_limit_price, scenario.human_limit_price);
        assert_eq!(summary.take_profit_pct, scenario.take_profit_pct);
        assert_eq!(summary.take_profit_threshold, dec!(48));
        assert_eq!(summary.qty, scenario.qty);
    }
}
