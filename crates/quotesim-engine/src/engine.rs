//! The simulation walk.

use quotesim_core::types::{Action, Actor, Event, HumanFill, Quote, RunSummary, Scenario};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Result of one simulation run: the ordered event log, the fill record if
/// the resting order was hit, and the derived summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRun {
    pub scenario: Scenario,
    pub events: Vec<Event>,
    pub human_fill: Option<HumanFill>,
    pub summary: RunSummary,
}

/// Simulation engine.
///
/// A finite walk over the scenario's tick sequence. States: start, human
/// resting, walking, then either filled (threshold crossed, quotes reset)
/// or exhausted (sequence consumed, `no_fill` emitted). Both terminal
/// states stop tick processing.
pub struct SimulationEngine {
    scenario: Scenario,
}

impl SimulationEngine {
    /// Create an engine for the given scenario.
    pub fn new(scenario: Scenario) -> Self {
        Self { scenario }
    }

    /// Run the walk. Deterministic for identical input; total over any
    /// well-typed scenario.
    pub fn run(&self) -> SimulationRun {
        let s = &self.scenario;
        let threshold = s.take_profit_threshold();
        debug!(%threshold, ticks = s.price_step_sequence.len(), "starting walk");

        // Fixed events: set_quotes, post_limit_buy, and either
        // sell_into_human + reset_quotes or no_fill.
        let mut events = Vec::with_capacity(s.price_step_sequence.len() + 4);
        let mut time: u64 = 0;
        let mut quote = Quote::new(s.initial_bid, s.initial_ask);
        let mut human_fill: Option<HumanFill> = None;

        events.push(Event::quote_only(
            time,
            Actor::MarketStart,
            Action::SetQuotes,
            quote,
            "Initial wide spread provided by algo",
        ));

        // The resting buy does not move the market; the quote carries over.
        time += 1;
        events.push(Event::traded(
            time,
            Actor::Human,
            Action::PostLimitBuy,
            s.human_limit_price,
            quote,
            format!("Human rests a limit buy for {} at {}", s.qty, s.human_limit_price),
        ));

        for &p in &s.price_step_sequence {
            time += 1;
            // Fixed quoting rule: bid floors at the configured reset bid,
            // ask stays at least one above the bid so the spread is never
            // zero or inverted by the clamp.
            let bid = s.algo_bid_reset.max(p - dec!(2));
            let ask = (bid + Decimal::ONE).max(p + dec!(2));
            quote = Quote::new(bid, ask);
            events.push(Event::traded(
                time,
                Actor::Algo,
                Action::AggressiveBuy,
                p,
                quote,
                format!("Algo trades at {p}, walking the price up"),
            ));

            if p >= threshold {
                time += 1;
                events.push(Event::traded(
                    time,
                    Actor::Algo,
                    Action::SellIntoHuman,
                    p,
                    quote,
                    format!("Algo sells into the resting buy at {p}"),
                ));
                human_fill = Some(HumanFill {
                    time,
                    fill_price: p,
                    qty: s.qty,
                });

                time += 1;
                quote = Quote::new(s.algo_bid_reset, s.algo_ask_reset);
                events.push(Event::quote_only(
                    time,
                    Actor::Algo,
                    Action::ResetQuotes,
                    quote,
                    "Algo retreats to a wide reset spread",
                ));
                // Remaining ticks are never processed.
                break;
            }
        }

        if human_fill.is_none() {
            time += 1;
            events.push(Event::quote_only(
                time,
                Actor::System,
                Action::NoFill,
                quote,
                "Price path exhausted without crossing the take-profit threshold",
            ));
        }

        debug!(events = events.len(), filled = human_fill.is_some(), "walk finished");

        let summary = RunSummary::derive(s, human_fill.as_ref(), quote);
        SimulationRun {
            scenario: s.clone(),
            events,
            human_fill,
            summary,
        }
    }
}

/// Convenience wrapper: run a scenario through a fresh engine.
pub fn simulate(scenario: &Scenario) -> SimulationRun {
    SimulationEngine::new(scenario.clone()).run()
}
