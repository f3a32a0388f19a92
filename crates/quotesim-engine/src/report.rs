//! Rendering and export of a finished run.

use quotesim_core::{SimError, SimResult};

use crate::engine::SimulationRun;

impl SimulationRun {
    /// Generate a text summary of the run.
    pub fn summary_text(&self) -> String {
        let mut s = String::new();

        s.push_str("═══════════════════════════════════════════════════════════\n");
        s.push_str("                     SIMULATION REPORT                      \n");
        s.push_str("═══════════════════════════════════════════════════════════\n\n");

        s.push_str("SCENARIO\n");
        s.push_str("───────────────────────────────────────────────────────────\n");
        s.push_str(&format!("  Fair Price:          {}\n", self.summary.fair_price));
        s.push_str(&format!(
            "  Human Limit Price:   {}\n",
            self.summary.human_limit_price
        ));
        s.push_str(&format!(
            "  Take Profit:         {}% (threshold {})\n",
            self.summary.take_profit_pct, self.summary.take_profit_threshold
        ));
        s.push_str(&format!("  Quantity:            {}\n", self.summary.qty));
        s.push_str(&format!(
            "  Price Ticks:         {}\n",
            self.scenario.price_step_sequence.len()
        ));
        s.push('\n');

        s.push_str("OUTCOME\n");
        s.push_str("───────────────────────────────────────────────────────────\n");
        match (
            self.summary.human_fill_price,
            self.summary.human_pnl_per_contract,
            self.summary.human_pnl_percent,
        ) {
            (Some(fill), Some(pnl), Some(pnl_pct)) => {
                s.push_str(&format!("  Human Fill Price:    {}\n", fill));
                s.push_str(&format!("  PnL per Contract:    {}\n", pnl));
                s.push_str(&format!("  PnL Percent:         {:.2}%\n", pnl_pct));
            }
            _ => {
                s.push_str("  Human Fill Price:    (no fill)\n");
                s.push_str("  PnL per Contract:    (no fill)\n");
            }
        }
        s.push_str(&format!(
            "  Final Quote:         {} / {}\n",
            self.summary.algo_reset_bid, self.summary.algo_reset_ask
        ));
        s.push_str(&format!("  Events:              {}\n", self.events.len()));
        s.push('\n');

        s.push_str("═══════════════════════════════════════════════════════════\n");

        s
    }

    /// Export the whole run to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Export the event log to CSV, one row per event with columns
    /// `time,actor,action,price,best_bid,best_ask,note`. A missing price
    /// serializes as an empty field.
    pub fn events_to_csv(&self) -> SimResult<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for event in &self.events {
            writer
                .serialize(event)
                .map_err(|e| SimError::Serialization(e.to_string()))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| SimError::Serialization(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| SimError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::simulate;
    use quotesim_core::Scenario;
    use rust_decimal_macros::dec;

    #[test]
    fn test_summary_text_with_fill() {
        let run = simulate(&Scenario::default());
        let text = run.summary_text();
        assert!(text.contains("Human Fill Price:    48"));
        assert!(text.contains("PnL per Contract:    -8"));
        assert!(text.contains("Final Quote:         20 / 100"));
    }

    #[test]
    fn test_summary_text_without_fill() {
        let scenario = Scenario {
            take_profit_pct: dec!(200),
            ..Scenario::default()
        };
        let text = simulate(&scenario).summary_text();
        assert!(text.contains("(no fill)"));
    }

    #[test]
    fn test_csv_header_and_empty_price() {
        let run = simulate(&Scenario::default());
        let csv = run.events_to_csv().unwrap();
        let mut lines = csv.lines();

        assert_eq!(
            lines.next().unwrap(),
            "time,actor,action,price,best_bid,best_ask,note"
        );
        // First event is quote-only: the price column is empty.
        let first = lines.next().unwrap();
        assert!(first.starts_with("0,market_start,set_quotes,,20,80,"));

        // One header plus one row per event.
        assert_eq!(csv.lines().count(), 1 + run.events.len());
    }

    #[test]
    fn test_json_roundtrip() {
        let run = simulate(&Scenario::default());
        let json = run.to_json().unwrap();
        let back: crate::engine::SimulationRun = serde_json::from_str(&json).unwrap();
        assert_eq!(back, run);
    }
}
