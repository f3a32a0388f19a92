//! Run simulation command.

use anyhow::{Context, Result};
use quotesim_config::{load_config, load_scenario};
use quotesim_core::{parse_ticks, PricePathPreset, Scenario};
use quotesim_engine::{simulate, SimulationRun};
use std::path::Path;
use tracing::{debug, info};

use crate::cli::RunArgs;

pub fn run(args: RunArgs, config_path: &Path) -> Result<()> {
    let mut scenario = base_scenario(&args, config_path)?;
    apply_overrides(&mut scenario, &args)?;

    // All raw-input validation happens here; the engine never re-checks.
    scenario
        .validate()
        .context("Invalid scenario")?;

    info!(
        ticks = scenario.price_step_sequence.len(),
        threshold = %scenario.take_profit_threshold(),
        "running simulation"
    );
    let result = simulate(&scenario);

    let rendered = match args.output.as_str() {
        "json" => result.to_json()?,
        "csv" => result.events_to_csv()?,
        _ => render_text(&result),
    };
    println!("{rendered}");

    if let Some(save_path) = &args.save {
        std::fs::write(save_path, &rendered)
            .with_context(|| format!("Failed to write {}", save_path.display()))?;
        info!("Results saved to {:?}", save_path);
    }

    Ok(())
}

/// Base scenario: an explicit scenario file wins, then the app config's
/// `[scenario]` section if the config file exists, then the built-in
/// defaults.
fn base_scenario(args: &RunArgs, config_path: &Path) -> Result<Scenario> {
    if let Some(path) = &args.scenario_file {
        return load_scenario(path)
            .with_context(|| format!("Failed to load scenario from {}", path.display()));
    }
    if config_path.exists() {
        let config = load_config(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
        return Ok(config.scenario);
    }
    debug!("no config file found, using built-in scenario defaults");
    Ok(Scenario::default())
}

/// Apply per-field flag overrides on top of the base scenario.
fn apply_overrides(scenario: &mut Scenario, args: &RunArgs) -> Result<()> {
    if let Some(v) = args.fair_price {
        scenario.fair_price = v;
    }
    if let Some(v) = args.initial_bid {
        scenario.initial_bid = v;
    }
    if let Some(v) = args.initial_ask {
        scenario.initial_ask = v;
    }
    if let Some(v) = args.algo_bid_reset {
        scenario.algo_bid_reset = v;
    }
    if let Some(v) = args.algo_ask_reset {
        scenario.algo_ask_reset = v;
    }
    if let Some(v) = args.human_limit_price {
        scenario.human_limit_price = v;
    }
    if let Some(v) = args.take_profit_pct {
        scenario.take_profit_pct = v;
    }
    if let Some(v) = args.qty {
        scenario.qty = v;
    }

    // An explicit tick list wins over a preset, matching the original app
    // where the preset only seeded the editable tick field.
    if let Some(preset) = &args.preset {
        let preset: PricePathPreset = preset.parse()?;
        scenario.price_step_sequence = preset.ticks();
    }
    if let Some(text) = &args.ticks {
        scenario.price_step_sequence = parse_ticks(text).context("Invalid --ticks value")?;
    }

    Ok(())
}

/// Render the event log as a table followed by the summary block.
fn render_text(result: &SimulationRun) -> String {
    let mut s = String::new();

    s.push_str(&format!(
        "{:>5}  {:<13} {:<15} {:>9} {:>9} {:>9}  {}\n",
        "time", "actor", "action", "price", "best_bid", "best_ask", "note"
    ));
    s.push_str(
        "───────────────────────────────────────────────────────────────────────────\n",
    );
    for event in &result.events {
        let price = event
            .price
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string());
        s.push_str(&format!(
            "{:>5}  {:<13} {:<15} {:>9} {:>9} {:>9}  {}\n",
            event.time,
            event.actor.to_string(),
            event.action.to_string(),
            price,
            event.best_bid,
            event.best_ask,
            event.note
        ));
    }
    s.push('\n');
    s.push_str(&result.summary_text());

    s
}
