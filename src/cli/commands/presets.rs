//! List price path presets command.

use anyhow::Result;
use quotesim_core::PricePathPreset;

pub fn run() -> Result<()> {
    println!("Built-in Price Paths");
    println!("═══════════════════════════════════════════════════════════");
    println!();

    for preset in PricePathPreset::ALL {
        let ticks: Vec<String> = preset.ticks().iter().map(|t| t.to_string()).collect();
        println!("  {}", preset.name());
        println!("  ───────────────────────────────────────────────────────");
        println!("  {}", ticks.join(", "));
        println!();
    }

    println!("Use --preset <name> to select one, or --ticks to supply your own.");

    Ok(())
}
