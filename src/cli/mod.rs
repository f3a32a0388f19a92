//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quotesim")]
#[command(author, version, about = "Deterministic algo-vs-resting-order simulator")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level
    #[arg(short, long, default_value = "info")]
    pub log_level: LogLevel,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a simulation
    Run(RunArgs),
    /// List built-in price path presets
    Presets,
    /// Validate configuration
    ValidateConfig,
}

#[derive(clap::Args)]
pub struct RunArgs {
    /// Scenario file (TOML); flags below override individual fields
    #[arg(long)]
    pub scenario_file: Option<PathBuf>,

    /// Price path preset (aggressive-climb, slow-climb)
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Comma-separated price ticks; overrides the preset
    #[arg(short, long)]
    pub ticks: Option<String>,

    /// Reference fair price
    #[arg(long)]
    pub fair_price: Option<Decimal>,

    /// Algo's opening bid
    #[arg(long)]
    pub initial_bid: Option<Decimal>,

    /// Algo's opening ask
    #[arg(long)]
    pub initial_ask: Option<Decimal>,

    /// Bid the algo resets to after the scenario
    #[arg(long)]
    pub algo_bid_reset: Option<Decimal>,

    /// Ask the algo resets to after the scenario
    #[arg(long)]
    pub algo_ask_reset: Option<Decimal>,

    /// Price of the human's resting limit buy
    #[arg(long)]
    pub human_limit_price: Option<Decimal>,

    /// Sell threshold as percent above fair price
    #[arg(long)]
    pub take_profit_pct: Option<Decimal>,

    /// Quantity (contracts)
    #[arg(short, long)]
    pub qty: Option<u32>,

    /// Output format (text, json, csv)
    #[arg(long, default_value = "text")]
    pub output: String,

    /// Save results to file
    #[arg(long)]
    pub save: Option<PathBuf>,
}
