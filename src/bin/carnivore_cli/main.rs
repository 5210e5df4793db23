// ABOUTME: Carnivore CLI - runs the nutrient and recovery engine from the command line
// ABOUTME: Metrics, violation classification, recovery protocols, vitamin D and the trophy catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Daily metrics for a JSON list of food entries
//! carnivore-cli metrics --entries today.json --profile me.json
//!
//! # Classify a violation report
//! carnivore-cli classify "had a slice of birthday cake"
//!
//! # Recovery protocol with a custom fasting window
//! carnivore-cli protocol "two beers and fries" --hours 20
//!
//! # Vitamin D from 30 minutes of cloudy sun
//! carnivore-cli vitamin-d --minutes 30 --cloudy
//!
//! # Trophy catalog
//! carnivore-cli trophies
//! ```

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use carnivore_tracker::config::EngineConfig;
use carnivore_tracker::logging::LoggingConfig;

#[derive(Parser)]
#[command(
    name = "carnivore-cli",
    about = "Carnivore Tracker computation engine CLI",
    long_about = "Runs nutrient aggregation, violation classification, recovery protocol generation and trophy lookups. Output is pretty-printed JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Aggregate a day's food entries into metrics
    Metrics {
        /// JSON file holding a list of food entries
        #[arg(long)]
        entries: PathBuf,

        /// JSON file holding the user profile
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Minutes of sun exposure to add to vitamin D
        #[arg(long)]
        sun_minutes: Option<f64>,
    },

    /// Detect the violation category of free text
    Classify {
        /// Violation description
        text: String,
    },

    /// Generate a recovery protocol for a violation report
    Protocol {
        /// Violation description
        text: String,

        /// Override the default fasting window in hours
        #[arg(long)]
        hours: Option<u32>,
    },

    /// Estimate vitamin D synthesis from sun exposure
    VitaminD {
        /// Minutes in the sun
        #[arg(long)]
        minutes: f64,

        /// Overcast sky
        #[arg(long)]
        cloudy: bool,

        /// UV index for the session
        #[arg(long)]
        uv_index: Option<f64>,

        /// Cloud cover percent, overrides --cloudy
        #[arg(long)]
        cloud_cover: Option<f64>,

        /// Share of skin exposed (0.0-1.0)
        #[arg(long, default_value = "0.25")]
        exposure_fraction: f64,
    },

    /// List the trophy catalog
    Trophies,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    // invalid overrides fall back to defaults with a warning
    let config = EngineConfig::global();
    debug!("Engine configuration loaded");

    let output = match cli.command {
        Command::Metrics {
            entries,
            profile,
            sun_minutes,
        } => commands::metrics(config, &entries, profile.as_deref(), sun_minutes)?,
        Command::Classify { text } => commands::classify(&text),
        Command::Protocol { text, hours } => commands::protocol(config, &text, hours).await?,
        Command::VitaminD {
            minutes,
            cloudy,
            uv_index,
            cloud_cover,
            exposure_fraction,
        } => commands::vitamin_d(
            config,
            commands::exposure(minutes, !cloudy, uv_index, cloud_cover, exposure_fraction),
        ),
        Command::Trophies => commands::trophies(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
