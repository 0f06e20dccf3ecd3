// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handodds terminal client.
//!
//! Reads the cards of a 5 cards hand from the terminal and prints the hand
//! category, the probability of being dealt it, and the likelihood of winning
//! against a number of opponents.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use clap::Parser;
use log::warn;
use std::io;

use handodds_core::{Opponents, Session};

pub mod terminal;

#[derive(Debug, Parser)]
struct Cli {
    /// The number of opponents, invalid values count as one opponent.
    #[clap(long, short, default_value = "1")]
    opponents: String,
    /// Print the hand report as JSON.
    #[clap(long)]
    json: bool,
    /// Print the hand categories frequency table and exit.
    #[clap(long, conflicts_with = "verify")]
    table: bool,
    /// Classify all 5 cards hands, check the frequency table and exit.
    #[clap(long)]
    verify: bool,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();

    if cli.table {
        return terminal::print_table(&mut stdout);
    }

    if cli.verify {
        if !terminal::verify(&mut stdout)? {
            bail!("Frequency table does not match the classifier");
        }
        return Ok(());
    }

    let opponents = Opponents::from_input(&cli.opponents);
    if opponents.to_string() != cli.opponents.trim() {
        warn!("Using {opponents} opponent(s) for '{}'", cli.opponents);
    }

    let format = if cli.json {
        terminal::ReportFormat::Json
    } else {
        terminal::ReportFormat::Text
    };

    let mut session = Session::new(opponents);
    terminal::run(io::stdin().lock(), &mut stdout, &mut session, format)?;

    Ok(())
}
