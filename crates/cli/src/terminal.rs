// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal I/O.
use anyhow::Result;
use log::{debug, info};
use std::io::{BufRead, Write};

use handodds_core::{Hand, HandReport, Opponents, Session};
use handodds_eval::{Deck, FREQUENCIES, FrequencyTable, TOTAL_HANDS, hand_probability};

/// How the final report is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Human readable text.
    #[default]
    Text,
    /// A JSON object.
    Json,
}

/// Runs the card entry loop until the user quits or the input ends.
///
/// Once the hand is complete only the opponents can be changed, each change
/// prints the updated report. Returns the last report if the hand was
/// completed.
pub fn run(
    input: impl BufRead,
    w: &mut impl Write,
    session: &mut Session,
    format: ReportFormat,
) -> Result<Option<HandReport>> {
    let mut lines = input.lines();

    loop {
        if session.hand().is_full() {
            write!(w, "Opponents (o count) or q: ")?;
        } else {
            write!(
                w,
                "Card {}/{} (suit rank): ",
                session.hand().len() + 1,
                Hand::SIZE
            )?;
        }
        w.flush()?;

        let Some(line) = lines.next() else {
            writeln!(w)?;
            break;
        };
        let line = line?;

        let fields = line.split_whitespace().collect::<Vec<_>>();
        let (suit, rank) = match fields.as_slice() {
            [] => continue,
            ["q" | "quit"] => break,
            ["o", count] => {
                let opponents = Opponents::from_input(count);
                match session.set_opponents(opponents) {
                    Some(report) => print_report(w, &report, format)?,
                    None => writeln!(w, "Playing against {opponents} opponent(s)")?,
                }
                continue;
            }
            [suit, rank] => (*suit, *rank),
            [suit] => (*suit, ""),
            _ => {
                writeln!(
                    w,
                    "Enter a suit and a rank, e.g. 'h a' or 'Spades 10', or 'o 3' for 3 opponents"
                )?;
                continue;
            }
        };

        match session.submit_card(suit, rank) {
            Ok(report) => {
                print_hand(w, session.hand())?;
                if let Some(report) = report {
                    print_report(w, &report, format)?;
                }
            }
            Err(e) => {
                debug!("Rejected input '{line}': {e:?}");
                writeln!(w, "{e}")?;
            }
        }
    }

    Ok(session.report().copied())
}

/// Prints the hand cards in entry order.
pub fn print_hand(w: &mut impl Write, hand: &Hand) -> Result<()> {
    writeln!(w, "Your hand:")?;
    for card in hand.cards() {
        writeln!(w, "  {card}")?;
    }

    Ok(())
}

/// Prints a hand report.
pub fn print_report(w: &mut impl Write, report: &HandReport, format: ReportFormat) -> Result<()> {
    match format {
        ReportFormat::Text => {
            writeln!(w, "You have a {}!", report.category)?;
            writeln!(
                w,
                "Probability of this hand: {:.6}%",
                report.hand_probability * 100.0
            )?;
            writeln!(
                w,
                "Estimated likelihood of winning against {} opponent(s): {:.2}%",
                report.opponents,
                report.win_likelihood * 100.0
            )?;
        }
        ReportFormat::Json => {
            serde_json::to_writer(&mut *w, report)?;
            writeln!(w)?;
        }
    }

    Ok(())
}

/// Prints the frequency table with each category probability.
pub fn print_table(w: &mut impl Write) -> Result<()> {
    writeln!(w, "{:<16} {:>10} {:>12}", "Category", "Hands", "Probability")?;
    for (category, frequency) in FREQUENCIES.iter().rev() {
        writeln!(
            w,
            "{:<16} {:>10} {:>11.6}%",
            category.name(),
            frequency,
            hand_probability(category) * 100.0
        )?;
    }
    writeln!(w, "{:<16} {:>10}", "Total", TOTAL_HANDS)?;

    Ok(())
}

/// Classifies all hands in a deck and compares the counts with the table.
///
/// Returns true if all counts match.
pub fn verify(w: &mut impl Write) -> Result<bool> {
    info!("Classifying all {TOTAL_HANDS} hands");
    let counted = FrequencyTable::count(&Deck::default());

    let mut matches = true;
    for ((category, expected), (_, actual)) in FREQUENCIES.iter().rev().zip(counted.iter().rev()) {
        let status = if expected == actual { "ok" } else { "MISMATCH" };
        matches &= expected == actual;
        writeln!(w, "{:<16} {:>10} {:>10} {status}", category.name(), expected, actual)?;
    }
    writeln!(w, "{:<16} {:>10} {:>10}", "Total", FREQUENCIES.total(), counted.total())?;

    Ok(matches)
}
