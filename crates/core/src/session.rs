// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand entry session.
use log::{debug, info};
use serde::{Deserialize, Serialize};

use handodds_cards::Card;
use handodds_eval::{HandCategory, Opponents, classify, hand_probability, win_likelihood};

use crate::{error::Result, hand::Hand};

/// The result of a complete hand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandReport {
    /// The hand category.
    pub category: HandCategory,
    /// The probability of being dealt a hand in this category.
    pub hand_probability: f64,
    /// The estimated likelihood that no opponent holds a stronger category.
    pub win_likelihood: f64,
    /// The number of opponents the likelihood was computed for.
    pub opponents: Opponents,
}

impl HandReport {
    fn new(category: HandCategory, opponents: Opponents) -> Self {
        Self {
            category,
            hand_probability: hand_probability(category),
            win_likelihood: win_likelihood(category, opponents),
            opponents,
        }
    }
}

/// A session where a user enters the cards of one hand.
///
/// The hand is classified once, when the last card is added, after that the
/// hand does not accept more cards.
#[derive(Debug, Default)]
pub struct Session {
    hand: Hand,
    opponents: Opponents,
    report: Option<HandReport>,
}

impl Session {
    /// Creates a session with an empty hand.
    pub fn new(opponents: Opponents) -> Self {
        Self {
            hand: Hand::new(),
            opponents,
            report: None,
        }
    }

    /// Normalizes suit and rank text and adds the card to the hand.
    ///
    /// Returns the hand report when this card completes the hand.
    pub fn submit_card(&mut self, suit: &str, rank: &str) -> Result<Option<HandReport>> {
        let card = Card::parse(suit, rank)?;
        self.add_card(card)
    }

    /// Adds a card to the hand.
    ///
    /// Returns the hand report when this card completes the hand.
    pub fn add_card(&mut self, card: Card) -> Result<Option<HandReport>> {
        self.hand.push(card)?;
        debug!("Added {card} ({}/{})", self.hand.len(), Hand::SIZE);

        Ok(self.hand.complete().map(|cards| {
            let category = classify(cards);
            info!("Hand classified as {category}");

            let report = HandReport::new(category, self.opponents);
            self.report = Some(report);
            report
        }))
    }

    /// Sets the number of opponents.
    ///
    /// If the hand is complete its win likelihood is updated and the updated
    /// report returned, the hand is not classified again.
    pub fn set_opponents(&mut self, opponents: Opponents) -> Option<HandReport> {
        self.opponents = opponents;

        if let Some(report) = self.report.as_mut() {
            debug!("Opponents changed to {opponents}");
            *report = HandReport::new(report.category, opponents);
        }

        self.report
    }

    /// The number of opponents.
    pub fn opponents(&self) -> Opponents {
        self.opponents
    }

    /// The hand being entered.
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// The report of a complete hand.
    pub fn report(&self) -> Option<&HandReport> {
        self.report.as_ref()
    }
}
