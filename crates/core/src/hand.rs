// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! The hand being entered.
use serde::Serialize;

use handodds_cards::Card;

use crate::error::{Error, Result};

/// An ordered hand of up to [Hand::SIZE] distinct cards.
///
/// Cards are kept in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// The number of cards in a complete hand.
    pub const SIZE: usize = 5;

    /// Creates an empty hand.
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(Self::SIZE),
        }
    }

    /// Adds a card to the hand.
    ///
    /// Fails without changing the hand if the hand is full or if the card is
    /// already in the hand.
    pub fn push(&mut self, card: Card) -> Result<()> {
        if self.is_full() {
            return Err(Error::HandFull);
        }

        if self.contains(card) {
            return Err(Error::DuplicateCard(card));
        }

        self.cards.push(card);
        Ok(())
    }

    /// Checks if the hand contains a card.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// The hand cards in entry order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards in the hand.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the hand is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Checks if the hand has all its cards.
    pub fn is_full(&self) -> bool {
        self.cards.len() == Self::SIZE
    }

    /// Returns the cards of a complete hand.
    pub fn complete(&self) -> Option<&[Card; Self::SIZE]> {
        self.cards.as_slice().try_into().ok()
    }
}
