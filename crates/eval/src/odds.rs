// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand probabilities.
//!
//! Probabilities are derived from the number of 5 cards combinations of a
//! standard deck that fall in each category, see [FREQUENCIES].
use handodds_cards::{Card, Deck};
use serde::{Deserialize, Serialize};
use std::{fmt, num::NonZeroU32};

use crate::{HandCategory, classify};

/// Number of distinct 5 cards hands in a 52 cards deck.
pub const TOTAL_HANDS: u32 = 2_598_960;

/// Number of 5 cards combinations for each hand category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyTable([u32; HandCategory::COUNT]);

/// The frequencies of a standard 52 cards deck.
pub static FREQUENCIES: FrequencyTable = FrequencyTable([
    1_302_540, // High Card
    1_098_240, // One Pair
    123_552,   // Two Pair
    54_912,    // Three of a Kind
    10_200,    // Straight
    5_108,     // Flush
    3_744,     // Full House
    624,       // Four of a Kind
    36,        // Straight Flush
    4,         // Royal Flush
]);

impl FrequencyTable {
    /// Counts the categories of all 5 cards hands in a deck.
    pub fn count(deck: &Deck) -> Self {
        let mut counts = [0u32; HandCategory::COUNT];
        deck.for_each(5, |cards| {
            if let Ok(hand) = <&[Card; 5]>::try_from(cards) {
                counts[classify(hand).index()] += 1;
            }
        });

        Self(counts)
    }

    /// The number of hands in the given category.
    pub fn frequency(&self, category: HandCategory) -> u32 {
        self.0[category.index()]
    }

    /// The number of hands across all categories.
    pub fn total(&self) -> u64 {
        self.0.iter().map(|&f| u64::from(f)).sum()
    }

    /// The number of hands in categories strictly stronger than `category`.
    pub fn stronger_than(&self, category: HandCategory) -> u32 {
        HandCategory::categories()
            .filter(|c| c > &category)
            .map(|c| self.frequency(c))
            .sum()
    }

    /// Iterates `(category, frequency)` pairs from the weakest category.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (HandCategory, u32)> + '_ {
        HandCategory::categories().map(move |c| (c, self.frequency(c)))
    }
}

/// The number of opponents a hand is played against.
///
/// Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Opponents(NonZeroU32);

impl Opponents {
    /// A single opponent.
    pub const ONE: Opponents = Opponents(NonZeroU32::MIN);

    /// Creates a count, returns `None` for zero.
    pub fn new(count: u32) -> Option<Self> {
        NonZeroU32::new(count).map(Self)
    }

    /// Normalizes user text into an opponents count.
    ///
    /// Leading whitespace is skipped and the longest run of leading digits is
    /// used, so `"3 players"` gives 3. Text without leading digits, zero and
    /// negative values give one opponent.
    pub fn from_input(text: &str) -> Self {
        let text = text.trim_start();
        let text = text.strip_prefix('+').unwrap_or(text);
        let digits = text
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map_or(text, |(i, _)| &text[..i]);

        match digits.parse::<u32>() {
            Ok(count) => Self::new(count).unwrap_or_default(),
            // Either no digits or too many of them.
            Err(_) if digits.is_empty() => Self::ONE,
            Err(_) => Self(NonZeroU32::MAX),
        }
    }

    /// The number of opponents.
    pub fn count(&self) -> u32 {
        self.0.get()
    }
}

impl Default for Opponents {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Opponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The probability of being dealt a hand in the given category.
pub fn hand_probability(category: HandCategory) -> f64 {
    f64::from(FREQUENCIES.frequency(category)) / f64::from(TOTAL_HANDS)
}

/// An estimate of the likelihood that no opponent holds a stronger category.
///
/// Each opponent is treated as an independent 5 cards draw from a full deck,
/// the cards in the hand are not removed from the opponents deck.
pub fn win_likelihood(category: HandCategory, opponents: Opponents) -> f64 {
    let stronger = f64::from(FREQUENCIES.stronger_than(category)) / f64::from(TOTAL_HANDS);
    let not_stronger = 1.0 - stronger;
    let exp = i32::try_from(opponents.count()).unwrap_or(i32::MAX);
    not_stronger.powi(exp).clamp(0.0, 1.0)
}
