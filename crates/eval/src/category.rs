// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand categories.
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// A 5 cards hand category.
///
/// Categories are ordered by strength, the discriminant is the strength rank
/// from 1 for a high card to 10 for a royal flush.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    /// No matches.
    HighCard = 1,
    /// One card matches another.
    OnePair,
    /// Two different pairs of matching cards.
    TwoPair,
    /// Three of the same value.
    ThreeOfAKind,
    /// Five cards in a sequence.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of one value and two of another value.
    FullHouse,
    /// Four of the same value.
    FourOfAKind,
    /// Five cards in a sequence all of the same suit.
    StraightFlush,
    /// Ten to ace all of the same suit.
    RoyalFlush,
}

impl HandCategory {
    /// Number of categories.
    pub const COUNT: usize = 10;

    /// Returns all categories from the weakest to the strongest.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> + ExactSizeIterator {
        use HandCategory::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }

    /// The strength rank, 1 for a high card up to 10 for a royal flush.
    pub fn strength(&self) -> u8 {
        *self as u8
    }

    /// Zero based index for category indexed tables.
    pub(crate) fn index(&self) -> usize {
        self.strength() as usize - 1
    }

    /// The category display name.
    pub fn name(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown category name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown hand category '{0}'")]
pub struct ParseCategoryError(String);

impl FromStr for HandCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        HandCategory::categories()
            .find(|c| c.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseCategoryError(name.to_string()))
    }
}

impl Serialize for HandCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for HandCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
