// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Normalization of free-form suit and rank text into cards.
use std::str::FromStr;
use thiserror::Error;

use crate::{Card, Rank, Suit};

/// Error returned when suit or rank text cannot be normalized.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCardError {
    /// The suit or the rank text is empty.
    #[error("Please enter both a suit and a rank")]
    Missing,
    /// The suit text is not a known suit.
    #[error(
        "Invalid suit '{0}'. Please enter one of the following: \
         Hearts (H), Diamonds (D), Clubs (C), Spades (S)"
    )]
    InvalidSuit(String),
    /// The rank text is not a known rank.
    #[error(
        "Invalid rank '{0}'. Please enter one of the following: \
         A (Ace), 2-10, J (Jack), Q (Queen), K (King)"
    )]
    InvalidRank(String),
}

impl Suit {
    fn from_letter(letter: char) -> Option<Suit> {
        Suit::suits().find(|s| s.letter() == letter)
    }
}

/// Parses a suit from its full name or its first letter, case-insensitive.
///
/// Text that is not a full suit name falls back to its first character, so
/// `"heart"` parses as hearts.
impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim().to_uppercase();
        let first = text.chars().next().ok_or(ParseCardError::Missing)?;

        Suit::suits()
            .find(|suit| suit.name().eq_ignore_ascii_case(&text))
            .or_else(|| Suit::from_letter(first))
            .ok_or_else(|| ParseCardError::InvalidSuit(s.trim().to_string()))
    }
}

/// Parses a rank from its code or its name, case-insensitive.
impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(ParseCardError::Missing);
        }

        Rank::ranks()
            .find(|r| r.code().eq_ignore_ascii_case(text) || r.name().eq_ignore_ascii_case(text))
            .ok_or_else(|| ParseCardError::InvalidRank(text.to_string()))
    }
}

impl Card {
    /// Normalizes suit and rank text into a card.
    pub fn parse(suit: &str, rank: &str) -> Result<Card, ParseCardError> {
        if suit.trim().is_empty() || rank.trim().is_empty() {
            return Err(ParseCardError::Missing);
        }

        let suit = suit.parse::<Suit>()?;
        let rank = rank.parse::<Rank>()?;
        Ok(Card::new(rank, suit))
    }
}
