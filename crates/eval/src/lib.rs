// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handodds hand classifier and probability estimator.
//!
//! Classifies a 5 cards hand into one of the ten standard poker categories and
//! computes the probability of being dealt that category together with an
//! estimate of the likelihood of holding the strongest category against a
//! number of opponents:
//!
//! ```
//! # use handodds_eval::*;
//! let hand = [
//!     Card::new(Rank::Ten, Suit::Spades),
//!     Card::new(Rank::Jack, Suit::Spades),
//!     Card::new(Rank::Queen, Suit::Spades),
//!     Card::new(Rank::King, Suit::Spades),
//!     Card::new(Rank::Ace, Suit::Spades),
//! ];
//!
//! let category = classify(&hand);
//! assert_eq!(category, HandCategory::RoyalFlush);
//! assert_eq!(hand_probability(category), 4.0 / 2_598_960.0);
//! assert_eq!(win_likelihood(category, Opponents::ONE), 1.0);
//! ```
//!
//! The probabilities use the fixed [FREQUENCIES] table, the table can be
//! checked against the classifier by counting all hands in a deck:
//!
//! ```no_run
//! # use handodds_eval::*;
//! assert_eq!(FrequencyTable::count(&Deck::default()), FREQUENCIES);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod category;
pub use category::{HandCategory, ParseCategoryError};

pub mod classify;
pub use classify::classify;

pub mod odds;
pub use odds::{
    FREQUENCIES, FrequencyTable, Opponents, TOTAL_HANDS, hand_probability, win_likelihood,
};

// Reexport cards types.
pub use handodds_cards::{Card, Deck, Rank, Suit};
