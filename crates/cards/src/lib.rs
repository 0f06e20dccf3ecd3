// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handodds cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use handodds_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!(ah.to_string(), "Ace of Hearts");
//! ```
//!
//! to normalize user text into cards, accepting full names and abbreviations
//! in any case:
//!
//! ```
//! # use handodds_cards::{Card, Rank, Suit};
//! let card = Card::parse("spades", "q").unwrap();
//! assert_eq!(card, Card::new(Rank::Queen, Suit::Spades));
//! assert!(Card::parse("x", "q").is_err());
//! ```
//!
//! and a [Deck] type for iterating card combinations:
//!
//! ```no_run
//! # use handodds_cards::Deck;
//! // Iterate through all 5 cards hands (2.6M hands).
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, Rank, Suit};

mod deck;
pub use deck::Deck;

mod parse;
pub use parse::ParseCardError;
