// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handodds hand entry types.
//!
//! A [Session] owns the hand a user is entering one card at a time, once the
//! fifth card is accepted the hand is classified and a [HandReport] returned:
//!
//! ```
//! # use handodds_core::*;
//! let mut session = Session::new(Opponents::ONE);
//! for (suit, rank) in [("C", "A"), ("D", "A"), ("H", "A"), ("S", "A")] {
//!     assert!(session.submit_card(suit, rank).unwrap().is_none());
//! }
//!
//! // The same card twice is rejected.
//! assert!(session.submit_card("clubs", "ace").is_err());
//!
//! let report = session.submit_card("C", "5").unwrap().unwrap();
//! assert_eq!(report.category, HandCategory::FourOfAKind);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod error;
pub use error::{Error, Result};

pub mod hand;
pub use hand::Hand;

pub mod session;
pub use session::{HandReport, Session};

// Reexport types used in the session API.
pub use handodds_cards::{Card, ParseCardError, Rank, Suit};
pub use handodds_eval::{HandCategory, Opponents};
