// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand entry errors.
use thiserror::Error;

use handodds_cards::{Card, ParseCardError};

/// Errors returned when a card is rejected.
///
/// A rejected card never modifies the hand.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The card is already in the hand.
    #[error("You have already added the {0} to your hand")]
    DuplicateCard(Card),
    /// The hand already has all its cards.
    #[error("Your hand is full! You can't select more than 5 cards")]
    HandFull,
    /// The suit or rank text could not be normalized.
    #[error(transparent)]
    InvalidInput(#[from] ParseCardError),
}

/// Result type for hand entry operations.
pub type Result<T> = std::result::Result<T, Error>;
