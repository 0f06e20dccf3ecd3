// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A standard 52 cards deck.
use crate::{Card, Rank, Suit};

/// A cards Deck.
///
/// The deck is never dealt from, it is used to enumerate card combinations.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// The largest combination size [Deck::for_each] enumerates.
    pub const MAX_COMBINATION: usize = 5;

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Calls the `f` closure for each k-cards combination.
    ///
    /// Combinations are visited in lexicographic order of the deck positions,
    /// each exactly once.
    ///
    /// Panics if k is not 1 <= k <= 5.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!(
            (1..=Self::MAX_COMBINATION).contains(&k),
            "1 <= k <= {}",
            Self::MAX_COMBINATION
        );

        let n = self.cards.len();

        let mut idx = [0usize; Self::MAX_COMBINATION];
        for (i, slot) in idx.iter_mut().enumerate().take(k) {
            *slot = i;
        }

        let mut hand = [Card::new(Rank::Ace, Suit::Hearts); Self::MAX_COMBINATION];

        loop {
            for (card, &i) in hand.iter_mut().zip(&idx[..k]) {
                *card = self.cards[i];
            }
            f(&hand[..k]);

            // Find the rightmost position that can still move forward.
            let Some(pos) = (0..k).rev().find(|&p| idx[p] < n - k + p) else {
                break;
            };

            idx[pos] += 1;
            for p in (pos + 1)..k {
                idx[p] = idx[p - 1] + 1;
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn deck_cards_are_unique() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let cards = deck.into_iter().collect::<HashSet<_>>();
        assert_eq!(cards.len(), Deck::SIZE);
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();

        let mut hands = HashSet::default();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);

        let mut count = 0;
        deck.for_each(1, |cards| {
            assert_eq!(cards.len(), 1);
            count += 1;
        });
        assert_eq!(count, Deck::SIZE);
    }

    #[test]
    fn deck_for_each_5cards() {
        let deck = Deck::default();

        let mut count = 0;
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            count += 1;
        });
        assert_eq!(count, 2_598_960);
    }

    #[test]
    fn deck_for_each_order() {
        let deck = Deck::default();
        let cards = deck.clone().into_iter().collect::<Vec<_>>();

        let mut first = None;
        let mut last = Vec::new();
        deck.for_each(5, |hand| {
            first.get_or_insert_with(|| hand.to_owned());
            last = hand.to_owned();
        });

        assert_eq!(first.as_deref(), Some(&cards[..5]));
        assert_eq!(last, &cards[Deck::SIZE - 5..]);
    }

    #[test]
    #[should_panic]
    fn deck_for_each_too_large() {
        Deck::default().for_each(6, |_| {});
    }
}
