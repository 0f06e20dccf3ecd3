// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand classifier.
//!
//! A hand is reduced to a small set of [Features] and then matched against
//! [RULES], an ordered table of `(category, predicate)` pairs where the first
//! matching rule wins. The order matters: a straight that is also a flush must
//! be reported as a straight flush, a full house must win over three of a
//! kind, and so on.
use handodds_cards::Card;

use crate::HandCategory;

/// The sorted values of the wheel straight, the ace plays low.
const LOW_ACE_STRAIGHT: [u8; 5] = [2, 3, 4, 5, 14];

/// Hand features the classification rules are evaluated on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Features {
    /// The rank values sorted in ascending order, the ace counts 14.
    pub values: [u8; 5],
    /// All cards have the same suit.
    pub is_flush: bool,
    /// Each sorted value is the previous value plus one.
    pub is_sequential: bool,
    /// The values are exactly A-2-3-4-5.
    pub is_low_ace_straight: bool,
    /// Multiplicity of each distinct rank in descending order, zero padded.
    pub counts: [u8; 5],
}

impl Features {
    /// Extracts the classification features from a hand.
    pub fn new(hand: &[Card; 5]) -> Self {
        let mut values = hand.map(|c| c.rank().value());
        values.sort_unstable();

        let first_suit = hand[0].suit();
        let is_flush = hand.iter().all(|c| c.suit() == first_suit);

        let is_sequential = values.windows(2).all(|w| w[1] == w[0] + 1);
        let is_low_ace_straight = values == LOW_ACE_STRAIGHT;

        // Values are sorted so equal ranks are adjacent.
        let mut counts = [0u8; 5];
        let mut distinct = 0;
        for (i, v) in values.iter().enumerate() {
            if i > 0 && values[i - 1] == *v {
                counts[distinct - 1] += 1;
            } else {
                counts[distinct] = 1;
                distinct += 1;
            }
        }
        counts.sort_unstable_by(|a, b| b.cmp(a));

        Self {
            values,
            is_flush,
            is_sequential,
            is_low_ace_straight,
            counts,
        }
    }

    fn is_straight(&self) -> bool {
        self.is_sequential || self.is_low_ace_straight
    }
}

/// A classification rule predicate.
pub type Rule = fn(&Features) -> bool;

/// Classification rules in priority order, the first match wins.
///
/// A hand that matches no rule is a [HandCategory::HighCard].
pub const RULES: [(HandCategory, Rule); 9] = [
    (HandCategory::RoyalFlush, |f| {
        f.is_flush && f.is_sequential && f.values[0] == 10
    }),
    (HandCategory::StraightFlush, |f| f.is_flush && f.is_straight()),
    (HandCategory::FourOfAKind, |f| f.counts[0] == 4),
    (HandCategory::FullHouse, |f| {
        f.counts[0] == 3 && f.counts[1] == 2
    }),
    (HandCategory::Flush, |f| f.is_flush),
    (HandCategory::Straight, |f| f.is_straight()),
    (HandCategory::ThreeOfAKind, |f| f.counts[0] == 3),
    (HandCategory::TwoPair, |f| f.counts[0] == 2 && f.counts[1] == 2),
    (HandCategory::OnePair, |f| f.counts[0] == 2),
];

/// Classifies a 5 cards hand.
///
/// The result depends only on the set of cards, not on their order.
pub fn classify(hand: &[Card; 5]) -> HandCategory {
    classify_features(&Features::new(hand))
}

/// Classifies precomputed hand features.
pub fn classify_features(features: &Features) -> HandCategory {
    RULES
        .iter()
        .find(|(_, rule)| rule(features))
        .map(|(category, _)| *category)
        .unwrap_or(HandCategory::HighCard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use handodds_cards::{Rank, Suit};
    use rand::prelude::*;

    fn hand(cards: [(Rank, Suit); 5]) -> [Card; 5] {
        cards.map(|(r, s)| Card::new(r, s))
    }

    fn parse(cards: [&str; 5]) -> [Card; 5] {
        // Each card is rank code followed by a suit letter, e.g. "10S".
        cards.map(|c| {
            let (rank, suit) = c.split_at(c.len() - 1);
            Card::parse(suit, rank).unwrap()
        })
    }

    #[test]
    fn royal_flush() {
        let h = parse(["10S", "JS", "QS", "KS", "AS"]);
        assert_eq!(classify(&h), HandCategory::RoyalFlush);

        let h = parse(["AH", "KH", "QH", "JH", "10H"]);
        assert_eq!(classify(&h), HandCategory::RoyalFlush);
    }

    #[test]
    fn straight_flush() {
        let h = parse(["9D", "10D", "JD", "QD", "KD"]);
        assert_eq!(classify(&h), HandCategory::StraightFlush);

        // Wheel straight flush, the ace plays low.
        let h = parse(["2H", "3H", "4H", "5H", "AH"]);
        assert_eq!(classify(&h), HandCategory::StraightFlush);
    }

    #[test]
    fn four_of_a_kind() {
        let h = parse(["AC", "AD", "AH", "AS", "5C"]);
        assert_eq!(classify(&h), HandCategory::FourOfAKind);
    }

    #[test]
    fn full_house() {
        let h = parse(["2C", "2D", "3H", "3S", "3C"]);
        assert_eq!(classify(&h), HandCategory::FullHouse);

        let h = parse(["KC", "KD", "KH", "4S", "4C"]);
        assert_eq!(classify(&h), HandCategory::FullHouse);
    }

    #[test]
    fn flush() {
        let h = parse(["2C", "7C", "9C", "JC", "KC"]);
        assert_eq!(classify(&h), HandCategory::Flush);

        // Ace high but not a straight.
        let h = parse(["2S", "3S", "4S", "6S", "AS"]);
        assert_eq!(classify(&h), HandCategory::Flush);
    }

    #[test]
    fn straight() {
        let h = parse(["5C", "6D", "7H", "8S", "9C"]);
        assert_eq!(classify(&h), HandCategory::Straight);

        let h = parse(["AC", "2D", "3H", "4S", "5C"]);
        assert_eq!(classify(&h), HandCategory::Straight);

        let h = parse(["10C", "JD", "QH", "KS", "AC"]);
        assert_eq!(classify(&h), HandCategory::Straight);
    }

    #[test]
    fn no_wraparound_straight() {
        let h = parse(["QC", "KD", "AH", "2S", "3C"]);
        assert_eq!(classify(&h), HandCategory::HighCard);

        let h = parse(["JH", "QH", "KH", "AH", "2H"]);
        assert_eq!(classify(&h), HandCategory::Flush);
    }

    #[test]
    fn three_of_a_kind() {
        let h = parse(["7C", "7D", "7H", "KS", "2C"]);
        assert_eq!(classify(&h), HandCategory::ThreeOfAKind);
    }

    #[test]
    fn two_pair() {
        let h = parse(["7C", "7D", "KH", "KS", "2C"]);
        assert_eq!(classify(&h), HandCategory::TwoPair);
    }

    #[test]
    fn one_pair() {
        let h = parse(["7C", "7D", "QH", "KS", "2C"]);
        assert_eq!(classify(&h), HandCategory::OnePair);
    }

    #[test]
    fn high_card() {
        let h = parse(["7C", "2D", "9H", "4S", "KC"]);
        assert_eq!(classify(&h), HandCategory::HighCard);
    }

    #[test]
    fn features() {
        let f = Features::new(&parse(["3H", "AS", "3C", "AD", "3S"]));
        assert_eq!(f.values, [3, 3, 3, 14, 14]);
        assert_eq!(f.counts, [3, 2, 0, 0, 0]);
        assert!(!f.is_flush);
        assert!(!f.is_sequential);
        assert!(!f.is_low_ace_straight);

        let f = Features::new(&parse(["5D", "AD", "3D", "2D", "4D"]));
        assert_eq!(f.values, [2, 3, 4, 5, 14]);
        assert_eq!(f.counts, [1, 1, 1, 1, 1]);
        assert!(f.is_flush);
        assert!(!f.is_sequential);
        assert!(f.is_low_ace_straight);
    }

    #[test]
    fn rules_priority() {
        let order = RULES.iter().map(|(c, _)| *c).collect::<Vec<_>>();
        let expected = HandCategory::categories().skip(1).rev().collect::<Vec<_>>();
        assert_eq!(order, expected);
        assert_eq!(order.len(), RULES.len());
        assert_eq!(order.last(), Some(&HandCategory::OnePair));

        // A royal flush also satisfies the straight flush, flush and straight
        // rules, only the first one counts.
        let f = Features::new(&parse(["10S", "JS", "QS", "KS", "AS"]));
        let matching = RULES
            .iter()
            .filter(|(_, rule)| rule(&f))
            .map(|(c, _)| *c)
            .collect::<Vec<_>>();
        assert_eq!(
            matching,
            [
                HandCategory::RoyalFlush,
                HandCategory::StraightFlush,
                HandCategory::Flush,
                HandCategory::Straight
            ]
        );

        // A full house also matches three of a kind and one pair.
        let f = Features::new(&parse(["2C", "2D", "3H", "3S", "3C"]));
        assert_eq!(classify_features(&f), HandCategory::FullHouse);
    }

    #[test]
    fn order_independence() {
        let hands = [
            parse(["10S", "JS", "QS", "KS", "AS"]),
            parse(["2H", "3H", "4H", "5H", "AH"]),
            parse(["2C", "2D", "3H", "3S", "3C"]),
            parse(["7C", "7D", "KH", "KS", "2C"]),
            parse(["7C", "2D", "9H", "4S", "KC"]),
        ];

        for h in hands {
            let expected = classify(&h);

            // All 120 permutations.
            let mut perm = h;
            let mut c = [0usize; 5];
            let mut i = 0;
            while i < 5 {
                if c[i] < i {
                    if i % 2 == 0 {
                        perm.swap(0, i);
                    } else {
                        perm.swap(c[i], i);
                    }
                    assert_eq!(classify(&perm), expected, "{perm:?}");
                    c[i] += 1;
                    i = 0;
                } else {
                    c[i] = 0;
                    i += 1;
                }
            }
        }
    }

    #[test]
    fn shuffled_hands() {
        let mut rng = rand::rng();
        let mut h = hand([
            (Rank::Nine, Suit::Clubs),
            (Rank::Nine, Suit::Hearts),
            (Rank::Four, Suit::Spades),
            (Rank::Four, Suit::Diamonds),
            (Rank::Ace, Suit::Clubs),
        ]);

        for _ in 0..100 {
            h.shuffle(&mut rng);
            assert_eq!(classify(&h), HandCategory::TwoPair);
        }
    }

    #[test]
    fn idempotent() {
        let h = parse(["KC", "KD", "KH", "4S", "4C"]);
        let first = classify(&h);
        for _ in 0..10 {
            assert_eq!(classify(&h), first);
        }
    }
}
