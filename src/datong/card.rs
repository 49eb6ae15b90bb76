//! Da Tong cards.
//!
//! The game is played with a full 52-card french deck. Each suit is laid out on the field as a
//! run that grows outward from its seven.

use std::cmp::Ordering;

use crate::deck;
pub use crate::french::{Card, Rank, Suit};

/// The seven of spades. Whoever holds it opens the round, and it is the only card that can be
/// played first.
pub const ANCHOR: Card = Card {
    rank: Rank::Seven,
    suit: Suit::Spade,
};

/// The number of cards in the deck.
pub const DECK_SIZE: usize = 52;

/// The number of cards dealt to each player.
pub const HAND_SIZE: usize = 13;

/// The field pile a card is placed on, relative to the seven of its suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pile {
    /// Ranks below seven, played downward toward the ace.
    Lower,
    /// The seven itself.
    Middle,
    /// Ranks above seven, played upward toward the king.
    Upper,
}

impl Card {
    /// The field pile this card belongs to.
    pub fn pile(self) -> Pile {
        match self.rank.cmp(&Rank::Seven) {
            Ordering::Less => Pile::Lower,
            Ordering::Equal => Pile::Middle,
            Ordering::Greater => Pile::Upper,
        }
    }

    /// The order in which cards are displayed in a hand: by suit, then by rank. This has no
    /// bearing on which cards may be played.
    pub fn display_cmp(&self, other: &Card) -> Ordering {
        self.display_key().cmp(&other.display_key())
    }

    fn display_key(self) -> (Suit, Rank) {
        (self.suit, self.rank)
    }
}

/// Sorts a hand into display order.
pub fn sort_hand(hand: &mut [Card]) {
    hand.sort_unstable_by(Card::display_cmp);
}

/// A full deck.
pub type Deck = deck::Deck<Card>;
impl Default for Deck {
    fn default() -> Self {
        itertools::iproduct!(Suit::all_suits(), Rank::all_ranks())
            .map(|(&suit, &rank)| Card { rank, suit })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;
    use std::str::FromStr;

    use super::*;

    fn card(s: &str) -> Card {
        Card::from_str(s).unwrap()
    }

    #[test]
    fn test_default_deck() {
        let mut deck = Deck::default();
        assert_eq!(deck.len(), DECK_SIZE);
        let cards: HashSet<_> = deck.take(DECK_SIZE).into_iter().collect();
        assert_eq!(cards.len(), DECK_SIZE);
        assert!(cards.contains(&ANCHOR));
    }

    #[test]
    fn test_pile() {
        assert_eq!(card("as").pile(), Pile::Lower);
        assert_eq!(card("6h").pile(), Pile::Lower);
        assert_eq!(card("7c").pile(), Pile::Middle);
        assert_eq!(card("8d").pile(), Pile::Upper);
        assert_eq!(card("kd").pile(), Pile::Upper);
    }

    #[test]
    fn test_display_order() {
        let mut hand: Vec<_> = ["kd", "2s", "7h", "7s", "as", "qc"]
            .iter()
            .map(|s| card(s))
            .collect();
        sort_hand(&mut hand);
        let sorted: Vec<_> = hand.iter().map(Card::to_string).collect();
        assert_eq!(sorted, vec!["A♠", "2♠", "7♠", "7♥", "Q♣", "K♦"]);
    }
}
