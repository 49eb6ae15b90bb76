//! The set of cards that may legally be played.

use std::cmp::Ordering;
use std::collections::hash_set;
use std::collections::HashSet;

use super::{Card, InvariantError, Rank, Suit, ANCHOR};

/// Tracks which cards may be played next.
///
/// The set starts out holding only the [`ANCHOR`]. Playing the anchor opens the seven of every
/// other suit along with both neighbours of the anchor. Playing any other seven opens its two
/// neighbours. From then on, each run extends by one card at a time: downward toward the ace
/// below seven, upward toward the king above it. Aces and kings close their run.
///
/// Membership is the same for every player; whether a player can act depends only on whether
/// their hand intersects the set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playable {
    cards: HashSet<Card>,
}

impl Default for Playable {
    fn default() -> Self {
        Self {
            cards: [ANCHOR].iter().copied().collect(),
        }
    }
}

impl Playable {
    /// Returns true if the card may be played.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// The number of playable cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns true if nothing may be played.
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates over playable cards, in arbitrary order.
    pub fn iter(&self) -> hash_set::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns true if any of the cards are playable.
    pub fn intersects<'a, I: IntoIterator<Item = &'a Card>>(&self, cards: I) -> bool {
        cards.into_iter().any(|c| self.cards.contains(c))
    }

    /// Updates the set after `card` has been played.
    ///
    /// Fails if the card was not playable, or if a card would be unlocked twice. Either indicates
    /// a bookkeeping bug in the caller; the set is left unchanged in that case.
    pub fn expand(&mut self, card: Card) -> Result<(), InvariantError> {
        if !self.cards.contains(&card) {
            return Err(InvariantError::NotUnlocked(card));
        }
        let unlocked = Self::unlocks(card);
        if let Some(&dup) = unlocked.iter().find(|&c| self.cards.contains(c)) {
            return Err(InvariantError::UnlockedTwice(dup));
        }
        self.cards.remove(&card);
        self.cards.extend(unlocked);
        Ok(())
    }

    /// The cards that become playable once `card` is played.
    fn unlocks(card: Card) -> Vec<Card> {
        let Card { rank, suit } = card;
        match rank.cmp(&Rank::Seven) {
            Ordering::Equal if card == ANCHOR => Suit::all_suits()
                .iter()
                .filter(|&&s| s != ANCHOR.suit)
                .map(|&s| Card::new(Rank::Seven, s))
                .chain([Card::new(Rank::Six, suit), Card::new(Rank::Eight, suit)])
                .collect(),
            Ordering::Equal => vec![Card::new(Rank::Six, suit), Card::new(Rank::Eight, suit)],
            Ordering::Less => rank.pred().map(|r| Card::new(r, suit)).into_iter().collect(),
            Ordering::Greater => rank.succ().map(|r| Card::new(r, suit)).into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use assert_matches::assert_matches;

    use super::*;

    fn card(s: &str) -> Card {
        Card::from_str(s).unwrap()
    }

    fn cards(cs: &[&str]) -> HashSet<Card> {
        cs.iter().map(|s| card(s)).collect()
    }

    #[test]
    fn test_opening() {
        let mut playable = Playable::default();
        assert_eq!(playable.cards, cards(&["7s"]));
        playable.expand(ANCHOR).unwrap();
        assert_eq!(playable.cards, cards(&["7h", "7c", "7d", "6s", "8s"]));
    }

    #[test]
    fn test_other_seven() {
        let mut playable = Playable::default();
        playable.expand(ANCHOR).unwrap();
        playable.expand(card("7d")).unwrap();
        assert_eq!(
            playable.cards,
            cards(&["7h", "7c", "6d", "8d", "6s", "8s"])
        );
    }

    #[test]
    fn test_runs_extend_outward() {
        let mut playable = Playable::default();
        playable.expand(ANCHOR).unwrap();
        for s in ["6s", "5s", "4s", "3s", "2s"] {
            playable.expand(card(s)).unwrap();
        }
        assert!(playable.contains(card("as")));
        for s in ["8s", "9s", "ts", "js", "qs"] {
            playable.expand(card(s)).unwrap();
        }
        assert!(playable.contains(card("ks")));
        assert_eq!(playable.len(), 5);
    }

    #[test]
    fn test_boundaries_unlock_nothing() {
        let mut playable = Playable {
            cards: cards(&["ac", "kh"]),
        };
        playable.expand(card("ac")).unwrap();
        assert_eq!(playable.cards, cards(&["kh"]));
        playable.expand(card("kh")).unwrap();
        assert!(playable.is_empty());
    }

    #[test]
    fn test_invariants() {
        let mut playable = Playable::default();
        assert_matches!(
            playable.expand(card("6s")),
            Err(InvariantError::NotUnlocked(c)) if c == card("6s")
        );
        let mut playable = Playable {
            cards: cards(&["6h", "5h"]),
        };
        assert_matches!(
            playable.expand(card("6h")),
            Err(InvariantError::UnlockedTwice(c)) if c == card("5h")
        );
        assert_eq!(playable.cards, cards(&["6h", "5h"]));
    }

    #[test]
    fn test_intersects() {
        let playable = Playable::default();
        assert!(playable.intersects(&[card("2d"), ANCHOR]));
        assert!(!playable.intersects(&[card("2d"), card("7h")]));
        assert!(!playable.intersects(&Vec::<Card>::new()));
    }
}
