//! Cards played onto the field.

use std::fmt::Display;

use super::{Card, InvariantError, Pile, Suit};

/// The cards of one suit that have been played, split around the seven.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Run {
    /// Ranks below seven, in the order played (descending).
    pub lower: Vec<Card>,
    /// The seven, once played.
    pub middle: Option<Card>,
    /// Ranks above seven, in the order played (ascending).
    pub upper: Vec<Card>,
}

impl Run {
    /// The number of cards in the run.
    pub fn len(&self) -> usize {
        self.lower.len() + usize::from(self.middle.is_some()) + self.upper.len()
    }

    /// The cards of the run, from lowest to highest rank.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.lower
            .iter()
            .rev()
            .chain(self.middle.iter())
            .chain(self.upper.iter())
            .copied()
    }

    fn place(&mut self, card: Card) -> Result<(), InvariantError> {
        match card.pile() {
            Pile::Lower => self.lower.push(card),
            Pile::Upper => self.upper.push(card),
            Pile::Middle if self.middle.is_some() => {
                return Err(InvariantError::MiddleOccupied(card))
            }
            Pile::Middle => self.middle = Some(card),
        }
        Ok(())
    }
}

impl Display for Run {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut cards = self.cards();
        match (cards.next(), cards.last()) {
            (None, _) => f.write_str("-"),
            (Some(low), None) => write!(f, "{}", low.rank),
            (Some(low), Some(high)) => write!(f, "{}..{}", low.rank, high.rank),
        }
    }
}

/// The field: one [`Run`] per suit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Field {
    runs: [Run; 4],
}

impl Field {
    /// The run for the specified suit.
    pub fn run(&self, suit: Suit) -> &Run {
        &self.runs[suit.index()]
    }

    /// Places a played card onto its pile.
    pub fn place(&mut self, card: Card) -> Result<(), InvariantError> {
        self.runs[card.suit.index()].place(card)
    }

    /// The total number of cards on the field.
    pub fn len(&self) -> usize {
        self.runs.iter().map(Run::len).sum()
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, &suit) in Suit::all_suits().iter().enumerate() {
            if i != 0 {
                f.write_str("  ")?;
            }
            write!(f, "{}:{}", suit, self.run(suit))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use super::*;

    fn card(s: &str) -> Card {
        Card::from_str(s).unwrap()
    }

    #[test]
    fn test_place() {
        let mut field = Field::default();
        for s in ["7s", "6s", "8s", "5s", "7d", "9s"] {
            field.place(card(s)).unwrap();
        }
        let spades = field.run(Suit::Spade);
        assert_eq!(spades.lower, vec![card("6s"), card("5s")]);
        assert_eq!(spades.middle, Some(card("7s")));
        assert_eq!(spades.upper, vec![card("8s"), card("9s")]);
        assert_eq!(field.len(), 6);
        assert_eq!(field.run(Suit::Heart).len(), 0);
        assert_eq!(
            field.place(card("7d")),
            Err(InvariantError::MiddleOccupied(card("7d")))
        );
        assert_eq!(field.len(), 6);
    }

    #[test]
    fn test_display() {
        let mut field = Field::default();
        assert_eq!(field.to_string(), "♠:-  ♥:-  ♣:-  ♦:-");
        for s in ["7s", "6s", "8s", "5s", "7d"] {
            field.place(card(s)).unwrap();
        }
        assert_eq!(field.to_string(), "♠:5..8  ♥:-  ♣:-  ♦:7");
    }
}
