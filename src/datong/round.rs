//! Round management

use std::collections::HashSet;

use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{
    sort_hand, Action, ActionType, BySeat, Card, Deck, Event, ExpectAction, Field, Playable,
    RoundError, RoundOutcome, Seat, ANCHOR, DECK_SIZE, HAND_SIZE,
};

mod base;
mod log;
mod logging;
pub use base::BaseRound;
pub use log::Log;
pub use logging::LoggingRound;

/// A trait for implementing a round of Da Tong.
///
/// ## Gameplay
///
/// The whole deck is dealt out, thirteen cards to each player. Whoever holds the seven of spades
/// must open with it, and play proceeds from seat to seat in turn order.
///
/// On each turn, the current player plays one card that extends a run on the field (see
/// [`Playable`]). A player who holds no playable card must instead discard any card from their
/// hand, face-down. The round ends when every hand is empty, and players are ranked by the total
/// rank of the cards they discarded (see [`RoundOutcome`]).
///
/// ## State management
///
/// The round begins in an initial state, after cards have been dealt. The identity of the next
/// player and whether they must play or discard is always known deterministically, and may be
/// obtained via [`next_action`](`Round::next_action`).
///
/// Once a player has chosen a card, it is applied using
/// [`apply_action`](`Round::apply_action`). This finishes the player's turn, and control passes
/// to the next player once the caller invokes [`advance_turn`](`Round::advance_turn`). Actions
/// that break the rules are rejected without changing any state.
///
/// ## Events
///
/// Certain actions trigger events, such as a card being played. These events are stored in a
/// queue, which may be drained using [`pop_event`](`Round::pop_event`).
pub trait Round {
    /// The player who held the opening card.
    fn start_player(&self) -> Seat;

    /// The player whose turn it is.
    fn current_player(&self) -> Seat;

    /// Whether the current player holds a playable card.
    fn can_play_card(&self) -> bool;

    /// Whether the current player has acted, and is waiting for
    /// [`advance_turn`](`Round::advance_turn`).
    fn turn_over(&self) -> bool;

    /// Whether every hand has been emptied and the round scored.
    fn is_over(&self) -> bool;

    /// The cards held by a player, in display order.
    fn hand(&self, seat: Seat) -> &[Card];

    /// Every player's discard pile.
    fn discards(&self) -> &BySeat<Vec<Card>>;

    /// The cards played so far.
    fn field(&self) -> &Field;

    /// The cards that may be played next.
    fn playable(&self) -> &Playable;

    /// Returns a bundle of state visible to the specified player.
    fn player_state(&self, seat: Seat) -> PlayerState<'_>;

    /// Applies the specified action.
    fn apply_action(&mut self, action: Action) -> Result<(), RoundError>;

    /// Passes control to the next player once the current player has acted, or scores the round
    /// if every hand is empty.
    fn advance_turn(&mut self) -> Result<(), RoundError>;

    /// Pops the oldest event from the queue of events.
    fn pop_event(&mut self) -> Option<Event>;

    /// Returns the next action that's required to advance the state of the round, or None if the
    /// round is over or the turn needs to be advanced.
    fn next_action(&self) -> Option<ExpectAction> {
        if self.is_over() || self.turn_over() {
            return None;
        }
        let action = if self.can_play_card() {
            ActionType::Play
        } else {
            ActionType::Discard
        };
        Some(ExpectAction::new(self.current_player(), action))
    }

    /// The outcome of the round, if it is over.
    fn outcome(&self) -> Option<RoundOutcome> {
        if self.is_over() {
            Some(RoundOutcome::tally(self.discards(), self.start_player()))
        } else {
            None
        }
    }
}

/// Initial conditions for a round: the deal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// The player holding the opening card.
    start: Seat,
    /// Each player's hand, as dealt.
    hands: BySeat<Vec<Card>>,
}

impl Distribution<RoundConfig> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> RoundConfig {
        RoundConfig::new(rng.gen()).expect("deck is valid")
    }
}

impl RoundConfig {
    /// Deals out the deck, thirteen cards to each player.
    pub fn new(mut deck: Deck) -> Result<Self, RoundError> {
        if deck.len() != DECK_SIZE {
            return Err(RoundError::IncompleteDeck);
        }
        let hands = BySeat::from_fn(|_| deck.take(HAND_SIZE));
        Self::from_hands(hands)
    }

    /// Creates a [`RoundConfig`] from hands that have already been dealt.
    pub fn from_hands(hands: BySeat<Vec<Card>>) -> Result<Self, RoundError> {
        let start = hands
            .iter()
            .find(|(_, hand)| hand.contains(&ANCHOR))
            .map(|(seat, _)| seat)
            .ok_or(RoundError::IncompleteDeck)?;
        let mut config = Self { start, hands };
        config.validate()?;
        config.canonicalize();
        Ok(config)
    }

    /// Deals a shuffled deck, using the supplied random number generator.
    pub fn deal<R: Rng + ?Sized>(rng: &mut R) -> Self {
        rng.gen()
    }

    /// The player holding the opening card.
    pub fn start(&self) -> Seat {
        self.start
    }

    /// The hand dealt to a player.
    pub fn hand(&self, seat: Seat) -> &[Card] {
        &self.hands[seat]
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), RoundError> {
        let mut seen: HashSet<Card> = HashSet::with_capacity(DECK_SIZE);
        for hand in self.hands.values() {
            if hand.len() != HAND_SIZE {
                return Err(RoundError::InvalidHandSize);
            }
            seen.extend(hand.iter().copied());
        }
        if seen.len() != DECK_SIZE {
            return Err(RoundError::DuplicateCard);
        }
        if !self.hands[self.start].contains(&ANCHOR) {
            return Err(RoundError::WrongStartPlayer(self.start));
        }
        Ok(())
    }

    /// Canonicalizes the configuration.
    pub fn canonicalize(&mut self) {
        for seat in Seat::all_seats() {
            sort_hand(&mut self.hands[*seat]);
        }
    }

    fn into_hands(self) -> (Seat, BySeat<Vec<Card>>) {
        (self.start, self.hands)
    }
}

/// The state visible to a particular seat.
#[derive(Debug)]
pub struct PlayerState<'a> {
    /// The player who has access to this state.
    pub seat: Seat,
    /// The player whose turn it is.
    pub current: Seat,
    /// The player who opened the round.
    pub start: Seat,
    /// The player's hand.
    pub hand: &'a [Card],
    /// The player's own discards.
    pub discards: &'a [Card],
    /// The cards played so far.
    pub field: &'a Field,
    /// The cards that may be played next.
    pub playable: &'a Playable,
    /// The number of cards each player holds.
    pub hand_sizes: BySeat<usize>,
    /// The number of cards each player has discarded.
    pub discard_counts: BySeat<usize>,
}

impl<'a> PlayerState<'a> {
    /// Returns true if it is this player's turn.
    pub fn is_turn(&self) -> bool {
        self.seat == self.current
    }

    /// The cards in hand that may be played, in display order.
    pub fn legal_plays(&self) -> Vec<Card> {
        self.hand
            .iter()
            .copied()
            .filter(|&c| self.playable.contains(c))
            .collect()
    }
}

#[cfg(test)]
impl RoundConfig {
    /// Deals a shuffled deck, using the thread-local random number generator.
    pub fn random() -> Self {
        rand::random()
    }

    /// Deals a deck shuffled deterministically from the seed.
    pub fn from_seed(seed: u64) -> Self {
        use rand::{rngs::StdRng, SeedableRng};
        Self::deal(&mut StdRng::seed_from_u64(seed))
    }
}

#[cfg(test)]
mod test {
    use std::iter::FromIterator;

    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn test_deal() {
        for seed in 0..20 {
            let config = RoundConfig::from_seed(seed);
            config.validate().unwrap();
            let holders: Vec<_> = Seat::all_seats()
                .iter()
                .filter(|&&s| config.hand(s).contains(&ANCHOR))
                .collect();
            assert_eq!(holders, vec![&config.start()]);
            for &seat in Seat::all_seats() {
                let hand = config.hand(seat);
                assert_eq!(hand.len(), HAND_SIZE);
                assert!(hand.windows(2).all(|w| w[0].display_cmp(&w[1]).is_lt()));
            }
        }
    }

    #[test]
    fn test_random_deal() {
        let config = RoundConfig::random();
        config.validate().unwrap();
        assert!(config.hand(config.start()).contains(&ANCHOR));
    }

    #[test]
    fn test_seeded_deal_is_reproducible() {
        assert_eq!(RoundConfig::from_seed(7), RoundConfig::from_seed(7));
        assert_ne!(RoundConfig::from_seed(7), RoundConfig::from_seed(8));
    }

    #[test]
    fn test_incomplete_deck() {
        let mut deck = Deck::default();
        deck.take(1);
        assert_matches!(RoundConfig::new(deck), Err(RoundError::IncompleteDeck));
    }

    #[test]
    fn test_duplicate_card() {
        let mut cards = Deck::default().take(DECK_SIZE);
        let anchor = cards.iter().position(|&c| c == ANCHOR).unwrap();
        cards[(anchor + 1) % DECK_SIZE] = ANCHOR;
        let deck = Deck::from_iter(cards);
        assert_matches!(RoundConfig::new(deck), Err(RoundError::DuplicateCard));
    }

    #[test]
    fn test_wrong_start_player() {
        let mut config = RoundConfig::from_seed(3);
        config.start = config.start.next();
        assert_matches!(config.validate(), Err(RoundError::WrongStartPlayer(_)));
    }

    #[test]
    fn test_config_serde() {
        let config = RoundConfig::from_seed(11);
        let ser = serde_json::to_string(&config).unwrap();
        let de: RoundConfig = serde_json::from_str(&ser).unwrap();
        assert_eq!(config, de);
    }
}
