//! Base round.

use std::collections::VecDeque;

use tracing::{debug, error, info};

use super::{PlayerState, Round, RoundConfig};
use crate::datong::{
    Action, ActionType, BySeat, Card, Event, Field, InvariantError, Playable, PlayerError,
    RoundError, RoundOutcome, Seat, DECK_SIZE,
};


/// The main state machine for the round.
///
/// Each turn moves through two steps. First the current player's action is accepted, which sets
/// the `turn_over` flag. Then [`advance_turn`](`Round::advance_turn`) clears the flag and either
/// passes control to the next seat, or ends the round once every hand is empty.
///
/// After every accepted action the round checks that all 52 cards are still accounted for. A
/// broken invariant is latched: every later action fails with the same error, and the round never
/// produces an outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseRound {
    start: Seat,
    current: Seat,
    hands: BySeat<Vec<Card>>,
    discards: BySeat<Vec<Card>>,
    field: Field,
    playable: Playable,
    can_play_card: bool,
    turn_over: bool,
    over: bool,
    broken: Option<InvariantError>,
    events: VecDeque<Event>,
}

impl From<RoundConfig> for BaseRound {
    fn from(config: RoundConfig) -> Self {
        let (start, hands) = config.into_hands();
        let playable = Playable::default();
        BaseRound {
            start,
            current: start,
            can_play_card: playable.intersects(&hands[start]),
            hands,
            discards: BySeat::default(),
            field: Field::default(),
            playable,
            turn_over: false,
            over: false,
            broken: None,
            events: [Event::Deal(start)].iter().cloned().collect(),
        }
    }
}

impl Round for BaseRound {
    fn start_player(&self) -> Seat {
        self.start
    }

    fn current_player(&self) -> Seat {
        self.current
    }

    fn can_play_card(&self) -> bool {
        self.can_play_card
    }

    fn turn_over(&self) -> bool {
        self.turn_over
    }

    fn is_over(&self) -> bool {
        self.over
    }

    fn hand(&self, seat: Seat) -> &[Card] {
        &self.hands[seat]
    }

    fn discards(&self) -> &BySeat<Vec<Card>> {
        &self.discards
    }

    fn field(&self) -> &Field {
        &self.field
    }

    fn playable(&self) -> &Playable {
        &self.playable
    }

    fn player_state(&self, seat: Seat) -> PlayerState<'_> {
        PlayerState {
            seat,
            current: self.current,
            start: self.start,
            hand: &self.hands[seat],
            discards: &self.discards[seat],
            field: &self.field,
            playable: &self.playable,
            hand_sizes: self.hands.map(Vec::len),
            discard_counts: self.discards.map(Vec::len),
        }
    }

    fn apply_action(&mut self, Action { seat, action, card }: Action) -> Result<(), RoundError> {
        match action {
            ActionType::Play => self.accept_play(seat, card),
            ActionType::Discard => self.accept_discard(seat, card),
        }
    }

    fn advance_turn(&mut self) -> Result<(), RoundError> {
        self.check_broken()?;
        if self.over {
            return Err(RoundError::RoundOver);
        }
        if !self.turn_over {
            return Err(RoundError::TurnNotOver);
        }
        self.turn_over = false;

        if self.hands.values().all(Vec::is_empty) {
            self.over = true;
            let outcome = RoundOutcome::tally(&self.discards, self.start);
            info!(
                winner = %outcome.winner(),
                multiplier = outcome.multiplier,
                "round over"
            );
            self.events.push_back(Event::Round(outcome));
            return Ok(());
        }

        self.current = self.current.next();
        self.can_play_card = self.playable.intersects(&self.hands[self.current]);
        debug!(
            seat = %self.current,
            can_play = self.can_play_card,
            playable = self.playable.len(),
            "next turn"
        );
        Ok(())
    }

    fn pop_event(&mut self) -> Option<Event> {
        self.events.pop_front()
    }

    fn outcome(&self) -> Option<RoundOutcome> {
        match (self.over, &self.broken) {
            (true, None) => Some(RoundOutcome::tally(&self.discards, self.start)),
            _ => None,
        }
    }
}

impl BaseRound {
    /// Moves a playable card from the current player's hand onto the field.
    pub fn accept_play(&mut self, seat: Seat, card: Card) -> Result<(), RoundError> {
        let index = self.find_card(seat, card)?;
        if !self.playable.contains(card) {
            return Err(PlayerError::NotPlayable(card).into());
        }

        let mut playable = self.playable.clone();
        if let Err(err) = playable.expand(card) {
            return Err(self.fatal(err));
        }
        if let Err(err) = self.field.place(card) {
            return Err(self.fatal(err));
        }
        self.playable = playable;
        self.hands[seat].remove(index);
        self.turn_over = true;
        debug!(seat = %seat, card = %card, "play");
        self.events.push_back(Event::Play(seat, card));
        self.check_card_count()
    }

    /// Moves a card from the current player's hand onto their discard pile. Only allowed when
    /// the player has nothing to play.
    pub fn accept_discard(&mut self, seat: Seat, card: Card) -> Result<(), RoundError> {
        let index = self.find_card(seat, card)?;
        if self.can_play_card {
            return Err(PlayerError::MustPlay(seat).into());
        }

        self.hands[seat].remove(index);
        self.discards[seat].push(card);
        self.turn_over = true;
        debug!(seat = %seat, card = %card, "discard");
        self.events.push_back(Event::Discard(seat));
        self.check_card_count()
    }

    /// Checks that the seat may act, and finds the card in their hand.
    fn find_card(&self, seat: Seat, card: Card) -> Result<usize, RoundError> {
        self.check_broken()?;
        if self.over {
            return Err(RoundError::RoundOver);
        }
        if self.turn_over {
            return Err(RoundError::TurnOver(self.current));
        }
        if seat != self.current {
            return Err(PlayerError::NotYourTurn {
                expected: self.current,
                actual: seat,
            }
            .into());
        }
        self.hands[seat]
            .iter()
            .position(|c| *c == card)
            .ok_or_else(|| PlayerError::CardNotHeld(seat, card).into())
    }

    /// The number of cards in hands, on the field, and in discard piles.
    pub fn card_count(&self) -> usize {
        let held: usize = self.hands.values().map(Vec::len).sum();
        let discarded: usize = self.discards.values().map(Vec::len).sum();
        held + discarded + self.field.len()
    }

    fn check_broken(&self) -> Result<(), RoundError> {
        match &self.broken {
            Some(err) => Err(err.clone().into()),
            None => Ok(()),
        }
    }

    fn check_card_count(&mut self) -> Result<(), RoundError> {
        match self.card_count() {
            DECK_SIZE => Ok(()),
            count => Err(self.fatal(InvariantError::CardCount(count))),
        }
    }

    fn fatal(&mut self, err: InvariantError) -> RoundError {
        error!(seat = %self.current, error = %err, "invariant broken");
        self.broken = Some(err.clone());
        err.into()
    }
}
