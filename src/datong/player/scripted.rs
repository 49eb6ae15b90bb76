//! A scripted player, for testing.

use std::collections::VecDeque;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use super::{Card, Event, Player, PlayerError, PlayerState};

#[derive(Debug, Default)]
struct Inner {
    cards: VecDeque<Card>,
    events: Vec<Event>,
    errors: Vec<PlayerError>,
    retry: bool,
}

/// Plays a queue of cards in order, whatever the turn requires. Gives up once the queue runs dry.
#[derive(Debug, Default)]
pub struct Scripted(Mutex<Inner>);

impl Player for Scripted {
    fn decide_play(&self, _: &PlayerState) -> Option<Card> {
        let mut inner = self.0.lock().unwrap();
        inner.cards.pop_front()
    }

    fn decide_discard(&self, _: &PlayerState) -> Option<Card> {
        let mut inner = self.0.lock().unwrap();
        inner.cards.pop_front()
    }

    fn notify(&self, _: PlayerState, event: &Event) {
        let mut inner = self.0.lock().unwrap();
        inner.events.push(event.clone());
    }

    fn handle_error(&self, err: PlayerError) -> bool {
        let mut inner = self.0.lock().unwrap();
        inner.errors.push(err);
        inner.retry
    }
}

impl Scripted {
    pub fn into_player(self) -> Arc<dyn Player> {
        Arc::new(self)
    }

    pub fn plays(self, cards: &[&str]) -> Self {
        let mut inner = self.0.lock().unwrap();
        inner
            .cards
            .extend(cards.iter().map(|s| Card::from_str(s).unwrap()));
        drop(inner);
        self
    }

    pub fn retries(self) -> Self {
        self.0.lock().unwrap().retry = true;
        self
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.lock().unwrap().events.clone()
    }

    pub fn errors(&self) -> Vec<PlayerError> {
        self.0.lock().unwrap().errors.clone()
    }
}
