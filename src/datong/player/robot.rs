//! Robot player

use std::cmp::Ordering;
use std::fmt::Display;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{Card, Player, PlayerError, PlayerState};
use crate::datong::{Rank, ANCHOR};

/// How a robot chooses its cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Any legal card, chosen uniformly at random.
    Random,
    /// Plays whichever card opens the way for most of its own hand, and discards low.
    #[default]
    Heuristic,
}
impl Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Strategy::Random => "random",
            Strategy::Heuristic => "heuristic",
        })
    }
}
impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(Strategy::Random),
            "heuristic" => Ok(Strategy::Heuristic),
            _ => Err(format!("unknown strategy {s:?}")),
        }
    }
}

#[derive(Debug)]
pub struct Robot {
    strategy: Strategy,
    rng: Mutex<StdRng>,
}

impl Player for Robot {
    fn decide_play(&self, state: &PlayerState) -> Option<Card> {
        let legal = state.legal_plays();
        let card = match self.strategy {
            Strategy::Random => self.choose(&legal),
            Strategy::Heuristic => legal
                .iter()
                .copied()
                .max_by_key(|&c| follow_ups(c, state.hand)),
        };
        debug!(seat = %state.seat, strategy = %self.strategy, card = ?card, "decide play");
        card
    }

    fn decide_discard(&self, state: &PlayerState) -> Option<Card> {
        let card = match self.strategy {
            Strategy::Random => self.choose(state.hand),
            Strategy::Heuristic => state.hand.iter().copied().min_by_key(|c| c.rank),
        };
        debug!(seat = %state.seat, strategy = %self.strategy, card = ?card, "decide discard");
        card
    }

    fn handle_error(&self, err: PlayerError) -> bool {
        warn!(strategy = %self.strategy, error = %err, "robot decision rejected");
        false
    }
}

impl Robot {
    pub fn new(strategy: Strategy, seed: u64) -> Self {
        Self {
            strategy,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn into_player(self) -> Arc<dyn Player> {
        Arc::new(self)
    }

    fn choose(&self, cards: &[Card]) -> Option<Card> {
        let mut rng = self.rng.lock().unwrap();
        cards.choose(&mut *rng).copied()
    }
}

/// Counts the other cards in `hand` that can only be reached by playing `card` first.
fn follow_ups(card: Card, hand: &[Card]) -> usize {
    hand.iter()
        .filter(|&&c| c != card)
        .filter(|&&c| {
            if c.suit != card.suit {
                // Only the opening card unlocks other suits, via their sevens.
                return card == ANCHOR && c.rank == Rank::Seven;
            }
            match card.rank.cmp(&Rank::Seven) {
                Ordering::Less => c.rank < card.rank,
                Ordering::Greater => c.rank > card.rank,
                Ordering::Equal => true,
            }
        })
        .count()
}
