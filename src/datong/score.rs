//! End-of-round scoring.
//!
//! Each player's penalty is the sum of the ranks they discarded. To break ties, every player
//! after the starting player takes an extra tenth of a point per turn position. Players are
//! ranked by penalty, lowest first, and awarded a base score by finishing position. If the
//! winner discarded nothing at all (a "big sweep"), every award is doubled.

use std::convert::TryFrom;
use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::{BySeat, Card, Seat};

/// Penalty points, counted in tenths of a point.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Points(u32);

impl Points {
    /// Penalty for a discard pile, for the player at `position` in turn order from the starting
    /// player.
    pub fn new(discards: &[Card], position: usize) -> Self {
        let ranks: u32 = discards.iter().map(|c| u32::from(c.rank.value())).sum();
        let position = u32::try_from(position).expect("less than 2^32");
        Self(ranks * 10 + position)
    }

    /// Returns true if the penalty is below one whole point, which is only possible with an
    /// empty discard pile.
    pub fn is_sweep(self) -> bool {
        self.0 < 10
    }
}

impl Display for Points {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

/// Base score awarded by finishing position, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreTable(pub [i32; 4]);

impl Default for ScoreTable {
    fn default() -> Self {
        Self([3, 1, -1, -3])
    }
}

impl ScoreTable {
    /// The base award for a finishing position, from 0 (best) to 3 (worst).
    pub fn award(&self, position: usize) -> i32 {
        self.0[position]
    }
}

/// The outcome of a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    /// The player who opened the round.
    pub start: Seat,
    /// Players ordered by finishing position, best first.
    pub ranking: [Seat; 4],
    /// Each player's penalty.
    pub points: BySeat<Points>,
    /// Score multiplier: 2 for a big sweep, otherwise 1.
    pub multiplier: i32,
}

impl Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} wins", self.winner())?;
        if self.is_sweep() {
            f.write_str(" with a big sweep")?;
        }
        f.write_str(" (")?;
        for (i, seat) in self.ranking.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", seat, self.points[*seat])?;
        }
        f.write_str(")")
    }
}

impl RoundOutcome {
    /// Ranks players by their discard piles. This is a pure function of its inputs.
    pub fn tally(discards: &BySeat<Vec<Card>>, start: Seat) -> Self {
        let mut points = BySeat::default();
        for (position, seat) in start.turn_order().iter().copied().enumerate() {
            points[seat] = Points::new(&discards[seat], position);
        }
        // Positional tenths are distinct, so the order is strict.
        let mut ranking = *Seat::all_seats();
        ranking.sort_unstable_by_key(|&seat| points[seat]);
        let multiplier = if points[ranking[0]].is_sweep() { 2 } else { 1 };
        Self {
            start,
            ranking,
            points,
            multiplier,
        }
    }

    /// The best-ranked player.
    pub fn winner(&self) -> Seat {
        self.ranking[0]
    }

    /// Returns true if the winner discarded nothing.
    pub fn is_sweep(&self) -> bool {
        self.multiplier > 1
    }

    /// The finishing position of a player, from 0 (best) to 3 (worst).
    pub fn position(&self, seat: Seat) -> usize {
        self.ranking
            .iter()
            .position(|&s| s == seat)
            .expect("every seat is ranked")
    }

    /// The score each player earns this round.
    pub fn deltas(&self, table: &ScoreTable) -> BySeat<i32> {
        BySeat::from_fn(|seat| table.award(self.position(seat)) * self.multiplier)
    }
}

/// Scores a finished round, returning the outcome along with each player's score delta.
pub fn score(
    discards: &BySeat<Vec<Card>>,
    start: Seat,
    table: &ScoreTable,
) -> (RoundOutcome, BySeat<i32>) {
    let outcome = RoundOutcome::tally(discards, start);
    let deltas = outcome.deltas(table);
    (outcome, deltas)
}
