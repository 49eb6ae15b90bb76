//! Game management.
//!
//! A game consists of a sequence of [`Round`]s. At the end of each round, every player is
//! awarded a score according to their finishing position, and scores accumulate from round to
//! round.

use tracing::info;

use super::{BySeat, Round, RoundConfig, RoundError, RoundOutcome, ScoreTable, Seat};

/// A game of Da Tong.
pub struct Game<R> {
    /// The current round.
    round: R,
    /// Cumulative scores.
    scores: BySeat<i32>,
    /// Base awards by finishing position.
    table: ScoreTable,
    /// Outcomes of the rounds already scored.
    history: Vec<RoundOutcome>,
}

impl<R> From<R> for Game<R> {
    fn from(round: R) -> Self {
        Self::new(round, ScoreTable::default())
    }
}

impl<R> Game<R> {
    /// Creates a new game, starting with the given round.
    pub fn new(round: R, table: ScoreTable) -> Self {
        Self {
            round,
            scores: BySeat::default(),
            table,
            history: vec![],
        }
    }

    /// Returns an immutable reference to the current round.
    pub fn round(&self) -> &R {
        &self.round
    }

    /// Returns a mutable reference to the current round.
    pub fn round_mut(&mut self) -> &mut R {
        &mut self.round
    }

    /// A player's cumulative score.
    pub fn score(&self, seat: Seat) -> i32 {
        self.scores[seat]
    }

    /// Every player's cumulative score.
    pub fn scores(&self) -> &BySeat<i32> {
        &self.scores
    }

    /// The player with the highest cumulative score. Ties go to the earliest seat.
    pub fn leader(&self) -> Seat {
        let mut leader = Seat::South;
        for &seat in Seat::all_seats() {
            if self.score(seat) > self.score(leader) {
                leader = seat;
            }
        }
        leader
    }

    /// The number of rounds scored so far.
    pub fn rounds_played(&self) -> usize {
        self.history.len()
    }
}

impl<R> Game<R>
where
    R: Round + From<RoundConfig>,
{
    /// Scores the current round, and replaces it with a new round dealt from `config`. Returns
    /// the finished round.
    pub fn next_round(&mut self, config: RoundConfig) -> Result<R, RoundError> {
        let outcome = self.round.outcome().ok_or(RoundError::RoundInProgress)?;
        let deltas = outcome.deltas(&self.table);
        for &seat in Seat::all_seats() {
            self.scores[seat] += deltas[seat];
        }
        info!(
            round = self.history.len() + 1,
            winner = %outcome.winner(),
            leader = %self.leader(),
            "round scored"
        );
        self.history.push(outcome);
        Ok(std::mem::replace(&mut self.round, config.into()))
    }
}
