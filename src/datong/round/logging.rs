//! A round that maintains a log of actions taken.

use std::convert::TryFrom;

use delegate::delegate;

use crate::datong::{
    Action, BaseRound, BySeat, Card, Event, ExpectAction, Field, Log, Playable, PlayerState,
    Round, RoundConfig, RoundError, RoundOutcome, Seat,
};

/// A [`Round`] implementation that maintains a [`Log`] of all actions taken.
#[derive(Debug, Clone)]
pub struct LoggingRound {
    round: BaseRound,
    log: Log,
    cursor: usize,
}
impl From<RoundConfig> for LoggingRound {
    fn from(config: RoundConfig) -> Self {
        Self {
            log: Log::new(config.clone()),
            round: config.into(),
            cursor: 0,
        }
    }
}
impl From<LoggingRound> for Log {
    fn from(value: LoggingRound) -> Self {
        value.log
    }
}
impl<'a> From<&'a LoggingRound> for Log {
    fn from(value: &'a LoggingRound) -> Self {
        value.log.clone()
    }
}
impl TryFrom<Log> for LoggingRound {
    type Error = RoundError;

    /// Replays every action in the log.
    fn try_from(log: Log) -> Result<Self, Self::Error> {
        let cursor = log.len();
        let round = log.replay(cursor)?;
        Ok(Self { round, log, cursor })
    }
}

impl Round for LoggingRound {
    delegate! {
        to self.round {
            fn start_player(&self) -> Seat;
            fn current_player(&self) -> Seat;
            fn can_play_card(&self) -> bool;
            fn turn_over(&self) -> bool;
            fn is_over(&self) -> bool;
            fn hand(&self, seat: Seat) -> &[Card];
            fn discards(&self) -> &BySeat<Vec<Card>>;
            fn field(&self) -> &Field;
            fn playable(&self) -> &Playable;
            fn player_state(&self, seat: Seat) -> PlayerState<'_>;
            fn advance_turn(&mut self) -> Result<(), RoundError>;
            fn pop_event(&mut self) -> Option<Event>;
            fn next_action(&self) -> Option<ExpectAction>;
            fn outcome(&self) -> Option<RoundOutcome>;
        }
    }

    fn apply_action(&mut self, action: Action) -> Result<(), RoundError> {
        self.round.apply_action(action)?;
        self.log.insert(self.cursor, action);
        self.cursor += 1;
        Ok(())
    }
}

impl LoggingRound {
    /// Returns the number of actions applied so far.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns an immutable reference to the log.
    pub fn log(&self) -> &Log {
        &self.log
    }

    /// Rewinds or fast-forwards to the state after the first `pos` logged actions. Applying a new
    /// action from there discards the actions that followed.
    pub fn seek(&mut self, pos: usize) -> Result<(), RoundError> {
        self.round = self.log.replay(pos)?;
        self.cursor = pos;
        Ok(())
    }
}
