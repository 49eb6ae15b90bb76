//! Log of actions taken during a round.

use serde::{Deserialize, Serialize};

use super::{BaseRound, Round, RoundConfig};
use crate::datong::{Action, RoundError};

#[cfg(test)]
mod test;

/// A serializable record of a round: the deal, followed by every accepted action in order.
///
/// Replaying the actions against the deal reproduces the round exactly, since the rules leave
/// nothing to chance once the cards are dealt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Log {
    /// The initial configuration.
    config: RoundConfig,
    /// Actions, in the order they were applied.
    actions: Vec<Action>,
}

impl Log {
    /// Creates a new, empty [`Log`] for the specified deal.
    pub fn new(config: RoundConfig) -> Self {
        Self {
            config,
            actions: vec![],
        }
    }

    /// Returns an immutable reference to the initial configuration.
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// The logged actions, in order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// The number of logged actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Records an action at position `pos`, discarding any actions logged after it.
    pub fn insert(&mut self, pos: usize, action: Action) {
        self.actions.truncate(pos);
        self.actions.push(action);
    }

    /// Rebuilds the round as it stood after the first `pos` actions.
    pub fn replay(&self, pos: usize) -> Result<BaseRound, RoundError> {
        if pos > self.actions.len() {
            return Err(RoundError::InvalidLogPosition {
                pos,
                len: self.actions.len(),
            });
        }
        self.config.validate()?;
        let mut round = BaseRound::from(self.config.clone());
        for &action in &self.actions[..pos] {
            round.apply_action(action)?;
            round.advance_turn()?;
        }
        Ok(round)
    }
}
