//! Actions

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::{Card, Seat};

/// Types of actions that a player can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    /// Play a card onto the field.
    Play,
    /// Discard a card face-down. Only allowed when no card in hand is playable.
    Discard,
}
impl Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ActionType::Play => "play",
            ActionType::Discard => "discard",
        })
    }
}

/// The action that the round's state machine expects to happen next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpectAction {
    /// The player expected to take the action.
    pub seat: Seat,
    /// The type of action.
    pub action: ActionType,
}

impl ExpectAction {
    /// Create a new [`ExpectAction`].
    pub fn new(seat: Seat, action: ActionType) -> Self {
        Self { seat, action }
    }

    /// Bind in a card to create an [`Action`].
    pub fn with_card(self, card: Card) -> Action {
        Action::new(self.seat, self.action, card)
    }
}

/// An action taken by a player during a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// The player taking the action.
    pub seat: Seat,
    /// The type of action.
    pub action: ActionType,
    /// The card played or discarded.
    pub card: Card,
}

impl Action {
    /// Create a new [`Action`].
    pub fn new(seat: Seat, action: ActionType, card: Card) -> Self {
        Self { seat, action, card }
    }
}

#[cfg(test)]
impl Action {
    /// Create a new [`ActionType::Play`] action.
    pub fn play(seat: Seat, card: Card) -> Self {
        Self::new(seat, ActionType::Play, card)
    }

    /// Create a new [`ActionType::Discard`] action.
    pub fn discard(seat: Seat, card: Card) -> Self {
        Self::new(seat, ActionType::Discard, card)
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}s {}", self.seat, self.action, self.card)
    }
}
