//! Error types

use super::{Card, Seat};

/// A rule violation by the acting player. The action is rejected and the round is left
/// untouched; the player may submit another action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayerError {
    /// Someone other than the current player attempted to act.
    #[error("it is {expected}'s turn, not {actual}'s")]
    NotYourTurn { expected: Seat, actual: Seat },

    /// The player doesn't actually hold the card they attempted to use.
    #[error("{0} does not hold {1}")]
    CardNotHeld(Seat, Card),

    /// The card does not extend any run on the field.
    #[error("{0} cannot be played yet")]
    NotPlayable(Card),

    /// Players may only discard when they hold no playable card.
    #[error("{0} holds a playable card and must play it")]
    MustPlay(Seat),
}

/// A broken engine invariant. These indicate a bug, never a player mistake, and abort the round.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantError {
    /// A card was played without having been unlocked.
    #[error("{0} was played but never unlocked")]
    NotUnlocked(Card),

    /// A card was unlocked a second time.
    #[error("{0} was unlocked twice")]
    UnlockedTwice(Card),

    /// A seven was placed on a suit whose middle is already occupied.
    #[error("the middle of {0} is already occupied")]
    MiddleOccupied(Card),

    /// Cards went missing, or appeared from nowhere.
    #[error("{0} cards accounted for, expected 52")]
    CardCount(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoundError {
    #[error("deck is missing cards")]
    IncompleteDeck,
    #[error("deck contains duplicate card")]
    DuplicateCard,
    #[error("each hand must hold 13 cards")]
    InvalidHandSize,
    #[error("{0} does not hold the opening card")]
    WrongStartPlayer(Seat),
    #[error("{0} already acted this turn")]
    TurnOver(Seat),
    #[error("the turn is not over")]
    TurnNotOver,
    #[error("round over")]
    RoundOver,
    #[error("round is still in progress")]
    RoundInProgress,
    #[error("log has {len} actions, cannot seek to {pos}")]
    InvalidLogPosition { pos: usize, len: usize },
    #[error(transparent)]
    Player(#[from] PlayerError),
    #[error("invariant broken: {0}")]
    Invariant(#[from] InvariantError),
}

impl RoundError {
    /// Returns true if the error indicates an engine bug rather than a bad request.
    pub fn is_fatal(&self) -> bool {
        matches!(self, RoundError::Invariant(_))
    }
}
