//! Players.

use std::sync::Arc;

use super::{ActionType, BySeat, Card, Event, PlayerError, PlayerState};

mod console;
mod robot;
#[cfg(test)]
mod scripted;
pub use console::Console;
pub use robot::{Robot, Strategy};
#[cfg(test)]
pub use scripted::Scripted;

/// A trait that implements a Da Tong player.
pub trait Player {
    /// Chooses a card to play. Only called when the player holds at least one card from the
    /// playable set, and the card must be one of them.
    ///
    /// Returning `None` abandons the game.
    fn decide_play(&self, state: &PlayerState) -> Option<Card>;

    /// Chooses a card to discard. Only called when the player holds no playable card; any card in
    /// hand is allowed.
    ///
    /// Returning `None` abandons the game.
    fn decide_discard(&self, state: &PlayerState) -> Option<Card>;

    /// Takes an action.
    fn take_action(&self, state: PlayerState, action: ActionType) -> Option<Card> {
        match action {
            ActionType::Play => self.decide_play(&state),
            ActionType::Discard => self.decide_discard(&state),
        }
    }

    /// A notification of an event, along with the state visible to this player.
    fn notify(&self, _state: PlayerState, _event: &Event) {}

    /// Indicates that the player's last decision was rejected.
    ///
    /// The implementation may return true, if a retry is desired. Otherwise, the rejection will be
    /// converted into a fatal error.
    fn handle_error(&self, err: PlayerError) -> bool;

    /// Returns true if a person is making the decisions. The driving loop paces the other players.
    fn is_interactive(&self) -> bool {
        false
    }
}

/// The players at the table, indexed by seat.
pub type Players = BySeat<Arc<dyn Player>>;
