//! Simple console interactive player.

use std::fmt::Display;
use std::io::Write;
use std::str::FromStr;
use std::sync::Arc;

use ansi_term::{ANSIString, ANSIStrings, Style};

use super::{Card, Event, Player, PlayerError, PlayerState};
use crate::datong::{sort_hand, Field, Suit, ANCHOR};

const RULES: &str = "\
Rules of Da Tong
  * The whole deck is dealt, thirteen cards each. Whoever holds the 7♠ plays it first.
  * After the 7♠, the other sevens and the 6♠ and 8♠ may be played. Every card played below a
    seven unlocks the next rank down, and every card above unlocks the next rank up.
  * If you hold a playable card, you must play one. Otherwise you discard any card face-down.
  * When all hands are empty, each player's penalty is the sum of their discarded ranks, plus a
    tenth of a point per seat after the opener. The lowest penalty wins.
  * A winner who discarded nothing makes a big sweep, and every award is doubled.

Type a card (e.g. 7s, th, 10h) to choose it. Commands: rules, pause, quit.";

/// An auxiliary screen that interrupts play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    /// Show the rules.
    Rules,
    /// Ask whether to leave the game.
    ExitConfirm,
    /// Suspend play until the player returns.
    Pause,
}

/// A line of console input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Card(Card),
    Popup(Popup),
}
impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rules" | "help" | "?" => Ok(Command::Popup(Popup::Rules)),
            "quit" | "exit" | "q" => Ok(Command::Popup(Popup::ExitConfirm)),
            "pause" | "p" => Ok(Command::Popup(Popup::Pause)),
            _ => Card::from_str(s).map(Command::Card).map_err(|_| ()),
        }
    }
}

pub struct Console {
    color: bool,
}
impl Default for Console {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Reads a line from stdin, returning None at end of input.
fn read_line() -> Option<String> {
    let mut buffer = String::new();
    match std::io::stdin().read_line(&mut buffer) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(buffer),
    }
}

fn prompt<T: FromStr, S: Display>(prompt: S) -> Option<T> {
    let mut stdout = std::io::stdout();
    loop {
        print!("{prompt}");
        stdout.flush().ok()?;
        let buffer = read_line()?;
        let trimmed = buffer.trim();
        if !trimmed.is_empty() {
            if let Ok(obj) = T::from_str(trimmed) {
                return Some(obj);
            }
            println!("Invalid input, try again");
        }
    }
}

fn confirm<S: Display>(question: S) -> Option<bool> {
    loop {
        let answer: String = prompt(&question)?;
        match answer.to_ascii_lowercase().as_str() {
            "y" | "yes" => return Some(true),
            "n" | "no" => return Some(false),
            _ => println!("Please answer yes or no"),
        }
    }
}

impl Console {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn into_player(self) -> Arc<dyn Player> {
        Arc::new(self)
    }

    fn format(&self, s: &ANSIStrings) -> String {
        if self.color {
            s.to_string()
        } else {
            ansi_term::unstyle(s)
        }
    }

    fn format_card(&self, card: Card) -> String {
        self.format(&ANSIStrings(&[card.to_ansi_string()]))
    }

    /// Formats a hand, with playable cards bracketed and highlighted.
    fn format_hand(&self, state: &PlayerState) -> String {
        let mut parts: Vec<ANSIString> = vec![];
        for (ii, &card) in state.hand.iter().enumerate() {
            if ii > 0 {
                parts.push(" ".into());
            }
            if state.playable.contains(card) {
                let mut s = card.to_ansi_string();
                let style = Style::bold(s.style_ref());
                *s.style_ref_mut() = style;
                parts.push("[".into());
                parts.push(s);
                parts.push("]".into());
            } else {
                parts.push(card.to_ansi_string());
            }
        }
        self.format(&ANSIStrings(&parts))
    }

    fn format_field(&self, field: &Field) -> String {
        let mut parts: Vec<ANSIString> = vec![];
        for (i, &suit) in Suit::all_suits().iter().enumerate() {
            if i != 0 {
                parts.push("  ".into());
            }
            parts.push(suit.to_ansi_string());
            parts.push(format!(":{}", field.run(suit)).into());
        }
        self.format(&ANSIStrings(&parts))
    }

    /// Shows the popup. Returns false if the player decided to leave.
    fn popup(&self, popup: Popup) -> bool {
        match popup {
            Popup::Rules => {
                println!("{RULES}");
                true
            }
            Popup::ExitConfirm => !confirm("Really quit? [y/n] ").unwrap_or(true),
            Popup::Pause => {
                print!("Paused. Press enter to continue.");
                std::io::stdout().flush().ok();
                read_line().is_some()
            }
        }
    }

    /// Formats the playable set, in display order.
    fn format_playable(&self, state: &PlayerState) -> String {
        let mut cards: Vec<Card> = state.playable.iter().copied().collect();
        sort_hand(&mut cards);
        let mut parts: Vec<ANSIString> = vec![];
        for (ii, card) in cards.iter().enumerate() {
            if ii > 0 {
                parts.push(" ".into());
            }
            parts.push(card.to_ansi_string());
        }
        self.format(&ANSIStrings(&parts))
    }

    fn choose(&self, state: &PlayerState, verb: &str) -> Option<Card> {
        println!("Field: {}", self.format_field(state.field));
        println!("Open: {}", self.format_playable(state));
        println!("Hand: {}", self.format_hand(state));
        loop {
            match prompt(format!("{verb}? "))? {
                Command::Card(card) => return Some(card),
                Command::Popup(popup) => {
                    if !self.popup(popup) {
                        return None;
                    }
                }
            }
        }
    }
}

impl Player for Console {
    fn decide_play(&self, state: &PlayerState) -> Option<Card> {
        self.choose(state, "Play")
    }

    fn decide_discard(&self, state: &PlayerState) -> Option<Card> {
        println!("Nothing to play, you must discard.");
        self.choose(state, "Discard")
    }

    fn notify(&self, state: PlayerState, event: &Event) {
        match event {
            Event::Deal(_) => {
                println!("You are {}", state.seat);
                println!("{} holds the {}", state.start, self.format_card(ANCHOR));
                if state.is_turn() {
                    println!("You lead.");
                }
            }
            Event::Play(seat, card) => {
                println!("{seat}: Play {}", self.format_card(*card));
            }
            Event::Discard(seat) if *seat == state.seat => {
                if let Some(card) = state.discards.last() {
                    println!("{seat}: Discard {}", self.format_card(*card));
                }
            }
            Event::Discard(seat) => {
                println!(
                    "{seat}: Discard ({} face-down, {} left in hand)",
                    state.discard_counts[*seat], state.hand_sizes[*seat]
                );
            }
            Event::Round(outcome) => {
                println!("Round over: {outcome}");
                if outcome.winner() == state.seat {
                    println!("You win!");
                }
            }
        }
    }

    fn handle_error(&self, err: PlayerError) -> bool {
        println!("Cannot do that: {err}");
        true
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::datong::{BaseRound, Round, RoundConfig};

    #[test]
    fn test_parse_command() {
        assert_eq!(Command::from_str("7s"), Ok(Command::Card(ANCHOR)));
        assert_eq!(
            Command::from_str("RULES"),
            Ok(Command::Popup(Popup::Rules))
        );
        assert_eq!(Command::from_str("q"), Ok(Command::Popup(Popup::ExitConfirm)));
        assert_eq!(Command::from_str("pause"), Ok(Command::Popup(Popup::Pause)));
        assert_eq!(Command::from_str("7x"), Err(()));
    }

    #[test]
    fn test_format_hand() {
        let round = BaseRound::from(RoundConfig::from_seed(2));
        let state = round.player_state(round.start_player());
        let console = Console::new(false);
        let text = console.format_hand(&state);
        assert!(text.contains("[7♠]"));
        assert_eq!(text.matches('[').count(), 1);
        assert_eq!(console.format_field(state.field), "♠:-  ♥:-  ♣:-  ♦:-");
        assert_eq!(console.format_playable(&state), "7♠");
    }
}
