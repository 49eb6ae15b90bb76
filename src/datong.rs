//! The game of Da Tong.

use std::convert::TryFrom;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use rand::Rng;
use tracing::{info, warn};

mod action;
mod card;
mod config;
mod error;
mod field;
mod game;
mod playable;
mod player;
mod round;
mod score;
mod seat;
pub use self::action::{Action, ActionType, ExpectAction};
pub use self::card::{sort_hand, Card, Deck, Pile, Rank, Suit, ANCHOR, DECK_SIZE, HAND_SIZE};
pub use self::config::GameConfig;
pub use self::error::{InvariantError, PlayerError, RoundError};
pub use self::field::Field;
pub use self::game::Game;
pub use self::playable::Playable;
pub use self::player::{Console, Player, Players, Robot, Strategy};
pub use self::round::{BaseRound, Log, LoggingRound, PlayerState, Round, RoundConfig};
pub use self::score::{score, RoundOutcome, ScoreTable};
pub use self::seat::{BySeat, Seat};

/// An event that occurs during a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The cards were dealt, and the seat holding the opening card leads.
    Deal(Seat),
    /// A player played a card onto the field.
    Play(Seat, Card),
    /// A player discarded face-down. The card is only visible to that player.
    Discard(Seat),
    /// The round is over.
    Round(RoundOutcome),
}

/// Drives a round to completion, asking each player for decisions in turn.
///
/// Robots are paced by `delay` before each decision. Returns the outcome, or `None` if a player
/// abandoned the game.
pub fn play_round<R: Round>(
    round: &mut R,
    players: &Players,
    delay: Duration,
) -> Result<Option<RoundOutcome>, RoundError> {
    loop {
        if round.turn_over() {
            round.advance_turn()?;
        }
        while let Some(event) = round.pop_event() {
            for (seat, player) in players.iter() {
                player.notify(round.player_state(seat), &event);
            }
        }
        let Some(expect) = round.next_action() else {
            return Ok(round.outcome());
        };

        let player = &players[expect.seat];
        if !player.is_interactive() && !delay.is_zero() {
            std::thread::sleep(delay);
        }
        let Some(card) = player.take_action(round.player_state(expect.seat), expect.action) else {
            info!(seat = %expect.seat, "player left the game");
            return Ok(None);
        };
        match round.apply_action(expect.with_card(card)) {
            Err(RoundError::Player(err)) if player.handle_error(err.clone()) => continue,
            Err(err) => {
                warn!(seat = %expect.seat, card = %card, error = %err, "action rejected");
                return Err(err);
            }
            Ok(()) => (),
        }
    }
}

/// Runs the game with a simple command-line interface.
pub fn cli_main(config: &GameConfig, log_file: Option<&Path>) -> anyhow::Result<()> {
    let mut rng = config.rng();
    let players: Players = BySeat::from_fn(|seat| {
        if config.human == Some(seat) {
            Console::new(config.color).into_player()
        } else {
            Robot::new(config.strategy, rng.gen()).into_player()
        }
    });

    let first = LoggingRound::from(RoundConfig::deal(&mut rng));
    let mut game = Game::new(first, config.base_score);
    let mut logs = vec![];
    for number in 1..=config.rounds {
        info!(round = number, start = %game.round().start_player(), "dealt");
        if play_round(game.round_mut(), &players, config.ai_delay())?.is_none() {
            println!("Game abandoned.");
            logs.push(Log::from(game.round()));
            break;
        }
        let finished = game.next_round(RoundConfig::deal(&mut rng))?;
        if config.human.is_none() {
            println!("Field: {}", finished.field());
            if let Some(outcome) = finished.outcome() {
                println!("Round {number}: {outcome}");
            }
        }
        logs.push(Log::from(finished));
        print_standings(&game);
    }

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log {}", path.display()))?;
        serde_json::to_writer(BufWriter::new(file), &logs)
            .with_context(|| format!("failed to write log {}", path.display()))?;
        info!(path = %path.display(), rounds = logs.len(), "wrote log");
    }
    Ok(())
}

fn print_standings<R>(game: &Game<R>) {
    let standings: Vec<_> = game
        .scores()
        .iter()
        .map(|(seat, score)| format!("{seat} {score:+}"))
        .collect();
    println!(
        "After {} round(s): {} (leader: {})",
        game.rounds_played(),
        standings.join(", "),
        game.leader()
    );
}

/// Replays a log written by [`cli_main`], validating every action and re-scoring each round.
///
/// With `upto`, also shows each round as it stood after that many actions.
pub fn replay_main(path: &Path, config: &GameConfig, upto: Option<usize>) -> anyhow::Result<()> {
    let file =
        File::open(path).with_context(|| format!("failed to open log {}", path.display()))?;
    let logs: Vec<Log> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse log {}", path.display()))?;

    let mut totals = BySeat::<i32>::default();
    for (index, log) in logs.into_iter().enumerate() {
        let number = index + 1;
        let mut round = LoggingRound::try_from(log)
            .with_context(|| format!("round {number} does not replay"))?;
        println!(
            "Round {number}: {} actions, opened by {}",
            round.cursor(),
            round.log().config().start()
        );
        println!("  Field: {}", round.field());
        if round.is_over() {
            let (outcome, deltas) =
                score(round.discards(), round.start_player(), &config.base_score);
            println!("  {outcome}");
            for &seat in Seat::all_seats() {
                totals[seat] += deltas[seat];
            }
        } else {
            println!("  Unfinished");
        }
        if let Some(pos) = upto {
            print_position(&mut round, pos)?;
        }
    }
    let totals: Vec<_> = totals
        .iter()
        .map(|(seat, score)| format!("{seat} {score:+}"))
        .collect();
    println!("Totals: {}", totals.join(", "));
    Ok(())
}

/// Rewinds a replayed round, and prints the field along with the last and next actions.
fn print_position(round: &mut LoggingRound, pos: usize) -> Result<(), RoundError> {
    let pos = pos.min(round.log().len());
    round.seek(pos)?;
    println!("  After {pos} actions: {}", round.field());
    if let Some(last) = pos.checked_sub(1).map(|i| round.log().actions()[i]) {
        println!("    Last: {last}");
    }
    match round.next_action() {
        Some(expect) => println!("    Next: {} to {}", expect.seat, expect.action),
        None => println!("    Round over"),
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use assert_matches::assert_matches;

    use super::player::Scripted;
    use super::*;

    fn robots(seed: u64) -> Players {
        BySeat::from_fn(|seat| {
            let seed = seed + seat.index() as u64;
            Robot::new(Strategy::Heuristic, seed).into_player()
        })
    }

    #[test]
    fn test_robots_finish_round() {
        let mut round = BaseRound::from(RoundConfig::from_seed(3));
        let outcome = play_round(&mut round, &robots(3), Duration::ZERO).unwrap();
        assert!(round.is_over());
        assert_eq!(outcome, round.outcome());
    }

    #[test]
    fn test_player_retries_and_leaves() {
        let config = RoundConfig::from_seed(8);
        let start = config.start();
        let blunder = config
            .hand(start)
            .iter()
            .copied()
            .find(|&c| c != ANCHOR)
            .unwrap();
        let scripted = Arc::new(
            Scripted::default()
                .plays(&[&blunder.to_string(), "7s"])
                .retries(),
        );
        let player: Arc<dyn Player> = scripted.clone();
        let mut players = robots(8);
        players[start] = player;

        let mut round = LoggingRound::from(config);
        let outcome = play_round(&mut round, &players, Duration::ZERO).unwrap();
        assert_eq!(outcome, None);
        assert_eq!(scripted.errors(), vec![PlayerError::NotPlayable(blunder)]);
        assert_eq!(round.log().actions()[0], Action::play(start, ANCHOR));
        let events = scripted.events();
        assert_eq!(events[0], Event::Deal(start));
        assert_eq!(events[1], Event::Play(start, ANCHOR));
    }

    #[test]
    fn test_rejected_robot_decision_is_fatal() {
        let config = RoundConfig::from_seed(8);
        let start = config.start();
        let mut players = robots(8);
        players[start] = Scripted::default().plays(&["7h"]).into_player();

        let mut round = BaseRound::from(config);
        let before = round.clone();
        let err = play_round(&mut round, &players, Duration::ZERO).unwrap_err();
        assert_matches!(err, RoundError::Player(_));
        assert!(!err.is_fatal());
        assert_eq!(round.hand(start), before.hand(start));
        assert_eq!(round.card_count(), DECK_SIZE);
    }

    #[test]
    fn test_log_file_replays() {
        let dir = std::env::temp_dir().join(format!("datong-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("log.json");
        let config = GameConfig {
            human: None,
            rounds: 2,
            ai_delay_ms: 0,
            seed: Some(5),
            color: false,
            ..GameConfig::default()
        };
        cli_main(&config, Some(&path)).unwrap();
        let logs: Vec<Log> =
            serde_json::from_reader(BufReader::new(File::open(&path).unwrap())).unwrap();
        assert_eq!(logs.len(), 2);
        assert!(logs.iter().all(|log| log.len() == DECK_SIZE));
        replay_main(&path, &config, None).unwrap();
        replay_main(&path, &config, Some(DECK_SIZE / 2)).unwrap();
        replay_main(&path, &config, Some(DECK_SIZE + 10)).unwrap();
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_print_position_rewinds() {
        let mut round = LoggingRound::from(RoundConfig::from_seed(12));
        let players = robots(12);
        play_round(&mut round, &players, Duration::ZERO).unwrap();
        let log = round.log().clone();

        print_position(&mut round, 3).unwrap();
        assert_eq!(round.cursor(), 3);
        assert_eq!(round.log(), &log);
        assert!(!round.is_over());

        print_position(&mut round, DECK_SIZE + 1).unwrap();
        assert_eq!(round.cursor(), DECK_SIZE);
        assert!(round.is_over());
    }
}
