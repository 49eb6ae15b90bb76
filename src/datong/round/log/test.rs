use std::convert::TryFrom;

use assert_matches::assert_matches;

use super::*;
use crate::datong::{ActionType, LoggingRound, PlayerError, Seat, ANCHOR, DECK_SIZE};

/// Plays a seeded round to completion, always picking the first legal card.
fn finished_round(seed: u64) -> LoggingRound {
    let mut round = LoggingRound::from(RoundConfig::from_seed(seed));
    while let Some(expect) = round.next_action() {
        let state = round.player_state(expect.seat);
        let card = match expect.action {
            ActionType::Play => state.legal_plays()[0],
            ActionType::Discard => state.hand[0],
        };
        round.apply_action(expect.with_card(card)).unwrap();
        round.advance_turn().unwrap();
    }
    round
}

#[test]
fn test_log_records_every_action() {
    let round = finished_round(5);
    let log = round.log();
    assert_eq!(log.len(), DECK_SIZE);
    assert_eq!(round.cursor(), DECK_SIZE);
    let first = log.actions()[0];
    assert_eq!(first, Action::play(log.config().start(), ANCHOR));
}

#[test]
fn test_rejected_actions_are_not_logged() {
    let mut round = LoggingRound::from(RoundConfig::from_seed(9));
    let start = round.start_player();
    assert!(round.apply_action(Action::play(start.next(), ANCHOR)).is_err());
    assert_eq!(round.log().len(), 0);
    round.apply_action(Action::play(start, ANCHOR)).unwrap();
    assert_eq!(round.log().len(), 1);
}

#[test]
fn test_serde() {
    let log = Log::from(finished_round(13));
    let ser = serde_json::to_string(&log).unwrap();
    let de: Log = serde_json::from_str(&ser).unwrap();
    assert_eq!(log, de);
}

#[test]
fn test_replay() {
    let original = finished_round(21);
    let log = Log::from(&original);
    let replayed = LoggingRound::try_from(log).unwrap();
    assert!(replayed.is_over());
    assert_eq!(replayed.outcome(), original.outcome());
    for &seat in Seat::all_seats() {
        assert_eq!(replayed.discards()[seat], original.discards()[seat]);
    }
}

#[test]
fn test_replay_rejects_tampered_log() {
    let mut log = Log::from(finished_round(21));
    let first = log.actions()[0];
    log.insert(0, Action::play(first.seat.next(), first.card));
    assert_matches!(
        LoggingRound::try_from(log),
        Err(RoundError::Player(PlayerError::NotYourTurn { .. }))
    );
}

#[test]
fn test_seek() {
    let mut round = finished_round(34);
    let log = round.log().clone();

    round.seek(1).unwrap();
    assert_eq!(round.cursor(), 1);
    assert!(!round.is_over());
    assert_eq!(round.field().len(), 1);
    assert_eq!(round.current_player(), log.config().start().next());

    assert_matches!(
        round.seek(DECK_SIZE + 1),
        Err(RoundError::InvalidLogPosition { pos, len: DECK_SIZE }) if pos == DECK_SIZE + 1
    );

    round.seek(DECK_SIZE).unwrap();
    assert!(round.is_over());

    round.seek(0).unwrap();
    assert_eq!(round.cursor(), 0);
    assert_eq!(round.field().len(), 0);
    assert_eq!(round.log().len(), DECK_SIZE);
}

#[test]
fn test_apply_after_seek_truncates() {
    let mut round = finished_round(55);
    round.seek(1).unwrap();
    let expect = round.next_action().unwrap();
    let state = round.player_state(expect.seat);
    let card = match expect.action {
        ActionType::Play => state.legal_plays()[0],
        ActionType::Discard => state.hand[0],
    };
    round.apply_action(expect.with_card(card)).unwrap();
    assert_eq!(round.cursor(), 2);
    assert_eq!(round.log().len(), 2);
}
