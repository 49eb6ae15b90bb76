//! Command line arguments

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::datong::{GameConfig, Seat, Strategy};

#[derive(Debug, Clone, Parser)]
#[command(version, about = "Da Tong, a four-player card game", long_about = None)]
pub struct Args {
    /// Seat to play from the console: south, east, north or west.
    #[arg(short, long, conflicts_with = "watch")]
    pub seat: Option<Seat>,

    /// Let robots play every seat.
    #[arg(short, long)]
    pub watch: bool,

    /// How robots choose their cards: random or heuristic.
    #[arg(long)]
    pub strategy: Option<Strategy>,

    /// Number of rounds to play.
    #[arg(short, long)]
    pub rounds: Option<u32>,

    /// Seed for a reproducible game.
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the game log to this file as JSON.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Replay a game log instead of playing.
    #[arg(long, conflicts_with_all = ["seat", "watch", "log_file"])]
    pub replay: Option<PathBuf>,

    /// With --replay, also show each round as it stood after this many actions.
    #[arg(long, requires = "replay")]
    pub upto: Option<usize>,

    /// Pause before each robot decision, in milliseconds.
    #[arg(long)]
    pub ai_delay_ms: Option<u64>,

    /// Disable ANSI colors.
    #[arg(long)]
    pub no_color: bool,

    /// More diagnostic output. Repeat for more.
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only report errors.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// The default tracing filter, when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (true, _) => "error",
            (false, 0) => "warn",
            (false, 1) => "info",
            (false, 2) => "debug",
            (false, _) => "trace",
        }
    }

    /// Applies command line overrides to a configuration.
    pub fn apply(&self, config: &mut GameConfig) {
        if self.watch {
            config.human = None;
        } else if let Some(seat) = self.seat {
            config.human = Some(seat);
        }
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Some(rounds) = self.rounds {
            config.rounds = rounds;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(delay) = self.ai_delay_ms {
            config.ai_delay_ms = delay;
        }
        if self.no_color {
            config.color = false;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_overrides() {
        let args = Args::parse_from(["datong", "--watch", "--strategy", "random", "-r", "3"]);
        let mut config = GameConfig::default();
        args.apply(&mut config);
        assert_eq!(config.human, None);
        assert_eq!(config.strategy, Strategy::Random);
        assert_eq!(config.rounds, 3);
        assert!(config.color);
    }

    #[test]
    fn test_seat_and_verbosity() {
        let args = Args::parse_from(["datong", "--seat", "north", "-vv"]);
        let mut config = GameConfig::default();
        args.apply(&mut config);
        assert_eq!(config.human, Some(Seat::North));
        assert_eq!(args.log_filter(), "debug");
    }

    #[test]
    fn test_conflicts() {
        assert!(Args::try_parse_from(["datong", "--seat", "east", "--watch"]).is_err());
        assert!(Args::try_parse_from(["datong", "--replay", "x.json", "--watch"]).is_err());
        assert!(Args::try_parse_from(["datong", "--seat", "up"]).is_err());
        assert!(Args::try_parse_from(["datong", "--upto", "5"]).is_err());
        let args = Args::try_parse_from(["datong", "--replay", "x.json", "--upto", "5"]).unwrap();
        assert_eq!(args.upto, Some(5));
    }
}
