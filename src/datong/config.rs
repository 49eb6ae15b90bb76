//! Game configuration.

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use super::{ScoreTable, Seat, Strategy};

/// Settings for a game session, loaded from a JSON file and overridden from the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Base awards by finishing position, best first.
    pub base_score: ScoreTable,
    /// How the robots choose their cards.
    pub strategy: Strategy,
    /// The seat played from the console. With no human, robots fill every seat.
    pub human: Option<Seat>,
    /// The number of rounds to play.
    pub rounds: u32,
    /// Pause before each robot decision, in milliseconds.
    pub ai_delay_ms: u64,
    /// Seed for dealing and for the robots. Random when unset.
    pub seed: Option<u64>,
    /// Whether to use ANSI colors on the console.
    pub color: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            base_score: ScoreTable::default(),
            strategy: Strategy::default(),
            human: Some(Seat::South),
            rounds: 1,
            ai_delay_ms: 500,
            seed: None,
            color: true,
        }
    }
}

impl GameConfig {
    /// Loads a configuration file. Missing fields take their default values.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("failed to open config {}", path.display()))?;
        serde_json::from_reader(std::io::BufReader::new(file))
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    /// The pause before each robot decision.
    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai_delay_ms)
    }

    /// The random number generator that deals the cards and seeds the robots.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
