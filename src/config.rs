//! Engine configuration: the seed behind every random duel draw.

use crate::models::GameError;
use serde::{Deserialize, Serialize};

/// Environment variable read by [`GameConfig::from_env`].
pub const SEED_ENV_VAR: &str = "HUNGER_GAMES_SEED";

fn default_seed() -> u64 {
    2023
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the game's random generator. Same roster + same seed = same game.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
        }
    }
}

impl GameConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }

    /// Parse a JSON config such as `{"seed": 7}`. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        serde_json::from_str(json).map_err(|e| GameError::InvalidConfig(e.to_string()))
    }

    /// Read the seed from `HUNGER_GAMES_SEED`, falling back to the default when unset or
    /// unparsable.
    pub fn from_env() -> Self {
        let seed = std::env::var(SEED_ENV_VAR)
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(default_seed);
        Self { seed }
    }
}
