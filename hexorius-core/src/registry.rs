//! Difficulty levels and the strategies that play them

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ai::{GreedyStrategy, LookaheadStrategy, MinimaxStrategy, Strategy};
use crate::error::{GameError, Result};

/// Difficulty label chosen by the player
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(GameError::UnknownDifficulty(other.to_string())),
        }
    }
}

/// One shared strategy per difficulty.
///
/// Built once at startup and handed out by reference. Strategies keep no
/// per-game state, so a single instance serves every game.
#[derive(Clone, Debug)]
pub struct StrategyRegistry {
    easy: Strategy,
    medium: Strategy,
    hard: Strategy,
}

impl StrategyRegistry {
    pub fn new() -> Self {
        Self {
            easy: Strategy::Greedy(GreedyStrategy::new()),
            medium: Strategy::Lookahead(LookaheadStrategy::new()),
            hard: Strategy::Minimax(MinimaxStrategy::new()),
        }
    }

    /// Replace the hard tier, e.g. to pin its seat or change its depth
    pub fn with_hard(mut self, hard: MinimaxStrategy) -> Self {
        self.hard = Strategy::Minimax(hard);
        self
    }

    pub fn get(&self, difficulty: Difficulty) -> &Strategy {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    /// Resolve a difficulty label. Unknown labels are a configuration error.
    pub fn strategy_for(&self, label: &str) -> Result<&Strategy> {
        let difficulty: Difficulty = label.parse()?;
        Ok(self.get(difficulty))
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::AiStrategy;
    use crate::game::GameState;
    use crate::level::LevelConfig;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_labels_roundtrip() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.as_str().parse::<Difficulty>().unwrap(), difficulty);
        }
        assert_eq!(
            "expert".parse::<Difficulty>(),
            Err(GameError::UnknownDifficulty("expert".to_string()))
        );
    }

    #[test]
    fn test_registry_titles() {
        let registry = StrategyRegistry::new();
        assert_eq!(registry.get(Difficulty::Easy).title(), "Easy");
        assert_eq!(registry.get(Difficulty::Medium).title(), "Medium");
        assert_eq!(registry.get(Difficulty::Hard).title(), "Hard");
    }

    #[test]
    fn test_unknown_label_is_error() {
        let registry = StrategyRegistry::new();
        assert!(registry.strategy_for("impossible").is_err());
        assert!(registry.strategy_for("Hard").is_err());
        assert!(registry.strategy_for("hard").is_ok());
    }

    #[test]
    fn test_same_instance_returned() {
        let registry = StrategyRegistry::new();
        let a = registry.get(Difficulty::Hard) as *const Strategy;
        let b = registry.strategy_for("hard").unwrap() as *const Strategy;
        assert_eq!(a, b);
    }

    #[test]
    fn test_hard_lookups_agree() {
        let registry = StrategyRegistry::new();
        let game = GameState::new(&LevelConfig::by_slug("first-steps").unwrap()).unwrap();

        let first = registry
            .strategy_for("hard")
            .unwrap()
            .find_best_move(&game, &mut ChaCha8Rng::seed_from_u64(11));
        let second = registry
            .strategy_for("hard")
            .unwrap()
            .find_best_move(&game, &mut ChaCha8Rng::seed_from_u64(12));
        assert!(first.is_some());
        assert_eq!(first, second);
    }
}
