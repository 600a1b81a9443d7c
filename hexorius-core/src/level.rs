//! Level configuration - board size, jump range and starting placements

use std::path::Path;

use anyhow::Context;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::board::{Hex, MAX_RADIUS};
use crate::error::{GameError, Result};
use crate::game::Player;

/// Initial pieces for both sides, each entry tagged with its owner
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartingPositions {
    pub player1: Vec<(Hex, Player)>,
    pub player2: Vec<(Hex, Player)>,
}

impl StartingPositions {
    /// All placements, player one's list first
    pub fn iter(&self) -> impl Iterator<Item = (Hex, Player)> + '_ {
        self.player1.iter().chain(self.player2.iter()).copied()
    }
}

/// A playable level.
///
/// Only `grid_radius`, `max_jump_distance` and `starting_positions` affect
/// the rules; the descriptive fields are carried through for callers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    pub grid_radius: u8,
    /// Farthest legal jump. Adjacent cells are always reachable, so 0
    /// makes a duplication-only level.
    pub max_jump_distance: u8,
    pub starting_positions: StartingPositions,
}

impl LevelConfig {
    /// Reject configurations that would build an inconsistent board
    pub fn validate(&self) -> Result<()> {
        if self.grid_radius == 0 || self.grid_radius > MAX_RADIUS {
            return Err(self.invalid(format!(
                "grid radius {} outside 1..={}",
                self.grid_radius, MAX_RADIUS
            )));
        }

        let mut seen = FxHashSet::default();
        for (hex, _) in self.starting_positions.iter() {
            if !hex.is_within(self.grid_radius) {
                return Err(self.invalid(format!(
                    "placement ({},{}) is off the board",
                    hex.q, hex.r
                )));
            }
            if !seen.insert(hex) {
                return Err(self.invalid(format!(
                    "placement ({},{}) assigned twice",
                    hex.q, hex.r
                )));
            }
        }

        Ok(())
    }

    fn invalid(&self, reason: String) -> GameError {
        GameError::InvalidLevel {
            level: self.slug.clone(),
            reason,
        }
    }

    /// Look up a built-in level by slug
    pub fn by_slug(slug: &str) -> Result<Self> {
        catalog()
            .into_iter()
            .find(|level| level.slug == slug)
            .ok_or_else(|| GameError::UnknownLevel(slug.to_string()))
    }

    /// Load from JSON file and validate
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read level file: {}", path.display()))?;
        let level: LevelConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse level file: {}", path.display()))?;
        level.validate()?;
        Ok(level)
    }

    /// Save to JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ============================================================================
// BUILT-IN LEVELS
// ============================================================================

fn level(
    name: &str,
    slug: &str,
    description: &str,
    grid_radius: u8,
    max_jump_distance: u8,
    player1: &[(i8, i8)],
    player2: &[(i8, i8)],
) -> LevelConfig {
    let place = |cells: &[(i8, i8)], player: Player| {
        cells
            .iter()
            .map(|&(q, r)| (Hex::new(q, r), player))
            .collect::<Vec<_>>()
    };

    LevelConfig {
        name: name.to_string(),
        slug: slug.to_string(),
        description: description.to_string(),
        grid_radius,
        max_jump_distance,
        starting_positions: StartingPositions {
            player1: place(player1, Player::One),
            player2: place(player2, Player::Two),
        },
    }
}

/// The built-in level progression, smallest board first
pub fn catalog() -> Vec<LevelConfig> {
    vec![
        // Radius 3 - beginner
        level(
            "First Steps", "first-steps",
            "A compact introduction to the basics",
            3, 2,
            &[(-2, 1), (1, -2)],
            &[(2, -1), (-1, 2)],
        ),
        level(
            "Triangle Formation", "triangle-formation",
            "Three-piece setup in a tight space",
            3, 2,
            &[(-2, 1), (-1, -1), (1, -2)],
            &[(2, -1), (1, 1), (-1, 2)],
        ),
        // Radius 4 - intermediate
        level(
            "Classic Square", "classic-square",
            "Traditional 4-cell layout with balanced positions",
            4, 2,
            &[(-3, 0), (0, -3)],
            &[(3, 0), (0, 3)],
        ),
        level(
            "Triple Threat", "triple-threat",
            "Three pieces in triangular formation",
            4, 2,
            &[(-3, 0), (-1, -2), (2, -3)],
            &[(3, 0), (1, 2), (-2, 3)],
        ),
        level(
            "Extended Range", "extended-range",
            "Standard grid with longer jump distance",
            4, 3,
            &[(-3, 0), (0, -3), (-2, -1)],
            &[(3, 0), (0, 3), (2, 1)],
        ),
        // Radius 5 - advanced
        level(
            "Star Points", "star-points",
            "Five-cell grid with strategic corner positions",
            5, 2,
            &[(-4, 0), (0, -4)],
            &[(4, 0), (0, 4)],
        ),
        level(
            "Triple Star", "triple-star",
            "Three-piece setup in a larger arena",
            5, 2,
            &[(-4, 0), (-2, -2), (1, -4)],
            &[(4, 0), (2, 2), (-1, 4)],
        ),
        level(
            "Long Range", "long-range",
            "Extended jump distance in a large space",
            5, 3,
            &[(-4, 0), (-2, -2), (1, -4)],
            &[(4, 0), (2, 2), (-1, 4)],
        ),
        // Radius 6 - expert
        level(
            "Grand Arena", "grand-arena",
            "Spacious battlefield with multiple pieces",
            6, 2,
            &[(-5, 0), (-3, -2), (0, -5)],
            &[(5, 0), (3, 2), (0, 5)],
        ),
        level(
            "Four Corners", "four-corners",
            "Four pieces spread across the board",
            6, 2,
            &[(-5, 0), (-3, -2), (0, -5), (2, -3)],
            &[(5, 0), (3, 2), (0, 5), (-2, 3)],
        ),
        level(
            "Strategic Jump", "strategic-jump",
            "Extended range with multiple pieces",
            6, 3,
            &[(-5, 0), (-2, -3), (1, -5)],
            &[(5, 0), (2, 3), (-1, 5)],
        ),
        // Radius 7 - master
        level(
            "Master Arena", "master-arena",
            "Massive board with strategic positioning",
            7, 2,
            &[(-6, 0), (-3, -3), (0, -6)],
            &[(6, 0), (3, 3), (0, 6)],
        ),
        level(
            "Grand Master", "grand-master",
            "Complex setup with extended jump range",
            7, 3,
            &[(-6, 0), (-4, -2), (-2, -4), (0, -6)],
            &[(6, 0), (4, 2), (2, 4), (0, 6)],
        ),
        level(
            "Ultimate Challenge", "ultimate-challenge",
            "Maximum complexity with long-range jumps",
            7, 4,
            &[(-6, 0), (-3, -3), (0, -6), (3, -6)],
            &[(6, 0), (3, 3), (0, 6), (-3, 6)],
        ),
        level(
            "Legend", "legend",
            "The ultimate test of skill and strategy",
            7, 4,
            &[(-6, 0), (-4, -2), (-2, -4), (0, -6), (2, -6)],
            &[(6, 0), (4, 2), (2, 4), (0, 6), (-2, 6)],
        ),
    ]
}

impl Default for LevelConfig {
    fn default() -> Self {
        catalog().swap_remove(0)
    }
}
