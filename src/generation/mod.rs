//! # Generation Module
//!
//! Procedural content generation for dungeons, encounters and items.
//!
//! Every generator draws its randomness from a seeded [`StdRng`] handed in by the
//! caller, so the same seed always produces the same dungeon.

pub mod encounters;
pub mod items;
pub mod maze;

pub use encounters::*;
pub use items::*;
pub use maze::*;

use crate::game::{Dungeon, DungeonSize, RoomType};
use crate::{BurrowError, BurrowResult};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// Configuration for procedural generation.
///
/// Controls the grid size, how strong the generated enemies are and which room
/// kinds fill the cells that are neither the start nor the boss room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Random seed for reproducible generation
    pub seed: u64,
    /// Side length of the dungeon grid
    pub size: DungeonSize,
    /// Enemy scaling, usually the character level
    pub difficulty: u32,
    /// Extra difficulty for the boss
    pub boss_difficulty_offset: u32,
    /// Room kinds drawn uniformly for ordinary cells
    pub room_pool: Vec<RoomType>,
}

impl GenerationConfig {
    /// Creates a default generation configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use burrow::{DungeonSize, GenerationConfig};
    ///
    /// let config = GenerationConfig::new(7);
    /// assert_eq!(config.size, DungeonSize::Five);
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            size: DungeonSize::Five,
            difficulty: 1,
            boss_difficulty_offset: crate::config::BOSS_DIFFICULTY_OFFSET,
            room_pool: vec![RoomType::Enemy, RoomType::Trap, RoomType::Chest],
        }
    }

    /// Creates a configuration for testing with the smallest grid.
    pub fn for_testing(seed: u64) -> Self {
        Self {
            size: DungeonSize::Three,
            ..Self::new(seed)
        }
    }

    /// Creates a configuration from a raw side length, rejecting disallowed sizes.
    pub fn with_side(seed: u64, side: u32) -> BurrowResult<Self> {
        Ok(Self::new(seed).with_size(DungeonSize::try_from(side)?))
    }

    pub fn with_size(mut self, size: DungeonSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_difficulty(mut self, difficulty: u32) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Difficulty the boss is generated at.
    pub fn boss_difficulty(&self) -> u32 {
        self.difficulty.saturating_add(self.boss_difficulty_offset)
    }

    /// Checks that the room pool can fill ordinary cells.
    pub fn validate(&self) -> BurrowResult<()> {
        if self.room_pool.is_empty() {
            return Err(BurrowError::InvalidConfig(
                "room pool is empty".to_string(),
            ));
        }
        if let Some(special) = self.room_pool.iter().find(|kind| kind.is_special()) {
            return Err(BurrowError::InvalidConfig(format!(
                "{:?} rooms cannot be drawn from the room pool",
                special
            )));
        }
        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(42)
    }
}

/// Trait for procedural generators.
pub trait Generator<T> {
    /// Generates content using the provided configuration and random number generator.
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> BurrowResult<T>;

    /// Validates that the generated content meets requirements.
    fn validate(&self, content: &T, config: &GenerationConfig) -> BurrowResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Utility functions for generation algorithms.
pub mod utils {
    use super::*;
    use crate::game::Position;
    use crate::utils::pathfinding::reachable_rooms;
    use rand::SeedableRng;

    /// Creates a seeded random number generator from the config.
    pub fn create_rng(config: &GenerationConfig) -> StdRng {
        StdRng::seed_from_u64(config.seed)
    }

    /// Validates the structural invariants of a dungeon: a single start room at the
    /// origin, a single boss room at the centre, symmetric hallways forming a
    /// spanning tree over the whole grid.
    pub fn validate_dungeon(dungeon: &Dungeon) -> BurrowResult<()> {
        let fail = |reason: String| Err(BurrowError::GenerationFailed(reason));
        let size = dungeon.size;

        let side = size.side() as usize;
        if dungeon.rooms.len() != side || dungeon.rooms.iter().any(|row| row.len() != side) {
            return fail(format!("grid is not {}x{}", side, side));
        }

        let starts = dungeon.positions_of(RoomType::Start);
        if starts != vec![Position::origin()] {
            return fail(format!("expected one start room at the origin, found {:?}", starts));
        }
        if !dungeon.room(Position::origin()).is_some_and(|room| room.discovered) {
            return fail("start room is not discovered".to_string());
        }

        let bosses = dungeon.positions_of(RoomType::Boss);
        if bosses != vec![size.center()] {
            return fail(format!(
                "expected one boss room at {:?}, found {:?}",
                size.center(),
                bosses
            ));
        }

        if !dungeon.hallways_are_symmetric() {
            return fail("hallways are not symmetric".to_string());
        }

        let edges = dungeon.hallway_edge_count();
        if edges != size.room_count() - 1 {
            return fail(format!(
                "expected {} hallways, found {}",
                size.room_count() - 1,
                edges
            ));
        }

        let reachable = reachable_rooms(dungeon, Position::origin()).len();
        if reachable != size.room_count() {
            return fail(format!(
                "only {} of {} rooms are reachable from the start",
                reachable,
                size.room_count()
            ));
        }

        if let Some(room) = dungeon
            .iter_rooms()
            .find(|room| room.cleared && !room.enemies.is_empty())
        {
            return fail(format!("room at {:?} is cleared but has enemies", room.position));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_config_creation() {
        let config = GenerationConfig::new(12345);
        assert_eq!(config.seed, 12345);
        assert_eq!(config.boss_difficulty_offset, 10);
        assert_eq!(config.room_pool.len(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_with_side() {
        let config = GenerationConfig::with_side(1, 9).unwrap();
        assert_eq!(config.size, DungeonSize::Nine);
        assert!(matches!(
            GenerationConfig::with_side(1, 8),
            Err(BurrowError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_boss_difficulty() {
        let config = GenerationConfig::for_testing(1).with_difficulty(10);
        assert_eq!(config.boss_difficulty(), 20);
    }

    #[test]
    fn test_room_pool_validation() {
        let mut config = GenerationConfig::new(1);
        config.room_pool.clear();
        assert!(config.validate().is_err());

        config.room_pool = vec![RoomType::Chest, RoomType::Boss];
        assert!(config.validate().is_err());

        config.room_pool = vec![RoomType::Empty];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_utils_rng_creation() {
        use rand::Rng;

        let config = GenerationConfig::new(12345);
        let mut first = utils::create_rng(&config);
        let mut second = utils::create_rng(&config);
        assert_eq!(first.gen::<u64>(), second.gen::<u64>());
    }

    #[test]
    fn test_validate_rejects_unconnected_grid() {
        let mut dungeon = Dungeon::new(DungeonSize::Three);
        if let Some(start) = dungeon.room_mut(crate::Position::origin()) {
            start.room_type = RoomType::Start;
            start.discovered = true;
        }
        if let Some(boss) = dungeon.room_mut(DungeonSize::Three.center()) {
            boss.room_type = RoomType::Boss;
        }

        assert!(matches!(
            utils::validate_dungeon(&dungeon),
            Err(BurrowError::GenerationFailed(_))
        ));
    }
}
