//! # Encounter Generation
//!
//! Rolls the enemies that occupy combat rooms. Stats scale linearly with difficulty
//! and every roll comes from the caller's random number generator.

use crate::game::Enemy;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

const ENEMY_NAMES: &[&str] = &[
    "Cave Rat",
    "Goblin",
    "Skeleton",
    "Giant Spider",
    "Slime",
    "Bandit",
    "Kobold",
];

const BOSS_NAMES: &[&str] = &["Lich King", "Ancient Dragon", "Minotaur", "Beholder"];

/// Generator for room enemies and bosses.
#[derive(Debug, Clone)]
pub struct EncounterGenerator {
    enemy_names: Vec<String>,
    boss_names: Vec<String>,
}

impl EncounterGenerator {
    /// Creates a generator with the built-in name tables.
    pub fn new() -> Self {
        Self {
            enemy_names: ENEMY_NAMES.iter().map(|name| name.to_string()).collect(),
            boss_names: BOSS_NAMES.iter().map(|name| name.to_string()).collect(),
        }
    }

    /// Rolls a regular enemy at `difficulty`.
    ///
    /// # Examples
    ///
    /// ```
    /// use burrow::EncounterGenerator;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(1);
    /// let enemy = EncounterGenerator::new().generate_enemy(3, &mut rng);
    /// assert!(enemy.is_alive());
    /// assert_eq!(enemy.hp, enemy.max_hp);
    /// ```
    pub fn generate_enemy(&self, difficulty: u32, rng: &mut StdRng) -> Enemy {
        let name = pick_name(&self.enemy_names, "Monster", rng);
        roll_stats(name, difficulty, 1, rng)
    }

    /// Rolls a boss at `difficulty`, which is expected to already include the boss offset.
    pub fn generate_boss(&self, difficulty: u32, rng: &mut StdRng) -> Enemy {
        let name = pick_name(&self.boss_names, "Dungeon Lord", rng);
        roll_stats(name, difficulty, 2, rng)
    }
}

impl Default for EncounterGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn pick_name(names: &[String], fallback: &str, rng: &mut StdRng) -> String {
    names
        .choose(rng)
        .cloned()
        .unwrap_or_else(|| fallback.to_string())
}

/// Rolls stats for one enemy. `toughness` multiplies hit points and rewards.
fn roll_stats(name: String, difficulty: u32, toughness: i32, rng: &mut StdRng) -> Enemy {
    let level = difficulty.min(i32::MAX as u32 / 16) as i32;
    let max_hp = (8 + level * 4 + rng.gen_range(0..=level + 2)) * toughness;

    Enemy {
        name,
        hp: max_hp,
        max_hp,
        attack: 2 + level + rng.gen_range(0..=2),
        defense: level / 2 + rng.gen_range(0..=1),
        xp_reward: (5 + difficulty.saturating_mul(3)).saturating_mul(toughness as u32),
    }
}
