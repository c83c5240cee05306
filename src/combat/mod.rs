//! # Combat
//!
//! The interface the dungeon uses to hand a fight to a combat system, and a small
//! default resolver for the terminal binary.
//!
//! Room resolution only cares about how a fight ended. Damage formulas, turn order
//! and spell effects are entirely up to the implementation.

use crate::game::{Character, Enemy};
use crate::BurrowResult;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// How a fight ended. Exactly one outcome applies to each fight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatOutcome {
    /// The enemy was defeated
    Victory,
    /// The character escaped; the enemy remains
    Fled,
    /// The character was defeated
    Defeat,
}

/// Black-box combat collaborator.
///
/// Implementations settle hit points only; experience for a win is awarded by the
/// room resolver.
pub trait CombatResolver {
    /// Fights `enemy` with `character` until one side wins or the character flees.
    fn resolve_combat(
        &mut self,
        character: &mut Character,
        enemy: &mut Enemy,
    ) -> BurrowResult<CombatOutcome>;
}

/// Alternating blows until someone drops. The character strikes first and runs once
/// its hit points fall under `flee_threshold` of the maximum.
#[derive(Debug, Clone)]
pub struct DuelCombat {
    rng: StdRng,
    /// Fraction of max hit points below which the character flees
    pub flee_threshold: f64,
    /// Rounds after which the character gives up and flees
    pub max_rounds: u32,
}

impl DuelCombat {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            flee_threshold: crate::config::DEFAULT_FLEE_THRESHOLD,
            max_rounds: 100,
        }
    }

    /// Sets the fraction of max hit points below which the character flees.
    pub fn with_flee_threshold(mut self, threshold: f64) -> Self {
        self.flee_threshold = threshold;
        self
    }

    fn blow(&mut self, attack: i32, defense: i32) -> i32 {
        (attack - defense).max(1) + self.rng.gen_range(0..=1)
    }

    fn should_flee(&self, character: &Character) -> bool {
        (character.hp as f64) < character.max_hp as f64 * self.flee_threshold
    }
}

impl CombatResolver for DuelCombat {
    fn resolve_combat(
        &mut self,
        character: &mut Character,
        enemy: &mut Enemy,
    ) -> BurrowResult<CombatOutcome> {
        for round in 1..=self.max_rounds {
            let damage = self.blow(character.attack, enemy.defense);
            enemy.take_damage(damage);
            if !enemy.is_alive() {
                debug!("{} defeated {} in {} rounds", character.name, enemy.name, round);
                return Ok(CombatOutcome::Victory);
            }

            let damage = self.blow(enemy.attack, character.defense);
            character.take_damage(damage);
            if !character.is_alive() {
                debug!("{} fell to {} after {} rounds", character.name, enemy.name, round);
                return Ok(CombatOutcome::Defeat);
            }

            if self.should_flee(character) {
                debug!("{} fled from {} after {} rounds", character.name, enemy.name, round);
                return Ok(CombatOutcome::Fled);
            }
        }

        Ok(CombatOutcome::Fled)
    }
}
