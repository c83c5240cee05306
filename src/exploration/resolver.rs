//! # Room Resolution
//!
//! Runs the interaction of the room the player just entered.
//!
//! | Room  | Interaction                                  | Outcome                          |
//! |-------|----------------------------------------------|----------------------------------|
//! | Start | none                                         | `Cleared`                        |
//! | Empty | optional inspect, may turn up an item        | `Cleared`                        |
//! | Trap  | looks like Empty; inspecting usually drops you | `Cleared` or `FellIntoTrap`    |
//! | Chest | closed chest, then its contents              | `Cleared`                        |
//! | Enemy | fight                                        | `Cleared`, `FledCombat`, `Died`  |
//! | Boss  | fight                                        | `Completed`, `FledCombat`, `Died`|
//!
//! Each room resolves once. Entering a settled room again returns `Cleared` without
//! prompting, fighting or granting anything.

use crate::combat::{CombatOutcome, CombatResolver};
use crate::exploration::RoomOutcome;
use crate::game::{Character, Room, RoomType};
use crate::generation::ItemGenerator;
use crate::input::Prompt;
use crate::utils::roll_percent;
use crate::{BurrowError, BurrowResult};
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Asked in both empty and trapped rooms so the question gives nothing away.
const INSPECT_QUESTION: &str = "The room is quiet. Something glints in a corner. Inspect it?";

/// Chances and levels used by room resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Percent chance that inspecting an empty room finds an item
    pub empty_item_chance: u32,
    /// Percent chance that inspecting a trapped room is harmless
    pub trap_safe_chance: u32,
    /// Level of items found in empty rooms
    pub empty_item_level: u32,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            empty_item_chance: crate::config::EMPTY_ROOM_ITEM_CHANCE,
            trap_safe_chance: crate::config::TRAP_SAFE_CHANCE,
            empty_item_level: crate::config::EMPTY_ROOM_ITEM_LEVEL,
        }
    }
}

/// Resolves rooms against the combat and item collaborators.
pub struct RoomResolver {
    combat: Box<dyn CombatResolver>,
    items: Box<dyn ItemGenerator>,
    rng: StdRng,
    config: ResolverConfig,
}

impl RoomResolver {
    /// Creates a resolver whose chance rolls are seeded with `seed`.
    pub fn new(
        combat: impl CombatResolver + 'static,
        items: impl ItemGenerator + 'static,
        seed: u64,
    ) -> Self {
        Self {
            combat: Box::new(combat),
            items: Box::new(items),
            rng: StdRng::seed_from_u64(seed),
            config: ResolverConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Resolves `room` for `character`.
    ///
    /// Collaborator errors are returned as-is. The room and character are only
    /// updated once every collaborator call for the room has succeeded.
    pub fn resolve(
        &mut self,
        room: &mut Room,
        character: &mut Character,
        prompt: &mut dyn Prompt,
    ) -> BurrowResult<RoomOutcome> {
        if room.is_settled() {
            debug!("Room at {:?} already settled", room.position);
            return Ok(RoomOutcome::Cleared);
        }

        let outcome = match room.room_type {
            RoomType::Start => RoomOutcome::Cleared,
            RoomType::Empty => self.resolve_empty(room, character, prompt)?,
            RoomType::Trap => self.resolve_trap(room, prompt)?,
            RoomType::Chest => self.resolve_chest(room, character, prompt)?,
            RoomType::Enemy | RoomType::Boss => self.resolve_fight(room, character, prompt)?,
        };

        debug!(
            "Resolved {:?} room at {:?}: {:?}",
            room.room_type, room.position, outcome
        );
        Ok(outcome)
    }

    fn resolve_empty(
        &mut self,
        room: &mut Room,
        character: &mut Character,
        prompt: &mut dyn Prompt,
    ) -> BurrowResult<RoomOutcome> {
        if prompt.confirm(INSPECT_QUESTION)? {
            if roll_percent(&mut self.rng, self.config.empty_item_chance) {
                let item = self.items.generate_item(self.config.empty_item_level)?;
                prompt.acknowledge(&format!("Tucked in the corner: {}.", item.name))?;
                character.add_item(item);
            } else {
                prompt.acknowledge("Nothing but dust and old bones.")?;
            }
        }

        settle(room);
        Ok(RoomOutcome::Cleared)
    }

    fn resolve_trap(&mut self, room: &mut Room, prompt: &mut dyn Prompt) -> BurrowResult<RoomOutcome> {
        if !prompt.confirm(INSPECT_QUESTION)? {
            settle(room);
            return Ok(RoomOutcome::Cleared);
        }

        if roll_percent(&mut self.rng, self.config.trap_safe_chance) {
            prompt.acknowledge("Just a loose stone. You move on.")?;
            settle(room);
            return Ok(RoomOutcome::Cleared);
        }

        prompt.acknowledge("The floor gives way and you tumble out of the dungeon!")?;
        settle(room);
        Ok(RoomOutcome::FellIntoTrap)
    }

    fn resolve_chest(
        &mut self,
        room: &mut Room,
        character: &mut Character,
        prompt: &mut dyn Prompt,
    ) -> BurrowResult<RoomOutcome> {
        prompt.acknowledge("A heavy, closed chest stands against the wall.")?;

        let item = self.items.generate_item(character.level)?;
        prompt.acknowledge(&format!("The lid creaks open. Inside: {}.", item.name))?;
        character.add_item(item);

        settle(room);
        Ok(RoomOutcome::Cleared)
    }

    /// Fights the room's first enemy. The fight runs on copies that are written back
    /// only when the combat collaborator returns an outcome; a win adds the enemy's
    /// experience reward.
    fn resolve_fight(
        &mut self,
        room: &mut Room,
        character: &mut Character,
        prompt: &mut dyn Prompt,
    ) -> BurrowResult<RoomOutcome> {
        let is_boss = room.room_type == RoomType::Boss;
        let mut foe = room.enemies.first().cloned().ok_or_else(|| {
            BurrowError::InvalidState(format!(
                "uncleared {:?} room at {:?} has no enemy",
                room.room_type, room.position
            ))
        })?;

        let warning = if is_boss {
            format!("{} rises from its throne. There is no avoiding this fight.", foe.name)
        } else {
            format!("{} blocks your way. Prepare to fight!", foe.name)
        };
        prompt.acknowledge(&warning)?;

        let reward = foe.xp_reward;
        let mut fighter = character.clone();
        let outcome = self.combat.resolve_combat(&mut fighter, &mut foe)?;
        *character = fighter;

        match outcome {
            CombatOutcome::Victory => {
                character.xp = character.xp.saturating_add(reward);
                settle(room);
                Ok(if is_boss {
                    RoomOutcome::Completed
                } else {
                    RoomOutcome::Cleared
                })
            }
            CombatOutcome::Fled => {
                room.enemies[0] = foe;
                Ok(RoomOutcome::FledCombat)
            }
            CombatOutcome::Defeat => {
                room.enemies[0] = foe;
                Ok(RoomOutcome::Died)
            }
        }
    }
}

/// Marks the room's interaction spent and its enemies gone.
fn settle(room: &mut Room) {
    room.clear();
    room.interacted = true;
}
