//! # Item Generation
//!
//! Items found in chests and searched rooms.

use crate::game::{Item, ItemKind};
use crate::BurrowResult;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use uuid::Builder;

/// Source of items granted during room resolution.
///
/// Errors are returned to the caller untouched; room resolution does not retry them.
pub trait ItemGenerator {
    /// Creates one item scaled to `level`.
    fn generate_item(&mut self, level: u32) -> BurrowResult<Item>;
}

const WEAPONS: &[&str] = &["Dagger", "Short Sword", "Mace", "Spear", "Battle Axe"];
const ARMOR: &[&str] = &["Leather Cap", "Buckler", "Chain Shirt", "Iron Greaves"];
const POTIONS: &[&str] = &["Healing Draught", "Tonic", "Elixir"];

/// Item generator rolling names, kinds and power from a seeded generator.
///
/// Item ids are drawn from the same generator so a seed reproduces them exactly.
#[derive(Debug, Clone)]
pub struct RandomItemGenerator {
    rng: StdRng,
}

impl RandomItemGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ItemGenerator for RandomItemGenerator {
    fn generate_item(&mut self, level: u32) -> BurrowResult<Item> {
        let kind = *[ItemKind::Weapon, ItemKind::Armor, ItemKind::Potion]
            .choose(&mut self.rng)
            .unwrap_or(&ItemKind::Potion);
        let names = match kind {
            ItemKind::Weapon => WEAPONS,
            ItemKind::Armor => ARMOR,
            ItemKind::Potion => POTIONS,
        };
        let base = names.choose(&mut self.rng).copied().unwrap_or("Trinket");

        let level = level.max(1);
        let power = level.min(i32::MAX as u32 / 4) as i32 + self.rng.gen_range(0..=2);
        let power = match kind {
            ItemKind::Potion => power * 3,
            _ => power,
        };

        Ok(Item {
            id: Builder::from_random_bytes(self.rng.gen()).into_uuid(),
            name: format!("{} +{}", base, level),
            kind,
            level,
            power,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_are_scaled() {
        let mut generator = RandomItemGenerator::new(3);
        let low = generator.generate_item(1).unwrap();
        let high = generator.generate_item(30).unwrap();

        assert_eq!(low.level, 1);
        assert_eq!(high.level, 30);
        assert!(high.power > low.power);
    }

    #[test]
    fn test_level_zero_is_raised() {
        let mut generator = RandomItemGenerator::new(3);
        assert_eq!(generator.generate_item(0).unwrap().level, 1);
    }

    #[test]
    fn test_ids_are_unique_and_reproducible() {
        let mut first = RandomItemGenerator::new(10);
        let mut second = RandomItemGenerator::new(10);

        let a = first.generate_item(2).unwrap();
        let b = first.generate_item(2).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(second.generate_item(2).unwrap(), a);
    }
}
