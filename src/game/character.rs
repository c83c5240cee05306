//! # Characters, Enemies and Items
//!
//! Plain data carried through exploration. Stat bookkeeping beyond hit points,
//! experience and the inventory belongs to the character sheet, not to the dungeon.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The player's character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    /// Character level, also used as the dungeon difficulty
    pub level: u32,
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub xp: u32,
    pub inventory: Vec<Item>,
}

impl Character {
    /// Creates a fresh level 1 character.
    ///
    /// # Examples
    ///
    /// ```
    /// use burrow::Character;
    ///
    /// let hero = Character::new("Hero");
    /// assert_eq!(hero.level, 1);
    /// assert!(hero.is_alive());
    /// assert!(hero.inventory.is_empty());
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: 1,
            hp: 30,
            max_hp: 30,
            attack: 5,
            defense: 2,
            xp: 0,
            inventory: Vec::new(),
        }
    }

    /// Sets the character level.
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Puts an item into the inventory.
    pub fn add_item(&mut self, item: Item) {
        self.inventory.push(item);
    }

    /// Reduces hit points, never below zero.
    pub fn take_damage(&mut self, amount: i32) {
        self.hp = (self.hp - amount.max(0)).max(0);
    }
}

/// A hostile creature occupying a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub name: String,
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
    pub defense: i32,
    /// Experience granted for defeating it
    pub xp_reward: u32,
}

impl Enemy {
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Reduces hit points, never below zero.
    pub fn take_damage(&mut self, amount: i32) {
        self.hp = (self.hp - amount.max(0)).max(0);
    }
}

/// Broad category of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Weapon,
    Armor,
    Potion,
}

/// Something the character can carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub kind: ItemKind,
    pub level: u32,
    /// Attack, defense or healing value depending on `kind`
    pub power: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_creation() {
        let hero = Character::new("Hero").with_level(4);
        assert_eq!(hero.name, "Hero");
        assert_eq!(hero.level, 4);
        assert_eq!(hero.hp, hero.max_hp);
    }

    #[test]
    fn test_damage_floors_at_zero() {
        let mut hero = Character::new("Hero");
        hero.take_damage(1000);
        assert_eq!(hero.hp, 0);
        assert!(!hero.is_alive());

        let mut enemy = Enemy {
            name: "Rat".to_string(),
            hp: 5,
            max_hp: 5,
            attack: 1,
            defense: 0,
            xp_reward: 1,
        };
        enemy.take_damage(-3);
        assert_eq!(enemy.hp, 5);
        enemy.take_damage(5);
        assert!(!enemy.is_alive());
    }

    #[test]
    fn test_add_item() {
        let mut hero = Character::new("Hero");
        hero.add_item(Item {
            id: Uuid::nil(),
            name: "Stick".to_string(),
            kind: ItemKind::Weapon,
            level: 1,
            power: 1,
        });
        assert_eq!(hero.inventory.len(), 1);
        assert_eq!(hero.inventory[0].name, "Stick");
    }
}
