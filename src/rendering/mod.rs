//! # Rendering Module
//!
//! Text views of the dungeon for the terminal.

pub mod display;

pub use display::*;

use crate::game::Dungeon;

/// Produces the map view shown before each movement decision.
///
/// Implementations must hide rooms that are neither discovered nor joined by a
/// hallway to a discovered room, and must mark the player's room.
pub trait DungeonRenderer {
    fn render(&self, dungeon: &Dungeon) -> String;
}
