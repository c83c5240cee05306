//! # Utilities Module
//!
//! Chance rolls and graph searches over the dungeon's hallways.

pub mod math;
pub mod pathfinding;

pub use math::*;
pub use self::pathfinding::*;
