//! # Exploration Module
//!
//! Turn-by-turn play through a dungeon: resolving rooms as they are entered and the
//! loop that moves the player until the session ends.

pub mod resolver;
pub mod runner;

pub use resolver::*;
pub use runner::*;

use serde::{Deserialize, Serialize};

/// Terminal outcome of one exploration run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionResult {
    /// The boss was defeated
    Completed,
    /// The player left the dungeon, ran from a fight or fell through a trap
    Fled,
    /// The character was defeated
    Died,
}

/// What happened when a room was entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomOutcome {
    /// Nothing (more) to do here; exploration continues
    Cleared,
    /// The boss fell
    Completed,
    /// Inspecting a trapped room dropped the player out of the dungeon
    FellIntoTrap,
    /// The character ran from a fight
    FledCombat,
    /// The character lost a fight
    Died,
}

impl RoomOutcome {
    /// The session result this outcome ends the run with, if any. Every terminal
    /// outcome also retires the dungeon.
    pub fn session_result(self) -> Option<SessionResult> {
        match self {
            RoomOutcome::Cleared => None,
            RoomOutcome::Completed => Some(SessionResult::Completed),
            RoomOutcome::FellIntoTrap | RoomOutcome::FledCombat => Some(SessionResult::Fled),
            RoomOutcome::Died => Some(SessionResult::Died),
        }
    }
}
