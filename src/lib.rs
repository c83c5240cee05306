//! # Burrow
//!
//! Procedural maze dungeons and room-by-room exploration for a terminal role-playing game.
//!
//! ## Architecture Overview
//!
//! A dungeon is a square grid of rooms joined by hallways. Each exploration session works
//! against exactly one dungeon:
//!
//! - **Generation**: [`MazeGenerator`] carves a spanning tree of hallways from the boss room
//!   at the centre, types every room and populates its enemies
//! - **Session**: [`DungeonSession`] caches the active dungeon, validates movement and
//!   discards the dungeon once a session concludes
//! - **Resolution**: [`RoomResolver`] runs the one-time interaction of the room the player
//!   just entered (traps, chests, fights)
//! - **Exploration**: [`ExplorationLoop`] drives render, prompt, move and resolve until the
//!   session ends as completed, fled or died
//!
//! Rendering, input, combat, item creation and character persistence are collaborators
//! behind traits, each with a small default implementation used by the terminal binary.

pub mod combat;
pub mod exploration;
pub mod game;
pub mod generation;
pub mod input;
pub mod rendering;
pub mod utils;

pub use combat::*;
pub use exploration::*;
pub use game::*;
pub use generation::*;
pub use input::*;
pub use rendering::*;
pub use utils::*;

/// Core error type for the Burrow dungeon engine.
#[derive(thiserror::Error, Debug)]
pub enum BurrowError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Generation parameters are not allowed
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Movement through a direction without a hallway
    #[error("No hallway leads {direction:?} from {position:?}")]
    InvalidMove {
        position: Position,
        direction: Direction,
    },

    /// Game state is invalid
    #[error("Invalid game state: {0}")]
    InvalidState(String),

    /// Generation failed
    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    /// The combat collaborator failed
    #[error("Combat error: {0}")]
    Combat(String),

    /// The item collaborator failed
    #[error("Item generation error: {0}")]
    ItemGeneration(String),

    /// The player input stream ended
    #[error("Input closed")]
    InputClosed,
}

/// Result type used throughout the Burrow codebase.
pub type BurrowResult<T> = Result<T, BurrowError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Side lengths a dungeon grid may have
    pub const ALLOWED_DUNGEON_SIZES: [u32; 5] = [3, 5, 7, 9, 11];

    /// Dungeon side length used when none is requested
    pub const DEFAULT_DUNGEON_SIZE: u32 = 5;

    /// Difficulty added on top of the session difficulty for the boss
    pub const BOSS_DIFFICULTY_OFFSET: u32 = 10;

    /// Percent chance that inspecting an empty room turns up an item
    pub const EMPTY_ROOM_ITEM_CHANCE: u32 = 25;

    /// Percent chance that inspecting a trapped room is harmless
    pub const TRAP_SAFE_CHANCE: u32 = 25;

    /// Item level for finds in empty rooms
    pub const EMPTY_ROOM_ITEM_LEVEL: u32 = 1;

    /// Character hit point fraction under which the default combat resolver flees
    pub const DEFAULT_FLEE_THRESHOLD: f64 = 0.2;
}
