//! # Dungeon Model
//!
//! Rooms, hallways and the square dungeon grid they live on.
//!
//! Hallways are stored on both rooms they join, so every edge appears twice. The
//! generator keeps both halves in sync and [`Dungeon::hallways_are_symmetric`] checks it.

use crate::{BurrowError, BurrowResult, Direction, Enemy, Position};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// Allowed side lengths of a dungeon grid.
///
/// Sizes are odd so the boss room sits exactly in the middle.
///
/// # Examples
///
/// ```
/// use burrow::DungeonSize;
/// use std::convert::TryFrom;
///
/// let size = DungeonSize::try_from(7).unwrap();
/// assert_eq!(size.side(), 7);
/// assert!(DungeonSize::try_from(4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum DungeonSize {
    Three,
    Five,
    Seven,
    Nine,
    Eleven,
}

impl DungeonSize {
    /// Every allowed size, smallest first.
    pub fn all() -> [DungeonSize; 5] {
        [
            DungeonSize::Three,
            DungeonSize::Five,
            DungeonSize::Seven,
            DungeonSize::Nine,
            DungeonSize::Eleven,
        ]
    }

    /// Number of rooms along one side.
    pub fn side(self) -> u32 {
        match self {
            DungeonSize::Three => 3,
            DungeonSize::Five => 5,
            DungeonSize::Seven => 7,
            DungeonSize::Nine => 9,
            DungeonSize::Eleven => 11,
        }
    }

    /// Total number of rooms in the grid.
    pub fn room_count(self) -> usize {
        (self.side() * self.side()) as usize
    }

    /// Position of the boss room at the centre of the grid.
    pub fn center(self) -> Position {
        let half = (self.side() / 2) as i32;
        Position::new(half, half)
    }
}

impl TryFrom<u32> for DungeonSize {
    type Error = BurrowError;

    fn try_from(side: u32) -> BurrowResult<Self> {
        match side {
            3 => Ok(DungeonSize::Three),
            5 => Ok(DungeonSize::Five),
            7 => Ok(DungeonSize::Seven),
            9 => Ok(DungeonSize::Nine),
            11 => Ok(DungeonSize::Eleven),
            other => Err(BurrowError::InvalidConfig(format!(
                "dungeon size {} is not one of {:?}",
                other,
                crate::config::ALLOWED_DUNGEON_SIZES
            ))),
        }
    }
}

impl From<DungeonSize> for u32 {
    fn from(size: DungeonSize) -> u32 {
        size.side()
    }
}

/// What a room holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    /// Entrance at (0, 0)
    Start,
    /// Nothing but a chance of a stray item
    Empty,
    /// Looks like an empty room, but inspecting it is dangerous
    Trap,
    /// A single regular enemy
    Enemy,
    /// A guaranteed item
    Chest,
    /// The boss at the centre of the grid
    Boss,
}

impl RoomType {
    /// Whether this type is only ever placed at a fixed position.
    pub fn is_special(self) -> bool {
        matches!(self, RoomType::Start | RoomType::Boss)
    }

    /// Whether entering a room of this type starts a fight.
    pub fn is_combat(self) -> bool {
        matches!(self, RoomType::Enemy | RoomType::Boss)
    }
}

/// Open hallways leaving a room.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hallways {
    pub north: bool,
    pub east: bool,
    pub south: bool,
    pub west: bool,
}

impl Hallways {
    /// Whether a hallway leads in `direction`.
    pub fn get(&self, direction: Direction) -> bool {
        match direction {
            Direction::North => self.north,
            Direction::East => self.east,
            Direction::South => self.south,
            Direction::West => self.west,
        }
    }

    /// Opens or closes the hallway in `direction`.
    pub fn set(&mut self, direction: Direction, open: bool) {
        match direction {
            Direction::North => self.north = open,
            Direction::East => self.east = open,
            Direction::South => self.south = open,
            Direction::West => self.west = open,
        }
    }

    /// Directions with an open hallway, clockwise from north.
    pub fn open_directions(&self) -> Vec<Direction> {
        Direction::all()
            .into_iter()
            .filter(|&direction| self.get(direction))
            .collect()
    }
}

/// One cell of the dungeon grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub room_type: RoomType,
    /// Enemies still in the room
    pub enemies: Vec<Enemy>,
    /// No enemies remain; only ever set together with an empty `enemies`
    pub cleared: bool,
    /// The player has seen this room; never reset
    pub discovered: bool,
    /// The room's one-time inspect, chest or fight has been spent
    #[serde(default)]
    pub interacted: bool,
    pub hallways: Hallways,
    pub position: Position,
}

impl Room {
    /// Creates an undiscovered empty room with no hallways.
    pub fn new(position: Position) -> Self {
        Self {
            room_type: RoomType::Empty,
            enemies: Vec::new(),
            cleared: false,
            discovered: false,
            interacted: false,
            hallways: Hallways::default(),
            position,
        }
    }

    /// Marks the room discovered. Discovery is never undone.
    pub fn discover(&mut self) {
        self.discovered = true;
    }

    /// Removes every enemy and marks the room cleared.
    pub fn clear(&mut self) {
        self.enemies.clear();
        self.cleared = true;
    }

    /// Whether entering the room again has nothing left to do.
    pub fn is_settled(&self) -> bool {
        match self.room_type {
            RoomType::Start => true,
            RoomType::Enemy | RoomType::Boss => self.cleared,
            RoomType::Empty | RoomType::Trap | RoomType::Chest => self.cleared && self.interacted,
        }
    }
}

/// A generated level: a square grid of rooms and the player's place in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dungeon {
    pub size: DungeonSize,
    /// Rows of rooms, indexed `rooms[y][x]`
    pub rooms: Vec<Vec<Room>>,
    pub player: Position,
}

impl Dungeon {
    /// Allocates a grid of empty, unconnected rooms with the player at the origin.
    pub fn new(size: DungeonSize) -> Self {
        let side = size.side() as i32;
        let rooms = (0..side)
            .map(|y| (0..side).map(|x| Room::new(Position::new(x, y))).collect())
            .collect();

        Self {
            size,
            rooms,
            player: Position::origin(),
        }
    }

    /// Position of the entrance room.
    pub fn start_position(&self) -> Position {
        Position::origin()
    }

    /// Position of the boss room.
    pub fn boss_position(&self) -> Position {
        self.size.center()
    }

    /// Checks if a position lies on the grid.
    pub fn is_valid_position(&self, pos: Position) -> bool {
        let side = self.size.side() as i32;
        pos.x >= 0 && pos.y >= 0 && pos.x < side && pos.y < side
    }

    /// Gets the room at a position, if it is on the grid.
    pub fn room(&self, pos: Position) -> Option<&Room> {
        if !self.is_valid_position(pos) {
            return None;
        }
        self.rooms
            .get(pos.y as usize)
            .and_then(|row| row.get(pos.x as usize))
    }

    /// Gets a mutable reference to the room at a position.
    pub fn room_mut(&mut self, pos: Position) -> Option<&mut Room> {
        if !self.is_valid_position(pos) {
            return None;
        }
        self.rooms
            .get_mut(pos.y as usize)
            .and_then(|row| row.get_mut(pos.x as usize))
    }

    /// The room the player currently stands in.
    pub fn current_room(&self) -> BurrowResult<&Room> {
        self.room(self.player).ok_or_else(|| {
            BurrowError::InvalidState(format!("player is off the grid at {:?}", self.player))
        })
    }

    /// Mutable access to the room the player currently stands in.
    pub fn current_room_mut(&mut self) -> BurrowResult<&mut Room> {
        let player = self.player;
        self.room_mut(player).ok_or_else(|| {
            BurrowError::InvalidState(format!("player is off the grid at {:?}", player))
        })
    }

    /// The grid neighbour of `pos` in `direction`, ignoring hallways.
    pub fn neighbor(&self, pos: Position, direction: Direction) -> Option<Position> {
        let next = pos.step(direction);
        self.is_valid_position(next).then_some(next)
    }

    /// Rooms reachable in one step from `pos` through open hallways.
    pub fn connected_neighbors(&self, pos: Position) -> Vec<Position> {
        self.room(pos)
            .map(|room| {
                room.hallways
                    .open_directions()
                    .into_iter()
                    .filter_map(|direction| self.neighbor(pos, direction))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Iterates over every room, row by row.
    pub fn iter_rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter().flat_map(|row| row.iter())
    }

    /// Iterates mutably over every room, row by row.
    pub fn iter_rooms_mut(&mut self) -> impl Iterator<Item = &mut Room> {
        self.rooms.iter_mut().flat_map(|row| row.iter_mut())
    }

    /// Counts distinct hallways. Each is stored on both of its rooms, so only the
    /// east and south halves are counted.
    pub fn hallway_edge_count(&self) -> usize {
        self.iter_rooms()
            .map(|room| {
                let east = room.hallways.east
                    && self.neighbor(room.position, Direction::East).is_some();
                let south = room.hallways.south
                    && self.neighbor(room.position, Direction::South).is_some();
                east as usize + south as usize
            })
            .sum()
    }

    /// Checks that every hallway has a matching half on the room it leads to and
    /// that none leads off the grid.
    pub fn hallways_are_symmetric(&self) -> bool {
        self.iter_rooms().all(|room| {
            Direction::all().into_iter().all(|direction| {
                match self.neighbor(room.position, direction) {
                    Some(next) => self
                        .room(next)
                        .map(|other| {
                            other.hallways.get(direction.opposite())
                                == room.hallways.get(direction)
                        })
                        .unwrap_or(false),
                    None => !room.hallways.get(direction),
                }
            })
        })
    }

    /// Positions of every room of the given type.
    pub fn positions_of(&self, room_type: RoomType) -> Vec<Position> {
        self.iter_rooms()
            .filter(|room| room.room_type == room_type)
            .map(|room| room.position)
            .collect()
    }

    /// Saves the dungeon to a JSON string.
    pub fn save_to_json(&self) -> BurrowResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Loads a dungeon from a JSON string.
    pub fn load_from_json(json: &str) -> BurrowResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
