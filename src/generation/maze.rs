//! # Maze Generation
//!
//! Builds a dungeon as a perfect maze over a square grid of rooms.
//!
//! Generation runs in four passes:
//! 1. Place the boss room at the centre and the discovered start room at the origin
//! 2. Carve hallways with a randomized depth-first search rooted at the boss room
//! 3. Draw a type from the room pool for every other room
//! 4. Populate enemies and mark enemy-free rooms as cleared
//!
//! Depth-first carving visits each room exactly once and opens one hallway per visit,
//! so the result is a spanning tree: every room is reachable and there are no loops.

use crate::game::{Direction, Dungeon, Position, RoomType};
use crate::generation::{utils, EncounterGenerator, GenerationConfig, Generator};
use crate::{BurrowError, BurrowResult};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Dungeon generator carving a spanning tree of hallways.
#[derive(Debug, Clone, Default)]
pub struct MazeGenerator {
    /// Produces the enemies placed in combat rooms
    pub encounters: EncounterGenerator,
}

/// One room on the carving stack with the directions still left to try.
struct CarveFrame {
    position: Position,
    directions: [Direction; 4],
    next: usize,
}

impl CarveFrame {
    fn new(position: Position, rng: &mut StdRng) -> Self {
        let mut directions = Direction::all();
        directions.shuffle(rng);
        Self {
            position,
            directions,
            next: 0,
        }
    }

    fn next_direction(&mut self) -> Option<Direction> {
        let direction = self.directions.get(self.next).copied();
        self.next += 1;
        direction
    }
}

impl MazeGenerator {
    /// Creates a maze generator with the default enemy tables.
    ///
    /// # Examples
    ///
    /// ```
    /// use burrow::{GenerationConfig, Generator, MazeGenerator, Position, RoomType};
    ///
    /// let config = GenerationConfig::for_testing(7);
    /// let mut rng = burrow::generation::utils::create_rng(&config);
    /// let dungeon = MazeGenerator::new().generate(&config, &mut rng).unwrap();
    ///
    /// assert_eq!(dungeon.room(Position::new(1, 1)).unwrap().room_type, RoomType::Boss);
    /// assert_eq!(dungeon.hallway_edge_count(), 8);
    /// ```
    pub fn new() -> Self {
        Self {
            encounters: EncounterGenerator::new(),
        }
    }

    /// Marks the boss and start rooms.
    fn place_special_rooms(&self, dungeon: &mut Dungeon) -> BurrowResult<()> {
        let boss_position = dungeon.boss_position();
        let boss = dungeon.room_mut(boss_position).ok_or_else(|| {
            BurrowError::GenerationFailed(format!("boss position {:?} is off the grid", boss_position))
        })?;
        boss.room_type = RoomType::Boss;

        let start_position = dungeon.start_position();
        let start = dungeon.room_mut(start_position).ok_or_else(|| {
            BurrowError::GenerationFailed("start position is off the grid".to_string())
        })?;
        start.room_type = RoomType::Start;
        start.discover();

        Ok(())
    }

    /// Carves hallways with a depth-first search from the boss room.
    ///
    /// Uses an explicit stack so the depth is bounded by the heap rather than the call
    /// stack. The order of visits and random draws is the same as the recursive form:
    /// each room shuffles its four directions when first entered.
    fn carve_hallways(&self, dungeon: &mut Dungeon, rng: &mut StdRng) {
        let side = dungeon.size.side() as usize;
        let mut visited = vec![vec![false; side]; side];

        let root = dungeon.boss_position();
        visited[root.y as usize][root.x as usize] = true;
        let mut stack = vec![CarveFrame::new(root, rng)];

        while let Some(frame) = stack.last_mut() {
            let current = frame.position;
            let Some(direction) = frame.next_direction() else {
                stack.pop();
                continue;
            };

            let Some(next) = dungeon.neighbor(current, direction) else {
                continue;
            };
            if visited[next.y as usize][next.x as usize] {
                continue;
            }

            visited[next.y as usize][next.x as usize] = true;
            Self::open_hallway(dungeon, current, next, direction);
            stack.push(CarveFrame::new(next, rng));
        }
    }

    /// Opens both halves of the hallway between two adjacent rooms.
    fn open_hallway(dungeon: &mut Dungeon, from: Position, to: Position, direction: Direction) {
        if let Some(room) = dungeon.room_mut(from) {
            room.hallways.set(direction, true);
        }
        if let Some(room) = dungeon.room_mut(to) {
            room.hallways.set(direction.opposite(), true);
        }
    }

    /// Draws a type for every room that is neither the start nor the boss room.
    fn assign_room_types(
        &self,
        dungeon: &mut Dungeon,
        config: &GenerationConfig,
        rng: &mut StdRng,
    ) -> BurrowResult<()> {
        for room in dungeon.iter_rooms_mut() {
            if room.room_type.is_special() {
                continue;
            }
            room.room_type = *config.room_pool.choose(rng).ok_or_else(|| {
                BurrowError::InvalidConfig("room pool is empty".to_string())
            })?;
        }
        Ok(())
    }

    /// Gives combat rooms their enemy and clears every room left without one.
    fn populate_enemies(&self, dungeon: &mut Dungeon, config: &GenerationConfig, rng: &mut StdRng) {
        for room in dungeon.iter_rooms_mut() {
            room.enemies = match room.room_type {
                RoomType::Enemy => vec![self.encounters.generate_enemy(config.difficulty, rng)],
                RoomType::Boss => vec![self.encounters.generate_boss(config.boss_difficulty(), rng)],
                _ => Vec::new(),
            };
            room.cleared = room.enemies.is_empty();
        }
    }
}

impl Generator<Dungeon> for MazeGenerator {
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> BurrowResult<Dungeon> {
        config.validate()?;

        let mut dungeon = Dungeon::new(config.size);
        self.place_special_rooms(&mut dungeon)?;
        self.carve_hallways(&mut dungeon, rng);
        self.assign_room_types(&mut dungeon, config, rng)?;
        self.populate_enemies(&mut dungeon, config, rng);

        self.validate(&dungeon, config)?;

        debug!(
            "{} carved {} hallways over {} rooms",
            self.generator_type(),
            dungeon.hallway_edge_count(),
            config.size.room_count()
        );
        info!(
            "Generated {}x{} dungeon at difficulty {}",
            config.size.side(),
            config.size.side(),
            config.difficulty
        );

        Ok(dungeon)
    }

    fn validate(&self, dungeon: &Dungeon, config: &GenerationConfig) -> BurrowResult<()> {
        if dungeon.size != config.size {
            return Err(BurrowError::GenerationFailed(format!(
                "dungeon is {:?} but {:?} was requested",
                dungeon.size, config.size
            )));
        }
        utils::validate_dungeon(dungeon)
    }

    fn generator_type(&self) -> &'static str {
        "MazeGenerator"
    }
}
