//! # Dungeon Session
//!
//! Owns the single active dungeon of an exploration session.
//!
//! The session is an ordinary value held by the caller. A dungeon is generated
//! lazily on first use, kept across exploration runs while the session lasts and
//! thrown away by [`DungeonSession::renew`] once the run that used it concludes.

use crate::game::{Direction, Dungeon, Position};
use crate::generation::{utils, GenerationConfig, Generator, MazeGenerator};
use crate::{BurrowError, BurrowResult};
use log::{debug, info, warn};
use rand::rngs::StdRng;

/// Cache of the active dungeon plus the generator state used to replace it.
#[derive(Debug, Clone)]
pub struct DungeonSession {
    config: GenerationConfig,
    generator: MazeGenerator,
    rng: StdRng,
    dungeon: Option<Dungeon>,
    generated: u64,
}

impl DungeonSession {
    /// Creates a session with no dungeon yet.
    ///
    /// The configuration is validated up front so a bad room pool fails before any
    /// dungeon is shown.
    ///
    /// # Examples
    ///
    /// ```
    /// use burrow::{DungeonSession, GenerationConfig};
    ///
    /// let mut session = DungeonSession::new(GenerationConfig::for_testing(1)).unwrap();
    /// assert!(session.dungeon().is_none());
    ///
    /// let dungeon = session.get_or_create(3).unwrap();
    /// assert_eq!(dungeon.size.side(), 3);
    /// ```
    pub fn new(config: GenerationConfig) -> BurrowResult<Self> {
        config.validate()?;
        let rng = utils::create_rng(&config);

        Ok(Self {
            config,
            generator: MazeGenerator::new(),
            rng,
            dungeon: None,
            generated: 0,
        })
    }

    /// The active dungeon, if one has been generated.
    pub fn dungeon(&self) -> Option<&Dungeon> {
        self.dungeon.as_ref()
    }

    /// Mutable access to the active dungeon, if one has been generated.
    pub fn dungeon_mut(&mut self) -> Option<&mut Dungeon> {
        self.dungeon.as_mut()
    }

    /// How many dungeons this session has generated so far.
    pub fn generated_count(&self) -> u64 {
        self.generated
    }

    /// Returns the active dungeon, generating one at `difficulty` if there is none.
    ///
    /// An existing dungeon is returned as-is, whatever difficulty is asked for now.
    pub fn get_or_create(&mut self, difficulty: u32) -> BurrowResult<&mut Dungeon> {
        if self.dungeon.is_none() {
            let config = self.config.clone().with_difficulty(difficulty);
            let dungeon = self.generator.generate(&config, &mut self.rng)?;
            self.generated += 1;
            info!(
                "Session generated dungeon #{} ({}x{}, difficulty {})",
                self.generated,
                config.size.side(),
                config.size.side(),
                difficulty
            );
            self.dungeon = Some(dungeon);
        }

        self.dungeon
            .as_mut()
            .ok_or_else(|| BurrowError::InvalidState("dungeon cache is empty".to_string()))
    }

    /// Moves the player one room through the hallway in `direction`.
    ///
    /// Moving where there is no hallway is rejected without touching the dungeon;
    /// prompts only ever offer open directions, so this signals a bug in the caller.
    pub fn move_player(&mut self, direction: Direction) -> BurrowResult<Position> {
        let dungeon = self.dungeon.as_mut().ok_or_else(|| {
            BurrowError::InvalidState("cannot move without an active dungeon".to_string())
        })?;

        let from = dungeon.player;
        let open = dungeon.current_room()?.hallways.get(direction);
        let destination = dungeon.neighbor(from, direction).filter(|_| open);

        let Some(to) = destination else {
            warn!("Rejected move {} from {:?}: no hallway", direction, from);
            return Err(BurrowError::InvalidMove {
                position: from,
                direction,
            });
        };

        let room = dungeon.room_mut(to).ok_or_else(|| {
            BurrowError::InvalidState(format!("hallway from {:?} leads off the grid", from))
        })?;
        room.discover();
        dungeon.player = to;

        debug!("Player moved {} from {:?} to {:?}", direction, from, to);
        Ok(to)
    }

    /// Discards the active dungeon so the next [`get_or_create`](Self::get_or_create)
    /// builds a new one.
    pub fn renew(&mut self) {
        if self.dungeon.take().is_some() {
            info!("Session dungeon discarded");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::RoomType;

    fn session() -> DungeonSession {
        DungeonSession::new(GenerationConfig::for_testing(31)).unwrap()
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = GenerationConfig::for_testing(1);
        config.room_pool = vec![RoomType::Start];
        assert!(matches!(
            DungeonSession::new(config),
            Err(BurrowError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_get_or_create_caches() {
        let mut session = session();
        let first = session.get_or_create(1).unwrap().clone();
        let second = session.get_or_create(50).unwrap().clone();

        assert_eq!(first, second);
        assert_eq!(session.generated_count(), 1);
    }

    #[test]
    fn test_renew_discards() {
        let mut session = session();
        session.get_or_create(1).unwrap();
        session.renew();

        assert!(session.dungeon().is_none());
        session.get_or_create(1).unwrap();
        assert_eq!(session.generated_count(), 2);
    }

    #[test]
    fn test_move_without_dungeon() {
        let mut session = session();
        assert!(matches!(
            session.move_player(Direction::East),
            Err(BurrowError::InvalidState(_))
        ));
    }

    #[test]
    fn test_move_through_open_hallway() {
        let mut session = session();
        let dungeon = session.get_or_create(1).unwrap();
        let direction = dungeon.current_room().unwrap().hallways.open_directions()[0];
        let expected = Position::origin().step(direction);

        let to = session.move_player(direction).unwrap();
        let dungeon = session.dungeon().unwrap();

        assert_eq!(to, expected);
        assert_eq!(dungeon.player, expected);
        assert!(dungeon.room(expected).unwrap().discovered);
    }

    #[test]
    fn test_move_off_grid_is_rejected() {
        let mut session = session();
        let before = session.get_or_create(1).unwrap().clone();

        let result = session.move_player(Direction::North);
        assert!(matches!(
            result,
            Err(BurrowError::InvalidMove {
                direction: Direction::North,
                ..
            })
        ));
        assert_eq!(session.dungeon(), Some(&before));
    }
}
