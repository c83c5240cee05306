//! # Exploration Loop
//!
//! Drives one exploration run: render the map, ask where to go, move, resolve the
//! room entered, repeat until the run ends.

use crate::exploration::{RoomResolver, SessionResult};
use crate::game::{Character, CharacterStore, DungeonSession};
use crate::input::{MovementChoice, Prompt};
use crate::rendering::DungeonRenderer;
use crate::{BurrowError, BurrowResult};
use log::{debug, info};

const BACK_OUT_QUESTION: &str = "Leave the dungeon? Your progress here will be lost.";

/// One exploration run over a session's dungeon.
///
/// Borrows every collaborator for the length of the run. Once the run reaches a
/// [`SessionResult`] the session's dungeon is discarded, so the next run starts
/// in a fresh one.
pub struct ExplorationLoop<'a> {
    session: &'a mut DungeonSession,
    resolver: &'a mut RoomResolver,
    prompt: &'a mut dyn Prompt,
    renderer: &'a dyn DungeonRenderer,
    store: Option<&'a mut dyn CharacterStore>,
}

impl<'a> ExplorationLoop<'a> {
    pub fn new(
        session: &'a mut DungeonSession,
        resolver: &'a mut RoomResolver,
        prompt: &'a mut dyn Prompt,
        renderer: &'a dyn DungeonRenderer,
    ) -> Self {
        Self {
            session,
            resolver,
            prompt,
            renderer,
            store: None,
        }
    }

    /// Saves the character after every resolved room and when the run ends.
    pub fn with_store(mut self, store: &'a mut dyn CharacterStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Plays until the run ends, returning how it ended.
    ///
    /// The dungeon is generated at the character's level if the session has none.
    /// Errors from any collaborator end the run immediately; the character is not
    /// saved for the room that failed.
    pub fn run(&mut self, character: &mut Character) -> BurrowResult<SessionResult> {
        info!("{} enters the dungeon", character.name);

        loop {
            let dungeon = self.session.get_or_create(character.level)?;
            let view = self.renderer.render(dungeon);
            let available = dungeon.current_room()?.hallways.open_directions();

            self.prompt.show(&view)?;
            let direction = match self.prompt.choose_direction(&available, true)? {
                MovementChoice::Move(direction) => direction,
                MovementChoice::BackOut => {
                    if !self.prompt.confirm(BACK_OUT_QUESTION)? {
                        continue;
                    }
                    self.session.renew();
                    return self.finish(character, SessionResult::Fled);
                }
            };

            self.session.move_player(direction)?;

            let room = self
                .session
                .dungeon_mut()
                .ok_or_else(|| BurrowError::InvalidState("dungeon vanished mid-move".to_string()))?
                .current_room_mut()?;
            let outcome = self.resolver.resolve(room, character, &mut *self.prompt)?;
            debug!("Room outcome {:?}", outcome);

            if let Some(result) = outcome.session_result() {
                self.session.renew();
                return self.finish(character, result);
            }

            self.save(character)?;
        }
    }

    fn finish(&mut self, character: &Character, result: SessionResult) -> BurrowResult<SessionResult> {
        self.save(character)?;
        info!("{} leaves the dungeon: {:?}", character.name, result);
        Ok(result)
    }

    fn save(&mut self, character: &Character) -> BurrowResult<()> {
        if let Some(store) = self.store.as_mut() {
            store.save(character)?;
        }
        Ok(())
    }
}
