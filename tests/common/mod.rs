//! Scripted collaborators shared by the integration tests.

#![allow(dead_code)]

use burrow::{
    BurrowError, BurrowResult, Character, CharacterStore, CombatOutcome, CombatResolver,
    Direction, Enemy, Item, ItemGenerator, ItemKind, MovementChoice, Prompt,
};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use uuid::Uuid;

/// Prompt that replays a fixed list of moves and yes/no answers.
///
/// Runs out of moves with [`BurrowError::InputClosed`]; unanswered questions get `false`.
#[derive(Default)]
pub struct ScriptedPrompt {
    pub moves: VecDeque<MovementChoice>,
    pub answers: VecDeque<bool>,
    pub offered: Vec<Vec<Direction>>,
    pub acknowledged: Vec<String>,
    pub views: Vec<String>,
}

impl ScriptedPrompt {
    pub fn walking(directions: &[Direction]) -> Self {
        Self {
            moves: directions.iter().map(|&d| MovementChoice::Move(d)).collect(),
            ..Self::default()
        }
    }

    pub fn then(mut self, choice: MovementChoice) -> Self {
        self.moves.push_back(choice);
        self
    }

    pub fn answering(mut self, answers: &[bool]) -> Self {
        self.answers.extend(answers.iter().copied());
        self
    }
}

impl Prompt for ScriptedPrompt {
    fn show(&mut self, view: &str) -> BurrowResult<()> {
        self.views.push(view.to_string());
        Ok(())
    }

    fn choose_direction(
        &mut self,
        available: &[Direction],
        _allow_back_out: bool,
    ) -> BurrowResult<MovementChoice> {
        self.offered.push(available.to_vec());
        self.moves.pop_front().ok_or(BurrowError::InputClosed)
    }

    fn confirm(&mut self, _question: &str) -> BurrowResult<bool> {
        Ok(self.answers.pop_front().unwrap_or(false))
    }

    fn acknowledge(&mut self, message: &str) -> BurrowResult<()> {
        self.acknowledged.push(message.to_string());
        Ok(())
    }
}

/// Combat collaborator that always ends the same way and counts its fights.
pub struct StubCombat {
    pub outcome: CombatOutcome,
    pub fights: Rc<Cell<u32>>,
}

impl StubCombat {
    pub fn new(outcome: CombatOutcome) -> (Self, Rc<Cell<u32>>) {
        let fights = Rc::new(Cell::new(0));
        (
            Self {
                outcome,
                fights: Rc::clone(&fights),
            },
            fights,
        )
    }
}

impl CombatResolver for StubCombat {
    fn resolve_combat(
        &mut self,
        _character: &mut Character,
        enemy: &mut Enemy,
    ) -> BurrowResult<CombatOutcome> {
        self.fights.set(self.fights.get() + 1);
        if self.outcome == CombatOutcome::Victory {
            enemy.hp = 0;
        }
        Ok(self.outcome)
    }
}

/// Item collaborator that hands out numbered items and counts them.
pub struct StubItems {
    pub granted: Rc<Cell<u32>>,
}

impl StubItems {
    pub fn new() -> (Self, Rc<Cell<u32>>) {
        let granted = Rc::new(Cell::new(0));
        (
            Self {
                granted: Rc::clone(&granted),
            },
            granted,
        )
    }
}

impl ItemGenerator for StubItems {
    fn generate_item(&mut self, level: u32) -> BurrowResult<Item> {
        let n = self.granted.get() + 1;
        self.granted.set(n);
        Ok(Item {
            id: Uuid::from_u128(n as u128),
            name: format!("Trinket #{}", n),
            kind: ItemKind::Potion,
            level,
            power: 1,
        })
    }
}

/// In-memory character store recording every save.
#[derive(Clone, Default)]
pub struct MemoryStore {
    pub saves: Rc<RefCell<Vec<Character>>>,
}

impl CharacterStore for MemoryStore {
    fn load(&mut self) -> BurrowResult<Option<Character>> {
        Ok(self.saves.borrow().last().cloned())
    }

    fn save(&mut self, character: &Character) -> BurrowResult<()> {
        self.saves.borrow_mut().push(character.clone());
        Ok(())
    }
}
