//! # Character Persistence
//!
//! Saving and loading the character between rooms and sessions. The dungeon itself
//! is never persisted here; it lives only as long as its session.

use crate::{BurrowResult, Character};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Storage for the acting character.
pub trait CharacterStore {
    /// Loads the saved character, if one exists.
    fn load(&mut self) -> BurrowResult<Option<Character>>;

    /// Saves the character, replacing any previous save.
    fn save(&mut self, character: &Character) -> BurrowResult<()>;
}

/// Stores the character as pretty-printed JSON in a single file.
///
/// Writes go to a sibling temporary file first and are renamed into place, so a
/// failed save never leaves a truncated file behind.
#[derive(Debug, Clone)]
pub struct JsonCharacterStore {
    path: PathBuf,
}

impl JsonCharacterStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl CharacterStore for JsonCharacterStore {
    fn load(&mut self) -> BurrowResult<Option<Character>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&json)?))
    }

    fn save(&mut self, character: &Character) -> BurrowResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(character)?;
        let temp = self.temp_path();
        fs::write(&temp, json)?;
        fs::rename(&temp, &self.path)?;

        debug!("Saved character {} to {}", character.name, self.path.display());
        Ok(())
    }
}
