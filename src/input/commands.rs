//! # Command Definitions
//!
//! Parsing of the short typed commands accepted by the terminal prompt.

use crate::game::Direction;

/// What the player wants to do next when standing in a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementChoice {
    /// Walk through the hallway in this direction
    Move(Direction),
    /// Leave the dungeon, ending the session as fled
    BackOut,
}

/// Parses a movement command such as `n`, `east` or `back`.
///
/// # Examples
///
/// ```
/// use burrow::{parse_movement, Direction, MovementChoice};
///
/// assert_eq!(parse_movement(" N "), Some(MovementChoice::Move(Direction::North)));
/// assert_eq!(parse_movement("leave"), Some(MovementChoice::BackOut));
/// assert_eq!(parse_movement("up"), None);
/// ```
pub fn parse_movement(input: &str) -> Option<MovementChoice> {
    let choice = match input.trim().to_lowercase().as_str() {
        "n" | "north" => MovementChoice::Move(Direction::North),
        "e" | "east" => MovementChoice::Move(Direction::East),
        "s" | "south" => MovementChoice::Move(Direction::South),
        "w" | "west" => MovementChoice::Move(Direction::West),
        "b" | "back" | "leave" | "q" | "quit" => MovementChoice::BackOut,
        _ => return None,
    };
    Some(choice)
}

/// Parses a yes/no answer.
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Key hint shown next to a direction in prompts.
pub fn direction_key(direction: Direction) -> char {
    match direction {
        Direction::North => 'n',
        Direction::East => 'e',
        Direction::South => 's',
        Direction::West => 'w',
    }
}
