//! # Display Management
//!
//! Plain-text map rendering with fog of war.

use crate::game::{Direction, Dungeon, Position, Room, RoomType};
use crate::rendering::DungeonRenderer;

/// Draws the dungeon as a character grid.
///
/// Rooms are single glyphs joined by `-` and `|` hallways:
///
/// ```text
/// @-?
/// |
/// ?
/// ```
#[derive(Debug, Clone)]
pub struct TextRenderer {
    /// Whether to append a glyph legend under the map
    pub show_legend: bool,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self { show_legend: true }
    }

    /// A renderer that outputs only the map.
    pub fn map_only() -> Self {
        Self { show_legend: false }
    }

    /// Whether a room may be drawn at all: it is discovered, or a hallway joins it
    /// to a discovered room.
    pub fn is_visible(dungeon: &Dungeon, pos: Position) -> bool {
        let Some(room) = dungeon.room(pos) else {
            return false;
        };
        room.discovered
            || dungeon
                .connected_neighbors(pos)
                .into_iter()
                .any(|next| dungeon.room(next).is_some_and(|other| other.discovered))
    }

    fn room_glyph(dungeon: &Dungeon, room: &Room) -> char {
        if room.position == dungeon.player {
            return '@';
        }
        if !room.discovered {
            return if Self::is_visible(dungeon, room.position) { '?' } else { ' ' };
        }
        match room.room_type {
            RoomType::Start => 'S',
            RoomType::Boss => 'B',
            RoomType::Enemy if !room.cleared => 'E',
            RoomType::Chest if !room.interacted => 'C',
            _ => '.',
        }
    }

    /// Hallways are drawn once either end has been discovered.
    fn hallway_known(dungeon: &Dungeon, room: &Room, direction: Direction) -> bool {
        if !room.hallways.get(direction) {
            return false;
        }
        room.discovered
            || dungeon
                .neighbor(room.position, direction)
                .and_then(|next| dungeon.room(next))
                .is_some_and(|other| other.discovered)
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DungeonRenderer for TextRenderer {
    fn render(&self, dungeon: &Dungeon) -> String {
        let mut lines = Vec::new();

        for (y, row) in dungeon.rooms.iter().enumerate() {
            let mut rooms_line = String::new();
            let mut hallway_line = String::new();

            for room in row {
                rooms_line.push(Self::room_glyph(dungeon, room));
                rooms_line.push(if Self::hallway_known(dungeon, room, Direction::East) {
                    '-'
                } else {
                    ' '
                });

                hallway_line.push(if Self::hallway_known(dungeon, room, Direction::South) {
                    '|'
                } else {
                    ' '
                });
                hallway_line.push(' ');
            }

            lines.push(rooms_line.trim_end().to_string());
            if y + 1 < dungeon.rooms.len() {
                lines.push(hallway_line.trim_end().to_string());
            }
        }

        if self.show_legend {
            lines.push(String::new());
            lines.push("@ you  S start  B boss  E enemy  C chest  ? unexplored".to_string());
        }

        lines.join("\n")
    }
}
