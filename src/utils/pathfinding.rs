//! # Pathfinding Algorithms
//!
//! Breadth-first searches that only travel through open hallways.

use crate::game::{Direction, Dungeon, Position};
use ::pathfinding::prelude::{bfs, bfs_reach};
use std::collections::HashSet;

/// Every room reachable from `from` by walking open hallways, including `from` itself.
pub fn reachable_rooms(dungeon: &Dungeon, from: Position) -> HashSet<Position> {
    if dungeon.room(from).is_none() {
        return HashSet::new();
    }
    bfs_reach(from, |&pos| dungeon.connected_neighbors(pos)).collect()
}

/// Shortest hallway path between two rooms, both endpoints included.
///
/// In a generated dungeon the hallways form a tree, so this is the only path.
pub fn path_between(dungeon: &Dungeon, from: Position, to: Position) -> Option<Vec<Position>> {
    dungeon.room(from)?;
    bfs(&from, |&pos| dungeon.connected_neighbors(pos), |&pos| pos == to)
}

/// Converts a path of adjacent positions into the moves that walk it.
///
/// Returns None if two consecutive positions are not a single cardinal step apart.
pub fn directions_along(path: &[Position]) -> Option<Vec<Direction>> {
    path.windows(2)
        .map(|pair| Direction::from_delta(pair[1] - pair[0]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::DungeonSize;

    /// A 3x3 dungeon with a snake of hallways: along the top row, down the right
    /// column, then back along the bottom row.
    fn snake() -> Dungeon {
        let mut dungeon = Dungeon::new(DungeonSize::Three);
        let moves = [
            (Position::new(0, 0), Direction::East),
            (Position::new(1, 0), Direction::East),
            (Position::new(2, 0), Direction::South),
            (Position::new(2, 1), Direction::South),
            (Position::new(2, 2), Direction::West),
        ];
        for (pos, direction) in moves {
            dungeon.room_mut(pos).unwrap().hallways.set(direction, true);
            dungeon
                .room_mut(pos.step(direction))
                .unwrap()
                .hallways
                .set(direction.opposite(), true);
        }
        dungeon
    }

    #[test]
    fn test_reachable_rooms() {
        let dungeon = snake();
        let reachable = reachable_rooms(&dungeon, Position::origin());

        assert_eq!(reachable.len(), 6);
        assert!(reachable.contains(&Position::new(1, 2)));
        assert!(!reachable.contains(&Position::new(1, 1)));
        assert_eq!(reachable_rooms(&dungeon, Position::new(1, 1)).len(), 1);
        assert!(reachable_rooms(&dungeon, Position::new(9, 9)).is_empty());
    }

    #[test]
    fn test_path_between() {
        let dungeon = snake();
        let path = path_between(&dungeon, Position::origin(), Position::new(1, 2)).unwrap();

        assert_eq!(path.len(), 6);
        assert_eq!(path.first(), Some(&Position::origin()));
        assert_eq!(path.last(), Some(&Position::new(1, 2)));
        assert!(path_between(&dungeon, Position::origin(), Position::new(1, 1)).is_none());
    }

    #[test]
    fn test_directions_along() {
        let dungeon = snake();
        let path = path_between(&dungeon, Position::origin(), Position::new(2, 1)).unwrap();

        assert_eq!(
            directions_along(&path),
            Some(vec![Direction::East, Direction::East, Direction::South])
        );
        assert_eq!(
            directions_along(&[Position::origin(), Position::new(1, 1)]),
            None
        );
        assert_eq!(directions_along(&[Position::origin()]), Some(vec![]));
    }
}
