//! Movement through a session's dungeon.

use burrow::{BurrowError, Direction, DungeonSession, GenerationConfig, Position};
use proptest::prelude::*;

fn session(seed: u64) -> DungeonSession {
    let config = GenerationConfig::new(seed);
    DungeonSession::new(config).unwrap()
}

#[test]
fn test_blocked_moves_change_nothing() {
    let mut session = session(3);
    session.get_or_create(2).unwrap();

    let blocked: Vec<Direction> = {
        let room = session.dungeon().unwrap().current_room().unwrap();
        Direction::all()
            .into_iter()
            .filter(|&direction| !room.hallways.get(direction))
            .collect()
    };
    // The start room sits in a corner, so north and west are always closed.
    assert!(blocked.contains(&Direction::North));
    assert!(blocked.contains(&Direction::West));

    let before = session.dungeon().unwrap().save_to_json().unwrap();
    for direction in blocked {
        let result = session.move_player(direction);
        assert!(matches!(
            result,
            Err(BurrowError::InvalidMove { position, .. }) if position == Position::origin()
        ));
    }
    assert_eq!(session.dungeon().unwrap().save_to_json().unwrap(), before);
}

#[test]
fn test_dungeon_survives_json_round_trip_mid_session() {
    let mut session = session(4);
    let dungeon = session.get_or_create(3).unwrap();
    let direction = dungeon.current_room().unwrap().hallways.open_directions()[0];
    session.move_player(direction).unwrap();

    let dungeon = session.dungeon().unwrap();
    let restored = burrow::Dungeon::load_from_json(&dungeon.save_to_json().unwrap()).unwrap();
    assert_eq!(&restored, dungeon);
}

proptest! {
    #[test]
    fn prop_discovery_is_monotonic(
        seed in any::<u64>(),
        picks in prop::collection::vec(0usize..4, 1..40),
    ) {
        let mut session = session(seed);
        session.get_or_create(1).unwrap();

        for pick in picks {
            let dungeon = session.dungeon().unwrap();
            let open = dungeon.current_room().unwrap().hallways.open_directions();
            let discovered_before: Vec<Position> = dungeon
                .iter_rooms()
                .filter(|room| room.discovered)
                .map(|room| room.position)
                .collect();

            let direction = open[pick % open.len()];
            let to = session.move_player(direction).unwrap();

            let dungeon = session.dungeon().unwrap();
            prop_assert_eq!(dungeon.player, to);
            prop_assert!(dungeon.room(to).unwrap().discovered);
            for position in discovered_before {
                prop_assert!(dungeon.room(position).unwrap().discovered);
            }
        }
    }
}
