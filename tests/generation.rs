//! End-to-end generation tests against the public API

use rust_dungeon_grid::*;

fn walkable_count(dungeon: &Dungeon) -> usize {
    dungeon
        .to_bool_map()
        .iter()
        .flatten()
        .filter(|&&walkable| walkable)
        .count()
}

#[test]
fn complete_dungeon_generation() {
    let width = 30;
    let height = 30;

    let config = DungeonConfigBuilder::new(width, height)
        .seed(12345)
        .fixed_room(RoomRect::new(5, 5, 4, 4))
        .room_count(10)
        .build()
        .unwrap();

    let dungeon = Dungeon::generate(config).unwrap();
    let map = dungeon.to_bool_map();

    assert_eq!(map.len(), width, "map width should match input");
    assert_eq!(map[0].len(), height, "map height should match input");

    for x in 5..9 {
        for y in 5..9 {
            assert!(map[x][y], "fixed room should exist at ({x}, {y})");
        }
    }

    let walkable = walkable_count(&dungeon);
    assert!(walkable > 0, "dungeon should have walkable cells");
    assert!(walkable >= 16, "dungeon should have at least the fixed room cells");
}

#[test]
fn small_dungeon_with_three_fixed_rooms() {
    let config = DungeonConfigBuilder::new(15, 15)
        .seed(22222)
        .fixed_rooms([
            RoomRect::new(1, 1, 3, 3),
            RoomRect::new(6, 6, 3, 3),
            RoomRect::new(11, 1, 3, 3),
        ])
        .room_count(0)
        .build()
        .unwrap();

    let dungeon = Dungeon::generate(config).unwrap();
    let map = dungeon.to_bool_map();

    assert_eq!(map.len(), 15);
    assert_eq!(map[0].len(), 15);
    assert!(
        walkable_count(&dungeon) >= 27,
        "map should have at least the 3x3x3 fixed room cells"
    );
}

#[test]
fn generation_is_deterministic() {
    let build = || {
        DungeonConfigBuilder::new(50, 35)
            .seed(0xD00D)
            .room_count(14)
            .allow_diagonals(true)
            .build()
            .unwrap()
    };

    let first = Dungeon::generate(build()).unwrap();
    let second = Dungeon::generate(build()).unwrap();

    assert_eq!(first.to_bool_map(), second.to_bool_map());
    assert_eq!(first.render_ascii(), second.render_ascii());
}

#[test]
fn different_seeds_differ() {
    let build = |seed| {
        DungeonConfigBuilder::new(40, 40)
            .seed(seed)
            .room_count(10)
            .build()
            .unwrap()
    };

    // A pair of seeds colliding on the exact same map would be astonishing
    let a = Dungeon::generate(build(101)).unwrap();
    let b = Dungeon::generate(build(202)).unwrap();
    assert_ne!(a.to_bool_map(), b.to_bool_map());
}

#[test]
fn fixed_room_out_of_bounds_rejected_at_build() {
    let result = DungeonConfigBuilder::new(20, 20)
        .fixed_room(RoomRect::new(18, 18, 4, 4))
        .build();

    assert!(matches!(result, Err(DungeonError::RoomOutOfBounds { .. })));
}

#[test]
fn walkable_matches_bool_map() {
    let config = DungeonConfigBuilder::new(25, 25)
        .seed(8)
        .room_count(6)
        .build()
        .unwrap();

    let dungeon = Dungeon::generate(config).unwrap();
    let map = dungeon.to_bool_map();
    for x in 0..dungeon.width() {
        for y in 0..dungeon.height() {
            assert_eq!(map[x][y], dungeon.walkable(x, y));
        }
    }
}
