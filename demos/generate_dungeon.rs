//! Generate a dungeon and print it as ASCII art
//!
//! Run with: cargo run --example generate_dungeon

use rust_dungeon_grid::*;

fn main() {
    env_logger::init();

    let config = DungeonConfigBuilder::new(60, 30)
        .seed(42)
        .fixed_room(RoomRect::new(5, 5, 4, 4))
        .room_count(12)
        .build()
        .expect("valid config");

    println!("Generating {}x{} dungeon, seed {}", config.width, config.height, config.seed);

    let mut recorder = MemorySnapshotRecorder::new();
    let dungeon =
        Dungeon::generate_with_recorder(config, Some(&mut recorder)).expect("generation");

    println!("Placed {} rooms:", dungeon.rooms().len());
    for room in dungeon.rooms() {
        println!(
            "  room {}: ({}, {}) {}x{}, {} exits",
            room.id,
            room.x,
            room.y,
            room.width,
            room.height,
            room.exits.len()
        );
    }
    println!("Routed {} corridors", dungeon.corridors().len());

    for category in recorder.categories() {
        let snaps = recorder.snapshots(category);
        println!(
            "snapshot '{category}': {} points, {} lines",
            snaps[0].points.len(),
            snaps[0].lines.len()
        );
    }

    println!("\n{}", dungeon.render_ascii());
}
