//! Driver sandbox for `nabu-scene`.
//!
//! Plays the host role: builds a small scene forest, marks entities changed,
//! runs the propagation pass once per tick, and prints which entities a
//! downstream consumer (renderer, serializer, ...) would see as changed.

use anyhow::Context;
use nabu_scene::{propagate, EntityId, SceneWorld};

fn main() -> anyhow::Result<()> {
    init_logging();

    // The reference tree:
    //
    //     1
    //    / \
    //   2   3
    //  / \
    // 4   5
    let mut world = SceneWorld::new();
    world.spawn(EntityId::new(1), EntityId::NONE);
    world.spawn(EntityId::new(2), EntityId::new(1));
    world.spawn(EntityId::new(3), EntityId::new(1));
    world.spawn(EntityId::new(4), EntityId::new(2));
    world.spawn(EntityId::new(5), EntityId::new(2));

    // Tick 1: the host touched 2 and 3; their subtrees must follow.
    world.mark_changed(EntityId::new(2));
    world.mark_changed(EntityId::new(3));
    print_changes("before tick 1", &world);

    propagate(&mut world).context("tick 1")?;
    print_changes("after tick 1", &world);

    // Tick 2: nothing new marked; the pass must be a no-op.
    propagate(&mut world).context("tick 2")?;
    print_changes("after tick 2", &world);

    // Tick 3: a new entity appears under the already-changed 4.
    world.spawn(EntityId::new(6), EntityId::new(4));
    propagate(&mut world).context("tick 3")?;
    print_changes("after tick 3", &world);

    // Host-side reset, ready for the next frame's marking.
    world.clear_changed();
    print_changes("after reset", &world);

    Ok(())
}

fn print_changes(label: &str, world: &SceneWorld) {
    let ids: Vec<String> = world
        .changed_ids()
        .map(|id| id.raw().to_string())
        .collect();
    if ids.is_empty() {
        println!("{label}: no changed entities");
    } else {
        println!("{label}: changed {{{}}}", ids.join(", "));
    }
}

/// Logger bootstrap: info by default, `RUST_LOG` overrides.
fn init_logging() {
    let mut builder = env_logger::Builder::new();
    if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        builder.filter_level(log::LevelFilter::Info);
    }
    builder.init();
}
