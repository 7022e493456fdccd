//! Детерминизм: один seed + один input script → идентичные снимки

use bevy::prelude::*;
use gallery_simulation::gallery::default_paintings;
use gallery_simulation::{
    create_headless_app, register_paintings, world_snapshot, Footprints, GalleryCamera,
    GallerySnapshot, InputState, LogicalKey,
};

/// Прогон: зигзаг с бегом, возвращает снимки + id следов
fn run_simulation(seed: u64, frames: usize) -> (Vec<GallerySnapshot>, Vec<String>, Vec3) {
    let mut app = create_headless_app(seed);
    register_paintings(app.world_mut(), default_paintings());

    let mut snapshots = Vec::new();
    for frame in 0..frames {
        {
            let mut input = app.world_mut().resource_mut::<InputState>();
            input.release_all();
            match (frame / 90) % 4 {
                0 => input.press(LogicalKey::Forward),
                1 => {
                    input.press(LogicalKey::Left);
                    input.press(LogicalKey::Run);
                }
                2 => input.press(LogicalKey::Backward),
                _ => {}
            }
        }

        app.update();

        if frame % 30 == 0 {
            snapshots.push(world_snapshot(&app));
        }
    }

    let footprint_ids = app
        .world()
        .resource::<Footprints>()
        .0
        .iter()
        .map(|f| f.id.clone())
        .collect();
    let camera_position = app.world().resource::<GalleryCamera>().position;

    (snapshots, footprint_ids, camera_position)
}

#[test]
fn test_determinism_same_seed() {
    const SEED: u64 = 12345;

    let first = run_simulation(SEED, 600);
    let second = run_simulation(SEED, 600);

    assert_eq!(first, second, "Симуляция с одинаковым seed ({}) дала разные результаты!", SEED);
}

#[test]
fn test_footprint_ids_depend_on_seed() {
    let (_, ids_a, _) = run_simulation(1, 200);
    let (_, ids_b, _) = run_simulation(2, 200);

    assert!(!ids_a.is_empty());
    assert_ne!(ids_a, ids_b);
}
