//! Headless прогон галереи
//!
//! Аватар идёт к передней стене, открывает ближайшую картину, листает
//! вперёд и закрывает. Снимок печатается каждые 60 кадров.

use gallery_simulation::gallery::default_paintings;
use gallery_simulation::logger;
use gallery_simulation::{
    create_headless_app, register_paintings, world_snapshot, CycleSelection, DismissSelection,
    InputState, InteractRequested, LogicalKey,
};

fn main() {
    let seed = 42;
    logger::init_logger();
    logger::log_info(&format!("Starting gallery headless walk (seed: {})", seed));

    let mut app = create_headless_app(seed);
    register_paintings(app.world_mut(), default_paintings());

    for frame in 0..600u32 {
        match frame {
            // Вперёд к стене с картинами
            1 => press(&mut app, LogicalKey::Forward),
            240 => release(&mut app, LogicalKey::Forward),
            300 => {
                app.world_mut().send_event(InteractRequested);
            }
            420 => {
                app.world_mut().send_event(CycleSelection { forward: true });
            }
            540 => {
                app.world_mut().send_event(DismissSelection);
            }
            _ => {}
        }

        app.update();

        if frame % 60 == 0 {
            match world_snapshot(&app).to_json() {
                Ok(json) => logger::log_info(&format!("Frame {}: {}", frame, json)),
                Err(err) => logger::log_error(&format!("Frame {}: snapshot failed: {}", frame, err)),
            }
        }
    }

    logger::log_info("Headless walk complete");
}

fn press(app: &mut bevy::app::App, key: LogicalKey) {
    app.world_mut().resource_mut::<InputState>().press(key);
}

fn release(app: &mut bevy::app::App, key: LogicalKey) {
    app.world_mut().resource_mut::<InputState>().release(key);
}
