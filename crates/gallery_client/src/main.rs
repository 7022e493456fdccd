use bevy::prelude::*;
use gallery_simulation::gallery::default_paintings;
use gallery_simulation::logger;
use gallery_simulation::{register_paintings, GalleryConfig, GallerySimulationPlugin};

mod camera;
mod hud;
mod input;
mod rendering;

use camera::CameraSyncPlugin;
use hud::HudPlugin;
use input::InputMappingPlugin;
use rendering::RenderingSyncPlugin;

/// Переменная окружения с путём к JSON-конфигу
const CONFIG_ENV: &str = "GALLERY_CONFIG";

fn main() {
    logger::init_logger();

    App::new()
        // Bevy defaults (rendering, input, time, etc.)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Gallery Walk".to_string(),
                resolution: (1280., 720.).into(),
                ..default()
            }),
            ..default()
        }))
        // Config до simulation plugin'а: plugin его не перезапишет
        .insert_resource(load_config())
        // Simulation (headless ECS logic)
        .add_plugins(GallerySimulationPlugin)
        // Keyboard / mouse / focus → simulation input
        .add_plugins(InputMappingPlugin)
        // Rendering sync (simulation → visuals)
        .add_plugins(RenderingSyncPlugin)
        // GalleryCamera → Camera3d
        .add_plugins(CameraSyncPlugin)
        // Prompt / selection text
        .add_plugins(HudPlugin)
        .add_systems(Startup, register_gallery)
        .run();
}

/// Конфиг из `GALLERY_CONFIG`, при ошибке: defaults
fn load_config() -> GalleryConfig {
    let Ok(path) = std::env::var(CONFIG_ENV) else {
        return GalleryConfig::default();
    };

    match GalleryConfig::load(&path) {
        Ok(config) => {
            logger::log_info(&format!("Loaded gallery config from {}", path));
            config
        }
        Err(err) => {
            logger::log_error(&format!("{}, falling back to defaults", err));
            GalleryConfig::default()
        }
    }
}

fn register_gallery(world: &mut World) {
    register_paintings(world, default_paintings());
}
