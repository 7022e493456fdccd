//! Gallery Walk Simulation Core
//!
//! Per-frame симуляция виртуальной галереи на Bevy 0.16 ECS (headless):
//! движение аватара, follow/orbit camera, proximity к картинам, следы.
//!
//! Хост (client / тесты) даёт:
//! - кадры (`app.update()`) с delta time
//! - input events и `InputState`
//! - зарегистрированные картины и clip ids
//!
//! и читает опубликованные resources (AvatarState, GalleryCamera, ...).

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

// Публичные модули
pub mod animation;
pub mod camera;
pub mod config;
pub mod footprints;
pub mod gallery;
pub mod input;
pub mod logger;
pub mod movement;
pub mod proximity;
pub mod selection;
pub mod state;

// Re-export для удобства хоста
pub use animation::{ActiveAnimation, AnimationChanged, AnimationClips, AnimationState};
pub use camera::{CameraConfig, CameraMode, GalleryCamera};
pub use config::{ConfigError, GalleryConfig};
pub use footprints::{Footprint, FootprintConfig, Footprints, FootstepTaken};
pub use input::{
    InputFocusLost, InputState, JoystickMoved, JoystickReleased, LogicalKey, PointerDragged,
};
pub use movement::{MovementConfig, MovementTarget};
pub use proximity::{NearestPaintingChanged, ProximityConfig};
pub use selection::{
    CycleSelection, DismissSelection, InteractRequested, SelectPainting, SelectionChanged,
};
pub use state::*;

/// Фиксированная длина кадра headless прогона
pub const HEADLESS_FRAME: f64 = 1.0 / 60.0;

/// Порядок per-frame систем внутри `Update`
///
/// Input → Movement → Interaction → Camera → Presentation.
/// Camera и proximity читают AvatarState, уже опубликованный в этом кадре.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GallerySet {
    Input,
    Movement,
    Interaction,
    Camera,
    Presentation,
}

/// Главный plugin симуляции (объединяет все подсистемы)
///
/// `GalleryConfig` можно вставить до plugin'а: тогда он не перезаписывается.
pub struct GallerySimulationPlugin;

impl Plugin for GallerySimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GalleryConfig>()
            .init_resource::<InputState>()
            .init_resource::<AvatarState>()
            .init_resource::<MovementTarget>()
            .init_resource::<PaintingRegistry>()
            .init_resource::<NearestPainting>()
            .init_resource::<SelectedPainting>()
            .init_resource::<GalleryCamera>()
            .init_resource::<Footprints>()
            .init_resource::<footprints::FootstepTimer>()
            .init_resource::<AnimationClips>()
            .init_resource::<ActiveAnimation>()
            .init_resource::<CharacterKind>()
            .init_resource::<GalleryPaused>();

        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(42));
        }

        // Регистрация событий
        app.add_event::<InputFocusLost>()
            .add_event::<JoystickMoved>()
            .add_event::<JoystickReleased>()
            .add_event::<PointerDragged>()
            .add_event::<TogglePause>()
            .add_event::<SetCharacterKind>()
            .add_event::<InteractRequested>()
            .add_event::<SelectPainting>()
            .add_event::<CycleSelection>()
            .add_event::<DismissSelection>()
            .add_event::<SelectionChanged>()
            .add_event::<NearestPaintingChanged>()
            .add_event::<FootstepTaken>()
            .add_event::<AnimationChanged>();

        app.configure_sets(
            Update,
            (
                GallerySet::Input,
                GallerySet::Movement,
                GallerySet::Interaction,
                GallerySet::Camera,
                GallerySet::Presentation,
            )
                .chain(),
        )
        .configure_sets(
            Update,
            (
                GallerySet::Movement,
                GallerySet::Interaction,
                GallerySet::Camera,
                GallerySet::Presentation,
            )
                .run_if(gallery_running),
        );

        app.add_systems(
            Update,
            (
                (input::apply_input_events, apply_session_events)
                    .chain()
                    .in_set(GallerySet::Input),
                movement::integrate_avatar_movement.in_set(GallerySet::Movement),
                (
                    proximity::detect_nearest_painting,
                    selection::apply_selection_requests,
                )
                    .chain()
                    .in_set(GallerySet::Interaction),
                (camera::apply_camera_drag, camera::update_gallery_camera)
                    .chain()
                    .in_set(GallerySet::Camera),
                (
                    footprints::update_footprints,
                    animation::update_animation_state,
                )
                    .chain()
                    .in_set(GallerySet::Presentation),
            ),
        );
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Регистрирует картины (idempotent upsert)
pub fn register_paintings(world: &mut World, paintings: impl IntoIterator<Item = Painting>) {
    let mut registry = world.get_resource_or_insert_with(PaintingRegistry::default);
    for painting in paintings {
        registry.register(painting);
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Время идёт ровно по `HEADLESS_FRAME` на `app.update()` (первый кадр: delta 0).
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    logger::init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            HEADLESS_FRAME,
        )))
        .add_plugins(GallerySimulationPlugin);

    app
}

/// Snapshot для UI / сравнения прогонов
pub fn world_snapshot(app: &App) -> GallerySnapshot {
    gallery_snapshot(app.world())
}
