//! Movement systems (ECS)

use bevy::prelude::*;

use super::integrator::{integrate, MovementTarget};
use crate::config::GalleryConfig;
use crate::input::InputState;
use crate::state::AvatarState;

/// Система: intent → AvatarState (раз за кадр)
///
/// # Архитектура
/// - Читает: InputState, GalleryConfig.movement, Time delta
/// - Пишет: AvatarState (единственный writer), MovementTarget
pub fn integrate_avatar_movement(
    input: Res<InputState>,
    config: Res<GalleryConfig>,
    time: Res<Time>,
    mut target: ResMut<MovementTarget>,
    mut avatar: ResMut<AvatarState>,
) {
    let next = integrate(
        &avatar,
        &mut target,
        input.movement_intent(),
        input.run_held(),
        &config.movement,
        time.delta_secs(),
    );

    // Не трогаем resource, если ничего не изменилось (Changed<> detection)
    if *avatar != next {
        *avatar = next;
    }
}
