//! Input systems (ECS)

use bevy::prelude::*;

use super::events::{InputFocusLost, JoystickMoved, JoystickReleased};
use super::state::InputState;
use crate::logger;

/// Применяет input events к `InputState`
///
/// # Порядок
/// Focus lost обрабатывается последним: если в одном кадре пришли и
/// движение джойстика, и blur: побеждает сброс.
pub fn apply_input_events(
    mut input: ResMut<InputState>,
    mut joystick_moved: EventReader<JoystickMoved>,
    mut joystick_released: EventReader<JoystickReleased>,
    mut focus_lost: EventReader<InputFocusLost>,
) {
    // Нужно только последнее положение стика за кадр
    if let Some(moved) = joystick_moved.read().last() {
        input.set_joystick(moved.stick);
    }

    if joystick_released.read().count() > 0 {
        input.release_joystick();
    }

    if focus_lost.read().count() > 0 {
        logger::log("Input focus lost, releasing all logical keys");
        input.release_all();
    }
}
