//! Input events (пишет хост, читает `apply_input_events`)

use bevy::prelude::{Event, Vec2};

/// Окно потеряло фокус: все логические клавиши отпускаются
///
/// Без этого keyup, пришедший в другое окно, оставляет "залипшую" клавишу.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct InputFocusLost;

/// Виртуальный джойстик сдвинут
///
/// `stick`: x -1.0 (left) → +1.0 (right), y -1.0 (forward) → +1.0 (backward)
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct JoystickMoved {
    pub stick: Vec2,
}

/// Палец убран с джойстика
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct JoystickReleased;

/// Pointer drag (пиксели): крутит orbit camera, пока `InputState::pointer_down`
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct PointerDragged {
    pub delta: Vec2,
}
