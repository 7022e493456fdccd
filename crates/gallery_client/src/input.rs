//! Physical input → simulation input
//!
//! - WASD / стрелки → движение, Shift → бег
//! - ЛКМ зажата → orbit drag
//! - Enter → открыть ближайшую картину, ←/→ листать, Esc закрыть
//! - P → пауза, 1/2/3 → персонаж
//! - Окно потеряло фокус → InputFocusLost

use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;
use bevy::window::WindowFocused;
use gallery_simulation::{
    CharacterKind, CycleSelection, DismissSelection, GallerySet, InputFocusLost, InputState,
    InteractRequested, LogicalKey, PointerDragged, SelectedPainting, SetCharacterKind, TogglePause,
};

pub struct InputMappingPlugin;

impl Plugin for InputMappingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (map_keyboard, map_pointer, map_actions, map_focus)
                .chain()
                .before(GallerySet::Input),
        );
    }
}

/// Физические клавиши для каждой логической
const KEY_BINDINGS: [(LogicalKey, &[KeyCode]); 5] = [
    (LogicalKey::Forward, &[KeyCode::KeyW, KeyCode::ArrowUp]),
    (LogicalKey::Backward, &[KeyCode::KeyS, KeyCode::ArrowDown]),
    (LogicalKey::Left, &[KeyCode::KeyA, KeyCode::ArrowLeft]),
    (LogicalKey::Right, &[KeyCode::KeyD, KeyCode::ArrowRight]),
    (LogicalKey::Run, &[KeyCode::ShiftLeft, KeyCode::ShiftRight]),
];

fn map_keyboard(keys: Res<ButtonInput<KeyCode>>, mut input: ResMut<InputState>) {
    let mut keyboard = input.keyboard;
    for (logical, physical) in KEY_BINDINGS {
        keyboard.set(logical, keys.any_pressed(physical.iter().copied()));
    }

    if input.keyboard != keyboard {
        input.keyboard = keyboard;
    }
}

fn map_pointer(
    buttons: Res<ButtonInput<MouseButton>>,
    mut motion: EventReader<MouseMotion>,
    mut input: ResMut<InputState>,
    mut drags: EventWriter<PointerDragged>,
) {
    let pointer_down = buttons.pressed(MouseButton::Left);
    if input.pointer_down != pointer_down {
        input.pointer_down = pointer_down;
    }

    let delta: Vec2 = motion.read().map(|m| m.delta).sum();
    if pointer_down && delta != Vec2::ZERO {
        drags.write(PointerDragged { delta });
    }
}

fn map_actions(
    keys: Res<ButtonInput<KeyCode>>,
    selected: Res<SelectedPainting>,
    mut interact: EventWriter<InteractRequested>,
    mut cycle: EventWriter<CycleSelection>,
    mut dismiss: EventWriter<DismissSelection>,
    mut pause: EventWriter<TogglePause>,
    mut kind: EventWriter<SetCharacterKind>,
) {
    if keys.just_pressed(KeyCode::Enter) {
        interact.write(InteractRequested);
    }

    if selected.0.is_some() {
        if keys.just_pressed(KeyCode::ArrowRight) {
            cycle.write(CycleSelection { forward: true });
        } else if keys.just_pressed(KeyCode::ArrowLeft) {
            cycle.write(CycleSelection { forward: false });
        } else if keys.just_pressed(KeyCode::Escape) {
            dismiss.write(DismissSelection);
        }
    }

    if keys.just_pressed(KeyCode::KeyP) {
        pause.write(TogglePause);
    }

    let choices = [
        (KeyCode::Digit1, CharacterKind::Human),
        (KeyCode::Digit2, CharacterKind::Bear),
        (KeyCode::Digit3, CharacterKind::Robot),
    ];
    for (key, choice) in choices {
        if keys.just_pressed(key) {
            kind.write(SetCharacterKind { kind: choice });
        }
    }
}

fn map_focus(mut focus: EventReader<WindowFocused>, mut lost: EventWriter<InputFocusLost>) {
    if focus.read().any(|event| !event.focused) {
        lost.write(InputFocusLost);
    }
}
