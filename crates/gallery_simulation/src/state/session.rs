//! Session-level state: выбор персонажа, пауза

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Внешний вид аватара (выбирается в UI)
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CharacterKind {
    #[default]
    Human,
    Bear,
    Robot,
}

impl CharacterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CharacterKind::Human => "human",
            CharacterKind::Bear => "bear",
            CharacterKind::Robot => "robot",
        }
    }
}

/// Пауза: per-frame системы (кроме input) не запускаются
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GalleryPaused(pub bool);

/// Event: переключить паузу
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct TogglePause;

/// Event: UI выбрал другой внешний вид
#[derive(Event, Debug, Clone, Copy)]
pub struct SetCharacterKind {
    pub kind: CharacterKind,
}

/// Run condition для `GallerySet` после input
pub fn gallery_running(paused: Res<GalleryPaused>) -> bool {
    !paused.0
}

/// Система: применяет TogglePause / SetCharacterKind
pub fn apply_session_events(
    mut paused: ResMut<GalleryPaused>,
    mut kind: ResMut<CharacterKind>,
    mut toggles: EventReader<TogglePause>,
    mut kind_changes: EventReader<SetCharacterKind>,
) {
    // Чётное число toggle за кадр = без изменений
    let flips = toggles.read().count();
    if flips % 2 == 1 {
        *paused = GalleryPaused(!paused.0);
        crate::logger::log_info(&format!("Gallery paused: {}", paused.0));
    }

    if let Some(change) = kind_changes.read().last() {
        if *kind != change.kind {
            *kind = change.kind;
            crate::logger::log_info(&format!("Character kind → {}", kind.as_str()));
        }
    }
}
