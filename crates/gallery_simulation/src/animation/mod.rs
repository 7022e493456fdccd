//! Animation state machine аватара
//!
//! Явный mapping {Idle, Walk, Run} → clip id. Клипы передаёт asset loader
//! хоста через `AnimationClips`. Нет клипа → `ActiveAnimation.clip = None`
//! (fail closed, модель просто стоит в bind pose).

use bevy::prelude::*;

use crate::logger;
use crate::state::AvatarState;

/// Скорость проигрывания walk-клипа при беге (если отдельного run нет)
pub const RUN_TIME_SCALE: f32 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Walk,
    Run,
}

impl AnimationState {
    pub fn from_avatar(avatar: &AvatarState) -> Self {
        match (avatar.is_moving, avatar.is_running) {
            (true, true) => AnimationState::Run,
            (true, false) => AnimationState::Walk,
            _ => AnimationState::Idle,
        }
    }
}

/// Clip ids загруженной модели
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct AnimationClips {
    pub idle: Option<String>,
    pub walk: Option<String>,
    /// None → Run играет walk с `RUN_TIME_SCALE`
    pub run: Option<String>,
}

impl AnimationClips {
    /// Clip + time scale для состояния
    pub fn resolve(&self, state: AnimationState) -> Option<(&str, f32)> {
        match state {
            AnimationState::Idle => self.idle.as_deref().map(|clip| (clip, 1.0)),
            AnimationState::Walk => self.walk.as_deref().map(|clip| (clip, 1.0)),
            AnimationState::Run => match self.run.as_deref() {
                Some(clip) => Some((clip, 1.0)),
                None => self.walk.as_deref().map(|clip| (clip, RUN_TIME_SCALE)),
            },
        }
    }
}

/// Что сейчас должно играть
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ActiveAnimation {
    pub state: AnimationState,
    pub clip: Option<String>,
    pub time_scale: f32,
}

impl Default for ActiveAnimation {
    fn default() -> Self {
        Self {
            state: AnimationState::Idle,
            clip: None,
            time_scale: 1.0,
        }
    }
}

impl ActiveAnimation {
    pub fn for_state(state: AnimationState, clips: &AnimationClips) -> Self {
        match clips.resolve(state) {
            Some((clip, time_scale)) => Self {
                state,
                clip: Some(clip.to_string()),
                time_scale,
            },
            None => Self {
                state,
                clip: None,
                time_scale: 1.0,
            },
        }
    }
}

/// Event: хост делает crossfade на новый clip
#[derive(Event, Debug, Clone, PartialEq)]
pub struct AnimationChanged {
    pub from: AnimationState,
    pub to: AnimationState,
    pub clip: Option<String>,
    pub time_scale: f32,
}

/// Система: флаги аватара → ActiveAnimation (только при переходе)
pub fn update_animation_state(
    avatar: Res<AvatarState>,
    clips: Res<AnimationClips>,
    mut active: ResMut<ActiveAnimation>,
    mut changed: EventWriter<AnimationChanged>,
) {
    let state = AnimationState::from_avatar(&avatar);

    // Клипы могли прийти позже модели: пересчитываем и на их смену
    if state == active.state && !clips.is_changed() {
        return;
    }

    let next = ActiveAnimation::for_state(state, &clips);
    if next == *active {
        return;
    }

    if next.clip.is_none() {
        logger::log_warning(&format!("No animation clip for {:?}, playing nothing", state));
    }

    changed.write(AnimationChanged {
        from: active.state,
        to: next.state,
        clip: next.clip.clone(),
        time_scale: next.time_scale,
    });
    *active = next;
}
