//! Footprint Emitter — затухающие следы за аватаром
//!
//! - Пока аватар движется, шаг каждые `walk_period` / `run_period` секунд
//! - Старт движения (или смена walk ↔ run) → шаг сразу, таймер заново
//! - Ноги чередуются (left first), след смещён вбок по нормали к facing
//! - Каждый кадр opacity -= decay_rate * delta, погасший след удаляется
//!   (не позже чем через 1 / decay_rate секунд)
//! - Живых следов не больше `max_footprints` (старые вытесняются)

use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::GalleryConfig;
use crate::state::AvatarState;
use crate::DeterministicRng;

/// Ниже этого след невидим (меньше шага 8-bit alpha); гасит f32 остаток вычитаний
const MIN_VISIBLE_OPACITY: f32 = 1e-4;

/// Допуск таймера шагов (s): сумма f32 delta'ов чуть недобирает до периода
const STEP_EPSILON: f32 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FootprintConfig {
    pub walk_period: f32,
    pub run_period: f32,
    /// Боковое смещение ноги от центра
    pub foot_offset: f32,
    /// Подъём над полом (против z-fighting)
    pub floor_lift: f32,
    /// Opacity в секунду
    pub decay_rate: f32,
    pub max_footprints: usize,
}

impl Default for FootprintConfig {
    fn default() -> Self {
        Self {
            walk_period: 0.4,
            run_period: 0.25,
            foot_offset: 0.08,
            floor_lift: 0.01,
            decay_rate: 0.5,
            max_footprints: 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Footprint {
    pub id: String,
    pub position: Vec3,
    pub facing: f32,
    pub opacity: f32,
}

/// Живые следы (старые первыми)
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct Footprints(pub Vec<Footprint>);

/// Event: появился след (хост может проиграть звук шага)
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct FootstepTaken {
    pub position: Vec3,
    pub left_foot: bool,
}

/// Состояние таймера шагов
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct FootstepTimer {
    pub elapsed: f32,
    pub next_left: bool,
    was_moving: bool,
    was_running: bool,
}

impl Default for FootstepTimer {
    fn default() -> Self {
        Self {
            elapsed: 0.0,
            next_left: true,
            was_moving: false,
            was_running: false,
        }
    }
}

impl FootstepTimer {
    /// Сколько шагов сделать в этом кадре (0, 1, редко больше на длинном кадре)
    pub fn advance(&mut self, is_moving: bool, is_running: bool, config: &FootprintConfig, delta: f32) -> usize {
        let started = is_moving && (!self.was_moving || is_running != self.was_running);
        self.was_moving = is_moving;
        self.was_running = is_running;

        if !is_moving {
            self.elapsed = 0.0;
            return 0;
        }

        if started {
            self.elapsed = 0.0;
            return 1;
        }

        let period = if is_running { config.run_period } else { config.walk_period };
        self.elapsed += delta;

        let mut steps = 0;
        while self.elapsed + STEP_EPSILON >= period {
            self.elapsed -= period;
            steps += 1;
        }
        steps
    }

    /// Точка следа для текущей ноги; переключает ногу
    pub fn place_step(&mut self, avatar: &AvatarState, config: &FootprintConfig) -> (Vec3, bool) {
        let left = self.next_left;
        let side = if left { -config.foot_offset } else { config.foot_offset };
        let offset = Vec3::new(
            avatar.facing.cos() * side,
            config.floor_lift,
            -avatar.facing.sin() * side,
        );

        self.next_left = !self.next_left;
        (avatar.position + offset, left)
    }
}

impl Footprints {
    /// Добавить след; хвост обрезается до `cap` последних
    pub fn push(&mut self, footprint: Footprint, cap: usize) {
        self.0.push(footprint);
        if self.0.len() > cap {
            let overflow = self.0.len() - cap;
            self.0.drain(..overflow);
        }
    }

    /// Линейное затухание и удаление погасших
    pub fn decay(&mut self, rate: f32, delta: f32) {
        for footprint in self.0.iter_mut() {
            footprint.opacity = (footprint.opacity - rate * delta).max(0.0);
        }
        self.0.retain(|footprint| footprint.opacity > MIN_VISIBLE_OPACITY);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Короткий base-36 id (как у UI-ключей)
fn footprint_id(rng: &mut impl Rng) -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    (0..9)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Система: затухание + новые шаги
pub fn update_footprints(
    avatar: Res<AvatarState>,
    config: Res<GalleryConfig>,
    time: Res<Time>,
    mut rng: ResMut<DeterministicRng>,
    mut timer: ResMut<FootstepTimer>,
    mut footprints: ResMut<Footprints>,
    mut steps: EventWriter<FootstepTaken>,
) {
    let cfg = &config.footprints;
    let delta = time.delta_secs().clamp(0.0, config.movement.max_delta);

    let mut next = footprints.clone();
    next.decay(cfg.decay_rate, delta);

    let count = timer.advance(avatar.is_moving, avatar.is_running, cfg, delta);
    for _ in 0..count {
        let (position, left_foot) = timer.place_step(&avatar, cfg);
        next.push(
            Footprint {
                id: footprint_id(&mut rng.rng),
                position,
                facing: avatar.facing,
                opacity: 1.0,
            },
            cfg.max_footprints,
        );
        steps.write(FootstepTaken { position, left_foot });
    }

    if *footprints != next {
        *footprints = next;
    }
}
