//! InputState — логические клавиши (keyboard + virtual joystick)

use bevy::prelude::*;

/// Порог джойстика: отклонение меньше считается нейтралью
pub const JOYSTICK_DEAD_ZONE: f32 = 0.3;

/// Логическая клавиша (не зависит от раскладки и устройства)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalKey {
    Forward,
    Backward,
    Left,
    Right,
    Run,
}

/// Набор зажатых логических клавиш одного источника
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeySet {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub run: bool,
}

impl KeySet {
    pub fn get(&self, key: LogicalKey) -> bool {
        match key {
            LogicalKey::Forward => self.forward,
            LogicalKey::Backward => self.backward,
            LogicalKey::Left => self.left,
            LogicalKey::Right => self.right,
            LogicalKey::Run => self.run,
        }
    }

    pub fn set(&mut self, key: LogicalKey, pressed: bool) {
        match key {
            LogicalKey::Forward => self.forward = pressed,
            LogicalKey::Backward => self.backward = pressed,
            LogicalKey::Left => self.left = pressed,
            LogicalKey::Right => self.right = pressed,
            LogicalKey::Run => self.run = pressed,
        }
    }

    /// Клавиши из положения стика (run джойстик не трогает)
    pub fn from_stick(stick: Vec2, run: bool) -> Self {
        Self {
            forward: stick.y < -JOYSTICK_DEAD_ZONE,
            backward: stick.y > JOYSTICK_DEAD_ZONE,
            left: stick.x < -JOYSTICK_DEAD_ZONE,
            right: stick.x > JOYSTICK_DEAD_ZONE,
            run,
        }
    }
}

/// Input resource: keyboard keys, joystick keys, pointer-drag флаг
///
/// Single writer: хост пишет keyboard/pointer, `apply_input_events` —
/// joystick и сброс по потере фокуса.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct InputState {
    pub keyboard: KeySet,
    pub joystick: KeySet,
    /// Зажата кнопка мыши / палец на экране (orbit drag активен)
    pub pointer_down: bool,
}

impl InputState {
    /// Клавиша активна на клавиатуре ИЛИ на джойстике
    pub fn is_pressed(&self, key: LogicalKey) -> bool {
        self.keyboard.get(key) || self.joystick.get(key)
    }

    pub fn press(&mut self, key: LogicalKey) {
        self.keyboard.set(key, true);
    }

    pub fn release(&mut self, key: LogicalKey) {
        self.keyboard.set(key, false);
    }

    pub fn set_joystick(&mut self, stick: Vec2) {
        let run = self.joystick.run;
        self.joystick = KeySet::from_stick(stick, run);
    }

    pub fn release_joystick(&mut self) {
        self.joystick = KeySet::default();
    }

    /// Сброс всего (window blur)
    pub fn release_all(&mut self) {
        *self = Self::default();
    }

    /// Нормализованный вектор намерения
    ///
    /// `x`: -1 (left) → +1 (right), `y` несёт ось Z: -1 (forward) → +1 (backward).
    /// Противоположные клавиши гасят друг друга. Диагональ нормализуется,
    /// длина всегда ≤ 1.
    pub fn movement_intent(&self) -> Vec2 {
        let mut x: f32 = 0.0;
        let mut z: f32 = 0.0;

        if self.is_pressed(LogicalKey::Forward) {
            z -= 1.0;
        }
        if self.is_pressed(LogicalKey::Backward) {
            z += 1.0;
        }
        if self.is_pressed(LogicalKey::Left) {
            x -= 1.0;
        }
        if self.is_pressed(LogicalKey::Right) {
            x += 1.0;
        }

        // Делим только когда обе оси ненулевые (длина тогда √2, не 0)
        if x != 0.0 && z != 0.0 {
            let length = (x * x + z * z).sqrt();
            x /= length;
            z /= length;
        }

        Vec2::new(x, z)
    }

    pub fn run_held(&self) -> bool {
        self.is_pressed(LogicalKey::Run)
    }
}
